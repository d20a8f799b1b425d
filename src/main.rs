mod board;
mod game;

use board::{from_algebraic_square, to_algebraic_square, Color};
use game::{PlayerKind, RandomAgent, TurnController, TurnState};

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use clap::arg;
use clap::command;
use clap::Command;

use tabled::settings::Style;
use tabled::Table;
use tabled::Tabled;

fn main() {
    let matches = command!()
        .version("v0.0.1")
        .propagate_version(true)
        .arg(arg!(
            -d --debug "Turn debugging information on"
        ))
        .subcommand(
            Command::new("play")
                .about("Play a game in the terminal")
                .arg(
                    arg!(
                    -w --white <KIND> "Player 1 (White): 0 human, 1 computer"
                            )
                    .default_value("0")
                    .value_parser(clap::value_parser!(u8)),
                )
                .arg(
                    arg!(
                    -b --black <KIND> "Player 2 (Black): 0 human, 1 computer"
                            )
                    .default_value("0")
                    .value_parser(clap::value_parser!(u8)),
                ),
        )
        .subcommand(
            Command::new("selfplay")
                .about("Let two computer players play against each other")
                .arg(
                    arg!(
                    -m --moves <N> "Number of moves to play"
                            )
                    .default_value("20")
                    .value_parser(clap::value_parser!(usize)),
                )
                .arg(
                    arg!(
                    -s --seed <S> "Random seed"
                            )
                    .default_value("42")
                    .value_parser(clap::value_parser!(u64)),
                ),
        )
        .get_matches();

    let debug = matches.get_flag("debug");

    match matches.subcommand() {
        Some(("play", arg_matches)) => {
            let white = *arg_matches.get_one::<u8>("white").unwrap();
            let black = *arg_matches.get_one::<u8>("black").unwrap();
            play(white, black, debug);
        }
        Some(("selfplay", arg_matches)) => {
            let moves = *arg_matches.get_one::<usize>("moves").unwrap();
            let seed = *arg_matches.get_one::<u64>("seed").unwrap();
            selfplay(moves, seed);
        }
        None => {
            play(0, 0, debug);
        }
        _ => unreachable!("Exhausted list of subcommands"),
    }
}

/// Runs an interactive game. Squares are entered in algebraic form ("e2");
/// the current turn state decides whether the input selects a piece or a
/// destination cell. "reset" restarts the game, "quit" exits.
fn play(white_pref: u8, black_pref: u8, debug: bool) {
    let mut controller = TurnController::new(
        PlayerKind::from_pref(white_pref),
        PlayerKind::from_pref(black_pref),
        RandomAgent::new(),
    );

    let stdin = io::stdin();
    println!("{}", controller.board().render_to_string());

    loop {
        if controller.game_over() {
            println!("Game over");
            return;
        }
        if controller.current_player().is_computer() {
            let mover = controller.current_player().color();
            match run_computer_turn(&mut controller) {
                Ok(report) => {
                    println!(
                        "{:?} plays {} {} -> {}",
                        mover,
                        report.piece,
                        to_algebraic_square(report.from.0, report.from.1),
                        to_algebraic_square(report.to.0, report.to.1)
                    );
                    println!("{}", controller.board().render_to_string());
                }
                Err(message) => {
                    println!("Computer has {} - resetting the game", message);
                    controller.reset();
                    println!("{}", controller.board().render_to_string());
                }
            }
            continue;
        }

        print!("{}", prompt_for(&controller));
        io::stdout().flush().expect("failed to flush stdout");
        let mut line = String::new();
        if stdin.lock().read_line(&mut line).expect("failed to read stdin") == 0 {
            return;
        }
        let input = line.trim();

        match input {
            "quit" | "exit" => return,
            "reset" => {
                controller.reset();
                println!("{}", controller.board().render_to_string());
                continue;
            }
            "" => continue,
            _ => {}
        }

        let (x, y) = match from_algebraic_square(input) {
            Ok(square) => square,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        let result = match controller.state() {
            TurnState::WaitingOnPlayer1 | TurnState::WaitingOnPlayer2 => {
                let selected = controller.piece_selected(x, y);
                if selected.is_ok() && controller.current_player().valid_moves().is_empty() {
                    println!("No valid moves for this piece");
                }
                selected
            }
            TurnState::Player1Move | TurnState::Player2Move => {
                let moved = controller.cell_selected(x, y);
                if moved.is_ok() {
                    println!("{}", controller.board().render_to_string());
                }
                moved
            }
        };

        if let Err(message) = result {
            println!("{}", message);
        } else if debug {
            println!("state: {:?}", controller.state());
        }
    }
}

fn prompt_for(controller: &TurnController) -> String {
    let color = controller.current_player().color();
    match controller.state() {
        TurnState::WaitingOnPlayer1 | TurnState::WaitingOnPlayer2 => {
            format!("{:?}, select a piece: ", color)
        }
        TurnState::Player1Move | TurnState::Player2Move => {
            format!("{:?}, select a cell to move to: ", color)
        }
    }
}

/// Blocks until the scheduled agent move fires.
fn run_computer_turn(controller: &mut TurnController) -> Result<game::AgentMove, &'static str> {
    loop {
        if let Some(result) = controller.poll(Instant::now()) {
            return result;
        }
        std::thread::sleep(Duration::from_millis(20));
    }
}

#[derive(Tabled)]
struct SelfPlayRow {
    mv: usize,
    side: &'static str,
    piece: String,
    from: String,
    to: String,
    captured: String,
}

fn selfplay(moves: usize, seed: u64) {
    let mut controller = TurnController::new(
        PlayerKind::Computer,
        PlayerKind::Computer,
        RandomAgent::seeded(seed),
    )
    .with_thinking_delay(Duration::ZERO);

    let mut table_rows = Vec::new();
    let mut now = Instant::now();
    let mut move_number = 0;
    while move_number < moves {
        let side = match controller.current_player().color() {
            Color::White => "White",
            Color::Black => "Black",
        };
        match controller.poll(now) {
            Some(Ok(report)) => {
                move_number += 1;
                table_rows.push(SelfPlayRow {
                    mv: move_number,
                    side,
                    piece: report.piece.to_string(),
                    from: to_algebraic_square(report.from.0, report.from.1),
                    to: to_algebraic_square(report.to.0, report.to.1),
                    captured: match report.captured {
                        Some(kind) => kind.to_string(),
                        None => String::new(),
                    },
                });
            }
            Some(Err(message)) => {
                println!("{} has {} after {} moves", side, message, move_number);
                break;
            }
            None => {}
        }
        now += Duration::from_millis(1);
    }

    println!("{}", Table::new(table_rows).with(Style::modern()));
    println!("{}", controller.board().render_to_string());
}
