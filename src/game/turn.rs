use super::{AgentMove, Player, PlayerKind, RandomAgent};
use crate::board::{Board, Color};
use std::time::{Duration, Instant};

/// How long a computer player "thinks" before its move fires.
pub const THINKING_DELAY: Duration = Duration::from_secs(1);

/// The four-state protocol governing whose move is expected and what kind of
/// input is valid next. There is no terminal state; the machine cycles until
/// reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnState {
    /// Player 1's turn, no piece selected yet.
    WaitingOnPlayer1,
    /// Player 1 has selected a piece, waiting on a destination cell.
    Player1Move,
    /// Player 2's turn, no piece selected yet.
    WaitingOnPlayer2,
    /// Player 2 has selected a piece, waiting on a destination cell.
    Player2Move,
}

impl TurnState {
    fn player_index(&self) -> usize {
        match self {
            TurnState::WaitingOnPlayer1 | TurnState::Player1Move => 0,
            TurnState::WaitingOnPlayer2 | TurnState::Player2Move => 1,
        }
    }
}

/// Detects a finished game. The turn machine itself never terminates; this
/// seam exists so end conditions can be added without redesigning it.
pub trait EndRule {
    fn is_game_over(&self, board: &Board, to_move: Color) -> bool;
}

/// The default rule: the game never ends.
pub struct NeverEnds;

impl EndRule for NeverEnds {
    fn is_game_over(&self, _board: &Board, _to_move: Color) -> bool {
        false
    }
}

/// Orchestrates whose turn it is and what input is expected, delegating to
/// the board and players, and to the agent for computer turns.
pub struct TurnController {
    board: Board,
    players: [Player; 2],
    state: TurnState,
    agent: RandomAgent,
    thinking_delay: Duration,
    scheduled_agent_move: Option<Instant>,
    end_rule: Box<dyn EndRule>,
}

impl TurnController {
    /// Creates a controller with a freshly reset board, player 1 as White.
    /// The kinds come from the persistence layer's preference integers.
    pub fn new(player1_kind: PlayerKind, player2_kind: PlayerKind, agent: RandomAgent) -> Self {
        let mut board = Board::new();
        board.reset();
        Self {
            board,
            players: [
                Player::new(Color::White, player1_kind),
                Player::new(Color::Black, player2_kind),
            ],
            state: TurnState::WaitingOnPlayer1,
            agent,
            thinking_delay: THINKING_DELAY,
            scheduled_agent_move: None,
            end_rule: Box::new(NeverEnds),
        }
    }

    pub fn with_thinking_delay(mut self, delay: Duration) -> Self {
        self.thinking_delay = delay;
        self
    }

    pub fn with_end_rule(mut self, rule: Box<dyn EndRule>) -> Self {
        self.end_rule = rule;
        self
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The player whose turn the current state belongs to.
    pub fn current_player(&self) -> &Player {
        &self.players[self.state.player_index()]
    }

    pub fn player(&self, index: usize) -> &Player {
        &self.players[index]
    }

    /// Consults the pluggable end rule; never drives a state transition.
    pub fn game_over(&self) -> bool {
        self.end_rule
            .is_game_over(&self.board, self.current_player().color())
    }

    /// Handles a "piece selected" event from the input layer. Valid only while
    /// waiting on a human player, and only for that player's own piece. An
    /// empty valid-move set still moves to the piece-selected state; the
    /// caller surfaces it.
    pub fn piece_selected(&mut self, x: u8, y: u8) -> Result<(), &'static str> {
        let next = match self.state {
            TurnState::WaitingOnPlayer1 => TurnState::Player1Move,
            TurnState::WaitingOnPlayer2 => TurnState::Player2Move,
            _ => return Err("no piece selection expected"),
        };
        let player = &mut self.players[self.state.player_index()];
        if player.is_computer() {
            return Err("waiting on computer");
        }
        match self.board.piece_at(x, y) {
            Some(piece) if piece.color == player.color() => {}
            Some(_) => return Err("not this player's piece"),
            None => return Err("no piece at cell"),
        }
        player.select(x, y);
        self.board.compute_valid_moves(player);
        self.state = next;
        Ok(())
    }

    /// Handles a "cell selected" event from the input layer. Valid only while
    /// a human player has a piece selected. Selecting another own piece
    /// re-selects it; anything else is attempted as a move.
    pub fn cell_selected(&mut self, x: u8, y: u8) -> Result<(), &'static str> {
        let next = match self.state {
            TurnState::Player1Move => TurnState::WaitingOnPlayer2,
            TurnState::Player2Move => TurnState::WaitingOnPlayer1,
            _ => return Err("no cell selection expected"),
        };
        let player = &mut self.players[self.state.player_index()];
        if player.is_computer() {
            return Err("waiting on computer");
        }

        if let Some(piece) = self.board.piece_at(x, y) {
            if piece.color == player.color() && player.selected_piece() != Some((x, y)) {
                player.select(x, y);
                self.board.compute_valid_moves(player);
                return Ok(());
            }
        }

        player.select_cell(x, y);
        self.board.try_move(player, x, y)?;
        self.state = next;
        Ok(())
    }

    /// Drives computer turns. On entering a waiting state whose player is a
    /// computer, the agent is scheduled once, `thinking_delay` after the first
    /// poll; when due it makes its move and the turn passes. Returns the
    /// agent's move when one fired.
    pub fn poll(&mut self, now: Instant) -> Option<Result<AgentMove, &'static str>> {
        let next = match self.state {
            TurnState::WaitingOnPlayer1 => TurnState::WaitingOnPlayer2,
            TurnState::WaitingOnPlayer2 => TurnState::WaitingOnPlayer1,
            _ => return None,
        };
        let player = &mut self.players[self.state.player_index()];
        if !player.is_computer() {
            return None;
        }

        match self.scheduled_agent_move {
            None => {
                self.scheduled_agent_move = Some(now + self.thinking_delay);
                None
            }
            Some(due) if now >= due => {
                // Fires at most once per scheduling.
                self.scheduled_agent_move = None;
                let result = self.agent.make_move(&mut self.board, player);
                if result.is_ok() {
                    self.state = next;
                }
                Some(result)
            }
            Some(_) => None,
        }
    }

    /// Clears the board and both players, forces the state back to waiting on
    /// player 1 and discards any pending agent invocation.
    pub fn reset(&mut self) {
        self.board.reset();
        for player in &mut self.players {
            player.reset();
        }
        self.state = TurnState::WaitingOnPlayer1;
        self.scheduled_agent_move = None;
    }
}
