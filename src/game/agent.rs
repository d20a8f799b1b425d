use super::Player;
use crate::board::{Board, PieceKind};
use rand::prelude::SliceRandom;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// A move made by the agent, reported for logging and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AgentMove {
    pub piece: PieceKind,
    pub from: (u8, u8),
    pub to: (u8, u8),
    pub captured: Option<PieceKind>,
}

/// Selects and executes one legal move for a computer-controlled player,
/// uniformly at random.
pub struct RandomAgent {
    rng: Pcg64,
}

impl RandomAgent {
    pub fn new() -> Self {
        Self {
            rng: Pcg64::from_entropy(),
        }
    }

    /// A seeded agent plays reproducibly for a fixed board state.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Picks a random piece of the player's with at least one legal move, then
    /// a random destination for it, and executes the move on the board.
    ///
    /// The player's pieces are enumerated up front so that a side with no
    /// legal move anywhere fails explicitly instead of sampling forever.
    pub fn make_move(
        &mut self,
        board: &mut Board,
        player: &mut Player,
    ) -> Result<AgentMove, &'static str> {
        let movable: Vec<(u8, u8)> = board
            .pieces_for(player.color())
            .filter(|piece| !board.valid_moves_for(player.color(), piece.x, piece.y).is_empty())
            .map(|piece| (piece.x, piece.y))
            .collect();

        let &(x, y) = movable.choose(&mut self.rng).ok_or("no legal moves")?;
        player.select(x, y);
        let moves = board.compute_valid_moves(player).to_vec();
        let &(target_x, target_y) = moves
            .choose(&mut self.rng)
            .expect("selected piece has at least one legal move");

        let piece = board.piece_at(x, y).expect("selected cell holds a piece").kind;
        let captured = board.piece_at(target_x, target_y).map(|p| p.kind);
        board.try_move(player, target_x, target_y)?;

        Ok(AgentMove {
            piece,
            from: (x, y),
            to: (target_x, target_y),
            captured,
        })
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}
