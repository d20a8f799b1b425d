use crate::board::{Color, Piece};

/// How a side is controlled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    /// Moves come from the input layer's selection events.
    Human,
    /// Moves are made automatically by the agent.
    Computer,
}

impl PlayerKind {
    /// Maps the persisted preference integer (0 human, 1 computer) to a kind.
    /// Any other value is a contract violation.
    pub fn from_pref(value: u8) -> Self {
        assert!(value <= 1, "unrecognized player type: {}", value);
        if value == 0 {
            PlayerKind::Human
        } else {
            PlayerKind::Computer
        }
    }
}

/// Per-side turn-local state. The board owns all pieces; the player keeps the
/// selected piece by its coordinates and takes ownership of captured pieces
/// for display bookkeeping only.
#[derive(Debug, Clone)]
pub struct Player {
    color: Color,
    kind: PlayerKind,
    selected_piece: Option<(u8, u8)>,
    selected_cell: Option<(u8, u8)>,
    valid_moves: Vec<(u8, u8)>,
    captured_pieces: Vec<Piece>,
}

impl Player {
    pub fn new(color: Color, kind: PlayerKind) -> Self {
        Self {
            color,
            kind,
            selected_piece: None,
            selected_cell: None,
            valid_moves: Vec::new(),
            captured_pieces: Vec::new(),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn kind(&self) -> PlayerKind {
        self.kind
    }

    pub fn is_computer(&self) -> bool {
        self.kind == PlayerKind::Computer
    }

    /// Selects the piece at (x, y). The valid-move cache is stale until the
    /// board recomputes it.
    pub fn select(&mut self, x: u8, y: u8) {
        self.selected_piece = Some((x, y));
        self.valid_moves.clear();
    }

    pub fn selected_piece(&self) -> Option<(u8, u8)> {
        self.selected_piece
    }

    pub fn select_cell(&mut self, x: u8, y: u8) {
        self.selected_cell = Some((x, y));
    }

    pub fn selected_cell(&self) -> Option<(u8, u8)> {
        self.selected_cell
    }

    /// Replaces the valid-move cache; called by the board only.
    pub fn set_valid_moves(&mut self, moves: Vec<(u8, u8)>) -> &[(u8, u8)] {
        self.valid_moves = moves;
        &self.valid_moves
    }

    /// The board's last-computed valid-move set for the selected piece, read
    /// by the rendering layer for highlighting.
    pub fn valid_moves(&self) -> &[(u8, u8)] {
        &self.valid_moves
    }

    /// Determines whether (x, y) is in the cached valid-move set.
    pub fn is_valid_move(&self, x: u8, y: u8) -> bool {
        self.valid_moves.iter().any(|&(mx, my)| mx == x && my == y)
    }

    /// Appends a piece captured by this player, preserving capture order.
    pub fn add_captured_piece(&mut self, piece: Piece) {
        self.captured_pieces.push(piece);
    }

    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured_pieces
    }

    /// Clears captures, selection and the move cache.
    pub fn reset(&mut self) {
        self.captured_pieces.clear();
        self.selected_piece = None;
        self.selected_cell = None;
        self.valid_moves.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::PieceKind;

    #[test]
    fn test_player_kind_from_pref() {
        assert_eq!(PlayerKind::from_pref(0), PlayerKind::Human);
        assert_eq!(PlayerKind::from_pref(1), PlayerKind::Computer);
    }

    #[test]
    #[should_panic(expected = "unrecognized player type")]
    fn test_player_kind_from_pref_rejects_other_values() {
        PlayerKind::from_pref(2);
    }

    #[test]
    fn test_is_valid_move_scans_cache() {
        let mut player = Player::new(Color::White, PlayerKind::Human);
        player.select(4, 1);
        player.set_valid_moves(vec![(4, 2), (4, 3)]);
        assert!(player.is_valid_move(4, 2));
        assert!(player.is_valid_move(4, 3));
        assert!(!player.is_valid_move(3, 2));
    }

    #[test]
    fn test_select_invalidates_cache() {
        let mut player = Player::new(Color::White, PlayerKind::Human);
        player.select(4, 1);
        player.set_valid_moves(vec![(4, 2)]);
        player.select(0, 0);
        assert!(player.valid_moves().is_empty());
    }

    #[test]
    fn test_captured_pieces_keep_order() {
        let mut player = Player::new(Color::Black, PlayerKind::Human);
        player.add_captured_piece(Piece::new(PieceKind::Pawn, Color::White, 0, 3));
        player.add_captured_piece(Piece::new(PieceKind::Rook, Color::White, 5, 5));
        let kinds: Vec<_> = player.captured_pieces().iter().map(|p| p.kind).collect();
        assert_eq!(kinds, vec![PieceKind::Pawn, PieceKind::Rook]);
    }

    #[test]
    fn test_reset_clears_transient_state() {
        let mut player = Player::new(Color::White, PlayerKind::Computer);
        player.select(1, 0);
        player.select_cell(2, 2);
        player.set_valid_moves(vec![(0, 2)]);
        player.add_captured_piece(Piece::new(PieceKind::Knight, Color::Black, 2, 2));

        player.reset();
        assert!(player.selected_piece().is_none());
        assert!(player.selected_cell().is_none());
        assert!(player.valid_moves().is_empty());
        assert!(player.captured_pieces().is_empty());
        // Color and kind persist for the game's lifetime.
        assert_eq!(player.color(), Color::White);
        assert_eq!(player.kind(), PlayerKind::Computer);
    }
}
