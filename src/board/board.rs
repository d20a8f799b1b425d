use super::{Color, Piece, PieceKind, COLUMNS, ROWS};
use crate::game::Player;

/// Decides which kind a pawn becomes on reaching its far rank. Kept as a
/// policy function so an alternate target can be offered later.
pub type PromotionPolicy = fn(&Piece) -> PieceKind;

pub fn always_queen(_pawn: &Piece) -> PieceKind {
    PieceKind::Queen
}

/// The back rank, left to right from White's side.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The 8×8 grid of piece occupants. The board is the only component that
/// writes occupancy; everything else reads it through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; COLUMNS as usize]; ROWS as usize],
    promotion_policy: PromotionPolicy,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            squares: [[None; COLUMNS as usize]; ROWS as usize],
            promotion_policy: always_queen,
        }
    }

    pub fn with_promotion_policy(mut self, policy: PromotionPolicy) -> Self {
        self.promotion_policy = policy;
        self
    }

    /// Clears all pieces and places the standard opening layout. White's back
    /// rank runs left to right on row 0, Black's is laid mirrored from the
    /// right on row 7, each with a pawn rank in front.
    pub fn reset(&mut self) {
        self.squares = [[None; COLUMNS as usize]; ROWS as usize];

        for x in 0..COLUMNS {
            self.place(Piece::new(BACK_RANK[x as usize], Color::White, x, 0));
            self.place(Piece::new(PieceKind::Pawn, Color::White, x, 1));
        }
        for x in (0..COLUMNS).rev() {
            let kind = BACK_RANK[(COLUMNS - 1 - x) as usize];
            self.place(Piece::new(kind, Color::Black, x, ROWS - 1));
            self.place(Piece::new(PieceKind::Pawn, Color::Black, x, ROWS - 2));
        }
    }

    /// Places a piece on its stored coordinates. The cell must be empty.
    pub fn place(&mut self, piece: Piece) {
        assert!(piece.x < COLUMNS && piece.y < ROWS, "piece out of bounds");
        assert!(
            self.squares[piece.y as usize][piece.x as usize].is_none(),
            "cell ({}, {}) is already occupied",
            piece.x,
            piece.y
        );
        self.squares[piece.y as usize][piece.x as usize] = Some(piece);
    }

    pub fn piece_at(&self, x: u8, y: u8) -> Option<&Piece> {
        assert!(x < COLUMNS && y < ROWS, "coordinates out of bounds");
        self.squares[y as usize][x as usize].as_ref()
    }

    pub fn is_empty_at(&self, x: u8, y: u8) -> bool {
        self.piece_at(x, y).is_none()
    }

    /// Returns an iterator over all pieces on the board.
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.squares.iter().flatten().filter_map(|slot| slot.as_ref())
    }

    /// Returns an iterator over the pieces of one color, in column-major scan
    /// order.
    pub fn pieces_for(&self, color: Color) -> impl Iterator<Item = &Piece> {
        (0..COLUMNS).flat_map(move |x| {
            (0..ROWS).filter_map(move |y| {
                self.squares[y as usize][x as usize]
                    .as_ref()
                    .filter(|piece| piece.color == color)
            })
        })
    }

    /// Computes the legal moves of the player's selected piece against the
    /// current grid, caches them in the player and returns the cache.
    pub fn compute_valid_moves<'a>(&self, player: &'a mut Player) -> &'a [(u8, u8)] {
        let moves = match player.selected_piece() {
            Some((x, y)) => self.valid_moves_for(player.color(), x, y),
            None => Vec::new(),
        };
        player.set_valid_moves(moves)
    }

    /// Tries to move the player's selected piece to (target_x, target_y).
    /// Succeeds only if the target is in the player's cached valid-move set;
    /// failure leaves the board and the player untouched.
    pub fn try_move(
        &mut self,
        player: &mut Player,
        target_x: u8,
        target_y: u8,
    ) -> Result<(), &'static str> {
        assert!(
            target_x < COLUMNS && target_y < ROWS,
            "move target out of bounds"
        );
        let (piece_x, piece_y) = player.selected_piece().ok_or("no piece selected")?;
        if !player.is_valid_move(target_x, target_y) {
            return Err("invalid move");
        }

        if let Some(target) = self.squares[target_y as usize][target_x as usize] {
            // Move generation never offers a king as a target; re-checked here
            // because capture removes the piece for good.
            if !target.can_be_captured() {
                return Err("piece cannot be captured");
            }
            player.add_captured_piece(target);
            self.squares[target_y as usize][target_x as usize] = None;
        }
        self.relocate(piece_x, piece_y, target_x, target_y);
        Ok(())
    }

    /// Moves a piece between cells, updating its coordinates and move counter,
    /// then applies the promotion check.
    fn relocate(&mut self, src_x: u8, src_y: u8, target_x: u8, target_y: u8) {
        let mut piece = self.squares[src_y as usize][src_x as usize]
            .take()
            .expect("relocate called on an empty cell");
        piece.x = target_x;
        piece.y = target_y;
        piece.times_moved += 1;

        if piece.can_be_promoted() && target_y == piece.color.promotion_row() {
            piece.promote_to((self.promotion_policy)(&piece));
        }
        self.squares[target_y as usize][target_x as usize] = Some(piece);
    }

    pub fn render_to_string(&self) -> String {
        let mut board_representation = String::new();
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");
        board_representation.push_str("  ┌───┬───┬───┬───┬───┬───┬───┬───┐\n");

        for y in (0..ROWS).rev() {
            board_representation.push_str(&format!("{} │", y + 1));
            for x in 0..COLUMNS {
                let square = match self.piece_at(x, y) {
                    None => ' ',
                    Some(piece) => piece.to_char(),
                };
                board_representation.push_str(&format!(" {} │", square));
            }
            board_representation.push_str(&format!(" {}\n", y + 1));

            if y > 0 {
                board_representation.push_str("  ├───┼───┼───┼───┼───┼───┼───┼───┤\n");
            }
        }

        board_representation.push_str("  └───┴───┴───┴───┴───┴───┴───┴───┘\n");
        board_representation.push_str("    a   b   c   d   e   f   g   h  \n");

        board_representation
    }
}

impl Default for Board {
    fn default() -> Self {
        let mut board = Self::new();
        board.reset();
        board
    }
}
