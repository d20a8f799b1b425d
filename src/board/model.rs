use std::fmt;

pub const ROWS: u8 = 8;
pub const COLUMNS: u8 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opposite(&self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Direction a pawn of this color advances along the y axis.
    pub fn forward(&self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The rank on which a pawn of this color promotes.
    pub fn promotion_row(&self) -> u8 {
        match self {
            Color::White => ROWS - 1,
            Color::Black => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::King => write!(f, "King"),
            PieceKind::Queen => write!(f, "Queen"),
            PieceKind::Rook => write!(f, "Rook"),
            PieceKind::Bishop => write!(f, "Bishop"),
            PieceKind::Knight => write!(f, "Knight"),
            PieceKind::Pawn => write!(f, "Pawn"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub x: u8,
    pub y: u8,
    pub times_moved: u32,
    pub promoted: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, x: u8, y: u8) -> Self {
        assert!(x < COLUMNS && y < ROWS, "piece placed out of bounds");
        Self {
            kind,
            color,
            x,
            y,
            times_moved: 0,
            promoted: false,
        }
    }

    /// Whether the piece may be removed from the board by a capture.
    pub fn can_be_captured(&self) -> bool {
        self.kind != PieceKind::King
    }

    /// Whether the piece ignores intervening occupancy when moving.
    pub fn can_jump(&self) -> bool {
        self.kind == PieceKind::Knight
    }

    pub fn can_be_promoted(&self) -> bool {
        self.kind == PieceKind::Pawn && !self.promoted
    }

    pub fn has_been_moved(&self) -> bool {
        self.times_moved != 0
    }

    /// Irreversibly changes a pawn into `kind`.
    pub fn promote_to(&mut self, kind: PieceKind) {
        assert!(
            kind != PieceKind::King && kind != PieceKind::Pawn,
            "{} is an invalid promotion target",
            kind
        );
        assert!(self.can_be_promoted(), "piece cannot be promoted");
        self.kind = kind;
        self.promoted = true;
    }

    /// Candidate move offsets for the piece, relative to its current cell and
    /// fixed by rule. Bounds, occupancy and path blocking are checked later by
    /// the board. The order is deterministic for a given piece state.
    pub fn move_offsets(&self) -> Vec<(isize, isize)> {
        let mut offsets = Vec::new();
        match self.kind {
            PieceKind::King => {
                // Both axes range independently so orthogonal steps are
                // included alongside the diagonal ones.
                for dx in -1..=1isize {
                    for dy in -1..=1isize {
                        if dx != 0 || dy != 0 {
                            offsets.push((dx, dy));
                        }
                    }
                }
            }
            PieceKind::Queen => {
                for i in 1..ROWS as isize {
                    offsets.push((i, 0));
                    offsets.push((0, i));
                    offsets.push((-i, 0));
                    offsets.push((0, -i));
                }
                for i in 1..ROWS as isize {
                    offsets.push((i, i));
                    offsets.push((-i, -i));
                    offsets.push((-i, i));
                    offsets.push((i, -i));
                }
            }
            PieceKind::Rook => {
                for i in 1..ROWS as isize {
                    offsets.push((i, 0));
                    offsets.push((0, i));
                    offsets.push((-i, 0));
                    offsets.push((0, -i));
                }
            }
            PieceKind::Bishop => {
                for i in 1..ROWS as isize {
                    offsets.push((i, i));
                    offsets.push((-i, -i));
                    offsets.push((-i, i));
                    offsets.push((i, -i));
                }
            }
            PieceKind::Knight => {
                offsets.extend_from_slice(&[
                    (-1, -2),
                    (-2, -1),
                    (-2, 1),
                    (-1, 2),
                    (1, -2),
                    (2, -1),
                    (2, 1),
                    (1, 2),
                ]);
            }
            PieceKind::Pawn => {
                let forward = self.color.forward();
                offsets.push((0, forward));
                if !self.has_been_moved() {
                    offsets.push((0, 2 * forward));
                }
                // Diagonal offsets are capture-only; the board enforces that.
                offsets.push((-1, forward));
                offsets.push((1, forward));
            }
        }
        offsets
    }

    pub fn to_char(&self) -> char {
        let c = match self.kind {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        };
        if self.color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }
}

pub fn to_algebraic_square(x: u8, y: u8) -> String {
    let file = (b'a' + x) as char;
    let rank = (y + 1).to_string();
    format!("{}{}", file, rank)
}

/// Parses a square like "e3" into (x, y).
pub fn from_algebraic_square(square: &str) -> Result<(u8, u8), &'static str> {
    let mut chars = square.chars();
    let file = chars.next().ok_or("empty square name")?;
    let rank = chars.next().ok_or("square name too short")?;
    if chars.next().is_some() {
        return Err("square name too long");
    }
    if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
        return Err("square outside the board");
    }
    Ok((file as u8 - b'a', rank as u8 - b'1'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebraic_conversion() {
        assert_eq!(from_algebraic_square("a1"), Ok((0, 0)));
        assert_eq!(from_algebraic_square("h8"), Ok((7, 7)));
        assert_eq!(from_algebraic_square("e2"), Ok((4, 1)));
        assert_eq!(to_algebraic_square(4, 1), "e2");
        assert!(from_algebraic_square("i1").is_err());
        assert!(from_algebraic_square("a9").is_err());
        assert!(from_algebraic_square("e22").is_err());
        assert!(from_algebraic_square("").is_err());
    }

    #[test]
    fn test_king_offsets_include_orthogonal_steps() {
        // The move rule ranges both axes independently over {-1, 0, 1}; an
        // implementation requiring both components non-zero would silently
        // drop the orthogonal steps.
        let king = Piece::new(PieceKind::King, Color::White, 4, 4);
        let offsets = king.move_offsets();
        assert_eq!(offsets.len(), 8);
        for step in [(1, 0), (-1, 0), (0, 1), (0, -1)] {
            assert!(offsets.contains(&step), "missing orthogonal step {:?}", step);
        }
        assert!(!offsets.contains(&(0, 0)));
    }

    #[test]
    fn test_pawn_offsets_depend_on_move_count() {
        let mut pawn = Piece::new(PieceKind::Pawn, Color::White, 4, 1);
        assert_eq!(pawn.move_offsets(), vec![(0, 1), (0, 2), (-1, 1), (1, 1)]);

        pawn.times_moved = 1;
        assert_eq!(pawn.move_offsets(), vec![(0, 1), (-1, 1), (1, 1)]);

        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black, 4, 6);
        assert_eq!(
            black_pawn.move_offsets(),
            vec![(0, -1), (0, -2), (-1, -1), (1, -1)]
        );
    }

    #[test]
    fn test_promote_to_marks_piece() {
        let mut pawn = Piece::new(PieceKind::Pawn, Color::White, 0, 6);
        assert!(pawn.can_be_promoted());
        pawn.promote_to(PieceKind::Queen);
        assert_eq!(pawn.kind, PieceKind::Queen);
        assert!(pawn.promoted);
        assert!(!pawn.can_be_promoted());
    }

    #[test]
    #[should_panic(expected = "invalid promotion target")]
    fn test_promote_to_king_is_rejected() {
        let mut pawn = Piece::new(PieceKind::Pawn, Color::White, 0, 6);
        pawn.promote_to(PieceKind::King);
    }

    #[test]
    #[should_panic(expected = "invalid promotion target")]
    fn test_promote_to_pawn_is_rejected() {
        let mut pawn = Piece::new(PieceKind::Pawn, Color::Black, 0, 1);
        pawn.promote_to(PieceKind::Pawn);
    }

    #[test]
    fn test_capture_and_jump_predicates() {
        let king = Piece::new(PieceKind::King, Color::White, 4, 0);
        assert!(!king.can_be_captured());
        let knight = Piece::new(PieceKind::Knight, Color::Black, 1, 7);
        assert!(knight.can_be_captured());
        assert!(knight.can_jump());
        let queen = Piece::new(PieceKind::Queen, Color::White, 3, 0);
        assert!(!queen.can_jump());
    }
}
