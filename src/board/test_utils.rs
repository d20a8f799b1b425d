#![cfg(test)]

use super::{to_algebraic_square, Board, Color, Piece, PieceKind, COLUMNS, ROWS};

/// Builds a board from eight rows of eight characters, top row first (y = 7).
/// Uppercase letters are White pieces, lowercase Black, '.' is empty.
pub fn board_from_rows(rows: [&str; ROWS as usize]) -> Board {
    let mut board = Board::new();
    for (row_index, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), COLUMNS as usize, "row {} has wrong width", row_index);
        let y = ROWS - 1 - row_index as u8;
        for (x, c) in row.chars().enumerate() {
            if c == '.' {
                continue;
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = match c.to_ascii_lowercase() {
                'k' => PieceKind::King,
                'q' => PieceKind::Queen,
                'r' => PieceKind::Rook,
                'b' => PieceKind::Bishop,
                'n' => PieceKind::Knight,
                'p' => PieceKind::Pawn,
                _ => panic!("unknown piece character: {}", c),
            };
            board.place(Piece::new(kind, color, x as u8, y));
        }
    }
    board
}

/// Compares generated destinations against expected squares in algebraic
/// form, ignoring order.
pub fn assert_moves(generated: Vec<(u8, u8)>, mut expected: Vec<&str>) {
    let mut generated_converted: Vec<_> = generated
        .into_iter()
        .map(|(x, y)| to_algebraic_square(x, y))
        .collect();
    generated_converted.sort();
    expected.sort();

    assert_eq!(generated_converted, expected);
}
