pub mod model;
pub use model::{
    from_algebraic_square, to_algebraic_square, Color, Piece, PieceKind, COLUMNS, ROWS,
};

mod board;
mod move_generation;
pub mod test_utils;
pub use board::{always_queen, Board, PromotionPolicy};
