use super::{Board, Color, PieceKind, COLUMNS, ROWS};

impl Board {
    /// Determines the legal destinations of the piece at (x, y) for the given
    /// side, in the piece's offset generation order. Returns an empty list if
    /// the cell is empty or holds an opponent's piece.
    pub fn valid_moves_for(&self, color: Color, x: u8, y: u8) -> Vec<(u8, u8)> {
        let piece = match self.piece_at(x, y) {
            Some(piece) if piece.color == color => *piece,
            _ => return Vec::new(),
        };

        let mut valid_moves = Vec::new();
        for (dx, dy) in piece.move_offsets() {
            debug_assert!(dx != 0 || dy != 0);

            let target_x = x as isize + dx;
            let target_y = y as isize + dy;

            // Out of bounds.
            if !(0..COLUMNS as isize).contains(&target_x) || !(0..ROWS as isize).contains(&target_y)
            {
                continue;
            }
            let (target_x, target_y) = (target_x as u8, target_y as u8);
            let occupant = self.piece_at(target_x, target_y);

            // Own piece on the target.
            if occupant.is_some_and(|other| other.color == piece.color) {
                continue;
            }
            // A pawn captures diagonally only, and advances only onto empty
            // cells.
            if piece.kind == PieceKind::Pawn {
                if dx != 0 && occupant.is_none() {
                    continue;
                }
                if dx == 0 && occupant.is_some() {
                    continue;
                }
            }
            // An enemy occupant must be capturable.
            if occupant.is_some_and(|other| !other.can_be_captured()) {
                continue;
            }
            // Sliding pieces stop at the first occupied cell on the way.
            if !piece.can_jump() && !self.path_is_clear(x, y, target_x, target_y) {
                continue;
            }
            valid_moves.push((target_x, target_y));
        }
        valid_moves
    }

    /// Checks that every cell strictly between (x1, y1) and (x2, y2) along the
    /// straight-line path is empty, stepping a unit vector from the origin and
    /// excluding both endpoints.
    fn path_is_clear(&self, x1: u8, y1: u8, x2: u8, y2: u8) -> bool {
        debug_assert!(x1 != x2 || y1 != y2);

        let distance_x = x2 as isize - x1 as isize;
        let distance_y = y2 as isize - y1 as isize;
        let steps = distance_x.abs().max(distance_y.abs());

        for step in 1..steps {
            let between_x = x1 as isize + step * distance_x.signum();
            let between_y = y1 as isize + step * distance_y.signum();
            if self.piece_at(between_x as u8, between_y as u8).is_some() {
                return false;
            }
        }
        true
    }
}
