// Ficheiro: src/moves/sliding.rs
// Descrição: Lógica para as peças deslizantes (Bispo e Torre).

use super::is_path_clear;
use crate::core::{Board, Square};

#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let file_delta = (to.file - from.file).abs();
    file_delta != 0 && file_delta == (to.rank - from.rank).abs()
}

#[inline]
pub fn is_straight(from: Square, to: Square) -> bool {
    (from.file == to.file) != (from.rank == to.rank)
}

pub fn is_bishop_move_valid(board: &Board, from: Square, to: Square) -> bool {
    is_diagonal(from, to) && is_path_clear(board, from, to)
}

pub fn is_rook_move_valid(board: &Board, from: Square, to: Square) -> bool {
    is_straight(from, to) && is_path_clear(board, from, to)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, PieceKind};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_bishop_geometry() {
        let board = Board::new();
        assert!(is_bishop_move_valid(&board, sq("c1"), sq("h6")));
        assert!(is_bishop_move_valid(&board, sq("c1"), sq("a3")));
        assert!(!is_bishop_move_valid(&board, sq("c1"), sq("c4")));
        assert!(!is_bishop_move_valid(&board, sq("c1"), sq("d3")));
    }

    #[test]
    fn test_rook_blocked() {
        let mut board = Board::new();
        board.place_piece(sq("a4"), PieceKind::Pawn, Color::Black).unwrap();
        assert!(is_rook_move_valid(&board, sq("a1"), sq("a4")));
        assert!(!is_rook_move_valid(&board, sq("a1"), sq("a5")));
        assert!(is_rook_move_valid(&board, sq("a1"), sq("h1")));
        assert!(!is_rook_move_valid(&board, sq("a1"), sq("b2")));
    }
}
