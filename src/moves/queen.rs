// Ficheiro: src/moves/queen.rs
// Descrição: Lógica para os lances da Rainha (Bispo + Torre).

use super::is_path_clear;
use super::sliding::{is_diagonal, is_straight};
use crate::core::{Board, Square};

pub fn is_queen_move_valid(board: &Board, from: Square, to: Square) -> bool {
    (is_diagonal(from, to) || is_straight(from, to)) && is_path_clear(board, from, to)
}
