// Ficheiro: src/moves/knight.rs
// Descrição: Lógica de validação dos lances do Cavalo.

use crate::core::Square;

/// Os oito saltos do cavalo.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

/// O cavalo salta por cima de tudo: só a geometria conta.
#[inline]
pub fn is_knight_move_valid(from: Square, to: Square) -> bool {
    let delta = (to.file - from.file, to.rank - from.rank);
    KNIGHT_OFFSETS.contains(&delta)
}
