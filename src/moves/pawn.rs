// Ficheiro: src/moves/pawn.rs
// Descrição: Lógica de validação dos lances dos peões, incluindo a geometria do en passant.

use super::is_path_clear;
use crate::core::{Board, Color, Piece, PieceKind, Square};

/// Avanço de uma casa, avanço duplo a partir da linha inicial, ou captura diagonal
/// (normal ou en passant).
pub fn is_pawn_move_valid(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let forward = color.forward();
    let file_delta = to.file - from.file;
    let rank_delta = to.rank - from.rank;

    if file_delta == 0 {
        if board.piece_at(to).is_some() {
            return false;
        }
        if rank_delta == forward {
            return true;
        }
        return rank_delta == 2 * forward
            && from.rank == board.config().pawn_home_rank(color)
            && is_path_clear(board, from, to);
    }

    if file_delta.abs() == 1 && rank_delta == forward {
        return match board.piece_at(to) {
            Some(target) => target.color != color,
            None => en_passant_victim(board, from, to, color).is_some(),
        };
    }

    false
}

/// Se o lance diagonal `from -> to` é uma captura en passant, devolve a casa do peão capturado.
///
/// O último avanço duplo tem de ter terminado na coluna do destino e na linha da origem,
/// e essa casa tem de conter um peão inimigo.
pub fn en_passant_victim(board: &Board, from: Square, to: Square, color: Color) -> Option<Square> {
    if (to.file - from.file).abs() != 1 || to.rank - from.rank != color.forward() {
        return None;
    }
    if board.piece_at(to).is_some() {
        return None;
    }

    let victim = Square::new(to.file, from.rank);
    if board.last_double_move() != Some(victim) {
        return None;
    }
    if board.piece_at(victim) != Some(Piece::new(PieceKind::Pawn, !color)) {
        return None;
    }
    Some(victim)
}

/// O avanço de duas casas que deixa o peão sujeito a en passant no meio-lance seguinte.
#[inline]
pub fn is_double_step(from: Square, to: Square) -> bool {
    from.file == to.file && (to.rank - from.rank).abs() == 2
}
