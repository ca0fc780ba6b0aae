// Ficheiro: src/moves/king.rs
// Descrição: Lógica para os lances do Rei, incluindo a geometria do roque.

use super::is_path_clear;
use crate::core::{Board, CastleSide, Color, Piece, PieceKind, Square};

/// Um passo em qualquer direção, ou um roque.
pub fn is_king_move_valid(board: &Board, from: Square, to: Square, color: Color) -> bool {
    let file_delta = (to.file - from.file).abs();
    let rank_delta = (to.rank - from.rank).abs();

    if file_delta.max(rank_delta) == 1 {
        return true;
    }
    castle_side(board, from, to, color).is_some()
}

/// Se `from -> to` é um roque disponível para `color`, devolve o lado.
///
/// Exige: rei na primeira linha a andar exatamente duas colunas; uma torre da mesma
/// cor no canto desse lado; nem o rei nem essa torre se moveram; casas entre o rei e a
/// torre vazias. A segurança do rei (xeque antes, durante ou depois) é verificada pelo
/// filtro de legalidade.
pub fn castle_side(board: &Board, from: Square, to: Square, color: Color) -> Option<CastleSide> {
    let back_rank = board.config().back_rank(color);
    if from.rank != back_rank || to.rank != back_rank {
        return None;
    }

    let side = match to.file - from.file {
        2 => CastleSide::Kingside,
        -2 => CastleSide::Queenside,
        _ => return None,
    };

    if !board.castling_flags(color).can_castle(side) {
        return None;
    }

    let rook_square = rook_home(board, color, side);
    if board.piece_at(rook_square) != Some(Piece::new(PieceKind::Rook, color)) {
        return None;
    }

    if !is_path_clear(board, from, rook_square) {
        return None;
    }

    Some(side)
}

/// Canto de onde sai a torre deste lado.
pub fn rook_home(board: &Board, color: Color, side: CastleSide) -> Square {
    let config = board.config();
    let file = match side {
        CastleSide::Queenside => config.queenside_rook_file(),
        CastleSide::Kingside => config.kingside_rook_file(),
    };
    Square::new(file, config.back_rank(color))
}

/// Casa onde a torre fica depois do roque: a casa que o rei atravessou.
pub fn rook_destination(king_from: Square, king_to: Square) -> Square {
    let step = (king_to.file - king_from.file).signum();
    king_from.offset(step, 0)
}
