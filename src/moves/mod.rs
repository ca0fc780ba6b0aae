// Ficheiro: src/moves/mod.rs
// Descrição: Regras pseudo-legais por tipo de peça e despacho a partir do tabuleiro.
//
// Um lance pseudo-legal respeita a geometria da peça e a ocupação das casas, mas pode
// deixar o próprio rei em xeque. O filtro de legalidade vive em `engine::legality`.

pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod sliding;

use crate::core::{Board, Color, Piece, PieceKind, Square};

/// Verifica se todas as casas entre `from` e `to` (exclusive) estão vazias.
///
/// Avança uma casa de cada vez na direção do sinal de cada delta. Casas que não
/// partilham linha, coluna ou diagonal não têm caminho: devolve `false`.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    if from != to && !sliding::is_straight(from, to) && !sliding::is_diagonal(from, to) {
        return false;
    }

    let step_file = (to.file - from.file).signum();
    let step_rank = (to.rank - from.rank).signum();

    let mut current = from.offset(step_file, step_rank);
    while current != to {
        if board.piece_at(current).is_some() {
            return false;
        }
        current = current.offset(step_file, step_rank);
    }
    true
}

impl Board {
    /// Verifica se `kind` da cor `color` pode ir de `from` para `to` segundo a geometria
    /// da peça e a ocupação atual, ignorando a segurança do rei.
    ///
    /// A casa de origem tem de conter exatamente essa peça. Não altera o tabuleiro.
    pub fn is_pseudo_legal(&self, from: Square, to: Square, color: Color, kind: PieceKind) -> bool {
        if !self.in_bounds(from) || !self.in_bounds(to) || from == to {
            return false;
        }

        if self.piece_at(from) != Some(Piece::new(kind, color)) {
            return false;
        }

        // Nunca se captura uma peça da própria cor.
        if matches!(self.piece_at(to), Some(target) if target.color == color) {
            return false;
        }

        match kind {
            PieceKind::Pawn => pawn::is_pawn_move_valid(self, from, to, color),
            PieceKind::Knight => knight::is_knight_move_valid(from, to),
            PieceKind::Bishop => sliding::is_bishop_move_valid(self, from, to),
            PieceKind::Rook => sliding::is_rook_move_valid(self, from, to),
            PieceKind::Queen => queen::is_queen_move_valid(self, from, to),
            PieceKind::King => king::is_king_move_valid(self, from, to, color),
        }
    }
}
