// Ficheiro: src/engine/attacks.rs
// Descrição: Deteção de casas atacadas e de xeque, reutilizando as regras pseudo-legais.

use crate::core::{Board, Color, Piece, PieceKind, Square};
use crate::error::{ChessError, Result};

impl Board {
    /// Encontra a posição do Rei da cor dada.
    ///
    /// A ausência do rei é uma violação de invariante: a consulta é abortada.
    pub fn find_king(&self, color: Color) -> Result<Square> {
        let king = Piece::new(PieceKind::King, color);
        self.occupied()
            .find(|&(_, piece)| piece == king)
            .map(|(square, _)| square)
            .ok_or_else(|| {
                log::error!("no {:?} king on the board, aborting check query", color);
                ChessError::KingNotFound(color)
            })
    }

    /// Verifica se alguma peça adversária de `defender` tem um lance pseudo-legal até `square`.
    ///
    /// Ataque e movimento partilham a geometria para todas as peças, peões incluídos:
    /// um peão só "ataca" uma casa na diagonal se lá puder capturar, e conta o avanço
    /// em frente para uma casa vazia. Para a casa de um rei o resultado é o do xadrez.
    pub fn is_square_attacked(&self, square: Square, defender: Color) -> bool {
        let attacker = !defender;
        self.occupied().any(|(from, piece)| {
            piece.color == attacker && self.is_pseudo_legal(from, square, attacker, piece.kind)
        })
    }

    /// Verifica se o rei da cor especificada está em xeque.
    pub fn is_king_in_check(&self, color: Color) -> Result<bool> {
        let king_square = self.find_king(color)?;
        Ok(self.is_square_attacked(king_square, color))
    }
}
