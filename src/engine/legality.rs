// Ficheiro: src/engine/legality.rs
// Descrição: Filtro de legalidade (simular, verificar xeque, desfazer) e aplicação de lances.

use crate::core::*;
use crate::error::Result;
use crate::moves::king::castle_side;
use crate::moves::pawn::{en_passant_victim, is_double_step};

/// Lance simulado no próprio tabuleiro. O `Drop` desfaz a simulação, por isso o
/// tabuleiro volta exatamente ao estado anterior seja qual for o desfecho da avaliação
/// (erro, retorno antecipado ou pânico).
struct Simulation<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    moved: Option<Piece>,
    captured: Option<Piece>,
    en_passant: Option<(Square, Piece)>,
}

impl<'a> Simulation<'a> {
    /// Move a peça de `from` para `to`, guardando a peça capturada (e o peão apanhado
    /// en passant, se houver).
    fn begin(board: &'a mut Board, from: Square, to: Square, en_passant: Option<Square>) -> Self {
        let captured = board.set(to, None);
        let moved = board.set(from, None);
        board.set(to, moved);
        let en_passant = en_passant.and_then(|sq| board.set(sq, None).map(|pawn| (sq, pawn)));
        log::trace!("simulating {} -> {}", from, to);

        Simulation { board, from, to, moved, captured, en_passant }
    }

    fn board(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Simulation<'_> {
    fn drop(&mut self) {
        self.board.set(self.to, self.captured);
        self.board.set(self.from, self.moved);
        if let Some((square, pawn)) = self.en_passant {
            self.board.set(square, Some(pawn));
        }
    }
}

impl Board {
    /// Verifica se o lance é legal para quem tem a vez.
    ///
    /// Pseudo-legal, da cor a jogar, e sem deixar o próprio rei em xeque. O tabuleiro
    /// pode ser alterado durante a avaliação mas é sempre reposto antes do retorno.
    pub fn is_legal(&mut self, from: Square, to: Square, color: Color, kind: PieceKind) -> Result<bool> {
        if !self.is_turn_valid(color) {
            return Ok(false);
        }
        self.is_move_safe(from, to, color, kind)
    }

    /// Como `is_legal`, mas sem verificar a vez. Usado na enumeração de lances de
    /// qualquer cor (mate e afogamento).
    pub fn is_move_safe(&mut self, from: Square, to: Square, color: Color, kind: PieceKind) -> Result<bool> {
        if !self.is_pseudo_legal(from, to, color, kind) {
            return Ok(false);
        }

        if kind == PieceKind::King && castle_side(self, from, to, color).is_some() {
            return self.is_castling_safe(from, to, color);
        }

        let en_passant = if kind == PieceKind::Pawn {
            en_passant_victim(self, from, to, color)
        } else {
            None
        };

        let simulation = Simulation::begin(self, from, to, en_passant);
        let in_check = simulation.board().is_king_in_check(color);
        drop(simulation);
        Ok(!in_check?)
    }

    /// O rei não pode rocar estando em xeque, nem atravessar ou terminar numa casa atacada.
    fn is_castling_safe(&mut self, from: Square, to: Square, color: Color) -> Result<bool> {
        if self.is_king_in_check(color)? {
            return Ok(false);
        }

        let step = (to.file - from.file).signum();
        let mut square = from;
        while square != to {
            square = square.offset(step, 0);
            let simulation = Simulation::begin(self, from, square, None);
            let attacked = simulation.board().is_king_in_check(color);
            drop(simulation);
            if attacked? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Aplica o lance se for legal: move a peça, trata roque, en passant e promoção,
    /// atualiza as flags de roque e passa a vez.
    ///
    /// Um lance ilegal devolve `Ok(None)` sem alterar nada.
    pub fn make_move(
        &mut self,
        from: Square,
        to: Square,
        color: Color,
        kind: PieceKind,
    ) -> Result<Option<AppliedMove>> {
        if !self.is_legal(from, to, color, kind)? {
            log::debug!("rejected {:?} {:?} {} -> {}", color, kind, from, to);
            return Ok(None);
        }

        let piece = Piece::new(kind, color);
        let mv = Move::new(from, to, piece);
        let castle = match kind {
            PieceKind::King => castle_side(self, from, to, color),
            _ => None,
        };
        let en_passant = match kind {
            PieceKind::Pawn => en_passant_victim(self, from, to, color),
            _ => None,
        };

        let mut captured = self.set(to, Some(piece));
        self.set(from, None);

        let special = if let Some(side) = castle {
            Some(self.castle_rook(color, side, from, to))
        } else if let Some(victim) = en_passant {
            captured = self.set(victim, None);
            Some(SpecialMove::EnPassant { captured: victim })
        } else if let Some(promoted) = self.promote(to, piece) {
            Some(SpecialMove::Promotion(promoted))
        } else if kind == PieceKind::Pawn && is_double_step(from, to) {
            Some(SpecialMove::DoubleStep)
        } else {
            None
        };

        // O alvo de en passant só vale para o meio-lance seguinte.
        let double_step = matches!(special, Some(SpecialMove::DoubleStep));
        self.set_last_double_move(double_step.then_some(to));

        self.update_castling_rights(&mv);
        self.switch_turn();

        let applied = AppliedMove { mv, captured, special };
        log::debug!("applied {} ({:?} {:?})", applied, color, kind);
        Ok(Some(applied))
    }

    /// Aplica um `Move` já descrito (conveniência para enumeração e self-play).
    pub fn apply(&mut self, mv: Move) -> Result<Option<AppliedMove>> {
        self.make_move(mv.from, mv.to, mv.piece.color, mv.piece.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChessError;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_pinned_piece_cannot_move() {
        let mut board = Board::from_fen("4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1").unwrap();
        let before = board.clone();
        assert!(!board.is_legal(sq("e2"), sq("c3"), Color::White, PieceKind::Knight).unwrap());
        assert_eq!(board, before);
        assert!(board.is_legal(sq("e1"), sq("d1"), Color::White, PieceKind::King).unwrap());
    }

    #[test]
    fn test_wrong_turn_is_rejected() {
        let mut board = Board::standard();
        assert!(!board.is_legal(sq("e7"), sq("e5"), Color::Black, PieceKind::Pawn).unwrap());
        assert!(board.is_move_safe(sq("e7"), sq("e5"), Color::Black, PieceKind::Pawn).unwrap());
    }

    #[test]
    fn test_capture_is_restored_after_simulation() {
        // O bispo em d2 está cravado; capturar em e3 exporia o rei.
        let mut board = Board::from_fen("7k/8/8/b7/8/4n3/3B4/4K3 w - - 0 1").unwrap();
        let before = board.clone();
        assert!(!board.is_legal(sq("d2"), sq("e3"), Color::White, PieceKind::Bishop).unwrap());
        assert_eq!(board, before);
        assert!(board.is_legal(sq("d2"), sq("b4"), Color::White, PieceKind::Bishop).unwrap());
        assert_eq!(board, before);
    }

    #[test]
    fn test_missing_king_aborts_and_restores() {
        let mut board = Board::new();
        board.place_piece(sq("a1"), PieceKind::Rook, Color::White).unwrap();
        let before = board.clone();
        assert_eq!(
            board.is_legal(sq("a1"), sq("a8"), Color::White, PieceKind::Rook),
            Err(ChessError::KingNotFound(Color::White))
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_simulation_restores_on_panic() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/4P3/4K3 w - - 0 1").unwrap();
        let before = board.clone();
        let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _simulation = Simulation::begin(&mut board, sq("e2"), sq("e4"), None);
            panic!("evaluation failed");
        }));
        assert!(outcome.is_err());
        assert_eq!(board, before);
    }

    #[test]
    fn test_make_move_switches_turn() {
        let mut board = Board::standard();
        let applied = board
            .make_move(sq("g1"), sq("f3"), Color::White, PieceKind::Knight)
            .unwrap()
            .expect("legal move");
        assert_eq!(applied.captured, None);
        assert_eq!(applied.special, None);
        assert_eq!(board.turn(), Color::Black);

        let before = board.clone();
        assert_eq!(board.make_move(sq("f3"), sq("e5"), Color::White, PieceKind::Knight), Ok(None));
        assert_eq!(board, before);
    }

    #[test]
    fn test_capture_is_reported() {
        let mut board = Board::from_fen("4k3/8/8/3p4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let applied = board
            .make_move(sq("e4"), sq("d5"), Color::White, PieceKind::Pawn)
            .unwrap()
            .unwrap();
        assert_eq!(applied.captured, Some(Piece::new(PieceKind::Pawn, Color::Black)));
        assert_eq!(board.piece_count(Color::Black, PieceKind::Pawn), 0);
    }

    #[test]
    fn test_king_escapes_check() {
        let mut board = Board::from_fen("4k3/8/8/8/8/8/3r4/4K2r w - - 0 1").unwrap();
        assert!(board.is_king_in_check(Color::White).unwrap());
        assert!(!board.is_legal(sq("e1"), sq("f1"), Color::White, PieceKind::King).unwrap());
        assert!(board.is_legal(sq("e1"), sq("d2"), Color::White, PieceKind::King).unwrap());
        assert!(!board.is_legal(sq("e1"), sq("d1"), Color::White, PieceKind::King).unwrap());
    }
}
