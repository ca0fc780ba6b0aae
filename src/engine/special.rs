// Ficheiro: src/engine/special.rs
// Descrição: Efeitos dos lances especiais: torre do roque, promoção e direitos de roque.

use crate::core::*;
use crate::moves::king::{rook_destination, rook_home};

impl Board {
    /// Move a torre do roque depois de o rei já estar no destino e marca-a como movida.
    pub(crate) fn castle_rook(&mut self, color: Color, side: CastleSide, king_from: Square, king_to: Square) -> SpecialMove {
        let rook_from = rook_home(self, color, side);
        let rook_to = rook_destination(king_from, king_to);
        let rook = self.set(rook_from, None);
        self.set(rook_to, rook);
        self.castling_flags_mut(color).mark_rook_moved(side);
        SpecialMove::Castle { side, rook_from, rook_to }
    }

    /// Um peão que chega à última linha é trocado por uma Rainha da mesma cor.
    pub(crate) fn promote(&mut self, square: Square, piece: Piece) -> Option<PieceKind> {
        if piece.kind != PieceKind::Pawn || square.rank != self.config().promotion_rank(piece.color) {
            return None;
        }
        self.set(square, Some(Piece::new(PieceKind::Queen, piece.color)));
        Some(PieceKind::Queen)
    }

    /// Atualiza direitos de roque: o rei que se move perde ambos; qualquer lance que
    /// saia de ou chegue a um canto de torre perde esse lado. As flags nunca voltam atrás.
    pub(crate) fn update_castling_rights(&mut self, mv: &Move) {
        if mv.piece.kind == PieceKind::King {
            self.castling_flags_mut(mv.piece.color).mark_king_moved();
        }

        for color in [Color::White, Color::Black] {
            for side in [CastleSide::Queenside, CastleSide::Kingside] {
                let corner = rook_home(self, color, side);
                if mv.from == corner || mv.to == corner {
                    self.castling_flags_mut(color).mark_rook_moved(side);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_kingside_castle_moves_both_pieces() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let applied = board
            .make_move(sq("e1"), sq("g1"), Color::White, PieceKind::King)
            .unwrap()
            .unwrap();
        assert_eq!(
            applied.special,
            Some(SpecialMove::Castle {
                side: CastleSide::Kingside,
                rook_from: sq("h1"),
                rook_to: sq("f1"),
            })
        );
        assert_eq!(board.piece_at(sq("g1")), Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(board.piece_at(sq("f1")), Some(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(board.piece_at(sq("h1")), None);
        assert_eq!(board.piece_at(sq("e1")), None);
        let flags = board.castling_flags(Color::White);
        assert!(flags.king_moved());
        assert!(flags.rook_moved(CastleSide::Kingside));
        assert_eq!(board.turn(), Color::Black);
    }

    #[test]
    fn test_queenside_castle_for_black() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1").unwrap();
        board
            .make_move(sq("e8"), sq("c8"), Color::Black, PieceKind::King)
            .unwrap()
            .unwrap();
        assert_eq!(board.piece_at(sq("c8")), Some(Piece::new(PieceKind::King, Color::Black)));
        assert_eq!(board.piece_at(sq("d8")), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert_eq!(board.piece_at(sq("a8")), None);
        let black = board.castling_flags(Color::Black);
        assert!(black.king_moved());
        assert!(black.rook_moved(CastleSide::Queenside));
        assert!(!black.rook_moved(CastleSide::Kingside));
        assert!(board.castling_flags(Color::White).can_castle(CastleSide::Queenside));
    }

    #[test]
    fn test_promotion_to_queen() {
        let mut board = Board::from_fen("1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let applied = board
            .make_move(sq("a7"), sq("a8"), Color::White, PieceKind::Pawn)
            .unwrap()
            .unwrap();
        assert_eq!(applied.special, Some(SpecialMove::Promotion(PieceKind::Queen)));
        assert_eq!(board.piece_at(sq("a8")), Some(Piece::new(PieceKind::Queen, Color::White)));

        // Captura com promoção para as pretas.
        let mut board = Board::from_fen("4k3/8/8/8/8/8/p7/1R2K3 b - - 0 1").unwrap();
        let applied = board
            .make_move(sq("a2"), sq("b1"), Color::Black, PieceKind::Pawn)
            .unwrap()
            .unwrap();
        assert_eq!(applied.captured, Some(Piece::new(PieceKind::Rook, Color::White)));
        assert_eq!(board.piece_at(sq("b1")), Some(Piece::new(PieceKind::Queen, Color::Black)));
    }

    #[test]
    fn test_capturing_rook_on_corner_removes_right() {
        let mut board = Board::from_fen("r3k2r/8/8/8/8/8/8/R3K2B w KQkq - 0 1").unwrap();
        // Bispo em h1 captura a torre de a8 ao longo da grande diagonal.
        board
            .make_move(sq("h1"), sq("a8"), Color::White, PieceKind::Bishop)
            .unwrap()
            .unwrap();
        let black = board.castling_flags(Color::Black);
        assert!(black.rook_moved(CastleSide::Queenside));
        assert!(black.can_castle(CastleSide::Kingside));
        // O bispo saiu do canto h1: o direito de roque curto das brancas também cai.
        assert!(!board.castling_flags(Color::White).can_castle(CastleSide::Kingside));
    }
}
