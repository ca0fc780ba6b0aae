// Ficheiro: src/core/board.rs
// Descrição: Módulo que contém a struct Board e os seus métodos de montagem e consulta.

use std::fmt;

use super::config::BoardConfig;
use super::types::*;
use crate::error::{ChessError, Result};

/// Flags de roque de uma cor. Uma vez `true`, nunca voltam a `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CastlingFlags {
    king_moved: bool,
    queenside_rook_moved: bool,
    kingside_rook_moved: bool,
}

impl CastlingFlags {
    pub fn king_moved(&self) -> bool {
        self.king_moved
    }

    pub fn rook_moved(&self, side: CastleSide) -> bool {
        match side {
            CastleSide::Queenside => self.queenside_rook_moved,
            CastleSide::Kingside => self.kingside_rook_moved,
        }
    }

    /// O roque deste lado ainda é possível (nem o rei nem a torre se moveram).
    pub fn can_castle(&self, side: CastleSide) -> bool {
        !self.king_moved && !self.rook_moved(side)
    }

    pub(crate) fn mark_king_moved(&mut self) {
        self.king_moved = true;
    }

    pub(crate) fn mark_rook_moved(&mut self, side: CastleSide) {
        match side {
            CastleSide::Queenside => self.queenside_rook_moved = true,
            CastleSide::Kingside => self.kingside_rook_moved = true,
        }
    }
}

/// O tabuleiro: grelha N×N de casas, cada uma com no máximo uma peça, mais o estado do jogo.
///
/// Muda apenas pelos lances aceites em `make_move` ou pelas chamadas de montagem
/// (`place_piece`, `remove_piece`). Duas `Board` são iguais quando peças, vez,
/// alvo de en passant e flags de roque coincidem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    config: BoardConfig,
    // Linha a linha: índice = rank * size + file.
    tiles: Vec<Option<Piece>>,
    turn: Color,
    last_double_move: Option<Square>,
    castling: [CastlingFlags; 2],
}

impl Default for Board {
    fn default() -> Self {
        Board::with_config(BoardConfig::default())
    }
}

impl Board {
    /// Cria um tabuleiro 8×8 vazio, com as brancas a jogar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cria um tabuleiro vazio com o tamanho configurado.
    pub fn with_config(config: BoardConfig) -> Self {
        let size = config.size();
        Board {
            config,
            tiles: vec![None; size * size],
            turn: Color::White,
            last_double_move: None,
            castling: [CastlingFlags::default(); 2],
        }
    }

    /// Cria um novo tabuleiro na posição inicial padrão.
    pub fn standard() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Board::new();
        for (file, &kind) in BACK_RANK.iter().enumerate() {
            let file = file as i32;
            board.set(Square::new(file, 0), Some(Piece::new(kind, Color::White)));
            board.set(Square::new(file, 1), Some(Piece::new(PieceKind::Pawn, Color::White)));
            board.set(Square::new(file, 6), Some(Piece::new(PieceKind::Pawn, Color::Black)));
            board.set(Square::new(file, 7), Some(Piece::new(kind, Color::Black)));
        }
        board
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.config.size()
    }

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    #[inline]
    pub fn in_bounds(&self, square: Square) -> bool {
        let size = self.size() as i32;
        (0..size).contains(&square.file) && (0..size).contains(&square.rank)
    }

    #[inline]
    fn index(&self, square: Square) -> usize {
        square.rank as usize * self.size() + square.file as usize
    }

    fn check_bounds(&self, square: Square) -> Result<()> {
        if self.in_bounds(square) {
            Ok(())
        } else {
            Err(ChessError::OutOfBounds { square, size: self.size() })
        }
    }

    /// Peça na casa, ou `None` se a casa está vazia ou fora do tabuleiro.
    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        if self.in_bounds(square) {
            self.tiles[self.index(square)]
        } else {
            None
        }
    }

    /// Conteúdo de uma casa; recusa coordenadas fora do tabuleiro.
    pub fn tile_contents(&self, square: Square) -> Result<Option<Piece>> {
        self.check_bounds(square)?;
        Ok(self.tiles[self.index(square)])
    }

    pub fn has_piece(&self, square: Square) -> Result<bool> {
        Ok(self.tile_contents(square)?.is_some())
    }

    /// Coloca uma peça diretamente, sem validar legalidade (montagem de posições e testes).
    pub fn place_piece(&mut self, square: Square, kind: PieceKind, color: Color) -> Result<()> {
        self.check_bounds(square)?;
        self.set(square, Some(Piece::new(kind, color)));
        Ok(())
    }

    /// Remove a peça da casa e devolve-a, sem validar legalidade.
    pub fn remove_piece(&mut self, square: Square) -> Result<Option<Piece>> {
        self.check_bounds(square)?;
        Ok(self.set(square, None))
    }

    /// Escreve numa casa já validada e devolve o conteúdo anterior.
    #[inline]
    pub(crate) fn set(&mut self, square: Square, piece: Option<Piece>) -> Option<Piece> {
        debug_assert!(self.in_bounds(square));
        let idx = self.index(square);
        std::mem::replace(&mut self.tiles[idx], piece)
    }

    /// De quem é a vez de jogar.
    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn is_turn_valid(&self, color: Color) -> bool {
        self.turn == color
    }

    /// Define quem joga (montagem de posições).
    pub fn set_turn(&mut self, color: Color) {
        self.turn = color;
    }

    pub(crate) fn switch_turn(&mut self) {
        self.turn = !self.turn;
    }

    /// Destino do último avanço duplo de peão, válido só para o meio-lance seguinte.
    #[inline]
    pub fn last_double_move(&self) -> Option<Square> {
        self.last_double_move
    }

    pub(crate) fn set_last_double_move(&mut self, square: Option<Square>) {
        self.last_double_move = square;
    }

    #[inline]
    pub fn castling_flags(&self, color: Color) -> CastlingFlags {
        self.castling[color.index()]
    }

    pub(crate) fn castling_flags_mut(&mut self, color: Color) -> &mut CastlingFlags {
        &mut self.castling[color.index()]
    }

    /// Todas as casas do tabuleiro, linha a linha a partir de a1.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let size = self.size() as i32;
        (0..size).flat_map(move |rank| (0..size).map(move |file| Square::new(file, rank)))
    }

    /// Casas ocupadas e as respetivas peças.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.squares().filter_map(move |sq| self.piece_at(sq).map(|piece| (sq, piece)))
    }

    /// Retorna o número de peças de um tipo para uma cor.
    pub fn piece_count(&self, color: Color, kind: PieceKind) -> usize {
        self.occupied()
            .filter(|(_, piece)| piece.color == color && piece.kind == kind)
            .count()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size() as i32;
        for rank in (0..size).rev() {
            write!(f, "{:>2} ", rank + 1)?;
            for file in 0..size {
                let ch = self
                    .piece_at(Square::new(file, rank))
                    .map_or('.', Piece::to_fen_char);
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for file in 0..size {
            write!(f, " {}", (b'a' + file as u8) as char)?;
        }
        writeln!(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_and_read_every_square() {
        let mut board = Board::new();
        let squares: Vec<Square> = board.squares().collect();
        assert_eq!(squares.len(), 64);

        for sq in squares {
            board.place_piece(sq, PieceKind::Knight, Color::Black).unwrap();
            assert_eq!(
                board.tile_contents(sq).unwrap(),
                Some(Piece::new(PieceKind::Knight, Color::Black))
            );
            assert_eq!(
                board.remove_piece(sq).unwrap(),
                Some(Piece::new(PieceKind::Knight, Color::Black))
            );
            assert!(!board.has_piece(sq).unwrap());
        }
    }

    #[test]
    fn test_out_of_bounds_is_rejected() {
        let mut board = Board::new();
        let outside = Square::new(8, 0);
        assert_eq!(
            board.place_piece(outside, PieceKind::Pawn, Color::White),
            Err(ChessError::OutOfBounds { square: outside, size: 8 })
        );
        assert!(board.tile_contents(Square::new(-1, 3)).is_err());
        assert!(board.remove_piece(Square::new(0, 8)).is_err());
        assert_eq!(board.piece_at(outside), None);
    }

    #[test]
    fn test_standard_position() {
        let board = Board::standard();
        assert_eq!(board.turn(), Color::White);
        assert_eq!(board.occupied().count(), 32);
        assert_eq!(board.piece_count(Color::White, PieceKind::Pawn), 8);
        assert_eq!(
            board.piece_at(Square::new(4, 0)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.piece_at(Square::new(3, 7)),
            Some(Piece::new(PieceKind::Queen, Color::Black))
        );
    }

    #[test]
    fn test_castling_flags_are_monotonic() {
        let mut flags = CastlingFlags::default();
        assert!(flags.can_castle(CastleSide::Kingside));
        flags.mark_rook_moved(CastleSide::Kingside);
        assert!(!flags.can_castle(CastleSide::Kingside));
        assert!(flags.can_castle(CastleSide::Queenside));
        flags.mark_king_moved();
        assert!(!flags.can_castle(CastleSide::Queenside));
    }

    #[test]
    fn test_display() {
        let text = Board::standard().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], " 8  r n b q k b n r");
        assert_eq!(lines[7], " 1  R N B Q K B N R");
        assert_eq!(lines[8], "    a b c d e f g h");
    }
}
