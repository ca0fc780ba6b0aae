// Ficheiro: src/core/types.rs
// Descrição: Tipos de dados fundamentais do jogo: cor, peça, casa e lance.

use std::fmt;
use std::str::FromStr;

use crate::error::ChessError;

// Enum para representar a cor de uma peça ou de um jogador.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Direção de avanço dos peões desta cor (em ranks).
    #[inline]
    pub fn forward(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }
}

impl std::ops::Not for Color {
    type Output = Color;

    fn not(self) -> Self::Output {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

// Enum para representar o tipo de uma peça de xadrez.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Letra minúscula usada em FEN e na notação de lances.
    pub fn to_char(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_char(ch: char) -> Option<PieceKind> {
        match ch.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

// Struct para representar uma peça no tabuleiro, combinando o tipo e a cor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Letra FEN: maiúscula para as brancas, minúscula para as pretas.
    pub fn to_fen_char(self) -> char {
        let ch = self.kind.to_char();
        match self.color {
            Color::White => ch.to_ascii_uppercase(),
            Color::Black => ch,
        }
    }

    pub fn from_fen_char(ch: char) -> Option<Piece> {
        let kind = PieceKind::from_char(ch)?;
        let color = if ch.is_ascii_uppercase() { Color::White } else { Color::Black };
        Some(Piece::new(kind, color))
    }
}

/// Casa do tabuleiro como par (file, rank), ambos a partir de 0.
///
/// Uma `Square` pode estar fora do tabuleiro (a camada de input converte píxeis
/// sem conhecer o tamanho); é o `Board` que decide se ela é válida.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: i32,
    pub rank: i32,
}

impl Square {
    pub const fn new(file: i32, rank: i32) -> Self {
        Square { file, rank }
    }

    #[inline]
    pub fn offset(self, file_delta: i32, rank_delta: i32) -> Square {
        Square::new(self.file + file_delta, self.rank + rank_delta)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.file) && self.rank >= 0 {
            let file = (b'a' + self.file as u8) as char;
            write!(f, "{}{}", file, self.rank + 1)
        } else {
            write!(f, "({}, {})", self.file, self.rank)
        }
    }
}

impl FromStr for Square {
    type Err = ChessError;

    /// Aceita notação algébrica: uma letra de coluna seguida do número da linha ("e4", "b12").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file = match chars.next() {
            Some(c @ 'a'..='z') => c as i32 - 'a' as i32,
            _ => return Err(ChessError::InvalidSquare(s.to_string())),
        };
        let rank: i32 = chars
            .as_str()
            .parse()
            .map_err(|_| ChessError::InvalidSquare(s.to_string()))?;
        if rank < 1 {
            return Err(ChessError::InvalidSquare(s.to_string()));
        }
        Ok(Square::new(file, rank - 1))
    }
}

/// Lado do roque, identificado pela torre envolvida.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    /// Torre da coluna 0.
    Queenside,
    /// Torre da última coluna.
    Kingside,
}

// Struct para representar um lance pedido pelo jogador: origem, destino e a peça que se move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
}

impl Move {
    pub fn new(from: Square, to: Square, piece: Piece) -> Self {
        Move { from, to, piece }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

/// Efeito colateral de um lance especial aplicado.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialMove {
    /// Avanço de duas casas; o destino passa a ser o alvo de en passant.
    DoubleStep,
    /// Captura en passant; `captured` é a casa de onde o peão inimigo saiu.
    EnPassant { captured: Square },
    /// Roque; a torre foi de `rook_from` para `rook_to`.
    Castle { side: CastleSide, rook_from: Square, rook_to: Square },
    /// O peão chegou à última linha e foi trocado por esta peça.
    Promotion(PieceKind),
}

/// Descrição de um lance que o motor aceitou e aplicou.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppliedMove {
    pub mv: Move,
    pub captured: Option<Piece>,
    pub special: Option<SpecialMove>,
}

impl fmt::Display for AppliedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mv)?;
        if let Some(SpecialMove::Promotion(kind)) = self.special {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}
