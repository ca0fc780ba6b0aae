// Ficheiro: src/core/config.rs
// Descrição: Configuração do tabuleiro e linhas/colunas derivadas do tamanho.

use crate::core::Color;
use crate::error::{ChessError, Result};

pub const DEFAULT_BOARD_SIZE: usize = 8;
pub const MIN_BOARD_SIZE: usize = 4;
pub const MAX_BOARD_SIZE: usize = 26;

/// Dimensão do tabuleiro, fixa depois da construção.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardConfig {
    size: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig { size: DEFAULT_BOARD_SIZE }
    }
}

impl BoardConfig {
    pub fn new(size: usize) -> Result<Self> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(ChessError::InvalidBoardSize { size });
        }
        Ok(BoardConfig { size })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn last(&self) -> i32 {
        self.size as i32 - 1
    }

    /// Linha onde os peões desta cor podem avançar duas casas.
    pub fn pawn_home_rank(&self, color: Color) -> i32 {
        match color {
            Color::White => 1,
            Color::Black => self.last() - 1,
        }
    }

    /// Linha onde os peões desta cor são promovidos.
    pub fn promotion_rank(&self, color: Color) -> i32 {
        match color {
            Color::White => self.last(),
            Color::Black => 0,
        }
    }

    /// Primeira linha da cor (rei e torres na posição inicial).
    pub fn back_rank(&self, color: Color) -> i32 {
        match color {
            Color::White => 0,
            Color::Black => self.last(),
        }
    }

    pub fn queenside_rook_file(&self) -> i32 {
        0
    }

    pub fn kingside_rook_file(&self) -> i32 {
        self.last()
    }
}
