// Ficheiro: src/error.rs
// Descrição: Erros do motor de regras.

use thiserror::Error;

use crate::core::{Color, Square};

/// Falhas que o motor reporta ao chamador.
///
/// Um lance ilegal NÃO é um erro: `make_move` devolve `Ok(None)` e não altera nada.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Não existe rei desta cor no tabuleiro; nenhuma consulta de xeque pode responder.
    #[error("no {0:?} king on the board")]
    KingNotFound(Color),

    #[error("square {square} is outside the {size}x{size} board")]
    OutOfBounds { square: Square, size: usize },

    #[error("board size {size} is not supported (expected 4..=26)")]
    InvalidBoardSize { size: usize },

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid square notation: {0}")]
    InvalidSquare(String),

    #[error("failed to build perft thread pool: {0}")]
    ThreadPool(String),
}

pub type Result<T> = std::result::Result<T, ChessError>;
