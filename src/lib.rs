// Xeque - Motor de regras de xadrez: legalidade, xeque, xeque-mate e afogamento.
//
// O motor não desenha nada nem trata input: a camada de apresentação chama
// `place_piece`, `is_legal`, `make_move`, `is_checkmate`... e lê `tile_contents`.

pub mod core;
pub mod engine;
pub mod error;
pub mod moves;

pub use crate::core::*;
pub use engine::{GameStatus, PerftConfig};
pub use error::{ChessError, Result};
