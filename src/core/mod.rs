pub mod board;
pub mod config;
pub mod fen;
pub mod types;

pub use board::*;
pub use config::*;
pub use types::*;
