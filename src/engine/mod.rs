pub mod attacks;
pub mod legality;
pub mod perft;
pub mod playout;
pub mod special;
pub mod terminal;

pub use perft::{perft, perft_divide, PerftConfig, PerftReport};
pub use playout::{random_playout, PlayoutResult};
pub use terminal::GameStatus;
