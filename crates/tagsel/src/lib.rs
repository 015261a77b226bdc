pub mod cli;
pub mod error;
pub mod input;
pub mod output;
pub mod select;

pub use error::{Error, Result};
pub use input::{parse_games, read_input, Game};
pub use output::write_games;
pub use select::select_games;
