pub mod config;
pub mod error;
pub mod types;

pub use config::GameConfig;
pub use error::{ConquestError, Result, SelectionError};
pub use types::{BoundedName, Player, Troops};
