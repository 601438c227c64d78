use thiserror::Error;

/// Why a pair of territory indices cannot be used for an attack
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    #[error("index {index} is out of range for {len} territories")]
    OutOfRange { index: usize, len: usize },

    /// A 1-based number typed by the player that names no territory
    #[error("there is no territory {number} (choose 1 to {len})")]
    NoSuchTerritory { number: i64, len: usize },

    #[error("a territory cannot attack itself")]
    SelfAttack(usize),

    #[error("at least two territories are needed to attack (map has {0})")]
    NotEnoughTerritories(usize),
}

#[derive(Error, Debug)]
pub enum ConquestError {
    #[error("Invalid selection: {0}")]
    InvalidSelection(#[from] SelectionError),

    #[error("Invalid territory count: {0}")]
    InvalidTerritoryCount(i64),

    #[error("Could not allocate a map of {0} territories")]
    Allocation(usize),

    #[error("The game is already over")]
    GameOver,

    #[error("Config error: {0}")]
    Config(String),

    #[error("Unknown mission: {0}")]
    UnknownMission(String),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConquestError>;
