use std::path::PathBuf;

/// Errors raised when building tiles or boards from raw values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TileError {
    #[error("{0} is not a valid tile (expected a power of two >= 2)")]
    NotPowerOfTwo(u32),
}

/// Errors that can occur while placing a new tile.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpawnError {
    #[error("board is full, no empty cell to spawn into")]
    BoardFull,
}

/// Errors that end a play session abnormally.
#[derive(Debug, thiserror::Error)]
pub enum PlayError {
    #[error("failed to read input: {0}")]
    Input(#[source] std::io::Error),

    #[error("failed to render board: {0}")]
    Render(#[source] std::io::Error),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
