use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the breeding assistant.
///
/// Only infrastructure failures live here. A matcher that finds no pairs or a
/// solver that finds no chain is an expected outcome and is reported through
/// empty results instead.
#[derive(Debug, Error)]
pub enum BreedingError {
    /// Error related to loading or validating species knowledge
    #[error("Species data error: {0}")]
    Knowledge(#[from] KnowledgeError),
    /// Error related to loading or validating configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    /// Error related to reading or decoding a caller request
    #[error("Request error: {0}")]
    Request(#[from] RequestError),
}

/// Errors related to species knowledge loading
#[derive(Debug, Error)]
pub enum KnowledgeError {
    /// The species data directory does not exist
    #[error("Species data directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),
    /// A species file could not be read
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A species file is not valid RON
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    /// The compiled species blob could not be decoded
    #[error("Failed to decode bundled species data: {0}")]
    Decode(#[from] postcard::Error),
    /// Two entries share a species name
    #[error("Duplicate species entry: {0}")]
    DuplicateSpecies(String),
    /// A move is listed both as natural and as an egg move
    #[error("{species} lists {moves:?} as both natural and egg moves")]
    OverlappingMoveSets { species: String, moves: Vec<String> },
    /// Species data is malformed or incomplete
    #[error("Malformed species data: {0}")]
    MalformedData(String),
}

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] ron::error::SpannedError),
    /// An environment variable or flag holds a value of the wrong shape
    #[error("Invalid value {value:?} for {key}")]
    InvalidValue { key: String, value: String },
    /// The old/new id ranges overlap
    #[error("old_id_max ({old_id_max}) must be below new_id_min ({new_id_min})")]
    InvalidIdThresholds { old_id_max: u64, new_id_min: u64 },
    #[error("{0} must be at least 1")]
    ZeroLimit(&'static str),
}

/// Errors related to caller requests
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Failed to read request {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed request JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Unknown species: {0}")]
    UnknownSpecies(String),
}

/// Type alias for Results using BreedingError
pub type BreedingResult<T> = Result<T, BreedingError>;

/// Type alias for Results using KnowledgeError
pub type KnowledgeResult<T> = Result<T, KnowledgeError>;

/// Type alias for Results using ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Type alias for Results using RequestError
pub type RequestResult<T> = Result<T, RequestError>;
