//! Error types for Splashpack
//!
//! Library code returns `thiserror` enums; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Splashpack operations
pub type SplashResult<T> = Result<T, SplashError>;

/// Main error type for Splashpack operations
#[derive(Error, Debug)]
pub enum SplashError {
    /// A file's bytes could not be read
    #[error(transparent)]
    Read(#[from] ReadError),

    /// The entry document produced no usable tree
    #[error("cannot parse '{file}' as HTML: {message}")]
    Parse { file: String, message: String },

    /// Overlay payload missing, malformed, or the service failed
    #[error(transparent)]
    Generation(#[from] GenerationError),

    /// `--entry` named a file that was not uploaded
    #[error("entry file '{name}' is not among the loaded files")]
    EntryNotFound { name: String },

    /// No entry given and no `index.html` (or single HTML file) to fall back on
    #[error("no entry HTML file found - pass --entry <NAME>")]
    NoEntryCandidate,

    /// Game directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raised by the content readers when a byte source cannot be read
#[derive(Error, Debug)]
#[error("cannot read '{name}': {source}")]
pub struct ReadError {
    pub name: String,
    #[source]
    pub source: std::io::Error,
}

impl ReadError {
    pub fn new(name: impl Into<String>, source: std::io::Error) -> Self {
        Self {
            name: name.into(),
            source,
        }
    }
}

/// Failures at the generation collaborator boundary
#[derive(Error, Debug)]
pub enum GenerationError {
    /// No API key available for the remote generator
    #[error("no API key: set the {env_var} environment variable or pass --overlay <FILE>")]
    MissingApiKey { env_var: String },

    /// Transport-level failure
    #[error("generation request failed: {0}")]
    Transport(String),

    /// Service answered with a non-success status
    #[error("generation service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Service answered but carried no content
    #[error("generation service returned an empty reply")]
    EmptyReply,

    /// Reply was not valid JSON
    #[error("overlay payload is not valid JSON: {0}")]
    InvalidJson(String),

    /// Required field absent or not a string
    #[error("overlay payload is missing string field '{field}'")]
    MissingField { field: &'static str },

    /// Overlay JSON file could not be read
    #[error("cannot read overlay file {path}: {source}")]
    OverlayFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
