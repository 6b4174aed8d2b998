//! Error types for configuration loading.
//!
//! Uses `thiserror` for library errors. Every decode error carries enough
//! context to point the user at the offending YAML node: the key or pattern
//! text plus its 1-based line and column. The loader wraps decode errors
//! with the file path so the final message names both.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Error raised while loading or decoding a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read
    #[error("could not read config file \"{}\": {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Default configuration file could not be written
    #[error("could not write default configuration file at \"{}\": {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A decode error wrapped with the file it came from
    #[error("could not parse config file \"{}\": {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: Box<ConfigError>,
    },

    /// Malformed YAML document
    #[error("yaml: {message}")]
    Syntax { message: String },

    /// A node had the wrong kind, e.g. a scalar where a sequence is required
    #[error("yaml: \"{name}\" must be a {expected} node at line:{line},col:{col}")]
    ExpectedKind {
        name: String,
        expected: &'static str,
        line: usize,
        col: usize,
    },

    /// An unrecognized key in a strictly decoded mapping
    #[error("invalid key \"{key}\" at line:{line},col:{col}")]
    UnexpectedKey {
        key: String,
        line: usize,
        col: usize,
    },

    /// A "paths" key is not a valid glob pattern
    #[error("error while processing glob pattern \"{pattern}\" in \"paths\" config: {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// An "ignore" entry is not a valid regular expression
    #[error("invalid regular expression \"{pattern}\" in \"ignore\" at line:{line},col:{col}: {source}")]
    InvalidRegex {
        pattern: String,
        line: usize,
        col: usize,
        #[source]
        source: regex::Error,
    },

    /// The same glob pattern appeared twice in one "paths" mapping
    #[error("key duplicates within \"paths\" config: \"{pattern}\"")]
    DuplicateKey { pattern: String },
}
