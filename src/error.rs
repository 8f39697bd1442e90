//! Error types for the simulation.
//!
//! Configuration and template problems are detected before the first frame is
//! drawn and abort the run. Out-of-bounds cell access is not represented here:
//! it is a programming error and panics inside [`crate::game::grid::Grid`].

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

/// Errors raised while turning the query-string argument into a config.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An option value could not be parsed.
    #[error("option '{key}' expects {expected}, got '{value}'")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },

    /// A key or value was not valid UTF-8 once percent-decoded.
    #[error("option '{key}' is not valid UTF-8 after decoding")]
    Encoding {
        key: String,
        #[source]
        source: FromUtf8Error,
    },

    /// A display glyph was set to the empty string.
    #[error("option '{key}' must not be empty")]
    EmptyGlyph { key: &'static str },
}

/// Top-level error returned by a simulation run.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("template '{name}' not found at {}", .path.display())]
    TemplateNotFound {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write frame: {0}")]
    Render(#[from] io::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] serde_json::Error),
}
