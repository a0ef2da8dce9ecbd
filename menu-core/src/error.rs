//! Errors raised while loading a menu definition.
//!
//! Resolution never fails; only loading does, and a failed load is fatal for the bot.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoadError {
    /// The definition source could not be read.
    #[error("Cannot read menu definition from {origin}: {source}")]
    Io {
        origin: String,
        #[source]
        source: std::io::Error,
    },

    /// The source was read but does not decode into a menu tree.
    #[error("Malformed menu definition: {0}")]
    Malformed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LoadError>;
