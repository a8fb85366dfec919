//! Crate error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::form::LengthError;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid settings file {}: {source}", .path.display())]
    Settings {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no config directory found, set PASSFORM_CONFIG")]
    NoConfigDir,

    #[error("clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Length(#[from] LengthError),
}

impl Error {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Length(_) => 2,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
