//! User settings for password generation.

mod file;

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pass::{DEFAULT_SYMBOLS, Sampling};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Alphabet used when symbols are enabled.
    pub symbols: String,
    pub sampling: Sampling,
}

impl Settings {
    pub fn load_from_file() -> Result<Self> {
        file::load(&file::path()?)
    }

    pub fn save_to_file(&self) -> Result<PathBuf> {
        let path = file::path()?;
        file::save(self, &path)?;
        Ok(path)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_SYMBOLS.to_string(),
            sampling: Sampling::default(),
        }
    }
}
