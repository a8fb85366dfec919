//! Settings file persistence.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::Settings;
use crate::error::{Error, Result};

const PATH_ENV: &str = "PASSFORM_CONFIG";

/// `$PASSFORM_CONFIG`, else `<config dir>/passform/settings.json`.
pub fn path() -> Result<PathBuf> {
    if let Some(path) = env::var_os(PATH_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join("passform").join("settings.json"))
        .ok_or(Error::NoConfigDir)
}

/// Read settings from `path`. A missing file gives the defaults.
pub fn load(path: &Path) -> Result<Settings> {
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "no settings file, using defaults");
            return Ok(Settings::default());
        }
        Err(e) => return Err(e.into()),
    };

    serde_json::from_str(&data).map_err(|source| Error::Settings {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save(settings: &Settings, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let data = serde_json::to_string_pretty(settings).map_err(|source| Error::Settings {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, data + "\n")?;
    info!(path = %path.display(), "settings saved");
    Ok(())
}
