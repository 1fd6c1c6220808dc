use crate::{Error, Result};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the platform default data directory.
pub const DATA_DIR_ENV: &str = "CHROME_USER_DATA_DIR";

/// Locates the Chrome user-data directory
pub struct ChromeDataDir {
    custom_path: Option<PathBuf>,
}

impl ChromeDataDir {
    /// Create a new locator with an optional explicit path
    pub fn new(custom_path: Option<PathBuf>) -> Self {
        Self { custom_path }
    }

    /// Resolve the data directory: explicit path first, then the platform default.
    ///
    /// Unlike a per-item lookup, a missing data directory is fatal.
    pub fn find(&self) -> Result<PathBuf> {
        let path = match self.custom_path {
            Some(ref path) => path.clone(),
            None => Self::default_path().ok_or(Error::NoDefaultDataDir)?,
        };

        Self::validate(&path)
    }

    /// Platform default location of Chrome's user data
    pub fn default_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        return dirs::home_dir().map(|home| home.join("Library/Application Support/Google/Chrome"));

        #[cfg(target_os = "windows")]
        return dirs::data_local_dir().map(|dir| dir.join("Google").join("Chrome").join("User Data"));

        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        return dirs::config_dir().map(|dir| dir.join("google-chrome"));
    }

    fn validate(path: &Path) -> Result<PathBuf> {
        if !path.exists() {
            return Err(Error::DataDirNotFound(path.to_path_buf()));
        }
        if !path.is_dir() {
            return Err(Error::NotADirectory(path.to_path_buf()));
        }

        let path = path.canonicalize()?;
        tracing::debug!("Using Chrome data directory: {}", path.display());
        Ok(path)
    }
}
