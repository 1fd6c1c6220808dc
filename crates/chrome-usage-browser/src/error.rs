use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Chrome data directory not found: {}", .0.display())]
    DataDirNotFound(PathBuf),

    #[error("Chrome data path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Could not determine a default Chrome data directory. Use --chrome-data-dir to specify one.")]
    NoDefaultDataDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
