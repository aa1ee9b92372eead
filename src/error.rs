//! Generation pass errors.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("cannot read schema source {}: {}", .path.display(), .source)]
    InputUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write generated header {}: {}", .path.display(), .source)]
    OutputUnwritable {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type GenResult<T> = std::result::Result<T, GenError>;
