use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum LineError {
    #[error("{field} value '{token}' does not fit in 64 bits")]
    NumericOverflow { field: &'static str, token: String },
}

#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("could not open log file {path}: {source}")]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read log file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}:{line}: {source}")]
    InvalidLine {
        path: PathBuf,
        line: u64,
        #[source]
        source: LineError,
    },
}

impl AnalyzeError {
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_line(path: impl Into<PathBuf>, line: u64, source: LineError) -> Self {
        Self::InvalidLine {
            path: path.into(),
            line,
            source,
        }
    }
}
