//! Errors surfaced by a scan.

use std::io;
use std::path::PathBuf;
use std::string::FromUtf8Error;

#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The log file is missing, unreadable, or not a regular file.
    #[error("cannot read log file {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The log file is not valid UTF-8.
    #[error("log file {} is not valid UTF-8: {source}", path.display())]
    Decoding {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },
}

impl ScanError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::FileAccess { path, .. } | Self::Decoding { path, .. } => path,
        }
    }
}
