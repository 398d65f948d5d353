//! Error taxonomy shared by every connector

use thiserror::Error;

pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type TransferResult<T> = Result<T, TransferError>;

#[derive(Debug, Error)]
pub enum TransferError {
    /// Client or credentials could not be set up
    #[error("failed to connect to {backend}: {source}")]
    Construction {
        backend: &'static str,
        #[source]
        source: BoxError,
    },

    #[error("failed to list `{path}`: {source}")]
    Listing {
        path: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to download `{target}`: {source}")]
    Download {
        target: String,
        #[source]
        source: BoxError,
    },

    #[error("failed to upload `{key}`: {source}")]
    Upload {
        key: String,
        #[source]
        source: BoxError,
    },

    #[error("cannot pair {local_paths} local paths with {object_keys} object keys")]
    LengthMismatch {
        local_paths: usize,
        object_keys: usize,
    },

    /// Remote relative path would escape the destination folder
    #[error("refusing to write outside the destination folder: `{path}`")]
    InvalidPath { path: String },
}

impl TransferError {
    pub(crate) fn construction(backend: &'static str, source: impl Into<BoxError>) -> Self {
        TransferError::Construction {
            backend,
            source: source.into(),
        }
    }

    pub(crate) fn listing(path: &str, source: impl Into<BoxError>) -> Self {
        TransferError::Listing {
            path: path.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn download(target: &str, source: impl Into<BoxError>) -> Self {
        TransferError::Download {
            target: target.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn upload(key: &str, source: impl Into<BoxError>) -> Self {
        TransferError::Upload {
            key: key.to_string(),
            source: source.into(),
        }
    }
}
