//! Object storage connector (S3 and S3-compatible services)
//!
//! This module is organized into submodules:
//! - `types`: Config and descriptor types
//! - `list`: Prefix listing with `start_after`
//! - `objects`: Object download
//! - `upload`: Single and batch uploads

mod list;
mod objects;
mod types;
mod upload;

pub use types::{ObjectFile, ObjectPage, S3Config};

use crate::connector::{Connector, ListStream};
use crate::error::TransferResult;
use crate::providers::s3_client::{create_s3_client, load_ambient_client};
use aws_sdk_s3::Client;
use std::path::{Path, PathBuf};

/// Connector bound to a single bucket.
#[derive(Debug, Clone)]
pub struct S3Connector {
    bucket: String,
    client: Client,
}

impl S3Connector {
    /// Connect using the ambient AWS configuration and credential chain.
    ///
    /// Fails if no usable credentials can be resolved.
    pub async fn connect(bucket: impl Into<String>) -> TransferResult<Self> {
        let client = load_ambient_client().await?;
        Ok(Self::with_client(bucket, client))
    }

    /// Connect with explicit credentials and endpoint settings.
    pub fn from_config(config: &S3Config) -> TransferResult<Self> {
        let client = create_s3_client(&config.client_config())?;
        Ok(Self::with_client(config.bucket.clone(), client))
    }

    pub fn with_client(bucket: impl Into<String>, client: Client) -> Self {
        Self {
            bucket: bucket.into(),
            client,
        }
    }

    /// Bucket every listing, download and upload is scoped to
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

impl Connector for S3Connector {
    type File = ObjectFile;

    fn backend(&self) -> &'static str {
        "s3"
    }

    fn list_files<'a>(&'a self, paths: &'a [String]) -> ListStream<'a, ObjectFile> {
        self.list_files_after(paths, None)
    }

    async fn download_file(
        &self,
        file: &ObjectFile,
        local_folder: &Path,
    ) -> TransferResult<PathBuf> {
        self.download_object(file, local_folder).await
    }
}
