//! Connectors for bulk file transfer between remote sources and the local
//! filesystem.
//!
//! Every backend implements [`Connector`]: list the files under a set of
//! remote paths, download one of them, or download all of them with the shared
//! [`Connector::download_all_files`] orchestration.
//!
//! - [`GithubConnector`]: repository contents via the GitHub REST API
//! - [`S3Connector`]: bucket objects via the AWS SDK, plus uploads

mod connector;
mod download;
mod error;
pub mod providers;

pub use connector::{Connector, ListStream};
pub use error::{BoxError, TransferError, TransferResult};
pub use providers::github::{GithubConfig, GithubConnector, GithubFile};
pub use providers::s3::{ObjectFile, ObjectPage, S3Config, S3Connector};
