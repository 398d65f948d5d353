//! Repository contents connector (GitHub REST API)
//!
//! Listing is flat: each requested path costs one contents API call and only
//! the files directly inside it are returned.

mod list;
mod types;

pub use types::{GithubConfig, GithubFile, DEFAULT_API_BASE_URL};

use crate::connector::{Connector, ListStream};
use crate::download::{resolve_destination, write_stream};
use crate::error::{TransferError, TransferResult};
use reqwest::Client;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct GithubConnector {
    owner: String,
    repository: String,
    api_base_url: String,
    client: Client,
}

impl GithubConnector {
    pub fn new(config: &GithubConfig) -> TransferResult<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| TransferError::construction("github", e))?;
        Ok(Self::with_client(config, client))
    }

    /// Use a caller-built client, e.g. one that already carries an
    /// `Authorization` header.
    pub fn with_client(config: &GithubConfig, client: Client) -> Self {
        Self {
            owner: config.owner.clone(),
            repository: config.repository.clone(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            client,
        }
    }
}

impl Connector for GithubConnector {
    type File = GithubFile;

    fn backend(&self) -> &'static str {
        "github"
    }

    fn list_files<'a>(&'a self, paths: &'a [String]) -> ListStream<'a, GithubFile> {
        self.list_paths(paths)
    }

    async fn download_file(
        &self,
        file: &GithubFile,
        local_folder: &Path,
    ) -> TransferResult<PathBuf> {
        let destination = resolve_destination(local_folder, &file.path)?;

        let response = self
            .client
            .get(&file.download_url)
            .send()
            .await
            .map_err(|e| TransferError::download(&file.path, e))?
            .error_for_status()
            .map_err(|e| TransferError::download(&file.path, e))?;

        write_stream(&destination, response.bytes_stream())
            .await
            .map_err(|e| TransferError::download(&file.path, e))?;

        Ok(destination)
    }
}
