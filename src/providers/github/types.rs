use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    /// Repository owner (user or organization)
    pub owner: String,
    pub repository: String,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// GitHub rejects API requests without a user agent
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
}

impl GithubConfig {
    pub fn new(owner: impl Into<String>, repository: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repository: repository.into(),
            api_base_url: default_api_base_url(),
            user_agent: default_user_agent(),
        }
    }
}

/// A file entry from the contents API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GithubFile {
    pub download_url: String,
    /// Path relative to the repository root, slash-separated
    pub path: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum EntryKind {
    File,
    Dir,
    Symlink,
    Submodule,
    #[serde(other)]
    Other,
}

/// Raw item of a directory listing response
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ContentEntry {
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub name: String,
    pub path: String,
    #[serde(default)]
    pub download_url: Option<String>,
}
