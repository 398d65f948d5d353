use crate::providers::s3_client::S3ClientConfig;
use serde::{Deserialize, Serialize};

/// Explicit settings for an S3 or S3-compatible endpoint.
///
/// Use this when credentials come from the embedding application instead of
/// the ambient AWS credential chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct S3Config {
    pub bucket: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    #[serde(default)]
    pub session_token: Option<String>,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(default)]
    pub endpoint_url: Option<String>,
    #[serde(default)]
    pub force_path_style: bool,
}

fn default_region() -> String {
    "us-east-1".to_string()
}

impl S3Config {
    pub(crate) fn client_config(&self) -> S3ClientConfig<'_> {
        S3ClientConfig {
            access_key_id: &self.access_key_id,
            secret_access_key: &self.secret_access_key,
            session_token: self.session_token.as_deref(),
            region: &self.region,
            endpoint_url: self
                .endpoint_url
                .as_deref()
                .map(str::trim)
                .filter(|url| !url.is_empty()),
            force_path_style: self.force_path_style,
        }
    }
}

/// An object in the bucket. The key doubles as the local relative path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectFile {
    pub key: String,
}

/// One `ListObjectsV2` response for a single prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectPage {
    pub files: Vec<ObjectFile>,
    /// The service has more keys after this page
    pub is_truncated: bool,
    /// Last key returned, directory markers included. Pass it as
    /// `start_after` to continue a truncated listing.
    pub last_key: Option<String>,
}
