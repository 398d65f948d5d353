use crate::error::{TransferError, TransferResult};
use aws_config::meta::region::{ProvideRegion, RegionProviderChain};
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use aws_credential_types::Credentials;
use aws_sdk_s3::config::retry::RetryConfig;
use aws_sdk_s3::config::Builder as S3ConfigBuilder;
use aws_sdk_s3::config::{RequestChecksumCalculation, ResponseChecksumValidation};
use aws_sdk_s3::Client;

const BACKEND: &str = "s3";

pub struct S3ClientConfig<'a> {
    pub access_key_id: &'a str,
    pub secret_access_key: &'a str,
    pub session_token: Option<&'a str>,
    pub region: &'a str,
    pub endpoint_url: Option<&'a str>,
    pub force_path_style: bool,
}

/// Settings shared by every client this crate builds: no SDK retries and no
/// checksums beyond what the service requires.
fn with_transfer_defaults(builder: S3ConfigBuilder) -> S3ConfigBuilder {
    builder
        .retry_config(RetryConfig::disabled())
        .request_checksum_calculation(RequestChecksumCalculation::WhenRequired)
        .response_checksum_validation(ResponseChecksumValidation::WhenRequired)
}

pub fn create_s3_client(config: &S3ClientConfig<'_>) -> TransferResult<Client> {
    if config.access_key_id.is_empty() || config.secret_access_key.is_empty() {
        return Err(TransferError::construction(
            BACKEND,
            "access key id and secret access key are required",
        ));
    }

    let credentials = Credentials::new(
        config.access_key_id,
        config.secret_access_key,
        config.session_token.map(str::to_string),
        None,
        "file-transfer",
    );

    let mut builder = S3ConfigBuilder::new()
        .credentials_provider(credentials)
        .region(Region::new(config.region.to_string()));

    if let Some(endpoint_url) = config.endpoint_url {
        builder = builder.endpoint_url(endpoint_url);
    }

    if config.force_path_style {
        builder = builder.force_path_style(true);
    }

    let s3_config = with_transfer_defaults(builder).build();
    Ok(Client::from_conf(s3_config))
}

/// Region used when the ambient chain does not name one.
const FALLBACK_REGION: &str = "us-east-1";

/// Try `primary` first, then fall back to the global `us-east-1` endpoint.
fn with_fallback_region(primary: impl ProvideRegion + 'static) -> RegionProviderChain {
    RegionProviderChain::first_try(primary).or_else(Region::new(FALLBACK_REGION))
}

/// Build a client from the ambient AWS configuration (environment, profile,
/// web identity, instance metadata, ...).
///
/// Credentials are resolved once here so a missing credential chain fails at
/// construction rather than on the first request.
pub async fn load_ambient_client() -> TransferResult<Client> {
    let sdk_config = aws_config::defaults(BehaviorVersion::latest())
        .region(with_fallback_region(RegionProviderChain::default_provider()))
        .load()
        .await;
    client_from_sdk_config(&sdk_config).await
}

/// Check that `sdk_config` can sign a request (credentials and region) and
/// build a client from it.
async fn client_from_sdk_config(sdk_config: &SdkConfig) -> TransferResult<Client> {
    if sdk_config.region().is_none() {
        return Err(TransferError::construction(BACKEND, "no region configured"));
    }

    let provider = sdk_config.credentials_provider().ok_or_else(|| {
        TransferError::construction(BACKEND, "no credentials provider configured")
    })?;

    provider
        .provide_credentials()
        .await
        .map_err(|e| TransferError::construction(BACKEND, e))?;

    let builder = S3ConfigBuilder::from(sdk_config);
    Ok(Client::from_conf(with_transfer_defaults(builder).build()))
}
