use super::S3Connector;
use crate::error::{TransferError, TransferResult};
use aws_sdk_s3::primitives::ByteStream;
use log::{debug, info};
use std::path::Path;

impl S3Connector {
    /// Upload a local file under `object_key` with a single PUT.
    ///
    /// The whole file is read into memory first. Sub-directories in the bucket
    /// are expressed through `/` in the key.
    pub async fn upload_file(&self, local_path: &Path, object_key: &str) -> TransferResult<()> {
        let data = tokio::fs::read(local_path)
            .await
            .map_err(|e| TransferError::upload(object_key, e))?;

        debug!(
            "Uploading {} ({} bytes) to s3://{}/{}",
            local_path.display(),
            data.len(),
            self.bucket,
            object_key
        );

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(object_key)
            .body(ByteStream::from(data))
            .send()
            .await
            .map_err(|e| TransferError::upload(object_key, e))?;

        Ok(())
    }

    /// Upload `local_paths[i]` under `object_keys[i]`, one after the other.
    ///
    /// Both slices must have the same length; a mismatch is rejected before
    /// anything is uploaded. Returns the number of uploaded files.
    pub async fn upload_files<P, K>(
        &self,
        local_paths: &[P],
        object_keys: &[K],
    ) -> TransferResult<usize>
    where
        P: AsRef<Path>,
        K: AsRef<str>,
    {
        if local_paths.len() != object_keys.len() {
            return Err(TransferError::LengthMismatch {
                local_paths: local_paths.len(),
                object_keys: object_keys.len(),
            });
        }

        for (local_path, object_key) in local_paths.iter().zip(object_keys) {
            self.upload_file(local_path.as_ref(), object_key.as_ref())
                .await?;
        }

        info!(
            "Uploaded {} file(s) to s3://{}",
            local_paths.len(),
            self.bucket
        );
        Ok(local_paths.len())
    }
}
