use super::types::ObjectFile;
use super::S3Connector;
use crate::download::{resolve_destination, write_stream};
use crate::error::{TransferError, TransferResult};
use futures_util::stream;
use std::path::{Path, PathBuf};

impl S3Connector {
    /// Fetch `file.key` and stream it to `local_folder/<key>`.
    pub(crate) async fn download_object(
        &self,
        file: &ObjectFile,
        local_folder: &Path,
    ) -> TransferResult<PathBuf> {
        let destination = resolve_destination(local_folder, &file.key)?;

        let response = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&file.key)
            .send()
            .await
            .map_err(|e| TransferError::download(&file.key, e))?;

        let body = stream::unfold(response.body, |mut body| async move {
            body.next().await.map(|chunk| (chunk, body))
        });

        write_stream(&destination, body)
            .await
            .map_err(|e| TransferError::download(&file.key, e))?;

        Ok(destination)
    }
}
