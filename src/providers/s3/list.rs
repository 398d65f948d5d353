use super::types::{ObjectFile, ObjectPage};
use super::S3Connector;
use crate::connector::ListStream;
use crate::error::{TransferError, TransferResult};
use futures_util::{stream, StreamExt, TryStreamExt};
use log::debug;

impl S3Connector {
    /// Issue a single `ListObjectsV2` request for `prefix`.
    ///
    /// Directory markers (keys ending in `/`) are left out of `files` but
    /// still count towards `last_key`.
    pub async fn list_page(
        &self,
        prefix: &str,
        start_after: Option<&str>,
    ) -> TransferResult<ObjectPage> {
        debug!(
            "Listing s3://{}/{} (start after: {:?})",
            self.bucket, prefix, start_after
        );

        let mut request = self
            .client
            .list_objects_v2()
            .bucket(&self.bucket)
            .prefix(prefix);

        if let Some(key) = start_after {
            request = request.start_after(key);
        }

        let response = request
            .send()
            .await
            .map_err(|e| TransferError::listing(prefix, e))?;

        let last_key = response
            .contents()
            .iter()
            .rev()
            .find_map(|obj| obj.key())
            .map(|key| key.to_string());

        let files = response
            .contents()
            .iter()
            .filter_map(|obj| {
                let key = obj.key()?;
                if key.ends_with('/') {
                    return None;
                }
                Some(ObjectFile {
                    key: key.to_string(),
                })
            })
            .collect();

        Ok(ObjectPage {
            files,
            is_truncated: response.is_truncated().unwrap_or(false),
            last_key,
        })
    }

    /// List the objects under each prefix in `paths`, one request per prefix.
    ///
    /// When `start_after` is set it is sent with every request. Truncated
    /// listings are not followed; use [`S3Connector::list_page`] to detect
    /// truncation and resume.
    pub fn list_files_after<'a>(
        &'a self,
        paths: &'a [String],
        start_after: Option<&'a str>,
    ) -> ListStream<'a, ObjectFile> {
        stream::iter(paths)
            .then(move |prefix| self.list_page(prefix, start_after))
            .map_ok(|page| {
                stream::iter(page.files.into_iter().map(Ok::<_, TransferError>))
            })
            .try_flatten()
            .boxed()
    }
}
