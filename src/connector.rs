//! The transfer endpoint contract implemented by every backend

use crate::error::TransferResult;
use futures_util::stream::BoxStream;
use futures_util::TryStreamExt;
use log::info;
use std::path::{Path, PathBuf};

/// Lazy, one-shot listing of remote files.
///
/// Items arrive in path order. A listing request for the next path is only
/// issued once the previous path's files have been pulled from the stream.
pub type ListStream<'a, T> = BoxStream<'a, TransferResult<T>>;

/// A backend that can list remote files and download them one at a time.
///
/// `File` is the backend's descriptor type. Descriptors produced by
/// [`Connector::list_files`] are only meant for [`Connector::download_file`]
/// on the same connector.
#[allow(async_fn_in_trait)]
pub trait Connector {
    type File: Send;

    /// Short backend name used in log lines
    fn backend(&self) -> &'static str;

    /// List the files found under each of `paths`, in the order given.
    fn list_files<'a>(&'a self, paths: &'a [String]) -> ListStream<'a, Self::File>;

    /// Fetch `file` and write it under `local_folder`, recreating its remote
    /// relative path. Returns the path that was written.
    async fn download_file(&self, file: &Self::File, local_folder: &Path)
        -> TransferResult<PathBuf>;

    /// Download every file listed under `paths` into `local_folder`.
    ///
    /// Files are processed one by one. The first error stops the batch and is
    /// returned as-is; files written before it are left in place.
    async fn download_all_files(
        &self,
        paths: &[String],
        local_folder: &Path,
    ) -> TransferResult<usize> {
        info!(
            "Downloading {} path(s) from {} into {}",
            paths.len(),
            self.backend(),
            local_folder.display()
        );

        let mut files = self.list_files(paths);
        let mut downloaded = 0;
        while let Some(file) = files.try_next().await? {
            self.download_file(&file, local_folder).await?;
            downloaded += 1;
        }

        info!("Downloaded {} file(s) from {}", downloaded, self.backend());
        Ok(downloaded)
    }
}
