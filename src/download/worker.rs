//! Download worker - writes a remote byte stream under the destination folder

use crate::error::{BoxError, TransferError, TransferResult};
use futures_util::{Stream, StreamExt};
use log::debug;
use std::path::{Component, Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;

/// Write buffer size for downloads (2 MB) - reduces I/O operations
const WRITE_BUFFER_SIZE: usize = 2 * 1024 * 1024;

/// Map a remote relative path (`src/a.py`, `logs/2024.txt`) onto `local_folder`.
///
/// Empty and `.` segments are dropped. Anything that could climb out of the
/// folder (`..`, a root, a drive prefix) is rejected.
pub(crate) fn resolve_destination(local_folder: &Path, relative: &str) -> TransferResult<PathBuf> {
    let mut destination = local_folder.to_path_buf();
    let mut pushed = false;

    for segment in relative.split('/') {
        if segment.is_empty() {
            continue;
        }
        let mut components = Path::new(segment).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(part)), None) => {
                destination.push(part);
                pushed = true;
            }
            (Some(Component::CurDir), None) => {}
            _ => {
                return Err(TransferError::InvalidPath {
                    path: relative.to_string(),
                })
            }
        }
    }

    if !pushed {
        return Err(TransferError::InvalidPath {
            path: relative.to_string(),
        });
    }

    Ok(destination)
}

/// Stream `body` into `destination`, creating parent directories first.
///
/// Returns the number of bytes written. The file is truncated if it exists.
pub(crate) async fn write_stream<S, B, E>(destination: &Path, body: S) -> Result<u64, BoxError>
where
    S: Stream<Item = Result<B, E>>,
    B: AsRef<[u8]>,
    E: Into<BoxError>,
{
    if let Some(parent) = destination.parent() {
        tokio::fs::create_dir_all(parent).await?;
    }

    let mut file = File::create(destination).await?;
    let mut body = std::pin::pin!(body);
    let mut write_buffer = Vec::with_capacity(WRITE_BUFFER_SIZE);
    let mut written: u64 = 0;

    while let Some(chunk) = body.next().await {
        let chunk = chunk.map_err(|e| -> BoxError { e.into() })?;
        let chunk = chunk.as_ref();
        write_buffer.extend_from_slice(chunk);
        written += chunk.len() as u64;

        if write_buffer.len() >= WRITE_BUFFER_SIZE {
            file.write_all(&write_buffer).await?;
            write_buffer.clear();
        }
    }

    if !write_buffer.is_empty() {
        file.write_all(&write_buffer).await?;
    }
    file.flush().await?;

    debug!("Wrote {} bytes to {}", written, destination.display());
    Ok(written)
}
