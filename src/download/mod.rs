//! Local side of a download
//!
//! Provides the pieces every connector uses to land remote bytes on disk:
//! - Mapping a remote slash-separated path onto the destination folder
//! - Creating missing parent directories
//! - Streaming the response body to the file with buffered writes

mod worker;

pub(crate) use worker::{resolve_destination, write_stream};
