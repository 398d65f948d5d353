use super::types::{ContentEntry, EntryKind, GithubFile};
use super::GithubConnector;
use crate::connector::ListStream;
use crate::error::{TransferError, TransferResult};
use futures_util::{stream, StreamExt, TryStreamExt};
use log::{debug, warn};
use reqwest::header::ACCEPT;

impl GithubConnector {
    /// `{api}/repos/{owner}/{repo}/contents/{path}` with each path segment
    /// percent-encoded.
    pub(crate) fn contents_url(&self, path: &str) -> String {
        let encoded: Vec<String> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect();

        let mut url = format!(
            "{}/repos/{}/{}/contents",
            self.api_base_url,
            urlencoding::encode(&self.owner),
            urlencoding::encode(&self.repository)
        );
        if !encoded.is_empty() {
            url.push('/');
            url.push_str(&encoded.join("/"));
        }
        url
    }

    /// List the files directly inside `path`. Sub-directories are not
    /// descended into.
    pub async fn list_directory(&self, path: &str) -> TransferResult<Vec<GithubFile>> {
        let url = self.contents_url(path);
        debug!("Listing {}", url);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| TransferError::listing(path, e))?
            .error_for_status()
            .map_err(|e| TransferError::listing(path, e))?;

        let body = response
            .bytes()
            .await
            .map_err(|e| TransferError::listing(path, e))?;
        let entries: Vec<ContentEntry> =
            serde_json::from_slice(&body).map_err(|e| TransferError::listing(path, e))?;

        Ok(files_from_entries(entries))
    }

    pub(crate) fn list_paths<'a>(&'a self, paths: &'a [String]) -> ListStream<'a, GithubFile> {
        stream::iter(paths)
            .then(move |path| self.list_directory(path))
            .map_ok(|files| stream::iter(files.into_iter().map(Ok::<_, TransferError>)))
            .try_flatten()
            .boxed()
    }
}

/// Keep `file` entries in response order, dropping everything else.
pub(crate) fn files_from_entries(entries: Vec<ContentEntry>) -> Vec<GithubFile> {
    entries
        .into_iter()
        .filter(|entry| entry.kind == EntryKind::File)
        .filter_map(|entry| match entry.download_url {
            Some(download_url) => Some(GithubFile {
                download_url,
                path: entry.path,
                name: entry.name,
            }),
            None => {
                warn!("Skipping {}: listing has no download URL", entry.path);
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::files_from_entries;
    use crate::providers::github::{GithubConfig, GithubConnector};

    fn connector(base: &str) -> GithubConnector {
        let mut config = GithubConfig::new("acme", "widgets");
        config.api_base_url = base.to_string();
        GithubConnector::new(&config).unwrap()
    }

    #[test]
    fn contents_url_encodes_segments() {
        let github = connector("https://api.github.com");
        assert_eq!(
            github.contents_url("docs/release notes"),
            "https://api.github.com/repos/acme/widgets/contents/docs/release%20notes"
        );
    }

    #[test]
    fn contents_url_for_repository_root() {
        let github = connector("https://ghe.example.com/api/v3/");
        assert_eq!(
            github.contents_url("/"),
            "https://ghe.example.com/api/v3/repos/acme/widgets/contents"
        );
    }

    #[test]
    fn files_from_entries_keeps_only_files_in_order() {
        let entries = serde_json::from_str(
            r#"[
                {"type":"file","name":"b.py","path":"src/b.py","download_url":"https://x/b.py"},
                {"type":"dir","name":"sub","path":"src/sub","download_url":null},
                {"type":"file","name":"a.py","path":"src/a.py","download_url":"https://x/a.py"},
                {"type":"file","name":"c.py","path":"src/c.py","download_url":null}
            ]"#,
        )
        .unwrap();

        let names: Vec<String> = files_from_entries(entries)
            .into_iter()
            .map(|file| file.name)
            .collect();

        assert_eq!(names, vec!["b.py", "a.py"]);
    }
}
