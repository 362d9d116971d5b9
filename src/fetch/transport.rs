//! HTTP transport for repository tarballs
//!
//! One blocking GET per fetch: redirects are followed, the request is bounded by
//! the configured timeout and nothing is retried.

use std::fs::File;
use std::io::{BufWriter, ErrorKind, Read, Write};
use std::path::Path;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use reqwest::redirect::Policy;

use crate::config::FetchConfig;
use crate::error::{AgrError, Result, fetch_failed, file_write_failed, network_error};

const MAX_REDIRECTS: usize = 10;
const COPY_BUFFER_SIZE: usize = 64 * 1024;

/// Client for GitHub's branch tarball endpoint
#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: Client,
    config: FetchConfig,
}

impl GitHubClient {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let http = Client::builder()
            .redirect(Policy::limited(MAX_REDIRECTS))
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| network_error(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Download the default-branch tarball of `owner/repo` into `dest`.
    ///
    /// Returns the number of bytes written. A 404 maps to [`AgrError::RepoNotFound`].
    pub fn download_tarball(&self, owner: &str, repo: &str, dest: &Path) -> Result<u64> {
        let url = self.config.tarball_url(owner, repo);
        tracing::debug!(%url, "downloading repository tarball");

        let mut response = self.http.get(&url).send()?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AgrError::RepoNotFound {
                repo: format!("{owner}/{repo}"),
            });
        }
        if !status.is_success() {
            return Err(fetch_failed(format!("HTTP {status} from {url}")));
        }

        let file = File::create(dest).map_err(|e| file_write_failed(dest, e))?;
        let mut writer = BufWriter::new(file);
        let written = stream_body(&mut response, &mut writer, dest)?;
        writer.flush().map_err(|e| file_write_failed(dest, e))?;

        tracing::debug!(bytes = written, path = %dest.display(), "tarball saved");
        Ok(written)
    }
}

/// Copy `body` into `out`, telling read failures (network) apart from write failures (disk).
fn stream_body(body: &mut impl Read, out: &mut impl Write, dest: &Path) -> Result<u64> {
    let mut buf = vec![0; COPY_BUFFER_SIZE];
    let mut written = 0u64;

    loop {
        let read = match body.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(network_error(e.to_string())),
        };
        out.write_all(&buf[..read])
            .map_err(|e| file_write_failed(dest, e))?;
        written += read as u64;
    }

    Ok(written)
}
