//! HTTP retrieval of the registration export.

mod basic;
mod client;

pub use basic::BasicClient;
pub use client::HttpClient;

use anyhow::{Context, Result};
use reqwest::StatusCode;
use std::path::Path;
use tracing::{debug, info};

/// Downloads `url` with a single GET.
///
/// # Errors
///
/// Fails on transport errors and on any status other than `200 OK`.
pub async fn fetch_bytes<C: HttpClient>(client: &C, url: &str) -> Result<Vec<u8>> {
    let req = reqwest::Request::new(reqwest::Method::GET, url.parse()?);

    let resp = client.execute(req).await?;
    let status = resp.status();
    if status != StatusCode::OK {
        anyhow::bail!(
            "Error fetching data from webservice: status code = {}",
            status.as_u16()
        );
    }

    let bytes = resp.bytes().await?.to_vec();
    debug!(bytes = bytes.len(), "Registration payload received");
    Ok(bytes)
}

/// Downloads `url` and caches the raw payload at `path` before returning it.
#[tracing::instrument(skip(client, path), fields(path = %path.display()))]
pub async fn fetch_to_file<C: HttpClient>(client: &C, url: &str, path: &Path) -> Result<Vec<u8>> {
    let bytes = fetch_bytes(client, url).await?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;

    info!(bytes = bytes.len(), "Registration data cached");
    Ok(bytes)
}
