use std::time::Duration;

use log::info;
use once_cell::sync::Lazy;
use reqwest::IntoUrl;

use crate::json::{
    codec::{Codec, Document},
    version::{
        manifest::{VersionEntry, VersionManifest},
        meta::Version,
    },
};

use super::error::HttpError;

/// The original manifest, without `sha1` or `complianceLevel` on its entries.
pub const VERSION_MANIFEST_URL: &str =
    "https://launchermeta.mojang.com/mc/game/version_manifest.json";

/// The v2 manifest, whose entries carry `sha1` and `complianceLevel`.
pub const VERSION_MANIFEST_V2_URL: &str =
    "https://piston-meta.mojang.com/mc/game/version_manifest_v2.json";

/// A global instance of the reqwest Client.
static CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Optional fetch parameters.
#[derive(Debug, Clone, Copy)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub codec: Codec,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            codec: Codec::default(),
        }
    }
}

/// Downloads the raw body of `url` once. Nothing is cached or retried.
pub async fn fetch_bytes(url: impl IntoUrl, timeout: Duration) -> Result<Vec<u8>, HttpError> {
    let url = url.into_url()?;
    info!("Fetching {}", url);

    let request = async {
        let response = CLIENT.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(HttpError::Status(status.as_u16(), url.to_string()));
        }
        Ok::<_, HttpError>(response.bytes().await?.to_vec())
    };

    tokio::time::timeout(timeout, request).await?
}

/// Fetches and decodes any launcher meta document.
pub async fn fetch_document<D: Document>(
    url: impl IntoUrl,
    options: FetchOptions,
) -> crate::Result<D> {
    let bytes = fetch_bytes(url, options.timeout).await?;
    options.codec.decode(bytes)
}

pub async fn fetch_manifest(url: impl IntoUrl) -> crate::Result<VersionManifest> {
    fetch_document(url, FetchOptions::default()).await
}

/// Fetches the version document an entry points to.
///
/// When the entry carries a `sha1` the downloaded bytes are checked against
/// it before decoding.
pub async fn fetch_version(entry: &VersionEntry) -> crate::Result<Version> {
    fetch_version_with_options(entry, FetchOptions::default()).await
}

pub async fn fetch_version_with_options(
    entry: &VersionEntry,
    options: FetchOptions,
) -> crate::Result<Version> {
    let bytes = fetch_bytes(entry.url.as_str(), options.timeout).await?;
    entry.verify(&bytes)?;
    options.codec.decode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn invalid_url_is_rejected_before_sending() {
        let err = fetch_bytes("not a url", Duration::from_secs(1)).await.unwrap_err();
        assert!(matches!(err, HttpError::Reqwest(_)));
    }

    #[tokio::test]
    #[ignore = "needs network access"]
    async fn fetches_live_manifest_and_latest_release() {
        let manifest = fetch_manifest(VERSION_MANIFEST_V2_URL).await.unwrap();
        let latest = manifest.latest_release().unwrap();
        assert!(latest.sha1.is_some());

        let version = fetch_version(latest).await.unwrap();
        assert_eq!(version.id, latest.id);
    }
}
