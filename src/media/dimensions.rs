// SPDX-License-Identifier: MPL-2.0
//! Natural size probing for remote and local images.
//!
//! Only the image header is decoded; pixels are left to the renderer.
//! Downloaded images keep their encoded bytes so the track can draw them
//! without fetching twice.

use crate::domain::slider::Dimensions;
use crate::error::{Error, Result};
use bytes::Bytes;
use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use std::fmt;
use std::io::Cursor;
use std::path::PathBuf;

/// A resolved image: its natural size and, when the source had to be
/// downloaded, the encoded file.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbedImage {
    pub dimensions: Dimensions,
    pub bytes: Option<Bytes>,
}

impl From<Dimensions> for ProbedImage {
    fn from(dimensions: Dimensions) -> Self {
        Self {
            dimensions,
            bytes: None,
        }
    }
}

/// Asynchronously yields the natural pixel size of an image.
pub trait DimensionSource: Send + Sync + fmt::Debug {
    /// Resolves `source` (a URL or a path) to its natural dimensions.
    fn dimensions(&self, source: &str) -> BoxFuture<'static, Result<Dimensions>>;

    /// Like [`DimensionSource::dimensions`], also handing back any encoded
    /// bytes fetched along the way.
    fn probe(&self, source: &str) -> BoxFuture<'static, Result<ProbedImage>> {
        self.dimensions(source)
            .map(|result| result.map(ProbedImage::from))
            .boxed()
    }
}

/// Default adapter: `http(s)://` sources are downloaded, everything else is
/// read from disk.
#[derive(Debug, Clone, Default)]
pub struct ImageDimensionSource {
    client: reqwest::Client,
}

impl ImageDimensionSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

impl DimensionSource for ImageDimensionSource {
    fn dimensions(&self, source: &str) -> BoxFuture<'static, Result<Dimensions>> {
        self.probe(source)
            .map(|result| result.map(|probed| probed.dimensions))
            .boxed()
    }

    fn probe(&self, source: &str) -> BoxFuture<'static, Result<ProbedImage>> {
        if is_remote(source) {
            let client = self.client.clone();
            let url = source.to_owned();
            async move { fetch_remote(&client, &url).await }.boxed()
        } else {
            let path = local_path(source);
            async move { probe_local(path).await.map(ProbedImage::from) }.boxed()
        }
    }
}

/// Whether `source` is fetched over HTTP rather than read from disk.
#[must_use]
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Filesystem path of a local source, with any `file://` scheme removed.
#[must_use]
pub fn local_path(source: &str) -> PathBuf {
    PathBuf::from(source.strip_prefix("file://").unwrap_or(source))
}

async fn fetch_remote(client: &reqwest::Client, url: &str) -> Result<ProbedImage> {
    let bytes = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    let dimensions = probe_bytes(&bytes)?;
    Ok(ProbedImage {
        dimensions,
        bytes: Some(bytes),
    })
}

async fn probe_local(path: PathBuf) -> Result<Dimensions> {
    tokio::task::spawn_blocking(move || {
        let (width, height) = image_rs::image_dimensions(&path)?;
        Ok::<_, Error>(Dimensions::new(width, height))
    })
    .await
    .unwrap_or_else(|e| Err(Error::Io(format!("Dimension probe task failed: {e}"))))
}

/// Reads the dimensions from an encoded image header.
pub fn probe_bytes(bytes: &[u8]) -> Result<Dimensions> {
    let (width, height) = image_rs::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .into_dimensions()?;
    Ok(Dimensions::new(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{ImageFormat, RgbaImage};
    use tempfile::tempdir;

    fn encoded_png(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        RgbaImage::new(width, height)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn remote_detection_matches_http_schemes() {
        assert!(is_remote("https://example.com/a.png"));
        assert!(is_remote("http://example.com/a.png"));
        assert!(!is_remote("/tmp/a.png"));
        assert!(!is_remote("file:///tmp/a.png"));
    }

    #[test]
    fn file_scheme_is_stripped() {
        assert_eq!(local_path("file:///tmp/a.png"), PathBuf::from("/tmp/a.png"));
        assert_eq!(local_path("photos/a.png"), PathBuf::from("photos/a.png"));
    }

    #[test]
    fn probe_bytes_reads_png_header() {
        let dims = probe_bytes(&encoded_png(7, 3)).expect("valid png");
        assert_eq!(dims, Dimensions::new(7, 3));
    }

    #[test]
    fn probe_bytes_rejects_garbage() {
        assert!(probe_bytes(b"definitely not an image").is_err());
    }

    #[tokio::test]
    async fn local_source_reads_file_from_disk() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("slide.png");
        std::fs::write(&path, encoded_png(12, 4)).expect("write png");

        let source = ImageDimensionSource::new();
        let dims = source
            .dimensions(path.to_str().expect("utf-8 path"))
            .await
            .expect("dimensions");
        assert_eq!(dims, Dimensions::new(12, 4));
    }

    #[tokio::test]
    async fn local_probe_keeps_no_bytes() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("slide.png");
        std::fs::write(&path, encoded_png(5, 5)).expect("write png");

        let probed = ImageDimensionSource::new()
            .probe(path.to_str().expect("utf-8 path"))
            .await
            .expect("probe");
        assert_eq!(probed, ProbedImage::from(Dimensions::new(5, 5)));
    }

    #[tokio::test]
    async fn missing_local_file_is_an_error() {
        let source = ImageDimensionSource::new();
        assert!(source.dimensions("/nonexistent/slide.png").await.is_err());
    }
}
