// file: src/install/download.rs
// version: 1.1.0
// guid: b8d04f72-3a59-4e16-8c3d-e5f19a2647b0

//! Release archive download over HTTP

use crate::Result;
use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Downloader with progress reporting for large archives
pub struct NetworkDownloader {
    client: reqwest::Client,
}

impl NetworkDownloader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Download a file, streaming to disk with a progress bar
    pub async fn download_with_progress<P: AsRef<Path>>(&self, url: &str, dest: P) -> Result<()> {
        info!("Downloading: {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(crate::error::DriverError::download(format!(
                "{} returned status {}",
                url,
                response.status()
            )));
        }

        let total_size = response.content_length().unwrap_or(0);

        let pb = ProgressBar::new(total_size);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")
        {
            pb.set_style(style.progress_chars("#>-"));
        }

        let mut file = File::create(&dest).await?;
        let mut stream = response.bytes_stream();
        let mut downloaded = 0u64;

        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await?;
            downloaded += chunk.len() as u64;
            pb.set_position(downloaded);
        }

        file.flush().await?;
        pb.finish_and_clear();

        info!("Downloaded to: {}", dest.as_ref().display());
        Ok(())
    }

    /// Fetch a small text document, such as a checksum listing
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        debug!("Fetching: {}", url);

        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            return Err(crate::error::DriverError::download(format!(
                "{} returned status {}",
                url,
                response.status()
            )));
        }

        Ok(response.text().await?)
    }

    /// Verify a URL answers without downloading the body
    pub async fn verify_url(&self, url: &str) -> bool {
        match self.client.head(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

impl Default for NetworkDownloader {
    fn default() -> Self {
        Self::new()
    }
}
