//! ISO 4217 list retrieval: download first, local copy as fallback.

use std::path::Path;

use mintmark_shared::{AppError, AppResult, IsoSourceConfig};
use tracing::{debug, info, warn};

/// Where a fetched list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrigin {
    /// Downloaded from the configured URL.
    Remote,
    /// Read from the configured local file.
    Local,
}

impl ListOrigin {
    /// Lowercase label for logs.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Local => "local",
        }
    }
}

/// Raw list document plus its origin.
#[derive(Debug, Clone)]
pub struct FetchedList {
    /// Where the body came from.
    pub origin: ListOrigin,
    /// XML text.
    pub body: String,
}

/// Fetches the ISO 4217 list according to an [`IsoSourceConfig`].
#[derive(Debug, Clone)]
pub struct IsoSource {
    config: IsoSourceConfig,
    client: reqwest::Client,
}

impl IsoSource {
    /// Creates a source with an HTTP client honouring the configured timeout.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if the HTTP client cannot be built.
    pub fn new(config: IsoSourceConfig) -> AppResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Internal(format!("HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    /// Source configuration.
    #[must_use]
    pub const fn config(&self) -> &IsoSourceConfig {
        &self.config
    }

    /// Downloads the list, or reads the local copy if the download fails.
    ///
    /// A successful download is also written to `download_path`.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Io` when the download failed and the local copy
    /// cannot be read either.
    pub async fn fetch(&self) -> AppResult<FetchedList> {
        match self.download().await {
            Ok(body) => {
                info!(url = %self.config.url, "Using downloaded ISO 4217 list");
                Ok(FetchedList {
                    origin: ListOrigin::Remote,
                    body,
                })
            }
            Err(err) => {
                warn!(
                    error = %err,
                    path = %self.config.local_path.display(),
                    "ISO 4217 download failed, using local file"
                );
                let body = read_file(&self.config.local_path).await?;
                Ok(FetchedList {
                    origin: ListOrigin::Local,
                    body,
                })
            }
        }
    }

    async fn download(&self) -> AppResult<String> {
        debug!(url = %self.config.url, "Downloading ISO 4217 list");

        let body = self
            .client
            .get(&self.config.url)
            .send()
            .await
            .and_then(reqwest::Response::error_for_status)
            .map_err(|e| AppError::ExternalService(e.to_string()))?
            .text()
            .await
            .map_err(|e| AppError::ExternalService(e.to_string()))?;

        tokio::fs::write(&self.config.download_path, &body)
            .await
            .map_err(|e| {
                AppError::Io(format!("{}: {e}", self.config.download_path.display()))
            })?;

        Ok(body)
    }
}

async fn read_file(path: &Path) -> AppResult<String> {
    Ok(tokio::fs::read_to_string(path).await?)
}
