use async_trait::async_trait;

use crate::fetcher::{client::fetch, errors::FetchError};

/// Where web-dictionary pages come from.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Page body as transport text (see [`crate::fetcher::PageResponse::transport_text`]).
    async fn get(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetches pages over HTTP with the shared client.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpPageSource;

#[async_trait]
impl PageSource for HttpPageSource {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let page = fetch(url).await?;
        Ok(page.transport_text())
    }
}
