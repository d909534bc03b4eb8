use async_trait::async_trait;
use tracing::debug;

use crate::error::ScrapeError;

const USER_AGENT: &str = concat!("catalog_scraper/", env!("CARGO_PKG_VERSION"));

/// Source of page bodies. The pagination driver only sees this trait, so
/// tests can drive it from an in-memory catalog instead of the network.
#[async_trait]
pub trait PageSource {
    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError>;
}

/// Production source: one GET per page over a shared reqwest client.
///
/// No retries and no timeout override. Any transport failure, including a
/// non-success status, propagates as `ScrapeError::Network` and ends the
/// run with nothing written.
pub struct HttpSource {
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new() -> Result<Self, ScrapeError> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageSource for HttpSource {
    async fn fetch_page(&self, url: &str) -> Result<String, ScrapeError> {
        debug!("GET {}", url);
        let body = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}
