use thiserror::Error;

/// Everything that can abort a scrape run.
///
/// An empty page is deliberately not represented here: zero containers is
/// the normal end-of-catalog signal, surfaced as an empty extraction
/// result rather than an error.
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// A product container without a name element. The catalog markup has
    /// drifted from the expected structure, so the whole run aborts
    /// instead of exporting rows extracted under wrong assumptions.
    #[error("product {index} on page {page} has no name element")]
    MissingProductName { page: u32, index: usize },

    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
