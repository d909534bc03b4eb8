use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

use crate::error::ScrapeError;
use crate::extract::{extract_products, ProductRecord};
use crate::fetch::PageSource;

/// Walk the catalog page by page until a page yields no products.
///
/// Pages are numbered from 1 and fetched strictly in sequence; extraction
/// of one page finishes before the next request goes out. The first empty
/// page ends the crawl — the catalog exposes no explicit last-page marker,
/// so a page that is transiently empty (a soft error page, say) ends it
/// just the same. Any fetch or extraction error aborts with everything
/// collected so far discarded.
pub async fn crawl_catalog<S: PageSource>(
    source: &S,
    base_url: &str,
) -> Result<Vec<ProductRecord>, ScrapeError> {
    let mut records: Vec<ProductRecord> = Vec::new();
    let mut page: u32 = 1;

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner} {msg}")
            .expect("spinner template is valid"),
    );

    loop {
        let url = format!("{}?pg={}", base_url, page);
        pb.set_message(format!("page {} ({} products so far)", page, records.len()));

        let body = source.fetch_page(&url).await?;
        let extracted = extract_products(&body, page)?;
        if extracted.is_empty() {
            break;
        }

        info!("page {}: {} products", page, extracted.len());
        records.extend(extracted);
        page += 1;
    }

    pb.finish_and_clear();
    info!(
        "catalog exhausted after {} page(s), {} products",
        page,
        records.len()
    );

    Ok(records)
}

// ── Tests ──
