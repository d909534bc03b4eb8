use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::error::ScrapeError;

static CONTAINER_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.product-details").unwrap());
static NAME_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.product-name h3").unwrap());
static INSTALLMENT_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.price-currency-home").unwrap());
static CASH_SEL: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("span.preco-avista.precoAvista").unwrap());

/// Placeholder written when a price element is absent from a container.
pub const NOT_FOUND: &str = "Não encontrado";

/// One catalog product, exactly as exported. Prices stay free-form text;
/// the catalog renders them pre-formatted (pt-BR, "1.234,56") and nothing
/// downstream does arithmetic on them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductRecord {
    #[serde(rename = "produto")]
    pub name: String,
    #[serde(rename = "preco_a_prazo")]
    pub installment_price: String,
    #[serde(rename = "preco_a_vista")]
    pub cash_price: String,
}

/// Extract every product on a page, in document order.
///
/// An empty result means the page has no product containers — the signal
/// that pagination has walked past the last page. A container with no name
/// element aborts extraction: see `ScrapeError::MissingProductName`.
pub fn extract_products(html: &str, page: u32) -> Result<Vec<ProductRecord>, ScrapeError> {
    let doc = Html::parse_document(html);
    let mut records = Vec::new();

    for (index, container) in doc.select(&CONTAINER_SEL).enumerate() {
        let name = first_text(&container, &NAME_SEL)
            .map(|t| t.trim().to_string())
            .ok_or(ScrapeError::MissingProductName { page, index })?;

        let installment_price = first_text(&container, &INSTALLMENT_SEL)
            .map(|t| t.trim().to_string())
            .unwrap_or_else(|| NOT_FOUND.to_string());

        let cash_price = first_text(&container, &CASH_SEL)
            .map(|t| normalize_cash_price(&t))
            .unwrap_or_else(|| NOT_FOUND.to_string());

        records.push(ProductRecord {
            name,
            installment_price,
            cash_price,
        });
    }

    Ok(records)
}

/// Concatenated text of the first element matching `sel`, or None.
fn first_text(container: &ElementRef, sel: &Selector) -> Option<String> {
    container
        .select(sel)
        .next()
        .map(|el| el.text().collect::<String>())
}

/// The cash price is rendered as "R$" plus the amount across line breaks.
/// Strip the newlines and the currency marker, keep the amount as-is.
fn normalize_cash_price(raw: &str) -> String {
    raw.replace('\n', "").replace("R$", "").trim().to_string()
}

// ── Tests ──
