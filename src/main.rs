mod crawl;
mod error;
mod export;
mod extract;
mod fetch;

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

const DEFAULT_BASE_URL: &str = "https://www.wmjoias.com.br/aliancas-de-casamento/ouro-amarelo-18k";

#[derive(Parser)]
#[command(
    name = "catalog_scraper",
    about = "Paginated catalog scraper with CSV export"
)]
struct Cli {
    /// Catalog listing URL; pages are fetched as {base-url}?pg=N
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Output CSV path (overwritten if it exists)
    #[arg(short, long, default_value = "resultados.csv")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let source = fetch::HttpSource::new()?;
    let records = crawl::crawl_catalog(&source, &cli.base_url).await?;
    export::write_csv(&cli.output, &records)?;

    println!(
        "Saved {} products to '{}' in {:.1}s",
        records.len(),
        cli.output.display(),
        t0.elapsed().as_secs_f64()
    );
    Ok(())
}
