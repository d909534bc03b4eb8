use std::path::Path;

use tracing::info;

use crate::error::ScrapeError;
use crate::extract::ProductRecord;

/// Write all records to `path` as CSV, header first, one row per product
/// in encounter order. An existing file is overwritten.
pub fn write_csv(path: &Path, records: &[ProductRecord]) -> Result<(), ScrapeError> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    info!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, installment: &str, cash: &str) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            installment_price: installment.to_string(),
            cash_price: cash.to_string(),
        }
    }

    fn to_csv_bytes(records: &[ProductRecord]) -> Vec<u8> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for r in records {
            writer.serialize(r).unwrap();
        }
        writer.into_inner().unwrap()
    }

    #[test]
    fn header_and_rows_in_order() {
        let records = vec![
            record("Aliança A", "12x R$ 100,00", "1.100,00"),
            record("Aliança B", "Não encontrado", "2.200,00"),
        ];
        let out = String::from_utf8(to_csv_bytes(&records)).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "produto,preco_a_prazo,preco_a_vista");
        assert_eq!(lines[1], "Aliança A,\"12x R$ 100,00\",\"1.100,00\"");
        assert_eq!(lines[2], "Aliança B,Não encontrado,\"2.200,00\"");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn embedded_commas_are_quoted() {
        let out = String::from_utf8(to_csv_bytes(&[record(
            "Aliança, ouro 18k",
            "10x R$ 99,90",
            "999,00",
        )]))
        .unwrap();
        assert!(out.contains("\"Aliança, ouro 18k\""));
    }

    #[test]
    fn serialization_is_deterministic() {
        let records = vec![
            record("A", "1", "2"),
            record("B", "Não encontrado", "Não encontrado"),
        ];
        assert_eq!(to_csv_bytes(&records), to_csv_bytes(&records));
    }

    #[test]
    fn overwrites_existing_file() {
        let path = std::env::temp_dir().join("catalog_scraper_export_test.csv");
        std::fs::write(&path, "stale contents from an earlier run").unwrap();

        write_csv(&path, &[record("Aliança", "12x", "100,00")]).unwrap();

        let out = std::fs::read_to_string(&path).unwrap();
        assert!(out.starts_with("produto,preco_a_prazo,preco_a_vista"));
        assert!(!out.contains("stale"));
        std::fs::remove_file(&path).unwrap();
    }
}
