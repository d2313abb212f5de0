use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::aggregate::ProductRow;
use crate::shared::error::CatalogError;

pub const HEADER_SKU: &str = "SKU";
pub const HEADER_TITLE: &str = "TITOLO";
pub const HEADER_DESCRIPTION: &str = "DESCRIZIONE";
pub const HEADER_TAG: &str = "TAG";

/// Field separator of the catalog file. Not auto-detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    #[default]
    Comma,
    Semicolon,
}

impl Delimiter {
    pub fn as_byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Semicolon => b';',
        }
    }
}

/// Header of the `n`-th image column (1-based).
pub fn image_header(n: usize) -> String {
    format!("IMMAGINE{}", n)
}

/// Trims, upper-cases and removes a leading BOM and quote characters.
pub fn normalize_header(raw: &str) -> String {
    raw.trim_start_matches('\u{FEFF}')
        .replace(['"', '\''], "")
        .trim()
        .to_uppercase()
}

/// One CSV data row keyed by normalized header name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvRecord {
    fields: HashMap<String, String>,
}

impl CsvRecord {
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut fields = HashMap::new();
        for (header, value) in pairs {
            // First column wins when a header is repeated
            fields
                .entry(normalize_header(header))
                .or_insert_with(|| value.to_string());
        }
        Self { fields }
    }

    /// Raw cell value; `name` is matched case- and whitespace-insensitively.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields.get(&normalize_header(name)).map(String::as_str)
    }

    /// Trimmed cell value, `None` when absent or blank.
    pub fn get_trimmed(&self, name: &str) -> Option<&str> {
        self.get(name).map(str::trim).filter(|v| !v.is_empty())
    }
}

/// Result of one parse of the catalog resource.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogParse {
    pub headers: Vec<String>,
    pub rows: Vec<ProductRow>,
    /// Records dropped for missing title/primary image or unreadable CSV.
    pub excluded: usize,
}

pub fn parse_catalog(text: &str, delimiter: Delimiter) -> Result<CatalogParse, CatalogError> {
    let text = text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.as_byte())
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| CatalogError::Csv(e.to_string()))?
        .iter()
        .map(normalize_header)
        .collect();

    if !headers.iter().any(|h| h == HEADER_TITLE) {
        return Err(CatalogError::MissingHeader(HEADER_TITLE));
    }

    let mut parsed = CatalogParse {
        headers,
        ..CatalogParse::default()
    };

    for (i, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(_) => {
                parsed.excluded += 1;
                continue;
            }
        };

        let csv_record = CsvRecord::from_pairs(
            parsed
                .headers
                .iter()
                .map(String::as_str)
                .zip(record.iter()),
        );

        match ProductRow::from_record(i + 1, &csv_record) {
            Some(row) => parsed.rows.push(row),
            None => parsed.excluded += 1,
        }
    }

    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\u{FEFF}\"SKU\", Titolo ,DESCRIZIONE,IMMAGINE1,IMMAGINE2,IMMAGINE3\n\
12,Raku Vase,A raku vase with kintsugi repair,a.jpg,b.jpg,\n\
13,,No title here,c.jpg,,\n\
14,Plate,\"Blue plate,\nwith a newline\", d.jpg ,,e.jpg\n\
15,No image,Missing primary,,f.jpg,\n";

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("\u{FEFF}\"sku\""), "SKU");
        assert_eq!(normalize_header("  Immagine1 "), "IMMAGINE1");
        assert_eq!(normalize_header("'tag'"), "TAG");
    }

    #[test]
    fn test_parse_sample() {
        let parsed = parse_catalog(SAMPLE, Delimiter::Comma).unwrap();
        assert_eq!(parsed.headers[0], "SKU");
        assert_eq!(parsed.headers[1], "TITOLO");
        assert_eq!(parsed.rows.len(), 2);
        assert_eq!(parsed.excluded, 2);

        let vase = &parsed.rows[0];
        assert_eq!(vase.sku, "12");
        assert_eq!(vase.images, vec!["a.jpg", "b.jpg"]);

        let plate = &parsed.rows[1];
        assert_eq!(plate.sku, "14");
        assert_eq!(plate.description, "Blue plate,\nwith a newline");
        assert_eq!(plate.images, vec!["d.jpg", "e.jpg"]);
    }

    #[test]
    fn test_semicolon_delimiter() {
        let text = "SKU;TITOLO;DESCRIZIONE;IMMAGINE1\n7;Lamp;A lamp;x.jpg\n";
        let parsed = parse_catalog(text, Delimiter::Semicolon).unwrap();
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].categories, vec!["lamps"]);
    }

    #[test]
    fn test_wrong_delimiter_reports_missing_header() {
        let text = "SKU;TITOLO;IMMAGINE1\n7;Lamp;x.jpg\n";
        assert_eq!(
            parse_catalog(text, Delimiter::Comma),
            Err(CatalogError::MissingHeader(HEADER_TITLE))
        );
    }

    #[test]
    fn test_empty_text() {
        assert!(parse_catalog("", Delimiter::Comma).is_err());
    }

    #[test]
    fn test_short_rows_are_tolerated() {
        let text = "SKU,TITOLO,IMMAGINE1,IMMAGINE2\n1,Vase,v.jpg\n";
        let parsed = parse_catalog(text, Delimiter::Comma).unwrap();
        assert_eq!(parsed.rows.len(), 1);
        assert_eq!(parsed.rows[0].images, vec!["v.jpg"]);
    }

    #[test]
    fn test_record_lookup_is_case_insensitive() {
        let record = CsvRecord::from_pairs([("TITOLO", " Bowl "), ("SKU", "")]);
        assert_eq!(record.get("titolo"), Some(" Bowl "));
        assert_eq!(record.get_trimmed(" Titolo"), Some("Bowl"));
        assert_eq!(record.get_trimmed("sku"), None);
        assert_eq!(record.get("missing"), None);
    }
}
