use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::categories::{classify, merge_tags, parse_tag_field};
use super::csv_import::{
    image_header, CatalogParse, CsvRecord, HEADER_DESCRIPTION, HEADER_SKU, HEADER_TAG,
    HEADER_TITLE,
};
use super::slug::slugify;
use crate::shared::html_text::description_lines;
use crate::shared::route::Route;

/// Number of `IMMAGINEn` columns read per row.
pub const MAX_IMAGES: usize = 10;

// ============================================================================
// Product row
// ============================================================================

/// One catalog product, built once per parse and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    /// Lookup key. `row-{position}` when the SKU cell is blank.
    pub sku: String,

    pub title: String,

    /// Raw description; may contain HTML entities and literal newlines.
    pub description: String,

    /// Non-empty `IMMAGINE1..=10` cells in column order. The first one is
    /// always `IMMAGINE1`.
    pub images: Vec<String>,

    /// Keyword tags followed by explicit `TAG` values. Never empty.
    pub categories: Vec<String>,

    /// 1-based data row position in the source file.
    pub position: usize,
}

impl ProductRow {
    /// Builds a row, or `None` when the title or primary image is missing.
    pub fn from_record(position: usize, record: &CsvRecord) -> Option<Self> {
        let title = record.get_trimmed(HEADER_TITLE)?.to_string();
        record.get_trimmed(&image_header(1))?;

        let sku = record
            .get_trimmed(HEADER_SKU)
            .map(str::to_string)
            .unwrap_or_else(|| format!("row-{}", position));

        let description = record
            .get(HEADER_DESCRIPTION)
            .map(|d| d.trim().to_string())
            .unwrap_or_default();

        let images = (1..=MAX_IMAGES)
            .filter_map(|n| record.get_trimmed(&image_header(n)))
            .map(str::to_string)
            .collect();

        let explicit_tags = record
            .get(HEADER_TAG)
            .map(parse_tag_field)
            .unwrap_or_default();
        let categories = merge_tags(
            classify(&format!("{} {}", title, description)),
            &explicit_tags,
        );

        Some(Self {
            sku,
            title,
            description,
            images,
            categories,
            position,
        })
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn slug(&self) -> String {
        slugify(Some(&self.title))
    }

    pub fn has_category(&self, tag: &str) -> bool {
        self.categories.iter().any(|c| c == tag)
    }

    /// Whether the identifier taken from a URL refers to this row.
    pub fn matches_sku(&self, sku: &str) -> bool {
        self.sku == sku.trim()
    }

    pub fn route(&self) -> Route {
        Route::product(&self.sku, Some(&self.title))
    }

    pub fn detail_path(&self) -> String {
        self.route().to_path()
    }

    /// Description split into display lines with entities resolved.
    pub fn description_lines(&self) -> Vec<String> {
        description_lines(&self.description)
    }
}

// ============================================================================
// Summary
// ============================================================================

/// Counts reported by the backend preflight and `/api/a001/catalog/summary`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSummary {
    pub rendered: usize,
    pub excluded: usize,
    #[serde(rename = "imageCount")]
    pub image_count: usize,
    #[serde(rename = "perCategory")]
    pub per_category: BTreeMap<String, usize>,
}

impl CatalogSummary {
    pub fn from_parse(parsed: &CatalogParse) -> Self {
        let mut summary = Self {
            rendered: parsed.rows.len(),
            excluded: parsed.excluded,
            ..Self::default()
        };
        for row in &parsed.rows {
            summary.image_count += row.images.len();
            for tag in &row.categories {
                *summary.per_category.entry(tag.clone()).or_insert(0) += 1;
            }
        }
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::catalog::CatalogState;
    use crate::domain::a001_product::categories::{ALL, FILTERS, OTHER};
    use crate::domain::a001_product::csv_import::{parse_catalog, Delimiter};

    fn record(pairs: &[(&str, &str)]) -> CsvRecord {
        CsvRecord::from_pairs(pairs.iter().copied())
    }

    #[test]
    fn test_scenario_raku_vase() {
        let row = ProductRow::from_record(
            1,
            &record(&[
                ("SKU", "12"),
                ("TITOLO", "Raku Vase"),
                ("DESCRIZIONE", "A raku vase with kintsugi repair"),
                ("IMMAGINE1", "a.jpg"),
                ("IMMAGINE2", "b.jpg"),
            ]),
        )
        .unwrap();

        assert_eq!(row.categories, vec!["raku", "kintsugi", "vases"]);
        assert_eq!(row.slug(), "raku-vase");
        assert_eq!(row.images, vec!["a.jpg", "b.jpg"]);
        assert_eq!(row.detail_path(), "/product/12/raku-vase");
    }

    #[test]
    fn test_sparse_images_keep_order() {
        let row = ProductRow::from_record(
            1,
            &record(&[
                ("TITOLO", "Bowl"),
                ("IMMAGINE1", " 1.jpg "),
                ("IMMAGINE3", "3.jpg"),
                ("IMMAGINE4", "   "),
                ("IMMAGINE10", "10.jpg"),
                ("IMMAGINE11", "ignored.jpg"),
            ]),
        )
        .unwrap();
        assert_eq!(row.images, vec!["1.jpg", "3.jpg", "10.jpg"]);
        assert_eq!(row.primary_image(), Some("1.jpg"));
    }

    #[test]
    fn test_missing_required_fields() {
        assert!(ProductRow::from_record(1, &record(&[("IMMAGINE1", "a.jpg")])).is_none());
        assert!(ProductRow::from_record(1, &record(&[("TITOLO", "Vase")])).is_none());
        assert!(ProductRow::from_record(
            1,
            &record(&[("TITOLO", "Vase"), ("IMMAGINE1", ""), ("IMMAGINE2", "b.jpg")])
        )
        .is_none());
    }

    #[test]
    fn test_blank_sku_falls_back_to_position() {
        let row = ProductRow::from_record(
            7,
            &record(&[("SKU", "  "), ("TITOLO", "Mug"), ("IMMAGINE1", "m.jpg")]),
        )
        .unwrap();
        assert_eq!(row.sku, "row-7");
        assert!(row.matches_sku(" row-7 "));
        assert_eq!(row.categories, vec!["other"]);
    }

    #[test]
    fn test_title_participates_in_classification() {
        let row = ProductRow::from_record(
            1,
            &record(&[
                ("TITOLO", "Saggar Lantern"),
                ("DESCRIZIONE", "Handmade"),
                ("IMMAGINE1", "l.jpg"),
            ]),
        )
        .unwrap();
        assert_eq!(row.categories, vec!["saggar", "lamps"]);
    }

    #[test]
    fn test_explicit_tags() {
        let row = ProductRow::from_record(
            1,
            &record(&[
                ("TITOLO", "Mug"),
                ("IMMAGINE1", "m.jpg"),
                ("TAG", "Gift, Kitchen"),
            ]),
        )
        .unwrap();
        assert_eq!(row.categories, vec!["other", "gift", "kitchen"]);
        assert!(row.has_category("gift"));
        assert!(row.has_category("other"));
    }

    #[test]
    fn test_tag_only_row_is_reachable_from_a_filter() {
        let text = "SKU,TITOLO,DESCRIZIONE,IMMAGINE1,TAG\n1,Mug,Handmade,m.jpg,gift\n";
        let parsed = parse_catalog(text, Delimiter::Comma).unwrap();
        let mut state = CatalogState::new(parsed.rows, 24);
        let reachable: Vec<&str> = FILTERS
            .iter()
            .copied()
            .filter(|&f| f != ALL)
            .filter(|&f| {
                state.set_filter(f);
                state.filtered_len() == 1
            })
            .collect();
        assert_eq!(reachable, vec![OTHER]);
    }

    #[test]
    fn test_description_lines_unescape() {
        let row = ProductRow::from_record(
            1,
            &record(&[
                ("TITOLO", "Plate"),
                ("IMMAGINE1", "p.jpg"),
                ("DESCRIZIONE", "It&rsquo;s a &quot;plate&quot;\nSalt &amp; pepper"),
            ]),
        )
        .unwrap();
        assert_eq!(
            row.description_lines(),
            vec!["It\u{2019}s a \"plate\"", "Salt & pepper"]
        );
    }

    #[test]
    fn test_summary() {
        let text = "SKU,TITOLO,DESCRIZIONE,IMMAGINE1,IMMAGINE2\n\
1,Raku Vase,,a.jpg,b.jpg\n\
2,Plate,,c.jpg,\n\
3,,,d.jpg,\n";
        let parsed = parse_catalog(text, Delimiter::Comma).unwrap();
        let summary = CatalogSummary::from_parse(&parsed);
        assert_eq!(summary.rendered, 2);
        assert_eq!(summary.excluded, 1);
        assert_eq!(summary.image_count, 3);
        assert_eq!(summary.per_category.get("raku"), Some(&1));
        assert_eq!(summary.per_category.get("vases"), Some(&1));
        assert_eq!(summary.per_category.get("plates"), Some(&1));
        assert_eq!(summary.per_category.get("other"), None);
    }
}
