use serde::{Deserialize, Serialize};

use crate::domain::a001_product::aggregate::ProductRow;
use crate::domain::a001_product::catalog::DEFAULT_PAGE_SIZE;
use crate::domain::a001_product::csv_import::Delimiter;

/// Storefront settings shared by the backend (`config.toml` `[store]`) and the
/// frontend (`GET /api/config`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub brand_name: String,
    pub tagline: String,
    /// URL the frontend fetches the catalog CSV from.
    pub csv_url: String,
    pub delimiter: Delimiter,
    pub page_size: usize,
    /// `{title}` and `{sku}` are replaced with URL-encoded values.
    pub contact_url_template: String,
    pub contact_label: String,
    /// Replace an unknown product URL with the catalog instead of showing not-found.
    pub redirect_missing_to_catalog: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            brand_name: "Saba Ceramics".to_string(),
            tagline: "Handcrafted Pottery".to_string(),
            csv_url: "/EtsyListingsDownload.csv".to_string(),
            delimiter: Delimiter::Comma,
            page_size: DEFAULT_PAGE_SIZE,
            contact_url_template: "https://linktr.ee/SABA.ceramics".to_string(),
            contact_label: "CONTACT US FOR INFO".to_string(),
            redirect_missing_to_catalog: false,
        }
    }
}

impl StoreConfig {
    pub fn catalog_title(&self) -> String {
        format!("{} | {}", self.brand_name, self.tagline)
    }

    pub fn product_title(&self, product: &ProductRow) -> String {
        format!("{} | {}", product.title, self.brand_name)
    }

    pub fn contact_url(&self, product: &ProductRow) -> String {
        self.contact_url_template
            .replace("{title}", &urlencoding::encode(&product.title))
            .replace("{sku}", &urlencoding::encode(&product.sku))
    }

    /// Contact link outside a product page; placeholders are dropped.
    pub fn general_contact_url(&self) -> String {
        self.contact_url_template
            .replace("{title}", "")
            .replace("{sku}", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::csv_import::CsvRecord;

    fn product() -> ProductRow {
        ProductRow::from_record(
            1,
            &CsvRecord::from_pairs([
                ("SKU", "12"),
                ("TITOLO", "Raku Vase"),
                ("IMMAGINE1", "a.jpg"),
            ]),
        )
        .unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.page_size, 24);
        assert_eq!(config.delimiter, Delimiter::Comma);
        assert_eq!(config.catalog_title(), "Saba Ceramics | Handcrafted Pottery");
        assert_eq!(config.product_title(&product()), "Raku Vase | Saba Ceramics");
    }

    #[test]
    fn test_contact_url_verbatim_without_placeholders() {
        let config = StoreConfig::default();
        assert_eq!(config.contact_url(&product()), "https://linktr.ee/SABA.ceramics");
    }

    #[test]
    fn test_contact_url_interpolation() {
        let config = StoreConfig {
            contact_url_template: "https://wa.me/390000?text=Info%20{title}%20({sku})"
                .to_string(),
            ..StoreConfig::default()
        };
        assert_eq!(
            config.contact_url(&product()),
            "https://wa.me/390000?text=Info%20Raku%20Vase%20(12)"
        );
        assert_eq!(
            config.general_contact_url(),
            "https://wa.me/390000?text=Info%20%20()"
        );
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: StoreConfig =
            serde_json::from_str(r#"{"delimiter":"semicolon","page_size":12}"#).unwrap();
        assert_eq!(config.delimiter, Delimiter::Semicolon);
        assert_eq!(config.page_size, 12);
        assert_eq!(config.brand_name, "Saba Ceramics");
    }
}
