use contracts::domain::a001_product::aggregate::CatalogSummary;
use contracts::domain::a001_product::csv_import::parse_catalog;

use crate::shared::config::{resolve_path, Config};

/// Reads the catalog CSV from disk and summarizes what the storefront will render.
pub async fn load_summary(config: &Config) -> anyhow::Result<CatalogSummary> {
    let path = resolve_path(&config.catalog.csv_path);
    let text = tokio::fs::read_to_string(&path)
        .await
        .map_err(|e| anyhow::anyhow!("cannot read {}: {e}", path.display()))?;

    summarize(&text, config)
}

pub fn summarize(text: &str, config: &Config) -> anyhow::Result<CatalogSummary> {
    let parsed = parse_catalog(text, config.store.delimiter)?;
    Ok(CatalogSummary::from_parse(&parsed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::{CatalogConfig, ServerConfig};
    use contracts::shared::store_config::StoreConfig;

    fn config() -> Config {
        Config {
            server: ServerConfig {
                port: 3000,
                dist_dir: "dist".into(),
            },
            catalog: CatalogConfig {
                csv_path: "catalog.csv".into(),
            },
            store: StoreConfig::default(),
        }
    }

    #[test]
    fn test_summarize_counts_rendered_and_excluded() {
        let csv = "SKU,TITOLO,DESCRIZIONE,IMMAGINE1,IMMAGINE2\n\
                   1,Raku Vase,Smoked raku,a.jpg,b.jpg\n\
                   2,Untitled plate,,,\n\
                   3,Kintsugi Bowl,Gold repair,c.jpg,\n";
        let summary = summarize(csv, &config()).unwrap();
        assert_eq!(summary.rendered, 2);
        assert_eq!(summary.excluded, 1);
        assert_eq!(summary.image_count, 3);
        assert_eq!(summary.per_category.get("raku"), Some(&1));
        assert_eq!(summary.per_category.get("kintsugi"), Some(&1));
    }

    #[test]
    fn test_summarize_requires_title_column() {
        let err = summarize("SKU,IMMAGINE1\n1,a.jpg\n", &config()).unwrap_err();
        assert!(err.to_string().contains("TITOLO"));
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let mut config = config();
        config.catalog.csv_path = "/nonexistent/catalog.csv".into();
        assert!(load_summary(&config).await.is_err());
    }
}
