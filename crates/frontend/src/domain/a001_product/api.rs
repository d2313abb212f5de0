use contracts::domain::a001_product::csv_import::{parse_catalog, CatalogParse};
use contracts::shared::error::CatalogError;
use contracts::shared::store_config::StoreConfig;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch storefront settings from the backend
pub async fn fetch_store_config() -> Result<StoreConfig, String> {
    let response = Request::get(&api_url("/api/config"))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch config: {}", response.status()));
    }

    response
        .json::<StoreConfig>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Fetch the catalog CSV and parse it. One call per page load.
pub async fn fetch_catalog(config: &StoreConfig) -> Result<CatalogParse, CatalogError> {
    let response = Request::get(&config.csv_url)
        .send()
        .await
        .map_err(|e| CatalogError::ResourceUnavailable(format!("{}: {}", config.csv_url, e)))?;

    if !response.ok() {
        return Err(CatalogError::ResourceUnavailable(format!(
            "{}: HTTP {}",
            config.csv_url,
            response.status()
        )));
    }

    let text = response
        .text()
        .await
        .map_err(|e| CatalogError::ResourceUnavailable(format!("{}: {}", config.csv_url, e)))?;

    parse_catalog(&text, config.delimiter)
}
