use contracts::shared::store_config::StoreConfig;
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::path::{Path, PathBuf};

static CONFIG: OnceCell<Config> = OnceCell::new();

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Built frontend (trunk output)
    pub dist_dir: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// CSV file on disk, served at `store.csv_url`
    pub csv_path: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
dist_dir = "dist"

[catalog]
csv_path = "data/EtsyListingsDownload.csv"

[store]
csv_url = "/EtsyListingsDownload.csv"
delimiter = "comma"
page_size = 24
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config: Config = toml::from_str(contents)?;
    if !config.store.csv_url.starts_with('/') {
        anyhow::bail!(
            "store.csv_url must be an absolute path, got '{}'",
            config.store.csv_url
        );
    }
    config.store.page_size = config.store.page_size.max(1);
    Ok(config)
}

/// Loads the configuration once for the whole process.
pub fn init_config() -> anyhow::Result<&'static Config> {
    let config = load_config()?;
    Ok(CONFIG.get_or_init(|| config))
}

pub fn get_config() -> &'static Config {
    CONFIG
        .get()
        .expect("Configuration has not been initialized")
}

/// Resolves a configured path.
/// Relative paths are taken relative to the executable directory.
pub fn resolve_path(configured: &str) -> PathBuf {
    let path = Path::new(configured);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let resolved_path = exe_dir.join(path);
            if resolved_path.exists() {
                return resolved_path;
            }
        }
    }

    // Fallback: use relative to current directory (cargo run from the workspace)
    PathBuf::from(configured)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_product::csv_import::Delimiter;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.dist_dir, "dist");
        assert_eq!(config.catalog.csv_path, "data/EtsyListingsDownload.csv");
        assert_eq!(config.store.csv_url, "/EtsyListingsDownload.csv");
        assert_eq!(config.store.page_size, 24);
        assert_eq!(config.store.brand_name, "Saba Ceramics");
    }

    #[test]
    fn test_store_section_is_optional() {
        let config = parse_config(
            r#"
[server]
port = 8080
dist_dir = "public"

[catalog]
csv_path = "/srv/catalog.csv"
"#,
        )
        .unwrap();
        assert_eq!(config.store, StoreConfig::default());
    }

    #[test]
    fn test_semicolon_and_page_size_floor() {
        let config = parse_config(
            r#"
[server]
port = 3000
dist_dir = "dist"

[catalog]
csv_path = "catalog.csv"

[store]
delimiter = "semicolon"
page_size = 0
"#,
        )
        .unwrap();
        assert_eq!(config.store.delimiter, Delimiter::Semicolon);
        assert_eq!(config.store.page_size, 1);
    }

    #[test]
    fn test_relative_csv_url_is_rejected() {
        let result = parse_config(
            r#"
[server]
port = 3000
dist_dir = "dist"

[catalog]
csv_path = "catalog.csv"

[store]
csv_url = "catalog.csv"
"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_absolute_path_is_kept() {
        let path = if cfg!(windows) { "C:\\data\\catalog.csv" } else { "/data/catalog.csv" };
        assert_eq!(resolve_path(path), PathBuf::from(path));
    }
}
