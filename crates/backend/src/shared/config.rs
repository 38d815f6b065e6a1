use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalogs: CatalogsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogsConfig {
    /// JSON file with the catalog list
    pub path: String,
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3010

[catalogs]
path = "data/db.json"
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
    let config: Config = toml::from_str(contents)?;
    Ok(config)
}

/// Get the catalog file path from configuration
/// Resolves relative paths relative to the executable directory
pub fn get_catalogs_path(config: &Config) -> PathBuf {
    let path = Path::new(&config.catalogs.path);

    if path.is_absolute() {
        return path.to_path_buf();
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            return exe_dir.join(path);
        }
    }

    PathBuf::from(&config.catalogs.path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3010);
        assert_eq!(config.catalogs.path, "data/db.json");
    }

    #[test]
    fn test_custom_config() {
        let config = parse_config(
            r#"
            [server]
            port = 8080

            [catalogs]
            path = "/srv/shop/catalogs.json"
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            get_catalogs_path(&config),
            PathBuf::from("/srv/shop/catalogs.json")
        );
    }

    #[test]
    fn test_missing_section_is_an_error() {
        assert!(parse_config("[server]\nport = 1").is_err());
    }

    #[test]
    fn test_relative_path_resolves_next_to_executable() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        let exe_dir = std::env::current_exe()
            .unwrap()
            .parent()
            .unwrap()
            .to_path_buf();

        let resolved = get_catalogs_path(&config);
        assert!(resolved.is_absolute());
        assert_eq!(resolved, exe_dir.join("data/db.json"));
    }
}
