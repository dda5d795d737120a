// src/config.rs
use std::{env, fs, io, path::PathBuf};
use thiserror::Error;

/// Which storage backend the process runs on. Chosen once at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageMode {
    Local,
    Database,
}

impl StorageMode {
    /// Accepts `local`/`database` as well as the numeric `1`/`2` used by the
    /// old `storage-config.txt` files.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "local" | "1" => Ok(Self::Local),
            "database" | "2" => Ok(Self::Database),
            other => Err(ConfigError::Invalid(format!(
                "unknown storage mode `{other}` (expected local or database)"
            ))),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    storage_mode: StorageMode,
    data_dir: PathBuf,
    database_url: Option<String>,
    database_max_connections: u32,
    listen_addr: String,
    rate_limit_enabled: bool,
    allowed_origins: Vec<String>,
    public_base_url: Option<String>,
    site_name: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

const STORAGE_CONFIG_FILE: &str = "storage-config.txt";

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_listen_addr() -> String {
    "127.0.0.1:5000".into()
}

fn default_site_name() -> String {
    "ETC Hub".into()
}

const DEFAULT_MAX_CONNECTIONS: u32 = 16;

impl AppConfig {
    /// Build configuration from the process environment (after loading `.env`).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let data_dir = get("DATA_DIR").map_or_else(default_data_dir, PathBuf::from);

        let storage_mode = match get("STORAGE_MODE") {
            Some(value) => StorageMode::parse(&value)?,
            None => read_storage_config_file(&data_dir)?.unwrap_or(StorageMode::Local),
        };

        let database_url = get("DATABASE_URL");
        if storage_mode == StorageMode::Database && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        let database_max_connections = match get("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().ok().filter(|n| *n > 0).ok_or_else(|| {
                ConfigError::Invalid(format!("DATABASE_MAX_CONNECTIONS must be a positive integer, got `{raw}`"))
            })?,
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let rate_limit_enabled = match get("RATE_LIMIT_ENABLED") {
            Some(raw) => parse_bool(&raw).ok_or_else(|| {
                ConfigError::Invalid(format!("RATE_LIMIT_ENABLED must be a boolean, got `{raw}`"))
            })?,
            None => true,
        };

        let allowed_origins = get("ALLOWED_ORIGINS")
            .map(|s| {
                s.split(',')
                    .map(|p| p.trim().to_string())
                    .filter(|p| !p.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            storage_mode,
            data_dir,
            database_url,
            database_max_connections,
            listen_addr: get("LISTEN_ADDR").unwrap_or_else(default_listen_addr),
            rate_limit_enabled,
            allowed_origins,
            public_base_url: get("PUBLIC_BASE_URL"),
            site_name: get("SITE_NAME").unwrap_or_else(default_site_name),
        })
    }

    pub fn storage_mode(&self) -> StorageMode {
        self.storage_mode
    }

    pub fn data_dir(&self) -> &std::path::Path {
        &self.data_dir
    }

    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref()
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn listen_addr(&self) -> &str {
        &self.listen_addr
    }

    pub fn rate_limit_enabled(&self) -> bool {
        self.rate_limit_enabled
    }

    /// Empty means any origin is allowed.
    pub fn allowed_origins(&self) -> &[String] {
        &self.allowed_origins
    }

    pub fn public_base_url(&self) -> Option<&str> {
        self.public_base_url.as_deref()
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }
}

fn read_storage_config_file(data_dir: &std::path::Path) -> Result<Option<StorageMode>, ConfigError> {
    let path = data_dir.join(STORAGE_CONFIG_FILE);
    match fs::read_to_string(&path) {
        Ok(contents) if contents.trim().is_empty() => Ok(None),
        Ok(contents) => StorageMode::parse(&contents).map(Some),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(source) => Err(ConfigError::Io {
            path: path.display().to_string(),
            source,
        }),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::from_lookup(move |key| map.get(key).cloned())
    }

    #[test]
    fn defaults_to_local_storage() {
        let tmp = tempfile::TempDir::new().unwrap();
        let dir = tmp.path().to_str().unwrap();
        let cfg = config(&[("DATA_DIR", dir)]).unwrap();
        assert_eq!(cfg.storage_mode(), StorageMode::Local);
        assert_eq!(cfg.listen_addr(), "127.0.0.1:5000");
        assert_eq!(cfg.database_max_connections(), 16);
        assert!(cfg.rate_limit_enabled());
        assert_eq!(cfg.site_name(), "ETC Hub");
        assert!(cfg.allowed_origins().is_empty());
    }

    #[test]
    fn numeric_modes_are_accepted() {
        assert_eq!(StorageMode::parse("1").unwrap(), StorageMode::Local);
        assert_eq!(StorageMode::parse(" 2\n").unwrap(), StorageMode::Database);
        assert_eq!(StorageMode::parse("DATABASE").unwrap(), StorageMode::Database);
    }

    #[test]
    fn unknown_mode_is_invalid() {
        let err = config(&[("STORAGE_MODE", "redis")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn database_mode_requires_url() {
        let err = config(&[("STORAGE_MODE", "database")]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));

        let cfg = config(&[
            ("STORAGE_MODE", "database"),
            ("DATABASE_URL", "postgres://localhost/news"),
        ])
        .unwrap();
        assert_eq!(cfg.database_url(), Some("postgres://localhost/news"));
    }

    /// 環境変数がない場合は storage-config.txt を読む
    #[test]
    fn falls_back_to_storage_config_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join(STORAGE_CONFIG_FILE), "2\n").unwrap();
        let dir = tmp.path().to_str().unwrap();

        let err = config(&[("DATA_DIR", dir)]).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("DATABASE_URL")));

        let cfg = config(&[("DATA_DIR", dir), ("DATABASE_URL", "postgres://x/y")]).unwrap();
        assert_eq!(cfg.storage_mode(), StorageMode::Database);

        let cfg = config(&[("DATA_DIR", dir), ("STORAGE_MODE", "local")]).unwrap();
        assert_eq!(cfg.storage_mode(), StorageMode::Local);
    }

    #[test]
    fn rejects_bad_numbers_and_flags() {
        assert!(config(&[("DATABASE_MAX_CONNECTIONS", "zero")]).is_err());
        assert!(config(&[("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
        assert!(config(&[("RATE_LIMIT_ENABLED", "maybe")]).is_err());
        let cfg = config(&[("RATE_LIMIT_ENABLED", "false")]).unwrap();
        assert!(!cfg.rate_limit_enabled());
    }

    #[test]
    fn splits_allowed_origins() {
        let cfg = config(&[("ALLOWED_ORIGINS", "https://a.example, https://b.example,")]).unwrap();
        assert_eq!(
            cfg.allowed_origins(),
            ["https://a.example".to_string(), "https://b.example".to_string()]
        );
    }
}
