use anyhow::Result;
use serde::Deserialize;
use anyhow::anyhow;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://l9.db?mode=rwc";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub views: ViewsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 3000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_idle_timeout")]
    pub idle_timeout_secs: u64,
    #[serde(default = "default_max_lifetime")]
    pub max_lifetime_secs: u64,
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout_secs: u64,
    #[serde(default)]
    pub sqlx_logging: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connect_timeout_secs: default_connect_timeout(),
            idle_timeout_secs: default_idle_timeout(),
            max_lifetime_secs: default_max_lifetime(),
            acquire_timeout_secs: default_acquire_timeout(),
            sqlx_logging: false,
        }
    }
}

/// Template and static asset locations.
#[derive(Debug, Clone, Deserialize)]
pub struct ViewsConfig {
    /// Directory holding `*.html.tera` files; `None` uses the templates bundled with the server crate.
    #[serde(default)]
    pub templates_dir: Option<String>,
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self { templates_dir: None, static_dir: default_static_dir() }
    }
}

fn default_max_connections() -> u32 { 5 }
fn default_min_connections() -> u32 { 1 }
fn default_connect_timeout() -> u64 { 30 }
fn default_idle_timeout() -> u64 { 600 }
fn default_max_lifetime() -> u64 { 3600 }
fn default_acquire_timeout() -> u64 { 30 }
fn default_static_dir() -> String { "public".to_string() }

/// Config file location: `CONFIG_PATH`, or `config.toml` in the working directory.
pub fn config_path() -> String {
    std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string())
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    load_from_str(&content)
}

pub fn load_from_str(content: &str) -> Result<AppConfig> {
    let cfg: AppConfig = toml::from_str(content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load, normalise and validate [`config_path`]; a missing file yields the
    /// built-in defaults instead of an error.
    pub fn load_or_default() -> Result<Self> {
        let path = config_path();
        let mut cfg = if std::path::Path::new(&path).exists() {
            load_from_file(&path)?
        } else {
            AppConfig::default()
        };
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be within 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    /// Fill the URL from `DATABASE_URL` when the file left it empty, falling back to the local SQLite file.
    pub fn normalize_from_env(&mut self) {
        if self.url.trim().is_empty() {
            self.url = std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        }
    }

    pub fn is_sqlite(&self) -> bool {
        self.url.to_lowercase().starts_with("sqlite:")
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!("database.url is empty; set it in config.toml or DATABASE_URL"));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("sqlite:") || lower.starts_with("postgresql://") || lower.starts_with("postgres://")) {
            return Err(anyhow!("database.url must start with sqlite:, postgres:// or postgresql://"));
        }
        if self.min_connections == 0 {
            return Err(anyhow!("database.min_connections must be >= 1"));
        }
        if self.max_connections < self.min_connections {
            return Err(anyhow!("database.max_connections must be >= min_connections"));
        }
        if self.connect_timeout_secs == 0 || self.acquire_timeout_secs == 0 {
            return Err(anyhow!("database timeouts must be positive seconds"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = load_from_str("").unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.views.static_dir, "public");
        assert!(cfg.views.templates_dir.is_none());
        assert_eq!(cfg.database.max_connections, 5);
    }

    #[test]
    fn sections_override_defaults() {
        let cfg = load_from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8088

            [database]
            url = "sqlite://data/films.db?mode=rwc"
            max_connections = 8

            [views]
            static_dir = "assets"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 8088);
        assert_eq!(cfg.database.max_connections, 8);
        assert_eq!(cfg.database.min_connections, 1);
        assert!(cfg.database.is_sqlite());
        assert_eq!(cfg.views.static_dir, "assets");
    }

    #[test]
    fn normalize_fills_blank_host_and_worker_threads() {
        let mut cfg = load_from_str(
            r#"
            [server]
            host = "  "
            port = 3000
            worker_threads = 0

            [database]
            url = "sqlite::memory:"
            "#,
        )
        .unwrap();
        cfg.normalize_and_validate().unwrap();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.worker_threads, Some(4));
    }

    #[test]
    fn load_from_file_reads_toml() {
        let path = std::env::temp_dir().join(format!("catalog-config-{}.toml", std::process::id()));
        std::fs::write(&path, "[server]\nhost = \"0.0.0.0\"\nport = 3100\n").unwrap();
        let cfg = load_from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(cfg.server.port, 3100);
        assert_eq!(cfg.views.static_dir, "public");
        let _ = std::fs::remove_file(&path);

        assert!(load_from_file("/nonexistent/catalog-config.toml").is_err());
    }

    #[test]
    fn rejects_unknown_scheme() {
        let cfg = DatabaseConfig { url: "mysql://localhost/films".into(), ..DatabaseConfig::default() };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_inverted_pool_bounds() {
        let cfg = DatabaseConfig {
            url: DEFAULT_DATABASE_URL.into(),
            min_connections: 4,
            max_connections: 2,
            ..DatabaseConfig::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn rejects_port_zero() {
        let mut cfg = AppConfig::default();
        cfg.server.port = 0;
        cfg.database.url = DEFAULT_DATABASE_URL.into();
        assert!(cfg.normalize_and_validate().is_err());
    }
}
