//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::{Path, PathBuf};

use tracing::warn;

/// Ensure expected directories exist; warn on missing optional ones.
///
/// For file-backed SQLite URLs the parent directory of the database file is
/// created so `mode=rwc` can create the file itself.
pub async fn ensure_env(static_dir: &str, database_url: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(static_dir).await.is_err() {
        warn!(%static_dir, "static assets directory not found; static assets may 404");
    }
    if let Some(parent) = sqlite_file(database_url).and_then(|p| p.parent().map(Path::to_path_buf)) {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(&parent)
                .await
                .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

/// Extract the database file path from a `sqlite:` URL.
/// Returns `None` for in-memory databases and non-SQLite URLs.
pub fn sqlite_file(database_url: &str) -> Option<PathBuf> {
    let rest = database_url.strip_prefix("sqlite:")?;
    let rest = rest.strip_prefix("//").unwrap_or(rest);
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sqlite_file_strips_scheme_and_query() {
        assert_eq!(sqlite_file("sqlite://l9.db?mode=rwc"), Some(PathBuf::from("l9.db")));
        assert_eq!(sqlite_file("sqlite:data/films.db"), Some(PathBuf::from("data/films.db")));
    }

    #[test]
    fn sqlite_file_ignores_memory_and_other_backends() {
        assert_eq!(sqlite_file("sqlite::memory:"), None);
        assert_eq!(sqlite_file("postgres://localhost/films"), None);
    }

    #[tokio::test]
    async fn ensure_env_creates_database_parent() {
        let base = std::env::temp_dir().join(format!("catalog-env-{}", std::process::id()));
        let url = format!("sqlite://{}/nested/l9.db?mode=rwc", base.display());
        ensure_env("definitely-missing-static-dir", &url).await.unwrap();
        assert!(base.join("nested").is_dir());
        let _ = std::fs::remove_dir_all(&base);
    }
}
