//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use quill_infra::database::DatabaseConfig;

/// Default cap for JSON and multipart request bodies (10 MiB).
pub const DEFAULT_MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Application configuration.
///
/// Built once at startup and handed to the server; nothing reads the
/// environment after that.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: Option<DatabaseConfig>,
    /// Base used to build links to uploaded files.
    pub public_base_url: String,
    pub upload_dir: PathBuf,
    /// Origins allowed to make cross-origin requests.
    pub allowed_origins: Vec<String>,
    pub max_body_bytes: usize,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let database = env::var("DATABASE_URL").ok().map(|url| DatabaseConfig {
            url,
            max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(20),
            min_connections: env::var("DB_MIN_CONNECTIONS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(2),
        });

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        Self {
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| format!("http://{}:{}", host, port)),
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./uploads")),
            allowed_origins: parse_origins(&env::var("ALLOWED_ORIGINS").unwrap_or_default()),
            max_body_bytes: env::var("MAX_BODY_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_BODY_BYTES),
            host,
            port,
            database,
        }
    }

    /// Configuration for tests: in-memory store, no allowed origins.
    #[cfg(test)]
    pub fn for_tests(upload_dir: impl Into<PathBuf>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database: None,
            public_base_url: "http://localhost:8080".to_string(),
            upload_dir: upload_dir.into(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
            max_body_bytes: 1024 * 1024,
        }
    }
}

/// Parse a comma separated origin list, dropping blanks and trailing slashes.
/// Example: ALLOWED_ORIGINS=https://blog.example.com,http://localhost:3000
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|o| o.trim().trim_end_matches('/'))
        .filter(|o| !o.is_empty())
        .map(String::from)
        .collect()
}
