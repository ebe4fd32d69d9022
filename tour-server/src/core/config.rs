//! Server configuration
//!
//! # Environment variables
//!
//! | Variable | Default | Purpose |
//! |----------|---------|---------|
//! | HTTP_PORT | 3000 | HTTP listen port |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | TOURS_FILE | (unset) | JSON seed file with tour records |
//! | SHIPHERO_AUTH_URL | https://public-api.shiphero.com/auth/refresh | Upstream token refresh endpoint |
//! | SHIPHERO_TIMEOUT_MS | 25000 | Hard ceiling on upstream wait |
//! | BARCODE_CONCURRENCY | 8 | Bound on concurrent barcode encodes |

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API listen port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Optional JSON file with tour records loaded at startup
    pub tours_file: Option<String>,
    /// ShipHero token refresh endpoint
    pub shiphero_auth_url: String,
    /// Upper bound on upstream wait time (milliseconds)
    pub shiphero_timeout_ms: u64,
    /// Bound on concurrent barcode encode tasks
    pub barcode_concurrency: usize,
}

impl Config {
    /// Load configuration from environment variables, with defaults
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            tours_file: std::env::var("TOURS_FILE").ok(),
            shiphero_auth_url: std::env::var("SHIPHERO_AUTH_URL")
                .unwrap_or_else(|_| "https://public-api.shiphero.com/auth/refresh".into()),
            shiphero_timeout_ms: std::env::var("SHIPHERO_TIMEOUT_MS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(25_000),
            barcode_concurrency: std::env::var("BARCODE_CONCURRENCY")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8),
        }
    }

    /// Whether this is a production deployment
    ///
    /// Gates developer-facing error detail out of responses.
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
