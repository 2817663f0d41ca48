//! Environment-driven server configuration.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rand::rngs::OsRng;
use rand::RngCore;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Socket address to bind (NESTEGG_LISTEN_ADDR)
    pub listen_addr: String,
    /// SQLite database file path (NESTEGG_DB_PATH)
    pub db_path: String,
    /// JWT signing key (NESTEGG_SECRET_KEY, base64)
    pub secret_key: Vec<u8>,
    /// Access token lifetime in minutes (NESTEGG_TOKEN_TTL_MINUTES)
    pub token_ttl_minutes: i64,
    /// Allowed CORS origins, comma separated (NESTEGG_CORS_ORIGINS)
    pub cors_origins: Vec<String>,
    /// Hours between scheduled price refreshes (NESTEGG_PRICE_REFRESH_HOURS)
    pub price_refresh_hours: u64,
    /// Delay before the first scheduled refresh, in seconds
    /// (NESTEGG_PRICE_REFRESH_DELAY_SECS)
    pub price_refresh_delay_secs: u64,
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let secret_key = match std::env::var("NESTEGG_SECRET_KEY") {
            Ok(encoded) => BASE64
                .decode(encoded.trim())
                .map_err(|e| anyhow::anyhow!("NESTEGG_SECRET_KEY is not valid base64: {}", e))?,
            Err(_) => {
                // Tokens won't survive a restart without a configured key;
                // fine for development, noisy on purpose.
                tracing::warn!(
                    "NESTEGG_SECRET_KEY not set; generating an ephemeral JWT signing key"
                );
                let mut bytes = [0u8; 32];
                OsRng.fill_bytes(&mut bytes);
                bytes.to_vec()
            }
        };

        let token_ttl_minutes = env_or("NESTEGG_TOKEN_TTL_MINUTES", "45")
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid NESTEGG_TOKEN_TTL_MINUTES: {}", e))?;
        let price_refresh_hours = env_or("NESTEGG_PRICE_REFRESH_HOURS", "24")
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid NESTEGG_PRICE_REFRESH_HOURS: {}", e))?;
        let price_refresh_delay_secs = env_or("NESTEGG_PRICE_REFRESH_DELAY_SECS", "60")
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid NESTEGG_PRICE_REFRESH_DELAY_SECS: {}", e))?;

        let cors_origins = env_or(
            "NESTEGG_CORS_ORIGINS",
            "http://localhost:5173,http://localhost:3000,http://127.0.0.1:5173,http://127.0.0.1:3000",
        )
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

        Ok(Self {
            listen_addr: env_or("NESTEGG_LISTEN_ADDR", "0.0.0.0:8080"),
            db_path: env_or("NESTEGG_DB_PATH", "data/nestegg.db"),
            secret_key,
            token_ttl_minutes,
            cors_origins,
            price_refresh_hours,
            price_refresh_delay_secs,
        })
    }
}
