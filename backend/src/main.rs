//! Backend entry-point: reads the environment, wires persistence, and runs
//! the HTTP server.

use std::env;

use actix_web::cookie::{Key, SameSite};
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};

use shelfmark::outbound::persistence::{DbPool, PoolConfig};
use shelfmark::server::{self, ServerConfig};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let key = load_session_key()?;

    let cookie_secure = env::var("SESSION_COOKIE_SECURE")
        .map(|v| v != "0")
        .unwrap_or(true);

    let bind_addr = env::var("BIND_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8080".into())
        .parse()
        .map_err(|e| std::io::Error::other(format!("invalid BIND_ADDR: {e}")))?;

    let mut config = ServerConfig::new(key, cookie_secure, SameSite::Lax, bind_addr);

    if let Ok(url) = env::var("DATABASE_URL") {
        let pool = DbPool::new(PoolConfig::new(url))
            .await
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        config = config.with_db_pool(pool);
    } else {
        warn!("DATABASE_URL not set; serving from in-memory stores");
    }

    server::run(config)?.await
}

/// Load the session key, generating an ephemeral one in dev builds when the
/// key file is unreadable.
fn load_session_key() -> std::io::Result<Key> {
    let key_path =
        env::var("SESSION_KEY_FILE").unwrap_or_else(|_| "/var/run/secrets/session_key".into());
    match std::fs::read(&key_path) {
        Ok(bytes) if bytes.len() < 32 => Err(std::io::Error::other(format!(
            "session key at {key_path} is too short ({} bytes, need at least 32)",
            bytes.len()
        ))),
        Ok(bytes) => Ok(Key::derive_from(&bytes)),
        Err(e) => {
            let allow_dev = env::var("SESSION_ALLOW_EPHEMERAL").ok().as_deref() == Some("1");
            if cfg!(debug_assertions) || allow_dev {
                warn!(path = %key_path, error = %e, "using temporary session key (dev only)");
                Ok(Key::generate())
            } else {
                Err(std::io::Error::other(format!(
                    "failed to read session key at {key_path}: {e}"
                )))
            }
        }
    }
}
