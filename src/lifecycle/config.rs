//! Server configuration loaded from the process environment.

use std::env;
use std::net::SocketAddr;

/// Runtime settings for the camps server.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the HTTP listener binds to.
    pub bind_addr: SocketAddr,
    /// Prefix every route and `Location` URI is built under.
    pub base_path: String,
    /// Capacity of the store actor's request queue.
    pub store_buffer: usize,
    /// Whether the store starts with the sample camp and speakers.
    pub seed: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 5000)),
            base_path: "/api".to_string(),
            store_buffer: 32,
            seed: true,
        }
    }
}

impl AppConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CAMPS_BIND_ADDR` - listener address (default: 127.0.0.1:5000)
    /// - `CAMPS_BASE_PATH` - route prefix, may be empty (default: /api)
    /// - `CAMPS_STORE_BUFFER` - store request queue size (default: 32)
    /// - `CAMPS_SEED` - load sample data on startup (default: true)
    ///
    /// Unparseable values fall back to the default.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(addr) = read_env::<SocketAddr>("CAMPS_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Ok(base_path) = env::var("CAMPS_BASE_PATH") {
            config.base_path = base_path;
        }
        if let Some(capacity) = read_env::<usize>("CAMPS_STORE_BUFFER") {
            config.store_buffer = capacity.max(1);
        }
        if let Some(seed) = read_env::<bool>("CAMPS_SEED") {
            config.seed = seed;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
