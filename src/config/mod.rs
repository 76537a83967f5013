use std::env;
use std::str::FromStr;

use lazy_static::lazy_static;

lazy_static! {
    pub static ref CONFIG: Config = Config::from_env();
}

#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
    pub server_selection_timeout_ms: u64,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        Self {
            server_host: env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            server_port: parse_or("SERVER_PORT", 8000),
            mongodb_uri: env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017/".to_string()),
            database_name: env::var("DATABASE_NAME")
                .unwrap_or_else(|_| "UserManagement".to_string()),
            server_selection_timeout_ms: parse_or("MONGODB_SERVER_SELECTION_TIMEOUT_MS", 5000),
        }
    }
}

/// Read a numeric variable, keeping `default` when it is unset or unparsable.
fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}
