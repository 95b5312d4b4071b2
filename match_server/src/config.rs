use std::env;

pub const DEFAULT_PORT: u16 = 9080;
pub const DEFAULT_MAX_BODY_BYTES: u64 = 16 * 1024;

pub const PORT_ENV: &str = "MATCH_SERVER_PORT";
pub const MAX_BODY_BYTES_ENV: &str = "MATCH_SERVER_MAX_BODY_BYTES";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub max_body_bytes: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: DEFAULT_PORT,
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> ServerConfig {
        ServerConfig::from_lookup(|name| env::var(name).ok())
    }

    /// Unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> ServerConfig {
        ServerConfig {
            port: parse_or(lookup(PORT_ENV), DEFAULT_PORT),
            max_body_bytes: parse_or(lookup(MAX_BODY_BYTES_ENV), DEFAULT_MAX_BODY_BYTES),
        }
    }
}

fn parse_or<T: std::str::FromStr>(value: Option<String>, default: T) -> T {
    value
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_and_fallbacks() {
        let config = ServerConfig::from_lookup(|name| match name {
            PORT_ENV => Some("3030".to_string()),
            MAX_BODY_BYTES_ENV => Some("lots".to_string()),
            _ => None,
        });
        assert_eq!(config.port, 3030);
        assert_eq!(config.max_body_bytes, DEFAULT_MAX_BODY_BYTES);
        assert_eq!(ServerConfig::from_lookup(|_| None), ServerConfig::default());
    }
}
