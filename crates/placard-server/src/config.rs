//! Server configuration from environment variables.

use std::env;

const DEFAULT_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_MESSAGE: &str = "Hello from placard!";

/// Runtime configuration for the placard server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Socket address to bind, `PLACARD_ADDR`.
    pub addr: String,
    /// Text served by the message endpoint, `PLACARD_MESSAGE`.
    pub message: String,
}

impl ServerConfig {
    /// Reads configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self {
            addr: env::var("PLACARD_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.into()),
            message: env::var("PLACARD_MESSAGE").unwrap_or_else(|_| DEFAULT_MESSAGE.into()),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: DEFAULT_ADDR.into(),
            message: DEFAULT_MESSAGE.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.addr, "0.0.0.0:8000");
        assert_eq!(config.message, "Hello from placard!");
    }
}
