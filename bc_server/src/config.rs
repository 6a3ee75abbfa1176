//! Server configuration management.
//!
//! Consolidates all environment variable reads and provides validated configuration.

use bulls_cows::{
    SessionConfig,
    game::DEFAULT_SECRET_LENGTH,
    session::config::DEFAULT_INBOX_CAPACITY,
};
use std::net::SocketAddr;

/// Bind address used when neither `SERVER_BIND` nor `PORT` is set.
pub const DEFAULT_BIND: &str = "0.0.0.0:5000";

/// Complete server configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address
    pub bind: SocketAddr,
    /// Defaults applied to every new game session
    pub session: SessionConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Arguments
    ///
    /// * `bind_override` - Optional bind address override (from CLI args)
    ///
    /// # Errors
    ///
    /// Returns error if a variable is set but cannot be parsed
    pub fn from_env(bind_override: Option<SocketAddr>) -> Result<Self, ConfigError> {
        let bind = match bind_override {
            Some(bind) => bind,
            None => bind_from_env()?,
        };

        let session = SessionConfig {
            secret_length: parse_env_or("SECRET_LENGTH", DEFAULT_SECRET_LENGTH)?,
            inbox_capacity: parse_env_or("SESSION_INBOX_CAPACITY", DEFAULT_INBOX_CAPACITY)?,
        };

        Ok(ServerConfig { bind, session })
    }

    /// Validate configuration after loading
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.session
            .validate()
            .map_err(|reason| ConfigError::Invalid {
                var: "SECRET_LENGTH/SESSION_INBOX_CAPACITY".to_string(),
                reason,
            })
    }
}

/// Configuration error types
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration for {var}: {reason}")]
    Invalid { var: String, reason: String },
}

/// `SERVER_BIND` wins over `PORT`; hosting platforms usually only set the latter.
fn bind_from_env() -> Result<SocketAddr, ConfigError> {
    if let Ok(raw) = std::env::var("SERVER_BIND") {
        return raw.parse().map_err(|_| ConfigError::Invalid {
            var: "SERVER_BIND".to_string(),
            reason: format!("'{raw}' is not an IP:PORT address"),
        });
    }

    if let Ok(raw) = std::env::var("PORT") {
        let port: u16 = raw.parse().map_err(|_| ConfigError::Invalid {
            var: "PORT".to_string(),
            reason: format!("'{raw}' is not a port number"),
        })?;
        return Ok(SocketAddr::from(([0, 0, 0, 0], port)));
    }

    DEFAULT_BIND.parse().map_err(|_| ConfigError::Invalid {
        var: "SERVER_BIND".to_string(),
        reason: format!("default '{DEFAULT_BIND}' is not an IP:PORT address"),
    })
}

/// Helper to parse environment variable with default fallback
fn parse_env_or<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
            var: key.to_string(),
            reason: format!("'{raw}' could not be parsed"),
        }),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret_length: usize, inbox_capacity: usize) -> ServerConfig {
        ServerConfig {
            bind: "127.0.0.1:8080".parse().unwrap(),
            session: SessionConfig {
                secret_length,
                inbox_capacity,
            },
        }
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Invalid {
            var: "SECRET_LENGTH".to_string(),
            reason: "Must be between 1 and 10".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("SECRET_LENGTH"));
        assert!(msg.contains("between 1 and 10"));
    }

    #[test]
    fn test_default_bind_parses() {
        let bind: SocketAddr = DEFAULT_BIND.parse().unwrap();
        assert_eq!(bind.port(), 5000);
    }

    #[test]
    fn test_config_validation_defaults_ok() {
        assert!(config(4, 32).validate().is_ok());
        assert!(config(10, 1).validate().is_ok());
    }

    #[test]
    fn test_config_validation_secret_length() {
        for length in [0, 11] {
            let err = config(length, 32).validate().unwrap_err();
            let ConfigError::Invalid { reason, .. } = err;
            assert!(reason.contains("Secret length"), "{reason}");
        }
    }

    #[test]
    fn test_config_validation_inbox_capacity() {
        let err = config(4, 0).validate().unwrap_err();
        let ConfigError::Invalid { reason, .. } = err;
        assert!(reason.contains("Inbox capacity"), "{reason}");
    }

    #[test]
    fn test_bind_override_skips_env() {
        let bind: SocketAddr = "127.0.0.1:9999".parse().unwrap();
        let config = ServerConfig::from_env(Some(bind)).unwrap();
        assert_eq!(config.bind, bind);
    }
}
