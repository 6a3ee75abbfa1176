//! Session configuration.

use serde::{Deserialize, Serialize};

use crate::game::{DEFAULT_SECRET_LENGTH, MAX_SECRET_LENGTH};

/// Default actor inbox size
pub const DEFAULT_INBOX_CAPACITY: usize = 32;

/// Settings applied to every session the manager creates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Number of digits in the secret (default: 4)
    pub secret_length: usize,

    /// Bounded mpsc capacity of each session actor
    pub inbox_capacity: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret_length: DEFAULT_SECRET_LENGTH,
            inbox_capacity: DEFAULT_INBOX_CAPACITY,
        }
    }
}

impl SessionConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.secret_length == 0 || self.secret_length > MAX_SECRET_LENGTH {
            return Err(format!(
                "Secret length must be between 1 and {MAX_SECRET_LENGTH}"
            ));
        }

        if self.inbox_capacity == 0 {
            return Err("Inbox capacity must be greater than 0".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = SessionConfig::default();
        assert_eq!(config.secret_length, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_secret_length() {
        let config = SessionConfig {
            secret_length: 11,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = SessionConfig {
            secret_length: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_inbox_capacity() {
        let config = SessionConfig {
            inbox_capacity: 0,
            ..Default::default()
        };
        assert_eq!(
            config.validate().unwrap_err(),
            "Inbox capacity must be greater than 0"
        );
    }
}
