//! Application settings loaded from environment variables.

use std::env;
use std::str::FromStr;

use super::constants::{DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT, POLICY_ALLOW, POLICY_REJECT};

/// What `create` does when a record with the same id already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicateIdPolicy {
    /// Both records are kept; lookups return the first one inserted.
    #[default]
    Allow,
    /// The create call fails with a conflict.
    Reject,
}

impl FromStr for DuplicateIdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            POLICY_ALLOW => Ok(DuplicateIdPolicy::Allow),
            POLICY_REJECT => Ok(DuplicateIdPolicy::Reject),
            other => Err(format!("unknown duplicate id policy: {}", other)),
        }
    }
}

impl std::fmt::Display for DuplicateIdPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DuplicateIdPolicy::Allow => write!(f, "{}", POLICY_ALLOW),
            DuplicateIdPolicy::Reject => write!(f, "{}", POLICY_REJECT),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    /// Start the store with the default seed record
    pub seed_default_user: bool,
    pub duplicate_id_policy: DuplicateIdPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            seed_default_user: true,
            duplicate_id_policy: DuplicateIdPolicy::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset values fall back to their defaults; unparsable ones do too,
    /// with a warning.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key/value source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let duplicate_id_policy = match lookup("DUPLICATE_ID_POLICY") {
            Some(raw) => raw.parse::<DuplicateIdPolicy>().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to '{}'", e, defaults.duplicate_id_policy);
                defaults.duplicate_id_policy
            }),
            None => defaults.duplicate_id_policy,
        };

        let seed_default_user = match lookup("SEED_DEFAULT_USER") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                tracing::warn!(
                    "invalid SEED_DEFAULT_USER '{}', falling back to '{}'",
                    raw,
                    defaults.seed_default_user
                );
                defaults.seed_default_user
            }),
            None => defaults.seed_default_user,
        };

        Self {
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            seed_default_user,
            duplicate_id_policy,
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

/// Boolean env values: true/false, 1/0, yes/no, on/off in any case.
fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
