//! Server configuration module.
//!
//! This module provides configuration loading for the LED trigger server
//! from environment variables.
//!
//! # Environment Variables
//!
//! - `MY_API_KEY`: Shared secret callers must present (optional; empty means unset)
//! - `LED_TRIGGER_AUTH_POLICY`: `strict` or `exact` (default: `strict`)
//! - `LED_TRIGGER_LISTEN_ADDRESS`: Address to bind (default: `127.0.0.1`)
//! - `LED_TRIGGER_LISTEN_PORT`: Port to listen on (default: `7071`)
//!
//! # Invariants
//!
//! - Configuration is read once at startup and never mutated afterwards
//! - `listen_port` is always a valid port number

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use crate::auth::{AuthGate, AuthPolicy, ConfiguredSecret};

const API_KEY_VAR: &str = "MY_API_KEY";
const AUTH_POLICY_VAR: &str = "LED_TRIGGER_AUTH_POLICY";
const LISTEN_ADDRESS_VAR: &str = "LED_TRIGGER_LISTEN_ADDRESS";
const LISTEN_PORT_VAR: &str = "LED_TRIGGER_LISTEN_PORT";

/// Server configuration.
///
/// # Post-conditions
///
/// When constructed via `from_env()`:
/// - `api_secret` is unset if the variable is missing or empty
/// - `listen_port` is always in the valid range
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Shared secret callers must present.
    pub api_secret: ConfiguredSecret,
    /// How a missing secret or credential is treated.
    pub auth_policy: AuthPolicy,
    /// Address to bind the HTTP listener to.
    pub listen_address: IpAddr,
    /// Port to listen on for trigger requests.
    pub listen_port: u16,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            api_secret: ConfiguredSecret::unset(),
            auth_policy: AuthPolicy::default(),
            listen_address: Self::DEFAULT_ADDRESS,
            listen_port: Self::DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Default port for the server.
    pub const DEFAULT_PORT: u16 = 7071;
    /// Default bind address.
    pub const DEFAULT_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `LED_TRIGGER_AUTH_POLICY` is set but not a known policy
    /// - `LED_TRIGGER_LISTEN_ADDRESS` is set but not an IP address
    /// - `LED_TRIGGER_LISTEN_PORT` is set but not a valid port number
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_secret = ConfiguredSecret::new(lookup(API_KEY_VAR));
        let auth_policy = Self::load_auth_policy(&lookup)?;
        let listen_address = Self::load_listen_address(&lookup)?;
        let listen_port = Self::load_listen_port(&lookup)?;

        Ok(Self {
            api_secret,
            auth_policy,
            listen_address,
            listen_port,
        })
    }

    /// The socket address the server binds to.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.listen_address, self.listen_port)
    }

    /// Build the request gate from the configured secret and policy.
    #[must_use]
    pub fn auth_gate(&self) -> AuthGate {
        AuthGate::new(self.api_secret.clone(), self.auth_policy)
    }

    fn load_auth_policy(
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<AuthPolicy, ConfigError> {
        lookup(AUTH_POLICY_VAR).map_or(Ok(AuthPolicy::default()), |value| {
            value
                .parse::<AuthPolicy>()
                .map_err(|e| ConfigError::InvalidValue {
                    name: AUTH_POLICY_VAR.to_string(),
                    message: e.to_string(),
                })
        })
    }

    fn load_listen_address(
        lookup: &impl Fn(&str) -> Option<String>,
    ) -> Result<IpAddr, ConfigError> {
        lookup(LISTEN_ADDRESS_VAR).map_or(Ok(Self::DEFAULT_ADDRESS), |value| {
            value.parse().map_err(|_| ConfigError::InvalidValue {
                name: LISTEN_ADDRESS_VAR.to_string(),
                message: format!("'{value}' is not a valid IP address"),
            })
        })
    }

    /// Load the listen port.
    ///
    /// Returns the default if not set.
    fn load_listen_port(lookup: &impl Fn(&str) -> Option<String>) -> Result<u16, ConfigError> {
        match lookup(LISTEN_PORT_VAR) {
            Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                name: LISTEN_PORT_VAR.to_string(),
                message: format!("'{value}' is not a valid port number (must be 0-65535)"),
            }),
            None => Ok(Self::DEFAULT_PORT),
        }
    }
}
