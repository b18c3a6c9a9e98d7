//! The authorization decision for trigger requests.

use std::str::FromStr;

use super::credential::{ConfiguredSecret, Credential};

/// How an unset secret and a missing credential are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPolicy {
    /// A configured secret must be matched exactly. With no secret
    /// configured, every request is accepted, including ones without a
    /// credential.
    #[default]
    Strict,
    /// Only a credential equal to a configured secret is accepted. With no
    /// secret configured, every request is rejected, including ones without
    /// a credential.
    ExactMatch,
}

/// Error returned when a policy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthPolicyParseError(pub String);

impl std::fmt::Display for AuthPolicyParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown auth policy '{}' (expected 'strict' or 'exact')", self.0)
    }
}

impl std::error::Error for AuthPolicyParseError {}

impl FromStr for AuthPolicy {
    type Err = AuthPolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "exact" | "exact-match" => Ok(Self::ExactMatch),
            _ => Err(AuthPolicyParseError(s.to_string())),
        }
    }
}

impl std::fmt::Display for AuthPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Strict => write!(f, "strict"),
            Self::ExactMatch => write!(f, "exact"),
        }
    }
}

/// Outcome of checking one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDecision {
    /// The caller may receive the animation parameters.
    Fulfilled,
    /// The caller is not authorized.
    Rejected,
}

/// Compares presented credentials against the configured secret.
///
/// # Invariants
/// - Immutable after construction; safe to share between concurrent
///   requests without synchronization.
#[derive(Debug, Clone, Default)]
pub struct AuthGate {
    secret: ConfiguredSecret,
    policy: AuthPolicy,
}

impl AuthGate {
    #[must_use]
    pub const fn new(secret: ConfiguredSecret, policy: AuthPolicy) -> Self {
        Self { secret, policy }
    }

    #[must_use]
    pub const fn policy(&self) -> AuthPolicy {
        self.policy
    }

    #[must_use]
    pub const fn secret_is_set(&self) -> bool {
        self.secret.is_set()
    }

    /// Decide whether a request presenting `credential` is authorized.
    #[must_use]
    pub fn authorize(&self, credential: Option<&Credential>) -> AuthDecision {
        let accepted = match (self.policy, credential) {
            (AuthPolicy::Strict, _) if !self.secret.is_set() => true,
            (_, Some(credential)) => self.secret.matches(credential),
            (_, None) => false,
        };

        if accepted {
            AuthDecision::Fulfilled
        } else {
            AuthDecision::Rejected
        }
    }
}
