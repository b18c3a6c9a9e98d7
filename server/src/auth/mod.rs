//! Authentication module.
//!
//! This module decides whether a trigger request may receive animation
//! parameters by comparing the caller's credential with the shared secret
//! the process was configured with.
//!
//! # Pre-conditions
//! - The shared secret is read once at startup and injected into an
//!   [`AuthGate`].
//!
//! # Post-conditions
//! - Every request maps to exactly one [`AuthDecision`].
//!
//! # Invariants
//! - The gate holds no per-request state; decisions depend only on the
//!   presented credential and the immutable configuration.

pub mod credential;
pub mod gate;

pub use credential::{ConfiguredSecret, Credential};
pub use gate::{AuthDecision, AuthGate, AuthPolicy, AuthPolicyParseError};
