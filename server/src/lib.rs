// Life of a trigger:
// 1. A display posts `{ "apiKey": ... }` to the trigger route
// 2. The auth gate compares the key with the configured secret
// 3. Rejected requests get a 400; authorized ones get the animation
//    parameters, composed and encoded once at startup
//
// System components:
//  - Wave composition library (`animation`)
//  - Credential gate (`auth`)
//  - HTTP routing (`handler`)
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::disallowed_methods))]

pub mod animation;
pub mod auth;
pub mod config;
pub mod handler;


pub use handler::{AnimationPayload, AppState, router};
