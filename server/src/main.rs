#![cfg_attr(test, allow(clippy::disallowed_methods))]
// Forbid unwrap() in production code so a bad environment exits cleanly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]

use led_trigger::{AnimationPayload, AppState, config::ServerConfig, router};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "led_trigger=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables
    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    let gate = config.auth_gate();
    tracing::info!(
        "Loaded configuration: secret_set={}, auth_policy={}",
        gate.secret_is_set(),
        gate.policy()
    );
    if !gate.secret_is_set() {
        tracing::warn!("MY_API_KEY is not set; auth policy '{}' applies", gate.policy());
    }

    // The pattern is fixed for the lifetime of the process, so compose and
    // encode it once.
    let payload = match AnimationPayload::led_pattern() {
        Ok(payload) => payload,
        Err(e) => {
            tracing::error!("Failed to build animation parameters: {e}");
            std::process::exit(1);
        }
    };
    tracing::debug!(
        "animation payload: {} active waves, etag {:?}",
        payload.parameters().active_waves().count(),
        payload.etag()
    );

    let state = AppState::new(gate, payload);
    let app = router(state);

    let addr = config.socket_addr();
    tracing::info!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .unwrap_or_else(|e| {
            tracing::error!("Failed to bind: {e}");
            std::process::exit(1);
        });

    axum::serve(listener, app).await.unwrap_or_else(|e| {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    });
}
