pub mod api;
pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod prompt;
pub mod providers;
pub mod report;
pub mod service;
pub mod store;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

/// Start the consultation engine: tracing, provider chain from the
/// environment, in-memory store, session service, HTTP API. Blocks until
/// interrupted.
///
/// Collaborators are built before the runtime starts — the provider
/// clients are blocking HTTP clients and belong outside async context.
pub fn run() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let settings = config::ProviderSettings::from_env();
    let chain = providers::chain_from_settings(&settings);
    match chain.configured_tiers() {
        0 => tracing::warn!(
            "No external providers configured - responses come from the template fallback"
        ),
        n => tracing::info!(configured_providers = n, "Provider chain ready"),
    }

    let store = Arc::new(store::ConsultationStore::new());
    let service = Arc::new(service::SessionService::new(store, chain));

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(e) => {
            tracing::error!(error = %e, "Cannot start async runtime");
            return;
        }
    };

    runtime.block_on(async move {
        let mut server = match api::start_api_server(service, &config::bind_addr()).await {
            Ok(server) => server,
            Err(e) => {
                tracing::error!(error = %e, "Cannot start API server");
                return;
            }
        };

        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for shutdown signal");
        }
        server.shutdown();
    });

    tracing::info!("{} stopped", config::APP_NAME);
}
