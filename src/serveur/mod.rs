//! Service HTTP : `POST /calculate`
//!
//! Enveloppe fine autour du noyau : un handler sans état, un routeur axum.

pub mod config;
pub mod dto;
pub mod handlers;

use anyhow::Context;
use axum::{routing::post, Router};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use config::Config;

/// Routeur complet (utilisable sans socket via `tower::ServiceExt::oneshot`).
pub fn router() -> Router {
    Router::new()
        .route("/calculate", post(handlers::calculer))
        .layer(TraceLayer::new_for_http())
}

/// Écoute sur `config.adresse` jusqu’à Ctrl-C.
pub async fn run(config: &Config) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.adresse)
        .await
        .with_context(|| format!("écoute impossible sur {}", config.adresse))?;

    info!(adresse = %listener.local_addr()?, "service de calcul à l’écoute");

    axum::serve(listener, router())
        .with_graceful_shutdown(signal_arret())
        .await
        .context("arrêt anormal du service")?;

    info!("service de calcul arrêté");
    Ok(())
}

async fn signal_arret() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // sans signal, on ne s’arrête jamais de soi-même
        warn!(erreur = %e, "Ctrl-C indisponible");
        std::future::pending::<()>().await;
    }
    info!("arrêt demandé");
}
