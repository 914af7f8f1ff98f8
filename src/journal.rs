//! Journalisation (natif) : tracing-subscriber fmt + EnvFilter.

use tracing_subscriber::EnvFilter;

/// Installe le subscriber global. `RUST_LOG` a priorité sur `niveau`.
/// Sans effet si un subscriber est déjà installé.
pub fn init_journal(niveau: &str, json: bool) {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(niveau));
    let base = tracing_subscriber::fmt().with_env_filter(filtre).with_target(false);

    let _ = if json {
        base.json().try_init()
    } else {
        base.try_init()
    };
}
