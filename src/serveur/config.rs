//! Configuration du service (ligne de commande + variables d’environnement)

use std::net::SocketAddr;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "calculatrice-serveur",
    version,
    about = "Service HTTP d’évaluation d’expressions arithmétiques"
)]
pub struct Config {
    /// Adresse d’écoute
    #[arg(long, env = "CALCULATRICE_ADRESSE", default_value = "127.0.0.1:5000")]
    pub adresse: SocketAddr,

    /// Niveau de journalisation (RUST_LOG a priorité)
    #[arg(long, env = "CALCULATRICE_JOURNAL", default_value = "info")]
    pub journal: String,

    /// Journal au format JSON
    #[arg(long, env = "CALCULATRICE_JOURNAL_JSON")]
    pub journal_json: bool,
}
