// src/bin/serveur.rs
//
// Service HTTP de calcul — point d’entrée
// ---------------------------------------
//   POST /calculate  {"expression": "..."}  =>  200 {"result": x} | 400 {"error": "..."}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use clap::Parser;

    use calculatrice_rpn::journal::init_journal;
    use calculatrice_rpn::serveur::{self, Config};

    let config = Config::parse();
    init_journal(&config.journal, config.journal_json);

    serveur::run(&config).await
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Pas de service HTTP en wasm32.
}
