//! DTO REST du service de calcul
//!
//! Noms de champs JSON fixés par le contrat HTTP (`expression`, `result`, `error`).

use serde::{Deserialize, Serialize};

/// Corps de `POST /calculate`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RequeteCalcul {
    pub expression: String,
}

/// Réponse 200.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReponseCalcul {
    #[serde(rename = "result")]
    pub resultat: f64,
}

/// Réponse 400 (toutes les erreurs, noyau ou corps de requête).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReponseErreur {
    #[serde(rename = "error")]
    pub erreur: String,
}
