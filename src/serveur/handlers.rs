//! Handlers REST du service de calcul

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{info, instrument, warn};

use crate::noyau::{evaluate, ErreurCalcul};

use super::dto::{ReponseCalcul, ReponseErreur, RequeteCalcul};

/// Erreur côté client : toujours 400 + `{"error": "<message>"}`.
#[derive(Debug)]
pub struct ErreurApi(String);

impl IntoResponse for ErreurApi {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(ReponseErreur { erreur: self.0 })).into_response()
    }
}

impl From<ErreurCalcul> for ErreurApi {
    fn from(e: ErreurCalcul) -> Self {
        ErreurApi(e.to_string())
    }
}

impl From<JsonRejection> for ErreurApi {
    fn from(rejet: JsonRejection) -> Self {
        ErreurApi(rejet.body_text())
    }
}

/// Handler pour POST /calculate
///
/// Le corps invalide (pas du JSON, champ manquant) suit la même enveloppe 400
/// que les erreurs du noyau.
#[instrument(skip_all)]
pub async fn calculer(
    requete: Result<Json<RequeteCalcul>, JsonRejection>,
) -> Result<Json<ReponseCalcul>, ErreurApi> {
    let Json(requete) = requete.map_err(|rejet| {
        warn!(statut = %rejet.status(), "corps de requête refusé");
        ErreurApi::from(rejet)
    })?;

    let expression = requete.expression.as_str();
    let resultat = evaluate(expression).map_err(|e| {
        warn!(expression, genre = e.genre(), erreur = %e, "calcul refusé");
        ErreurApi::from(e)
    })?;

    // JSON ne représente ni inf ni NaN (dépassement f64 en cours de calcul)
    if !resultat.is_finite() {
        warn!(expression, "résultat non représentable");
        return Err(ErreurApi("résultat hors limites".to_string()));
    }

    info!(expression, resultat, "calcul effectué");
    Ok(Json(ReponseCalcul { resultat }))
}
