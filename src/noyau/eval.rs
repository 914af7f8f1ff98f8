//! Noyau — évaluation (pipeline réel)
//!
//! prétraitement -> jetons -> RPN -> valeur
//!
//! Chaque étape consomme toute la sortie de la précédente ; la première erreur
//! interrompt le pipeline (pas de résultat partiel).

use tracing::debug;

use super::erreurs::ErreurCalcul;
use super::jetons::{format_jetons, tokenize};
use super::pretraitement::pretraiter;
use super::rpn::{eval_rpn, to_rpn};

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct DemarcheNoyau {
    pub normalisee: String,
    pub jetons: String,
    pub rpn: String,
}

/// Évalue une expression arithmétique (+ - * /, parenthèses, décimaux, moins unaire).
pub fn evaluate(expr: &str) -> Result<f64, ErreurCalcul> {
    eval_expression(expr).map(|(v, _)| v)
}

/// Comme `evaluate`, mais retourne aussi la démarche (forme normalisée, jetons, RPN).
pub fn eval_expression(expr: &str) -> Result<(f64, DemarcheNoyau), ErreurCalcul> {
    let resultat = pipeline(expr);
    match &resultat {
        Ok((v, d)) => debug!(expression = expr, rpn = %d.rpn, resultat = v, "évaluation réussie"),
        Err(e) => debug!(expression = expr, genre = e.genre(), erreur = %e, "évaluation refusée"),
    }
    resultat
}

fn pipeline(expr: &str) -> Result<(f64, DemarcheNoyau), ErreurCalcul> {
    // 1) Prétraitement (espaces + "(-" / ",-")
    let normalisee = pretraiter(expr);

    // 2) Jetons
    let jetons = tokenize(&normalisee)?;

    // 3) RPN
    let rpn = to_rpn(&jetons)?;

    // 4) Valeur
    let valeur = eval_rpn(&rpn)?;

    let d = DemarcheNoyau {
        jetons: format_jetons(&jetons),
        rpn: format_jetons(&rpn),
        normalisee,
    };
    Ok((valeur, d))
}
