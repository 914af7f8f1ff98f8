// src/noyau/erreurs.rs
//
// Erreurs du noyau : une seule enum, récupérable par requête.
// Chaque étape du pipeline s’arrête à la première erreur (propagation `?`).

use super::jetons::Operateur;

#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// Nombre illisible ou caractère hors alphabet.
    #[error("lecture impossible: {0}")]
    Analyse(String),

    /// '(' jamais fermée ou ')' sans '('.
    #[error("parenthèses déséquilibrées: {0}")]
    ParentheseDesequilibree(&'static str),

    /// Opérateur appliqué avec moins de deux opérandes.
    #[error("opérateur '{0}' sans assez d’opérandes")]
    PileInsuffisante(Operateur),

    #[error("division par zéro")]
    DivisionParZero,

    /// Il reste 0 ou plus d’une valeur à la fin de l’évaluation.
    #[error("expression invalide: {0} valeur(s) restante(s) au lieu d’une")]
    ExpressionMalformee(usize),
}

impl ErreurCalcul {
    /// Nom stable du genre d’erreur (champ de log structuré).
    pub fn genre(&self) -> &'static str {
        match self {
            ErreurCalcul::Analyse(_) => "parse_error",
            ErreurCalcul::ParentheseDesequilibree(_) => "unbalanced_paren",
            ErreurCalcul::PileInsuffisante(_) => "stack_underflow",
            ErreurCalcul::DivisionParZero => "division_by_zero",
            ErreurCalcul::ExpressionMalformee(_) => "malformed_expression",
        }
    }
}
