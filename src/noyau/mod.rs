//! Noyau de calcul (f64)
//!
//! Organisation interne :
//! - pretraitement.rs : espaces + moins unaire "(-" / ",-"
//! - jetons.rs        : tokenisation + grammaire décimale stricte
//! - rpn.rs           : shunting-yard + évaluation de la RPN
//! - erreurs.rs       : ErreurCalcul (5 genres)
//! - eval.rs          : pipeline complet
//!
//! Aucun état global : tout est alloué par appel, appelable depuis plusieurs threads.

pub mod erreurs;
pub mod eval;
pub mod jetons;
pub mod pretraitement;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreurs::ErreurCalcul;
pub use eval::{eval_expression, evaluate, DemarcheNoyau};
pub use jetons::{Jeton, Operateur};
