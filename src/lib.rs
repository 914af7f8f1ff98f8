//! Calculatrice RPN
//!
//! - noyau   : pipeline prétraitement -> jetons -> RPN -> valeur (f64)
//! - serveur : service HTTP `POST /calculate` (natif seulement)
//! - journal : subscriber tracing des binaires (natif seulement)

pub mod noyau;

#[cfg(not(target_arch = "wasm32"))]
pub mod journal;

#[cfg(not(target_arch = "wasm32"))]
pub mod serveur;

pub use noyau::{evaluate, ErreurCalcul};
