// src/noyau/pretraitement.rs
//
// Normalisation avant tokenisation :
// - supprime tous les espaces
// - "(-" => "(0-" et ",-" => ",0-"
//
// Le moins unaire en tête d’expression ou après un opérateur n’est PAS traité ici :
// la tokenisation le lit comme début de littéral négatif.

pub fn pretraiter(expr: &str) -> String {
    let compact: String = expr.chars().filter(|c| !c.is_whitespace()).collect();
    compact.replace("(-", "(0-").replace(",-", ",0-")
}
