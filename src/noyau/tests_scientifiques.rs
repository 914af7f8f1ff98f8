//! Tests scientifiques (campagne) : propriétés attendues du pipeline.
//!
//! But : vérifier les invariants sans faire chauffer la machine.
//! - budget temps global
//! - tailles bornées
//! - tolérance flottante explicite (1e-9)

use std::time::{Duration, Instant};

use super::{eval_expression, evaluate, ErreurCalcul};

fn eval_ok(expr: &str) -> f64 {
    evaluate(expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn assert_valeur(expr: &str, attendu: f64) {
    let v = eval_ok(expr);
    assert!(
        (v - attendu).abs() <= 1e-9,
        "expr={expr:?} attendu={attendu} obtenu={v}"
    );
}

fn assert_genre(expr: &str, genre: &str) {
    match evaluate(expr) {
        Ok(v) => panic!("expr={expr:?} devait échouer ({genre}), obtenu {v}"),
        Err(e) => assert_eq!(e.genre(), genre, "expr={expr:?} err={e}"),
    }
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arithmétique de base ------------------------ */

#[test]
fn sci_priorites_operateurs() {
    assert_valeur("2+3*4", 14.0);
    assert_valeur("(2+3)*4", 20.0);
    assert_valeur("2*3+4*5", 26.0);
    assert_valeur("1+2*3-4/2", 5.0);
}

#[test]
fn sci_associativite_gauche() {
    assert_valeur("10-2-3", 5.0);
    assert_valeur("8/4/2", 1.0);
    assert_valeur("2*6/3", 4.0);
    assert_valeur("1-2+3", 2.0);
}

#[test]
fn sci_decimaux() {
    assert_valeur("0.1+0.2", 0.3);
    assert_valeur("1.5*4", 6.0);
    assert_valeur(".5+.25", 0.75);
    assert_valeur("7/2", 3.5);
}

/* ------------------------ Moins unaire ------------------------ */

#[test]
fn sci_moins_unaire() {
    assert_valeur("-3.7 + (-4) * 5", -23.7);
    assert_valeur("-3.7 + (-4) * (-(-2 - 1)) / 5", -6.1);
    assert_valeur("2*-3", -6.0);
    assert_valeur("5--3", 8.0);
    assert_valeur("(-(-(-1)))", -1.0);
}

#[test]
fn sci_moins_unaire_non_supporte() {
    // en tête devant une parenthèse : le littéral "-" est vide
    assert_genre("-(3)", "parse_error");
    assert_genre("--3", "parse_error");
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_division_par_zero() {
    assert_eq!(evaluate("5/0"), Err(ErreurCalcul::DivisionParZero));
    assert_eq!(evaluate("5/(2-2)"), Err(ErreurCalcul::DivisionParZero));
    assert_eq!(evaluate("0/0.0"), Err(ErreurCalcul::DivisionParZero));
}

#[test]
fn sci_parentheses_desequilibrees() {
    assert_genre("(1+2", "unbalanced_paren");
    assert_genre("1+2)", "unbalanced_paren");
    assert_genre("((1)", "unbalanced_paren");
    assert_genre(")(", "unbalanced_paren");
}

#[test]
fn sci_operande_manquante() {
    for expr in ["+5", "5+", "*", "2*/3"] {
        match evaluate(expr) {
            Err(ErreurCalcul::PileInsuffisante(_)) | Err(ErreurCalcul::ExpressionMalformee(_)) => {}
            autre => panic!("expr={expr:?} obtenu {autre:?}"),
        }
    }
}

#[test]
fn sci_residus_sur_la_pile() {
    assert_genre("", "malformed_expression");
    assert_genre("()", "malformed_expression");
    assert_genre("(1)(2)", "malformed_expression");
}

#[test]
fn sci_grammaire_stricte() {
    assert_genre("2e3", "parse_error");
    assert_genre("1.2.3", "parse_error");
    assert_genre("abc", "parse_error");
    assert_genre("1,-2", "parse_error");
}

/* ------------------------ Déterminisme + espaces ------------------------ */

#[test]
fn sci_determinisme() {
    for expr in ["-3.7 + (-4) * 5", "10-2-3", "5/0", "(1+2"] {
        assert_eq!(eval_expression(expr), eval_expression(expr), "expr={expr:?}");
    }
}

#[test]
fn sci_espaces_indifferents() {
    assert_eq!(evaluate("2 + 3"), evaluate("2+3"));
    assert_eq!(evaluate(" ( 1 +\t2 ) *\n3 "), evaluate("(1+2)*3"));
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn sci_stress_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // 2000 niveaux : piles en Vec, pas de récursion
    let n = 2000;
    let expr = format!("{}1{}", "(".repeat(n), "+1)".repeat(n));
    budget(t0, max);

    assert_valeur(&expr, (n + 1) as f64);
    budget(t0, max);
}

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let expr = vec!["0.5"; 5000].join(" + ");
    budget(t0, max);

    assert_valeur(&expr, 2500.0);
    budget(t0, max);
}
