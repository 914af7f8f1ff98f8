//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - expressions générées AVEC leur valeur attendue (calculée à part)
//! - soupe de caractères : jamais de panique, seulement des erreurs typées

use std::time::{Duration, Instant};

use super::{evaluate, ErreurCalcul};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

/// Atome : entier ou décimal exactement représentable, parfois négatif.
/// Retourne (texte, valeur).
fn gen_atome(rng: &mut Rng) -> (String, f64) {
    let v = match rng.pick(8) {
        0 => 0.0,
        1 => 1.0,
        2 => 2.0,
        3 => 3.0,
        4 => 0.5,
        5 => 2.25,
        6 => 10.0,
        _ => 7.0,
    };

    if rng.coin() {
        // négatif : forme "(-x)", prétraitée en "(0-x)"
        (format!("(-{v})"), 0.0 - v)
    } else {
        (format!("{v}"), v)
    }
}

/// Expression entièrement parenthésée + valeur attendue.
/// Err(()) si une division par zéro doit survenir (ordre postfix : gauche, droite, op).
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, Result<f64, ()>) {
    if depth == 0 || rng.pick(4) == 0 {
        let (s, v) = gen_atome(rng);
        return (s, Ok(v));
    }

    let (sa, va) = gen_expr(rng, depth - 1);
    let (sb, vb) = gen_expr(rng, depth - 1);

    let op = ['+', '-', '*', '/'][rng.pick(4) as usize];

    let v = match (va, vb) {
        (Ok(a), Ok(b)) => match op {
            '+' => Ok(a + b),
            '-' => Ok(a - b),
            '*' => Ok(a * b),
            _ if b == 0.0 => Err(()),
            _ => Ok(a / b),
        },
        _ => Err(()),
    };

    // espaces aléatoires : le prétraitement doit les ignorer
    let sep = if rng.coin() { " " } else { "" };
    (format!("({sa}{sep}{op}{sep}{sb})"), v)
}

fn gen_soupe(rng: &mut Rng, len: usize) -> String {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '9', '.', '+', '-', '*', '/', '(', ')', ' ', ',', 'e', 'x',
    ];
    (0..len)
        .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_valeurs_attendues() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    let mut seen_ok = 0usize;
    let mut seen_div0 = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let (expr, attendu) = gen_expr(&mut rng, 5);

        match (evaluate(&expr), attendu) {
            (Ok(v), Ok(a)) => {
                // mêmes opérations, même ordre => même valeur au bit près
                assert!(
                    v == a || (v.is_nan() && a.is_nan()),
                    "expr={expr:?} attendu={a} obtenu={v}"
                );
                seen_ok += 1;
            }
            (Err(ErreurCalcul::DivisionParZero), Err(())) => seen_div0 += 1,
            (obtenu, attendu) => {
                panic!("expr={expr:?} attendu={attendu:?} obtenu={obtenu:?}")
            }
        }
    }

    // Si presque tout échoue, le fuzz ne “balaye” rien.
    assert!(seen_ok > 50, "trop peu de succès: {seen_ok} (div0: {seen_div0})");
}

#[test]
fn fuzz_safe_soupe_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(300);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let mut seen_err = 0usize;

    for _ in 0..2000 {
        budget(t0, max);

        let len = rng.pick(24) as usize;
        let expr = gen_soupe(&mut rng, len);

        // déterminisme : deux appels => même issue
        let r1 = evaluate(&expr);
        let r2 = evaluate(&expr);
        match (&r1, &r2) {
            (Ok(a), Ok(b)) => assert!(a == b || (a.is_nan() && b.is_nan()), "expr={expr:?}"),
            _ => assert_eq!(r1, r2, "expr={expr:?}"),
        }

        if let Err(e) = r1 {
            // message toujours lisible
            assert!(!e.to_string().is_empty());
            seen_err += 1;
        }
    }

    assert!(seen_err > 0);
}
