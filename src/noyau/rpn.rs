// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Jeton (infixe) en RPN (postfix)
// - Puis évaluer la RPN avec une pile de valeurs
//
// Règles:
// - associativité à gauche : à précédence égale on dépile ("a-b-c" => "a b - c -")
// - '(' restée sur la pile à la fin => erreur (pas de vidage aveugle)

use super::erreurs::ErreurCalcul;
use super::jetons::{Jeton, Operateur};

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Nombre(2), Plus, Nombre(3), Fois, Nombre(4)]
///   rpn:    [Nombre(2), Nombre(3), Nombre(4), Fois, Plus]
pub fn to_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurCalcul> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Jeton> = Vec::new();

    for &tok in jetons {
        match tok {
            Jeton::Nombre(_) => out.push(tok),

            Jeton::Op(op) => {
                // dépile tant que le sommet est un opérateur au moins aussi fort
                while let Some(&Jeton::Op(top)) = ops.last() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    out.push(Jeton::Op(top));
                    ops.pop();
                }
                ops.push(tok);
            }

            Jeton::ParG => ops.push(tok),

            Jeton::ParD => loop {
                match ops.pop() {
                    Some(Jeton::ParG) => break,
                    Some(top) => out.push(top),
                    None => return Err(ErreurCalcul::ParentheseDesequilibree("')' sans '('")),
                }
            },
        }
    }

    // vide la pile ops
    while let Some(top) = ops.pop() {
        if matches!(top, Jeton::ParG) {
            return Err(ErreurCalcul::ParentheseDesequilibree("'(' non fermée"));
        }
        out.push(top);
    }

    Ok(out)
}

/// Évalue une RPN. Il doit rester exactement une valeur sur la pile.
pub fn eval_rpn(rpn: &[Jeton]) -> Result<f64, ErreurCalcul> {
    let mut pile: Vec<f64> = Vec::new();

    for &tok in rpn {
        match tok {
            Jeton::Nombre(v) => pile.push(v),

            Jeton::Op(op) => {
                let (Some(b), Some(a)) = (pile.pop(), pile.pop()) else {
                    return Err(ErreurCalcul::PileInsuffisante(op));
                };
                pile.push(appliquer(op, a, b)?);
            }

            Jeton::ParG | Jeton::ParD => {
                return Err(ErreurCalcul::ParentheseDesequilibree("parenthèse inattendue en RPN"));
            }
        }
    }

    match pile.as_slice() {
        [v] => Ok(*v),
        reste => Err(ErreurCalcul::ExpressionMalformee(reste.len())),
    }
}

fn appliquer(op: Operateur, a: f64, b: f64) -> Result<f64, ErreurCalcul> {
    Ok(match op {
        Operateur::Plus => a + b,
        Operateur::Moins => a - b,
        Operateur::Fois => a * b,
        Operateur::Divise => {
            // couvre aussi -0.0
            if b == 0.0 {
                return Err(ErreurCalcul::DivisionParZero);
            }
            a / b
        }
    })
}
