// src/noyau/jetons.rs

use std::fmt;

use super::erreurs::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '*' => Some(Operateur::Fois),
            '/' => Some(Operateur::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '*',
            Operateur::Divise => '/',
        }
    }

    /// Table de précédence (constante) : + - => 1 ; * / => 2.
    pub const fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise => 2,
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    /// Toujours fini (garanti par `tokenize`).
    Nombre(f64),
    Op(Operateur),
    ParG,
    ParD,
}

/// Tokenize une chaîne déjà normalisée (voir `pretraitement`).
///
/// Un accumulateur construit le nombre courant :
/// - chiffres et '.' s’accumulent
/// - '-' s’accumule (littéral négatif) en tête, ou juste après `( + - * /`
/// - sinon '-' est l’opérateur binaire
/// - `+ * / ( )` vident l’accumulateur puis sont émis tels quels
///
/// Tout autre caractère est refusé (`ErreurCalcul::Analyse`).
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurCalcul> {
    let chars: Vec<char> = s.chars().collect();
    let mut out = Vec::new();
    let mut courant = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_digit() || c == '.' {
            courant.push(c);
            continue;
        }

        if c == '-' && (i == 0 || matches!(chars[i - 1], '(' | '+' | '-' | '*' | '/')) {
            courant.push(c);
            continue;
        }

        let jeton = match c {
            '(' => Jeton::ParG,
            ')' => Jeton::ParD,
            _ => match Operateur::depuis_char(c) {
                Some(op) => Jeton::Op(op),
                None => {
                    return Err(ErreurCalcul::Analyse(format!("caractère inattendu '{c}'")));
                }
            },
        };

        vider(&mut courant, &mut out)?;
        out.push(jeton);
    }

    vider(&mut courant, &mut out)?;
    Ok(out)
}

fn vider(courant: &mut String, out: &mut Vec<Jeton>) -> Result<(), ErreurCalcul> {
    if courant.is_empty() {
        return Ok(());
    }
    out.push(Jeton::Nombre(lire_nombre(courant)?));
    courant.clear();
    Ok(())
}

/// Grammaire décimale stricte : `-? ( CHIFFRES ('.' CHIFFRES?)? | '.' CHIFFRES )`.
/// Pas de '+' en tête, pas d’exposant, pas de inf/nan.
fn lire_nombre(texte: &str) -> Result<f64, ErreurCalcul> {
    let invalide = || ErreurCalcul::Analyse(format!("nombre invalide '{texte}'"));

    let corps = texte.strip_prefix('-').unwrap_or(texte);
    let (entiere, frac) = match corps.split_once('.') {
        Some((e, f)) => (e, Some(f)),
        None => (corps, None),
    };

    let que_des_chiffres = |p: &str| p.bytes().all(|b| b.is_ascii_digit());
    let forme_ok = que_des_chiffres(entiere)
        && frac.map_or(true, que_des_chiffres)
        && (!entiere.is_empty() || frac.is_some_and(|f| !f.is_empty()));
    if !forme_ok {
        return Err(invalide());
    }

    let v: f64 = texte.parse().map_err(|_| invalide())?;
    if !v.is_finite() {
        return Err(ErreurCalcul::Analyse(format!("nombre hors limites '{texte}'")));
    }
    Ok(v)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(|t| match t {
            Jeton::Nombre(v) => format!("{v}"),
            Jeton::Op(op) => op.to_string(),
            Jeton::ParG => "(".to_string(),
            Jeton::ParD => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
