// src/noyau/jetons.rs
//
// Jeton = unité de la formule : opérande (littéral décimal + modificateurs),
// opérateur (+ - × ÷) ou parenthèse.
//
// Règles:
// - Le genre d’un jeton est fixé à sa création (variant de l’enum).
// - Les modificateurs ne vivent QUE sur un opérande.
// - Valeur et affichage appliquent les modificateurs dans le même ordre :
//   signe -> carré -> racine -> inverse.

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{Signed, Zero};

use super::erreur::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Op {
    pub fn symbole(self) -> char {
        match self {
            Op::Plus => '+',
            Op::Moins => '-',
            Op::Fois => '×',
            Op::Divise => '÷',
        }
    }

    /// + - => 1 ; × ÷ => 2 (parenthèses : 0, voir rpn.rs).
    pub fn priorite(self) -> u8 {
        match self {
            Op::Plus | Op::Moins => 1,
            Op::Fois | Op::Divise => 2,
        }
    }

    /// a (op) b, avec `a` = opérande gauche.
    pub fn appliquer(self, a: &BigRational, b: &BigRational) -> Result<BigRational, ErreurCalcul> {
        let r = match self {
            Op::Plus => a + b,
            Op::Moins => a - b,
            Op::Fois => a * b,
            Op::Divise => {
                if b.is_zero() {
                    return Err(ErreurCalcul::DivisionParZero);
                }
                a / b
            }
        };
        Ok(r)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Parenthese {
    Ouvrante,
    Fermante,
}

impl Parenthese {
    pub fn symbole(self) -> char {
        match self {
            Parenthese::Ouvrante => '(',
            Parenthese::Fermante => ')',
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modificateur {
    Signe,
    Carre,
    Racine,
    Inverse,
}

/// Drapeaux unaires d’un opérande. Valeur immuable : une bascule rend un nouveau record.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modificateurs {
    pub negatif: bool,
    pub carre: bool,
    pub racine: bool,
    pub inverse: bool,
}

impl Modificateurs {
    pub fn bascule(self, m: Modificateur) -> Self {
        match m {
            Modificateur::Signe => Self {
                negatif: !self.negatif,
                ..self
            },
            Modificateur::Carre => Self {
                carre: !self.carre,
                ..self
            },
            Modificateur::Racine => Self {
                racine: !self.racine,
                ..self
            },
            Modificateur::Inverse => Self {
                inverse: !self.inverse,
                ..self
            },
        }
    }
}

/// Genre d’un jeton (sans ses données).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Genre {
    Operande,
    Operateur,
    Parenthese,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Jeton {
    /// `texte` : littéral décimal non signé en cours de saisie ("12", "3.", ".5").
    Operande {
        texte: String,
        modifs: Modificateurs,
    },
    Operateur(Op),
    Parenthese(Parenthese),
}

impl Jeton {
    pub fn operande(texte: impl Into<String>) -> Self {
        Jeton::Operande {
            texte: texte.into(),
            modifs: Modificateurs::default(),
        }
    }

    pub fn genre(&self) -> Genre {
        match self {
            Jeton::Operande { .. } => Genre::Operande,
            Jeton::Operateur(_) => Genre::Operateur,
            Jeton::Parenthese(_) => Genre::Parenthese,
        }
    }

    /// Valeur numérique exacte d’un opérande (modificateurs appliqués).
    pub fn valeur(&self) -> Result<BigRational, ErreurCalcul> {
        let Jeton::Operande { texte, modifs } = self else {
            return Err(ErreurCalcul::ExpressionInvalide);
        };

        let mut v = lire_litteral(texte)?;

        if modifs.negatif {
            v = -v;
        }
        if modifs.carre {
            v = &v * &v;
        }
        if modifs.racine {
            v = racine_carree(&v)?;
        }
        if modifs.inverse {
            if v.is_zero() {
                return Err(ErreurCalcul::DivisionParZero);
            }
            v = v.recip();
        }

        Ok(v)
    }

    /// Texte affiché pour ce jeton seul.
    pub fn affichage(&self) -> String {
        match self {
            Jeton::Operande { texte, modifs } => {
                let mut s = texte.clone();
                if modifs.negatif {
                    s = format!("(-{s})");
                }
                if modifs.carre {
                    s.push('²');
                }
                if modifs.racine {
                    s.insert(0, '√');
                }
                if modifs.inverse {
                    s = format!("(1/{s})");
                }
                s
            }
            Jeton::Operateur(op) => op.symbole().to_string(),
            Jeton::Parenthese(p) => p.symbole().to_string(),
        }
    }
}

/// "12.5" -> 125/10 (exact). Accepte "5." et ".5", refuse "." et "".
fn lire_litteral(texte: &str) -> Result<BigRational, ErreurCalcul> {
    let (entier, fraction) = texte.split_once('.').unwrap_or((texte, ""));

    let chiffres_ok = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (entier.is_empty() && fraction.is_empty()) || !chiffres_ok(entier) || !chiffres_ok(fraction) {
        return Err(ErreurCalcul::ExpressionInvalide);
    }

    let tout = format!("{entier}{fraction}");
    let n = BigInt::parse_bytes(tout.as_bytes(), 10).ok_or(ErreurCalcul::ExpressionInvalide)?;
    let d = BigInt::from(10).pow(fraction.len() as u32);

    Ok(BigRational::new(n, d))
}

/// Chiffres significatifs (au moins) d’une racine non exacte.
const CHIFFRES_RACINE: usize = 17;

/// √x : exacte si numérateur et dénominateur sont des carrés parfaits,
/// sinon racine entière de n·10^(2k)/d, ramenée à k décimales.
fn racine_carree(x: &BigRational) -> Result<BigRational, ErreurCalcul> {
    if x.is_negative() {
        return Err(ErreurCalcul::HorsDomaine);
    }

    let (n, d) = (x.numer(), x.denom());
    let rn = n.sqrt();
    let rd = d.sqrt();
    if &(&rn * &rn) == n && &(&rd * &rd) == d {
        return Ok(BigRational::new(rn, rd));
    }

    // k grandit avec les zéros après la virgule (x très petit)
    let ecart = d
        .to_str_radix(10)
        .len()
        .saturating_sub(n.to_str_radix(10).len());
    let k = CHIFFRES_RACINE + ecart / 2 + 1;
    let scale = BigInt::from(10).pow(k as u32);

    let r = ((n * &scale * &scale) / d).sqrt();
    Ok(BigRational::new(r, scale))
}
