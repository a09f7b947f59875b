// src/noyau/lecture.rs
//
// Lecture du résultat :
// - entier exact si possible
// - développement décimal complet s’il est fini (dénominateur en 2^a·5^b)
// - sinon décimal tronqué à CHIFFRES_SIGNIFICATIFS chiffres significatifs

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

/// Chiffres significatifs pour un développement décimal infini.
pub const CHIFFRES_SIGNIFICATIFS: usize = 16;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Nombre de chiffres décimaux d’un entier positif.
fn nb_chiffres(n: &BigInt) -> usize {
    n.to_str_radix(10).len()
}

/// Convertit un entier “scalé” (×10^digits, positif) en texte décimal,
/// zéros finaux retirés.
fn scaled_vers_decimal(scaled: &BigInt, digits: usize) -> String {
    let scale = pow10(digits);
    let int_part = scaled / &scale;
    let frac_part = scaled % &scale;

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }
    let frac = frac.trim_end_matches('0');

    if frac.is_empty() {
        format!("{int_part}")
    } else {
        format!("{int_part}.{frac}")
    }
}

/// Si d = 2^a·5^b, renvoie max(a, b) : le nombre de décimales du développement fini.
fn decimales_finies(d: &BigInt) -> Option<usize> {
    let deux = BigInt::from(2);
    let cinq = BigInt::from(5);

    let mut reste = d.clone();
    let (mut a, mut b) = (0usize, 0usize);
    while (&reste % &deux).is_zero() {
        reste /= &deux;
        a += 1;
    }
    while (&reste % &cinq).is_zero() {
        reste /= &cinq;
        b += 1;
    }

    reste.is_one().then_some(a.max(b))
}

/// Décimales nécessaires pour CHIFFRES_SIGNIFICATIFS chiffres significatifs de n/d (> 0).
fn decimales_significatives(n: &BigInt, d: &BigInt) -> usize {
    let entier = n / d;
    if !entier.is_zero() {
        return CHIFFRES_SIGNIFICATIFS.saturating_sub(nb_chiffres(&entier));
    }

    // zéros entre la virgule et le premier chiffre non nul
    let mut zeros = nb_chiffres(d).saturating_sub(nb_chiffres(n) + 1);
    while n * pow10(zeros + 1) < *d {
        zeros += 1;
    }
    zeros + CHIFFRES_SIGNIFICATIFS
}

/// Texte du résultat : "2" (pas "2.0"), "-2.5", "0.00000000000000001", "0.3333333333333333".
pub fn format_resultat(r: &BigRational) -> String {
    if r.is_integer() {
        return r.to_integer().to_string();
    }

    let abs = r.abs();
    let (n, d) = (abs.numer(), abs.denom());

    let digits =
        decimales_finies(d).unwrap_or_else(|| decimales_significatives(n, d));
    let scaled = (n * pow10(digits)) / d;
    let txt = scaled_vers_decimal(&scaled, digits);

    if r.is_negative() {
        format!("-{txt}")
    } else {
        txt
    }
}
