// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Jeton en RPN (postfix), sans toucher à la formule
// - Puis évaluer la RPN avec une pile de valeurs exactes
//
// Règles:
// - priorité : + - => 1 ; × ÷ => 2 ; parenthèses => 0
// - à priorité égale on dépile (associativité à gauche)
// - pas de moins unaire : "-3" est invalide, le signe passe par ±

use num_rational::BigRational;

use super::erreur::ErreurCalcul;
use super::jetons::{Jeton, Parenthese};

fn priorite(j: &Jeton) -> u8 {
    match j {
        Jeton::Operateur(op) => op.priorite(),
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [2, +, 3, ×, 4]
///   rpn:    [2, 3, 4, ×, +]
pub fn vers_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurCalcul> {
    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut pile: Vec<Jeton> = Vec::new();

    for jeton in jetons {
        match jeton {
            Jeton::Operande { .. } => out.push(jeton.clone()),

            Jeton::Parenthese(Parenthese::Ouvrante) => pile.push(jeton.clone()),

            Jeton::Parenthese(Parenthese::Fermante) => {
                // dépile jusqu’à '(' (qui disparaît)
                loop {
                    match pile.pop() {
                        Some(Jeton::Parenthese(Parenthese::Ouvrante)) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurCalcul::ParenthesesDesequilibrees),
                    }
                }
            }

            Jeton::Operateur(op) => {
                let p = op.priorite();
                while pile.last().is_some_and(|top| priorite(top) >= p) {
                    if let Some(top) = pile.pop() {
                        out.push(top);
                    }
                }
                pile.push(jeton.clone());
            }
        }
    }

    // vide la pile
    while let Some(top) = pile.pop() {
        if matches!(top, Jeton::Parenthese(Parenthese::Ouvrante)) {
            return Err(ErreurCalcul::ParenthesesDesequilibrees);
        }
        out.push(top);
    }

    Ok(out)
}

/// Évalue une RPN. Il doit rester exactement une valeur à la fin.
pub fn evaluer_rpn(rpn: &[Jeton]) -> Result<BigRational, ErreurCalcul> {
    let mut st: Vec<BigRational> = Vec::new();

    for jeton in rpn {
        match jeton {
            Jeton::Operande { .. } => st.push(jeton.valeur()?),

            Jeton::Operateur(op) => {
                let b = st.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
                let a = st.pop().ok_or(ErreurCalcul::ExpressionInvalide)?;
                st.push(op.appliquer(&a, &b)?);
            }

            Jeton::Parenthese(_) => return Err(ErreurCalcul::ParenthesesDesequilibrees),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurCalcul::ExpressionInvalide),
    }
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(Jeton::affichage)
        .collect::<Vec<_>>()
        .join(" ")
}
