// src/noyau/erreur.rs
//
// Erreurs du noyau.
// Toutes finissent en "syntax error" côté affichage, mais restent distinctes ici
// (tests + journal).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalcul {
    /// 1/X sur une valeur nulle, ou ÷ par zéro.
    #[error("division par zéro")]
    DivisionParZero,

    /// √X d’une valeur négative.
    #[error("racine carrée d’un nombre négatif")]
    HorsDomaine,

    /// ')' sans '(' correspondante, ou '(' jamais fermée.
    #[error("parenthèses non équilibrées")]
    ParenthesesDesequilibrees,

    /// Opérateur sans deux opérandes, pile finale != 1 valeur, littéral illisible.
    #[error("expression invalide")]
    ExpressionInvalide,
}

/// Libellé hors de l’alphabet de commandes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("commande inconnue: {0:?}")]
pub struct CommandeInconnue(pub String);
