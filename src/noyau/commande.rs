// src/noyau/commande.rs
//
// Alphabet fermé des commandes (boutons + clavier).
// La vue ne parle au noyau QUE par ces valeurs.

use std::fmt;
use std::str::FromStr;

use super::erreur::CommandeInconnue;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Commande {
    /// Toujours 0..=9 : construire via `Commande::chiffre`, `depuis_touche` ou `from_str`.
    Chiffre(u8),
    Point,

    Ouvrante,
    Fermante,

    Plus,
    Moins,
    Fois,
    Divise,

    // Modificateurs unaires (sur le dernier opérande)
    Inverse,
    Carre,
    Racine,
    Signe,

    Effacer,
    Retour,
    Egal,
}

impl Commande {
    /// Les 24 touches du pavé, ligne par ligne (6 × 4).
    pub const CLAVIER: [Commande; 24] = [
        Commande::Ouvrante,
        Commande::Fermante,
        Commande::Effacer,
        Commande::Retour,
        Commande::Inverse,
        Commande::Carre,
        Commande::Racine,
        Commande::Divise,
        Commande::Chiffre(7),
        Commande::Chiffre(8),
        Commande::Chiffre(9),
        Commande::Fois,
        Commande::Chiffre(4),
        Commande::Chiffre(5),
        Commande::Chiffre(6),
        Commande::Moins,
        Commande::Chiffre(1),
        Commande::Chiffre(2),
        Commande::Chiffre(3),
        Commande::Plus,
        Commande::Signe,
        Commande::Chiffre(0),
        Commande::Point,
        Commande::Egal,
    ];

    /// `Chiffre(d)` si d ∈ 0..=9.
    pub fn chiffre(d: u8) -> Option<Commande> {
        (d <= 9).then_some(Commande::Chiffre(d))
    }

    /// Libellé affiché sur le bouton (et accepté par `from_str`).
    /// Un `Chiffre` hors 0..=9 n’a pas de libellé ("").
    pub fn libelle(self) -> &'static str {
        const CHIFFRES: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

        match self {
            Commande::Chiffre(d) => CHIFFRES.get(usize::from(d)).copied().unwrap_or(""),
            Commande::Point => ".",
            Commande::Ouvrante => "(",
            Commande::Fermante => ")",
            Commande::Plus => "+",
            Commande::Moins => "-",
            Commande::Fois => "×",
            Commande::Divise => "÷",
            Commande::Inverse => "1/X",
            Commande::Carre => "X²",
            Commande::Racine => "√X",
            Commande::Signe => "±",
            Commande::Effacer => "C",
            Commande::Retour => "⇦",
            Commande::Egal => "=",
        }
    }

    /// Touche clavier -> commande.
    /// Les modificateurs (1/X, X², √X, ±) n’ont pas de touche.
    pub fn depuis_touche(c: char) -> Option<Commande> {
        if let Some(d) = c.to_digit(10) {
            return Commande::chiffre(d as u8);
        }

        let cmd = match c {
            '.' => Commande::Point,
            '(' => Commande::Ouvrante,
            ')' => Commande::Fermante,
            '+' => Commande::Plus,
            '-' => Commande::Moins,
            '*' | '×' => Commande::Fois,
            '/' | '÷' => Commande::Divise,
            'c' | 'C' => Commande::Effacer,
            '\u{8}' => Commande::Retour,
            '\r' | '\n' | '=' => Commande::Egal,
            _ => return None,
        };
        Some(cmd)
    }
}

impl fmt::Display for Commande {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.libelle())
    }
}

impl FromStr for Commande {
    type Err = CommandeInconnue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cmd = match s {
            "." => Commande::Point,
            "(" => Commande::Ouvrante,
            ")" => Commande::Fermante,
            "+" => Commande::Plus,
            "-" => Commande::Moins,
            "×" => Commande::Fois,
            "÷" => Commande::Divise,
            "1/X" => Commande::Inverse,
            "X²" => Commande::Carre,
            "√X" => Commande::Racine,
            "±" => Commande::Signe,
            "C" => Commande::Effacer,
            "⇦" => Commande::Retour,
            "=" => Commande::Egal,
            _ => {
                let mut chars = s.chars();
                match (chars.next().and_then(|c| c.to_digit(10)), chars.next()) {
                    (Some(d), None) => Commande::Chiffre(d as u8),
                    _ => return Err(CommandeInconnue(s.to_string())),
                }
            }
        };
        Ok(cmd)
    }
}
