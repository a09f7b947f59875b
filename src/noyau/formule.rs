// src/noyau/formule.rs
//
// Formule = suite ordonnée de jetons, éditée caractère par caractère.
//
// Invariants:
// - jamais deux opérandes consécutifs (les chiffres fusionnent dans le dernier)
// - jamais deux opérateurs consécutifs (le nouveau remplace l’ancien)
// - un opérande contient au plus un '.'
//
// Pipeline de calcul : × implicites -> RPN -> évaluation.

use log::{debug, trace};
use num_rational::BigRational;
use num_traits::Zero;

use super::commande::Commande;
use super::erreur::ErreurCalcul;
use super::jetons::{Jeton, Modificateur, Op, Parenthese};
use super::rpn::{evaluer_rpn, format_jetons, vers_rpn};

/// Ce qu’une commande apporte à la formule.
#[derive(Clone, Copy, Debug)]
enum Saisie {
    Litteral(char),
    Operateur(Op),
    Parenthese(Parenthese),
    Modificateur(Modificateur),
    /// C, ⇦, = (gérées par la session) ou chiffre hors 0..=9.
    Ignoree,
}

fn classer(cmd: Commande) -> Saisie {
    match cmd {
        Commande::Chiffre(d) => char::from_digit(u32::from(d), 10)
            .map_or(Saisie::Ignoree, Saisie::Litteral),
        Commande::Point => Saisie::Litteral('.'),
        Commande::Ouvrante => Saisie::Parenthese(Parenthese::Ouvrante),
        Commande::Fermante => Saisie::Parenthese(Parenthese::Fermante),
        Commande::Plus => Saisie::Operateur(Op::Plus),
        Commande::Moins => Saisie::Operateur(Op::Moins),
        Commande::Fois => Saisie::Operateur(Op::Fois),
        Commande::Divise => Saisie::Operateur(Op::Divise),
        Commande::Inverse => Saisie::Modificateur(Modificateur::Inverse),
        Commande::Carre => Saisie::Modificateur(Modificateur::Carre),
        Commande::Racine => Saisie::Modificateur(Modificateur::Racine),
        Commande::Signe => Saisie::Modificateur(Modificateur::Signe),
        Commande::Effacer | Commande::Retour | Commande::Egal => Saisie::Ignoree,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formule {
    jetons: Vec<Jeton>,
}

impl Formule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn jetons(&self) -> &[Jeton] {
        &self.jetons
    }

    pub fn est_vide(&self) -> bool {
        self.jetons.is_empty()
    }

    /// Ajoute une commande de saisie (chiffre, point, opérateur, parenthèse, modificateur).
    pub fn ajouter(&mut self, cmd: Commande) {
        match classer(cmd) {
            Saisie::Modificateur(m) => self.basculer(m),
            Saisie::Litteral(c) => self.ajouter_litteral(c),
            Saisie::Operateur(op) => {
                // opérateur retapé : il corrige le précédent
                if let Some(Jeton::Operateur(dernier)) = self.jetons.last_mut() {
                    *dernier = op;
                    return;
                }
                self.jetons.push(Jeton::Operateur(op));
            }
            Saisie::Parenthese(p) => self.jetons.push(Jeton::Parenthese(p)),
            Saisie::Ignoree => {
                trace!("commande {cmd:?} ignorée par la formule");
            }
        }
    }

    fn ajouter_litteral(&mut self, c: char) {
        if let Some(Jeton::Operande { texte, .. }) = self.jetons.last_mut() {
            if c == '.' && texte.contains('.') {
                trace!("second point décimal ignoré dans {texte:?}");
                return;
            }
            texte.push(c);
            return;
        }
        self.jetons.push(Jeton::operande(c));
    }

    /// Modificateur : seulement si le dernier jeton est un opérande.
    fn basculer(&mut self, m: Modificateur) {
        if let Some(Jeton::Operande { modifs, .. }) = self.jetons.last_mut() {
            *modifs = modifs.bascule(m);
        }
    }

    /// ⇦ : retire un caractère d’un opérande long, sinon le jeton entier.
    pub fn effacer_dernier(&mut self) {
        let retirer_jeton = match self.jetons.last_mut() {
            Some(Jeton::Operande { texte, .. }) if texte.len() > 1 => {
                texte.pop();
                false
            }
            Some(_) => true,
            None => false,
        };
        if retirer_jeton {
            self.jetons.pop();
        }
    }

    pub fn vider(&mut self) {
        self.jetons.clear();
    }

    /// Texte de la formule (concaténation des affichages).
    pub fn affichage(&self) -> String {
        self.jetons.iter().map(Jeton::affichage).collect()
    }

    /// Évalue la formule. Vide => 0.
    ///
    /// Les × implicites ne sont écrits dans la formule qu’en cas de succès :
    /// un échec laisse la formule intacte.
    pub fn calculer(&mut self) -> Result<BigRational, ErreurCalcul> {
        if self.jetons.is_empty() {
            return Ok(BigRational::zero());
        }

        let complete = multiplications_implicites(&self.jetons);
        let rpn = vers_rpn(&complete)?;
        trace!("rpn: {}", format_jetons(&rpn));

        let valeur = evaluer_rpn(&rpn)?;
        self.jetons = complete;
        Ok(valeur)
    }
}

/// Construit une nouvelle suite avec un × entre chaque paire adjacente
/// (opérande, '('), (')', opérande) ou (')', '(').
/// Une seule passe sur les paires d’origine.
pub fn multiplications_implicites(jetons: &[Jeton]) -> Vec<Jeton> {
    let mut out = Vec::with_capacity(jetons.len() * 2);

    for (i, jeton) in jetons.iter().enumerate() {
        if let Some(precedent) = i.checked_sub(1).and_then(|k| jetons.get(k)) {
            if exige_multiplication(precedent, jeton) {
                debug!("× implicite inséré en position {}", out.len());
                out.push(Jeton::Operateur(Op::Fois));
            }
        }
        out.push(jeton.clone());
    }

    out
}

fn exige_multiplication(a: &Jeton, b: &Jeton) -> bool {
    use Parenthese::{Fermante, Ouvrante};

    matches!(
        (a, b),
        (Jeton::Operande { .. }, Jeton::Parenthese(Ouvrante))
            | (Jeton::Parenthese(Fermante), Jeton::Operande { .. })
            | (Jeton::Parenthese(Fermante), Jeton::Parenthese(Ouvrante))
    )
}
