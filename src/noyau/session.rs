//! Noyau — session (contrôleur)
//!
//! Une formule + la dernière réponse + un drapeau d’erreur.
//! La vue n’a besoin que de trois appels :
//! - `soumettre(commande)`
//! - `affichage_formule()`
//! - `affichage_reponse()`
//!
//! Contrats :
//! - le drapeau d’erreur est armé par "=" et effacé par toute autre commande
//! - une erreur ne touche ni la formule ni la dernière réponse

use log::{debug, trace};

use super::commande::Commande;
use super::erreur::{CommandeInconnue, ErreurCalcul};
use super::formule::Formule;
use super::lecture::format_resultat;

/// Réponse affichée au démarrage.
pub const REPONSE_INITIALE: &str = "=0";

/// Message unique pour toutes les erreurs de calcul.
pub const MESSAGE_ERREUR: &str = "syntax error";

#[derive(Clone, Debug)]
pub struct Session {
    formule: Formule,
    derniere_reponse: String,
    erreur_en_attente: bool,
    derniere_erreur: Option<ErreurCalcul>,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            formule: Formule::new(),
            derniere_reponse: REPONSE_INITIALE.to_string(),
            erreur_en_attente: false,
            derniere_erreur: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Traite une commande de l’alphabet.
    pub fn soumettre(&mut self, cmd: Commande) {
        trace!("commande {cmd}");

        self.erreur_en_attente = false;
        self.derniere_erreur = None;

        match cmd {
            Commande::Effacer => self.formule.vider(),
            Commande::Retour => self.formule.effacer_dernier(),
            Commande::Egal => self.evaluer(),
            _ => self.formule.ajouter(cmd),
        }
    }

    /// Forme texte de `soumettre` ("7", "×", "√X", ...).
    /// Un libellé inconnu est refusé sans rien changer.
    pub fn soumettre_libelle(&mut self, libelle: &str) -> Result<(), CommandeInconnue> {
        let cmd: Commande = libelle.parse()?;
        self.soumettre(cmd);
        Ok(())
    }

    fn evaluer(&mut self) {
        // armé : un échec reste visible jusqu’à la prochaine commande
        self.erreur_en_attente = true;

        match self.formule.calculer() {
            Ok(valeur) => {
                self.derniere_reponse = format!("={}", format_resultat(&valeur));
                self.erreur_en_attente = false;
                debug!("{} {}", self.formule.affichage(), self.derniere_reponse);
            }
            Err(e) => {
                debug!("échec du calcul de {:?}: {e}", self.formule.affichage());
                self.derniere_erreur = Some(e);
            }
        }
    }

    pub fn affichage_formule(&self) -> String {
        self.formule.affichage()
    }

    pub fn affichage_reponse(&self) -> &str {
        if self.erreur_en_attente {
            MESSAGE_ERREUR
        } else {
            &self.derniere_reponse
        }
    }

    pub fn formule(&self) -> &Formule {
        &self.formule
    }

    /// Genre de l’erreur affichée (None si aucune).
    pub fn derniere_erreur(&self) -> Option<&ErreurCalcul> {
        self.derniere_erreur.as_ref()
    }
}
