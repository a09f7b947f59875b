//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la session du noyau et traduire touches / clics en commandes.
//!
//! Contrats :
//! - Aucune évaluation ici : tout passe par `Session::soumettre`.
//! - La vue ne lit que `formule_affichee()` et `reponse_affichee()`.

use log::debug;

use crate::noyau::{Commande, Session};

#[derive(Clone, Debug, Default)]
pub struct AppCalc {
    session: Session,
}

impl AppCalc {
    /// Bouton cliqué (ou touche déjà traduite).
    pub fn appuyer(&mut self, cmd: Commande) {
        self.session.soumettre(cmd);
    }

    /// Caractère tapé au clavier ; les touches hors alphabet sont ignorées.
    pub fn touche(&mut self, c: char) {
        match Commande::depuis_touche(c) {
            Some(cmd) => self.appuyer(cmd),
            None => debug!("touche {c:?} ignorée"),
        }
    }

    pub fn formule_affichee(&self) -> String {
        self.session.affichage_formule()
    }

    pub fn reponse_affichee(&self) -> &str {
        self.session.affichage_reponse()
    }
}
