//! Noyau de la calculatrice à jetons
//!
//! Organisation interne :
//! - commande.rs : alphabet fermé des touches (+ clavier)
//! - jetons.rs   : jeton (opérande / opérateur / parenthèse) + modificateurs
//! - formule.rs  : suite de jetons éditable + × implicites
//! - rpn.rs      : shunting-yard + évaluation RPN
//! - lecture.rs  : résultat -> texte (entier ou décimal)
//! - erreur.rs   : genres d’erreurs
//! - session.rs  : contrôleur (formule + réponse + erreur)

pub mod commande;
pub mod erreur;
pub mod formule;
pub mod jetons;
pub mod lecture;
pub mod rpn;
pub mod session;

#[cfg(test)]
mod tests_session;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use commande::Commande;
pub use session::Session;

/// Journal pour les tests (une seule initialisation par binaire de test).
#[cfg(test)]
pub(crate) fn init_journal_test() {
    use std::io::Write;
    use std::sync::Once;

    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = env_logger::Builder::new()
            .filter_level(log::LevelFilter::Debug)
            .is_test(true)
            .format(|buf, record| {
                writeln!(
                    buf,
                    "[{}] {}: {}",
                    record.level(),
                    record.target(),
                    record.args()
                )
            })
            .try_init();
    });
}
