//! Tests de propriétés : suites de touches aléatoires (proptest).
//!
//! Invariants vérifiés sur n’importe quelle suite :
//! - jamais deux opérandes ni deux opérateurs consécutifs
//! - un "=" raté ne change pas la formule
//! - "C" vide la formule et n’affiche jamais d’erreur
//! - l’affichage de la réponse est soit "=<nombre>", soit le message d’erreur

use proptest::prelude::*;

use super::commande::Commande;
use super::jetons::Genre;
use super::session::{Session, MESSAGE_ERREUR};

fn commande() -> impl Strategy<Value = Commande> {
    proptest::sample::select(Commande::CLAVIER.to_vec())
}

fn commande_sans_egal() -> impl Strategy<Value = Commande> {
    commande().prop_filter("pas de =", |c| *c != Commande::Egal)
}

fn chiffre() -> impl Strategy<Value = Commande> {
    (0u8..=9).prop_filter_map("chiffre", Commande::chiffre)
}

fn verifie_invariants(s: &Session) -> Result<(), TestCaseError> {
    let jetons = s.formule().jetons();
    for paire in jetons.windows(2) {
        let (a, b) = (paire[0].genre(), paire[1].genre());
        prop_assert!(
            !(a == Genre::Operande && b == Genre::Operande),
            "deux opérandes consécutifs: {:?}",
            s.affichage_formule()
        );
        prop_assert!(
            !(a == Genre::Operateur && b == Genre::Operateur),
            "deux opérateurs consécutifs: {:?}",
            s.affichage_formule()
        );
    }

    let reponse = s.affichage_reponse();
    prop_assert!(
        reponse == MESSAGE_ERREUR || reponse.starts_with('='),
        "réponse inattendue: {reponse:?}"
    );
    Ok(())
}

proptest! {
    #[test]
    fn invariants_de_saisie(cmds in proptest::collection::vec(commande(), 0..40)) {
        let mut s = Session::new();
        for cmd in cmds {
            s.soumettre(cmd);
            verifie_invariants(&s)?;
        }
    }

    #[test]
    fn egal_rate_ne_change_pas_la_formule(cmds in proptest::collection::vec(commande_sans_egal(), 0..30)) {
        let mut s = Session::new();
        for cmd in cmds {
            s.soumettre(cmd);
        }

        let avant = s.affichage_formule();
        s.soumettre(Commande::Egal);
        if s.affichage_reponse() == MESSAGE_ERREUR {
            prop_assert_eq!(s.affichage_formule(), avant);
            prop_assert!(s.derniere_erreur().is_some());
        }
    }

    #[test]
    fn effacer_n_affiche_jamais_d_erreur(cmds in proptest::collection::vec(commande(), 0..30)) {
        let mut s = Session::new();
        for cmd in cmds {
            s.soumettre(cmd);
        }

        s.soumettre(Commande::Effacer);
        prop_assert_eq!(s.affichage_formule(), "");
        prop_assert_ne!(s.affichage_reponse(), MESSAGE_ERREUR);
    }

    #[test]
    fn chiffres_concatenes(chiffres in proptest::collection::vec(chiffre(), 1..20)) {
        let mut s = Session::new();
        let mut attendu = String::new();
        for cmd in chiffres {
            attendu.push_str(cmd.libelle());
            s.soumettre(cmd);
        }
        prop_assert_eq!(s.formule().jetons().len(), 1);
        prop_assert_eq!(s.affichage_formule(), attendu);
    }

    #[test]
    fn carre_double_sans_effet(a in 0u32..10_000, b in 1u32..10_000) {
        let mut s = Session::new();
        for l in a.to_string().chars().map(String::from) {
            s.soumettre_libelle(&l).map_err(|e| TestCaseError::fail(e.to_string()))?;
        }
        s.soumettre(Commande::Carre);
        s.soumettre(Commande::Carre);
        s.soumettre(Commande::Plus);
        for l in b.to_string().chars().map(String::from) {
            s.soumettre_libelle(&l).map_err(|e| TestCaseError::fail(e.to_string()))?;
        }
        s.soumettre(Commande::Egal);

        prop_assert_eq!(s.affichage_reponse(), format!("={}", u64::from(a) + u64::from(b)));
    }
}
