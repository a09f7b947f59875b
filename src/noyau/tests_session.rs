//! Tests de scénarios : suites de touches -> formule / réponse affichées.
//!
//! Chaque scénario part d’une session neuve, tape les libellés un par un
//! puis lit les deux affichages, comme le fait la vue.

use pretty_assertions::assert_eq;

use super::erreur::ErreurCalcul;
use super::init_journal_test;
use super::session::{Session, MESSAGE_ERREUR};

fn tape(libelles: &[&str]) -> Session {
    init_journal_test();

    let mut s = Session::new();
    for l in libelles {
        s.soumettre_libelle(l)
            .unwrap_or_else(|e| panic!("libellé {l:?} refusé: {e}"));
    }
    s
}

fn assert_reponse(libelles: &[&str], attendu: &str) {
    let s = tape(libelles);
    assert_eq!(s.affichage_reponse(), attendu, "touches={libelles:?}");
}

fn assert_erreur(libelles: &[&str], genre: ErreurCalcul) {
    let s = tape(libelles);
    assert_eq!(s.affichage_reponse(), MESSAGE_ERREUR, "touches={libelles:?}");
    assert_eq!(s.derniere_erreur(), Some(&genre), "touches={libelles:?}");
}

/* ------------------------ Saisie ------------------------ */

#[test]
fn chiffres_consecutifs_un_seul_operande() {
    let s = tape(&["1", "2", "3"]);
    assert_eq!(s.affichage_formule(), "123");
    assert_eq!(s.formule().jetons().len(), 1);
}

#[test]
fn operateur_retape_corrige() {
    let s = tape(&["3", "+", "-", "4"]);
    assert_eq!(s.affichage_formule(), "3-4");
    assert_reponse(&["3", "+", "-", "4", "="], "=-1");
}

#[test]
fn retour_retire_un_caractere_puis_le_jeton() {
    let mut s = tape(&["1", "2"]);
    s.soumettre_libelle("⇦").unwrap();
    assert_eq!(s.affichage_formule(), "1");

    let mut s = tape(&["1", "2", "×"]);
    s.soumettre_libelle("⇦").unwrap();
    assert_eq!(s.affichage_formule(), "12");
}

#[test]
fn retour_sur_operande_modifie() {
    // un seul caractère : le jeton part avec ses modificateurs
    let mut s = tape(&["5", "X²", "+", "3", "±"]);
    assert_eq!(s.affichage_formule(), "5²+(-3)");
    s.soumettre_libelle("⇦").unwrap();
    assert_eq!(s.affichage_formule(), "5²+");
}

#[test]
fn effacer_remet_a_zero_sans_erreur() {
    let s = tape(&["4", "÷", "0", "=", "C"]);
    assert_eq!(s.affichage_formule(), "");
    assert_eq!(s.affichage_reponse(), "=0");
    assert!(s.derniere_erreur().is_none());

    let s = tape(&["1", "+", "1", "=", "C"]);
    assert_eq!(s.affichage_formule(), "");
    assert_eq!(s.affichage_reponse(), "=2");
}

/* ------------------------ Calcul ------------------------ */

#[test]
fn priorite_des_operateurs() {
    assert_reponse(&["2", "+", "3", "×", "4", "="], "=14");
    assert_reponse(&["(", "2", "+", "3", ")", "×", "4", "="], "=20");
}

#[test]
fn multiplication_implicite() {
    assert_reponse(&["2", "(", "3", "+", "4", ")", "="], "=14");
    assert_reponse(&["(", "2", ")", "(", "3", ")", "="], "=6");
    assert_reponse(&["(", "2", ")", "5", "="], "=10");

    let s = tape(&["2", "(", "3", "+", "4", ")", "="]);
    assert_eq!(s.affichage_formule(), "2×(3+4)");
}

#[test]
fn resultat_entier_sans_decimale() {
    assert_reponse(&["4", "÷", "2", "="], "=2");
    assert_reponse(&["1", ".", "5", "+", "1", ".", "5", "="], "=3");
}

#[test]
fn resultat_decimal() {
    assert_reponse(&["1", "÷", "4", "="], "=0.25");
    assert_reponse(&["0", ".", "1", "+", "0", ".", "2", "="], "=0.3");
    assert_reponse(&["1", "÷", "3", "="], "=0.3333333333333333");
}

#[test]
fn modificateurs() {
    assert_reponse(&["3", "X²", "="], "=9");
    assert_reponse(&["9", "√X", "="], "=3");
    assert_reponse(&["4", "1/X", "="], "=0.25");
    assert_reponse(&["5", "±", "+", "2", "="], "=-3");
    assert_reponse(&["3", "X²", "X²", "="], "=3");
}

#[test]
fn modificateurs_affichage() {
    let s = tape(&["2", "±", "X²", "√X", "1/X"]);
    assert_eq!(s.affichage_formule(), "(1/√(-2)²)");
    assert_reponse(&["2", "±", "X²", "√X", "1/X", "="], "=0.5");
}

#[test]
fn chiffre_apres_modificateur_prolonge_l_operande() {
    // le modificateur reste sur l’opérande qui grandit
    let s = tape(&["1", "X²", "2"]);
    assert_eq!(s.affichage_formule(), "12²");
    assert_reponse(&["1", "X²", "2", "="], "=144");
}

#[test]
fn reponse_garde_la_derniere_valeur() {
    let s = tape(&["2", "×", "2", "=", "+"]);
    assert_eq!(s.affichage_reponse(), "=4");
    assert_eq!(s.affichage_formule(), "2×2+");
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn inverse_de_zero() {
    assert_erreur(&["0", "X²", "√X", "1/X", "="], ErreurCalcul::DivisionParZero);
}

#[test]
fn division_par_zero() {
    assert_erreur(&["7", "÷", "0", "="], ErreurCalcul::DivisionParZero);
}

#[test]
fn racine_de_negatif() {
    assert_erreur(&["4", "±", "√X", "="], ErreurCalcul::HorsDomaine);
}

#[test]
fn fermante_en_trop() {
    assert_erreur(
        &["(", "1", "+", "2", ")", ")", "="],
        ErreurCalcul::ParenthesesDesequilibrees,
    );
}

#[test]
fn ouvrante_non_fermee() {
    assert_erreur(&["(", "1", "+", "2", "="], ErreurCalcul::ParenthesesDesequilibrees);
}

#[test]
fn expressions_invalides() {
    assert_erreur(&["3", "+", "="], ErreurCalcul::ExpressionInvalide);
    assert_erreur(&["-", "3", "="], ErreurCalcul::ExpressionInvalide);
    assert_erreur(&[".", "="], ErreurCalcul::ExpressionInvalide);
    assert_erreur(&["(", ")", "="], ErreurCalcul::ExpressionInvalide);
}

#[test]
fn echec_ne_touche_pas_la_formule() {
    let s = tape(&["2", "(", "1", "÷", "0", ")", "="]);
    assert_eq!(s.affichage_formule(), "2(1÷0)");
    assert_eq!(s.affichage_reponse(), MESSAGE_ERREUR);
}

#[test]
fn echec_garde_la_reponse_precedente() {
    let mut s = tape(&["5", "+", "5", "=", "÷", "0", "="]);
    assert_eq!(s.affichage_reponse(), MESSAGE_ERREUR);

    s.soumettre_libelle("⇦").unwrap();
    assert_eq!(s.affichage_reponse(), "=10");
}

#[test]
fn correction_apres_erreur() {
    let mut s = tape(&["8", "÷", "0", "="]);
    for l in ["⇦", "2", "="] {
        s.soumettre_libelle(l).unwrap();
    }
    assert_eq!(s.affichage_reponse(), "=4");
}

/* ------------------------ Lecture du résultat ------------------------ */

#[test]
fn resultat_minuscule_affiche_en_entier() {
    let mut touches = vec!["0", "."];
    touches.extend(std::iter::repeat("0").take(16));
    touches.extend(["1", "="]);

    let s = tape(&touches);
    assert_eq!(s.affichage_formule(), "0.00000000000000001");
    assert_eq!(s.affichage_reponse(), "=0.00000000000000001");
}

#[test]
fn resultat_decimal_fini_complet() {
    // 123 + 0.00000000000000001
    let mut touches = vec!["1", "2", "3", "+", "0", "."];
    touches.extend(std::iter::repeat("0").take(16));
    touches.extend(["1", "="]);

    assert_reponse(&touches, "=123.00000000000000001");
}

#[test]
fn racine_d_un_tres_grand_nombre() {
    let mut touches = vec!["2"; 320];
    touches.extend(["√X", "="]);

    let s = tape(&touches);
    assert!(s.derniere_erreur().is_none(), "erreur={:?}", s.derniere_erreur());
    let reponse = s.affichage_reponse();
    // √(2.22…×10^319) ≈ 4.71×10^159 : 160 chiffres avant la virgule
    assert!(reponse.starts_with("=4714"), "réponse={reponse:?}");
    assert_eq!(reponse.split('.').next().map(str::len), Some(161));
}
