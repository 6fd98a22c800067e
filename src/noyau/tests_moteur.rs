//! Tests scénarios du moteur : une suite de touches entre, on relit l'état.
//!
//! Chaque test rejoue une séquence utilisateur réelle (boutons/clavier) et
//! vérifie affichage, formule, mémoire et historique.

use super::moteur::{EntreeHistorique, Moteur};

fn moteur_apres(touches: &[&str]) -> Moteur {
    let mut m = Moteur::new();
    for t in touches {
        m.appuyer_texte(t);
    }
    m
}

fn entree(formule: &str, resultat: &str) -> EntreeHistorique {
    EntreeHistorique {
        formule: formule.to_string(),
        resultat: resultat.to_string(),
    }
}

/* ------------------------ saisie ------------------------ */

#[test]
fn chiffres_tapes_affiches_tels_quels() {
    let m = moteur_apres(&["1", "2", "3"]);
    assert_eq!(m.affichage(), "123");
}

#[test]
fn zero_de_tete_remplace() {
    // "0" puis "5" : le zéro initial s'efface
    let m = moteur_apres(&["0", "5"]);
    assert_eq!(m.affichage(), "5");

    let m = moteur_apres(&["0", "0"]);
    assert_eq!(m.affichage(), "0");
}

#[test]
fn point_decimal_unique() {
    let m = moteur_apres(&["3", ".", "1", ".", "4"]);
    assert_eq!(m.affichage(), "3.14");
}

#[test]
fn retour_arriere() {
    let m = moteur_apres(&["1", "2", "3", "backspace"]);
    assert_eq!(m.affichage(), "12");

    // dernier caractère : retombe sur "0"
    let m = moteur_apres(&["5", "backspace"]);
    assert_eq!(m.affichage(), "0");

    // inopérant en attente d'opérande
    let m = moteur_apres(&["7", "+", "backspace"]);
    assert_eq!(m.affichage(), "7");
    assert_eq!(m.formule(), "7+");
}

#[test]
fn retour_arriere_sur_negatif_rappele() {
    // un résultat négatif rappelé de la mémoire s'efface chiffre à chiffre,
    // en passant par le signe seul avant de retomber sur "0"
    let mut m = moteur_apres(&["0", "-", "1", "5", "=", "memory", "clear", "memory"]);
    assert_eq!(m.affichage(), "-15");

    m.appuyer_texte("backspace");
    m.appuyer_texte("backspace");
    assert_eq!(m.affichage(), "-");

    m.appuyer_texte("backspace");
    assert_eq!(m.affichage(), "0");
}

#[test]
fn symbole_inconnu_ignore() {
    let mut m = moteur_apres(&["4", "2"]);
    let avant = m.clone();
    m.appuyer_texte("bidule");
    m.appuyer_texte("Enter");
    assert_eq!(m, avant);
}

/* ------------------------ clear ------------------------ */

#[test]
fn effacer_idempotent() {
    let mut m = moteur_apres(&["7", "+", "3", "clear"]);
    let une_fois = m.clone();
    m.appuyer_texte("clear");
    assert_eq!(m, une_fois);
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.formule(), "");
}

#[test]
fn effacer_preserve_memoire_et_historique() {
    let m = moteur_apres(&["5", "memory", "7", "+", "3", "=", "clear"]);
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.memoire(), Some("5"));
    assert_eq!(m.historique_len(), 1);
}

/* ------------------------ évaluation ------------------------ */

#[test]
fn addition_simple() {
    let m = moteur_apres(&["7", "+", "3", "="]);
    assert_eq!(m.affichage(), "10");
    assert_eq!(m.formule(), "");
    assert_eq!(
        m.historique().next(),
        Some(&entree("7+3", "10"))
    );
}

#[test]
fn remplacement_du_dernier_operateur() {
    let m = moteur_apres(&["7", "+", "-"]);
    assert_eq!(m.formule(), "7-");

    let m = moteur_apres(&["7", "+", "-", "3", "="]);
    assert_eq!(m.affichage(), "4");
}

#[test]
fn priorite_des_operateurs_dans_la_formule() {
    let m = moteur_apres(&["7", "+", "3", "*", "2", "="]);
    assert_eq!(m.affichage(), "13");
    assert_eq!(m.historique().next(), Some(&entree("7+3*2", "13")));
}

#[test]
fn enchainement_apres_egal() {
    // le résultat devient l'opérande suivant
    let m = moteur_apres(&["7", "+", "3", "=", "+", "2", "="]);
    assert_eq!(m.affichage(), "12");
    assert_eq!(m.historique().next(), Some(&entree("10+2", "12")));
}

#[test]
fn egal_sans_formule_inoperant() {
    let mut m = moteur_apres(&["4", "2"]);
    let avant = m.clone();
    m.appuyer_texte("=");
    assert_eq!(m, avant);
}

#[test]
fn division_longue_arrondie() {
    let m = moteur_apres(&["1", "/", "3", "="]);
    assert_eq!(m.affichage(), "0.3333333333");
}

#[test]
fn puissance_au_clavier() {
    let m = moteur_apres(&["2", "^", "1", "0", "="]);
    assert_eq!(m.affichage(), "1024");
}

/* ------------------------ pourcent ------------------------ */

#[test]
fn pourcent_divise_par_cent() {
    let m = moteur_apres(&["5", "0", "%"]);
    assert_eq!(m.affichage(), "0.5");
    assert_eq!(m.formule(), "50% = ");
}

#[test]
fn egal_apres_pourcent_inoperant() {
    // la formule "50% = " est décorative : rien à évaluer
    let mut m = moteur_apres(&["5", "0", "%"]);
    let avant = m.clone();
    m.appuyer_texte("=");
    assert_eq!(m, avant);
}

#[test]
fn pourcent_puis_operateur_repart_du_resultat() {
    let m = moteur_apres(&["5", "0", "%", "+", "1", "="]);
    assert_eq!(m.affichage(), "1.5");
    assert_eq!(m.historique().next(), Some(&entree("0.5+1", "1.5")));
}

/* ------------------------ fonctions unaires ------------------------ */

#[test]
fn racine_carree() {
    let m = moteur_apres(&["9", "sqrt"]);
    assert_eq!(m.affichage(), "3");
    assert_eq!(m.formule(), "sqrt(9)");
    assert_eq!(m.historique_len(), 1);
    assert_eq!(m.historique().next(), Some(&entree("9", "3")));
}

#[test]
fn logarithme_naturel() {
    // ln est évalué comme log(x, e)
    let m = moteur_apres(&["1", "ln"]);
    assert_eq!(m.affichage(), "0");
    assert_eq!(m.formule(), "ln(1)");
}

#[test]
fn factorielle() {
    let m = moteur_apres(&["5", "!"]);
    assert_eq!(m.affichage(), "120");
    assert_eq!(m.formule(), "5!");
}

#[test]
fn fonction_avec_formule_en_cours() {
    // l'historique garde la formule déjà accumulée, pas l'appel rendu
    let m = moteur_apres(&["7", "+", "9", "sqrt"]);
    assert_eq!(m.affichage(), "3");
    assert_eq!(m.formule(), "sqrt(9)");
    assert_eq!(m.historique().next(), Some(&entree("7+", "3")));
}

#[test]
fn resultat_de_fonction_enchaine() {
    let m = moteur_apres(&["9", "sqrt", "+", "1", "="]);
    assert_eq!(m.affichage(), "4");
}

/* ------------------------ erreurs ------------------------ */

#[test]
fn division_par_zero_affiche_error() {
    let m = moteur_apres(&["0", "/", "0", "="]);
    assert_eq!(m.affichage(), "Error");
    assert_eq!(m.historique_len(), 0, "pas d'entrée d'historique en erreur");
}

#[test]
fn factorielle_non_entiere_affiche_error() {
    let m = moteur_apres(&["2", ".", "5", "!"]);
    assert_eq!(m.affichage(), "Error");
    assert_eq!(m.historique_len(), 0);
}

#[test]
fn clear_recupere_apres_error() {
    let m = moteur_apres(&["1", "/", "0", "=", "clear", "6", "*", "7", "="]);
    assert_eq!(m.affichage(), "42");
}

#[test]
fn chiffre_ecrase_le_marqueur_error() {
    // récupération douce : un chiffre repart de zéro
    let m = moteur_apres(&["1", "/", "0", "=", "8"]);
    assert_eq!(m.affichage(), "8");
}

/* ------------------------ mémoire ------------------------ */

#[test]
fn memoire_bascule_rangement_puis_rappel() {
    let mut m = moteur_apres(&["5", "memory"]);
    assert_eq!(m.memoire(), Some("5"));
    assert_eq!(m.affichage(), "5");

    m.appuyer_texte("clear");
    m.appuyer_texte("memory");
    assert_eq!(m.affichage(), "5");
    assert_eq!(m.memoire(), None);
}

/* ------------------------ historique ------------------------ */

#[test]
fn historique_borne_a_dix_recents_en_tete() {
    let mut m = Moteur::new();
    for i in 0..11u32 {
        let chiffre = char::from_digit(i % 10, 10).unwrap().to_string();
        for t in ["clear", "1", "+", chiffre.as_str(), "="] {
            m.appuyer_texte(t);
        }
    }
    assert_eq!(m.historique_len(), 10);

    // les plus récents d'abord ; la toute première évaluation ("1+0") est
    // tombée, la onzième (aussi "1+0", i=10) est en tête
    let formules: Vec<_> = m.historique().map(|e| e.formule.as_str()).collect();
    assert_eq!(formules.first(), Some(&"1+0"));
    assert_eq!(formules.last(), Some(&"1+1"));
}

#[test]
fn effacer_historique_seul_le_vide() {
    let mut m = moteur_apres(&["7", "+", "3", "="]);
    assert_eq!(m.historique_len(), 1);
    m.effacer_historique();
    assert_eq!(m.historique_len(), 0);
    // le reste de l'état ne bouge pas
    assert_eq!(m.affichage(), "10");
}

/* ------------------------ formatage bout en bout ------------------------ */

#[test]
fn tres_petit_resultat_en_exponentiel() {
    // 1 / 100000000000 = 1e-11, sous le seuil décimal
    let m = moteur_apres(&[
        "1", "/", "1", "0", "0", "0", "0", "0", "0", "0", "0", "0", "0", "0", "=",
    ]);
    assert_eq!(m.affichage(), "1.000000e-11");
}

#[test]
fn zeros_finaux_retires() {
    let m = moteur_apres(&["3", ".", "1", "+", "0", "="]);
    assert_eq!(m.affichage(), "3.1");
}
