//! Tests de scénarios (campagne) : séquences de touches réelles -> rendu attendu.
//!
//! Chaque scénario part d’un moteur neuf et tape une chaîne comme au clavier
//! (un caractère = une touche, "=" évalue, "s/c/t/l/r" = fonctions, "^" = puissance).
//! Les touches nommées (Escape, Backspace) passent par `appuyer`.

use std::time::{Duration, Instant};

use super::action::Action;
use super::moteur::{Moteur, Rendu};

fn taper(m: &mut Moteur, touches: &str) -> Rendu {
    let mut r = m.rendu();
    for c in touches.chars() {
        let a = Action::depuis_touche(&c.to_string())
            .unwrap_or_else(|| panic!("touche inconnue: {c:?}"));
        r = m.appliquer(a);
    }
    r
}

fn appuyer(m: &mut Moteur, touche: &str) -> Rendu {
    let a = Action::depuis_touche(touche).unwrap_or_else(|| panic!("touche inconnue: {touche:?}"));
    m.appliquer(a)
}

fn scenario(touches: &str) -> Rendu {
    let mut m = Moteur::default();
    taper(&mut m, touches)
}

fn assert_affiche(touches: &str, attendu: &str) {
    let r = scenario(touches);
    assert_eq!(r.affichage, attendu, "touches={touches:?}");
}

/* ------------------------ Propriétés de base ------------------------ */

#[test]
fn scen_saisie_simple() {
    assert_affiche("0", "0");
    assert_affiche("007", "007");
    assert_affiche("3.14", "3.14");
}

#[test]
fn scen_collapse_operateurs() {
    for (a, b) in [('+', '-'), ('-', '*'), ('*', '/'), ('/', '+')] {
        let touches = format!("9{a}{b}");
        let r = scenario(&touches);
        assert_eq!(r.affichage, format!("9{b}"), "touches={touches:?}");
    }
}

#[test]
fn scen_resultats_classiques() {
    assert_affiche("2+3*4=", "14");
    assert_affiche("(2+3)*4=", "20");
    assert_affiche("7/2=", "3.5");
    assert_affiche("1-5=", "-4");
    assert_affiche("2^10=", "1024");
    assert_affiche("r9=", "3"); // sqrt(9 -> sqrt(9)
}

#[test]
fn scen_pourcentages() {
    assert_affiche("50%=", "0.5");
    assert_affiche("10%5=", "0");
    assert_affiche("10%3=", "1");
    assert_affiche("80+25%=", "80.25");
    assert_affiche("12.5%=", "0.125");
}

#[test]
fn scen_pourcent_apres_parenthese() {
    // Non reconnu comme suffixe : la fin orpheline est retirée, sinon c’est un modulo.
    assert_affiche("(1+2)%=", "3");
    assert_affiche("(1+2)%2=", "1");
    assert_affiche("(1+2)%*2=", "Error");
}

#[test]
fn scen_fonctions() {
    assert_affiche("s0=", "0");
    assert_affiche("c0=", "1");
    assert_affiche("t0=", "0");
    assert_affiche("l1000=", "3");
    assert_affiche("r2=", "1.41421356237");

    let mut m = Moteur::default();
    m.appliquer(Action::Ln);
    m.appliquer(Action::E);
    assert_eq!(m.appliquer(Action::Egal).affichage, "1");
}

#[test]
fn scen_erreurs() {
    assert_affiche("5/0=", "Error");
    assert_affiche("0/0=", "Error");
    assert_affiche("r0-1=", "Error"); // sqrt(0-1)
    assert_affiche("s=", "Error"); // sin()
    assert_affiche("2..3=", "Error");
}

#[test]
fn scen_libelles() {
    assert_eq!(scenario("2+3*4=").libelle, "2+3×4 =");
    assert_eq!(scenario("8/2=").libelle, "8÷2 =");
    assert_eq!(scenario("2^3=").libelle, "2^3 =");
    assert_eq!(scenario("(1+2=").libelle, "(1+2 =");
    assert_eq!(scenario("5/0=").libelle, "");
}

/* ------------------------ Enchaînement ------------------------ */

#[test]
fn scen_enchainement_operateur() {
    let mut m = Moteur::default();
    taper(&mut m, "2+3*4=");
    let r = taper(&mut m, "+1=");
    assert_eq!(r.affichage, "15");
    assert_eq!(r.libelle, "14+1 =");
}

#[test]
fn scen_nouveau_calcul_apres_resultat() {
    let mut m = Moteur::default();
    taper(&mut m, "2+3*4=");
    assert_eq!(taper(&mut m, "7").affichage, "7");

    let mut m = Moteur::default();
    taper(&mut m, "2+3=");
    assert_eq!(taper(&mut m, "s").affichage, "sin(");

    let mut m = Moteur::default();
    taper(&mut m, "2+3=");
    assert_eq!(taper(&mut m, "(").affichage, "(");
}

#[test]
fn scen_egal_repete() {
    let mut m = Moteur::default();
    taper(&mut m, "6*7=");
    let r = taper(&mut m, "=");
    assert_eq!(r.affichage, "42");
    assert_eq!(r.libelle, "42 =");
    assert!(m.juste_evalue());
}

#[test]
fn scen_retour_sur_resultat() {
    let mut m = Moteur::default();
    taper(&mut m, "6*7=");
    assert_eq!(appuyer(&mut m, "Backspace").affichage, "4");
    // on édite le résultat : le chiffre suivant s’y ajoute
    assert_eq!(taper(&mut m, "5").affichage, "45");
}

#[test]
fn scen_enchainement_resultat_negatif_et_exponentiel() {
    let mut m = Moteur::default();
    taper(&mut m, "1-6=");
    assert_eq!(taper(&mut m, "*2=").affichage, "-10");

    let mut m = Moteur::default();
    taper(&mut m, "1-6=");
    let r = taper(&mut m, "^2=");
    assert_eq!(r.affichage, "25");
    assert_eq!(r.libelle, "(-5)^2 =");

    let mut m = Moteur::default();
    let r = taper(&mut m, "10^21=");
    assert_eq!(r.affichage, "1e+21");
    assert_eq!(taper(&mut m, "/10^21=").affichage, "1");
}

/* ------------------------ Touches nommées ------------------------ */

#[test]
fn scen_echap_et_retour() {
    let mut m = Moteur::default();
    taper(&mut m, "12+c");
    assert_eq!(m.expr(), "12+cos(");
    assert_eq!(appuyer(&mut m, "Backspace").affichage, "12+");
    assert_eq!(appuyer(&mut m, "Backspace").affichage, "12");

    let r = appuyer(&mut m, "Escape");
    assert_eq!(r.affichage, "");
    assert_eq!(r.placeholder, "0");
}

#[test]
fn scen_entree_evalue() {
    let mut m = Moteur::default();
    taper(&mut m, "4*4");
    assert_eq!(appuyer(&mut m, "Enter").affichage, "16");
}

/* ------------------------ Stress contrôlé (sans brûler) ------------------------ */

#[test]
fn scen_stress_fonctions_imbriquees() {
    let t0 = Instant::now();

    // cos(cos(...cos(1 : 200 parenthèses fermées automatiquement,
    // l’itération converge vers le nombre de Dottie.
    let mut touches = "c".repeat(200);
    touches.push('1');
    let mut m = Moteur::default();
    taper(&mut m, &touches);
    assert_eq!(taper(&mut m, "=").affichage, "0.739085133215");

    assert!(t0.elapsed() < Duration::from_millis(200));
}

#[test]
fn scen_stress_longue_somme() {
    let t0 = Instant::now();

    let touches = "1+".repeat(500);
    assert_affiche(&touches, &touches);
    assert_affiche(&format!("{touches}="), "500");

    assert!(t0.elapsed() < Duration::from_millis(300));
}

#[test]
fn scen_somme_demesuree_donne_error() {
    // refusée avant construction de l’arbre : sentinelle, pas de débordement de pile
    let touches = format!("{}=", "1+".repeat(5_000));
    let r = scenario(&touches);
    assert_eq!(r.affichage, "Error");
    assert_eq!(r.libelle, "");
}
