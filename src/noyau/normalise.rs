// src/noyau/normalise.rs
//
// Normalisation avant évaluation
// ------------------------------
// L’expression saisie est “lâche” (opérateur final, parenthèses ouvertes, % suffixe).
// On la réécrit en une chaîne que jetons.rs + rpn.rs acceptent :
//
//   1) retire la fin inutile (opérateurs, points, espaces, % orphelin)
//   2) ferme les parenthèses restées ouvertes
//   3) % suffixe : "50%" -> "(50/100)" ; "10%5" reste un modulo
//
// sin/cos/tan n’ont pas besoin de réécriture : l’évaluateur les connaît par leur nom.

use std::sync::OnceLock;

use regex::Regex;

use super::erreur::{ErreurCalc, Resultat};

/// Nombre littéral suivi de '%'. Le caractère qui suit est vérifié à la main
/// (le moteur regex n’a pas de lookahead).
fn motif_pourcent() -> &'static Regex {
    static MOTIF: OnceLock<Regex> = OnceLock::new();
    MOTIF.get_or_init(|| Regex::new(r"(\d+(?:\.\d+)?)%").expect("motif %"))
}

/// Pipeline complet : fin nettoyée -> parenthèses fermées -> % suffixe.
pub fn normaliser(expr: &str) -> Resultat<String> {
    let coeur = retirer_fin(expr);
    if coeur.is_empty() {
        return Err(ErreurCalc::NormalisationVide);
    }
    let ferme = fermer_parentheses(coeur);
    Ok(reecrire_pourcent(&ferme))
}

/// Retire la fin “en attente” : + - * / . espaces, et un % qui ne suit pas un chiffre.
///
/// Un % collé à un chiffre est un pourcentage complet : on le garde ("50%" vaut 0.5).
pub fn retirer_fin(expr: &str) -> &str {
    let mut s = expr;
    loop {
        s = s.trim_end();
        let mut it = s.chars().rev();
        let dernier = it.next();
        let avant = it.next();

        let retirer = match dernier {
            Some('+' | '-' | '*' | '/' | '.') => true,
            Some('%') => !avant.is_some_and(|c| c.is_ascii_digit()),
            _ => false,
        };
        if !retirer {
            return s;
        }
        // ASCII : un octet
        s = &s[..s.len() - 1];
    }
}

/// Ajoute un ')' par '(' non fermée.
pub fn fermer_parentheses(expr: &str) -> String {
    let (ouvertes, fermees) = compter_parentheses(expr);
    let mut out = expr.to_string();
    for _ in fermees..ouvertes {
        out.push(')');
    }
    out
}

/// (nombre de '(', nombre de ')')
pub fn compter_parentheses(expr: &str) -> (usize, usize) {
    expr.chars().fold((0, 0), |(o, f), c| match c {
        '(' => (o + 1, f),
        ')' => (o, f + 1),
        _ => (o, f),
    })
}

/// % suffixe -> (n/100). Un % suivi d’un chiffre ou d’un point est un modulo : inchangé.
///
/// Seule la forme `<chiffres>[.<chiffres>]%` est reconnue : "(1+2)%" n’est pas réécrit.
pub fn reecrire_pourcent(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len() + 8);
    let mut dernier = 0;

    for caps in motif_pourcent().captures_iter(expr) {
        let (Some(tout), Some(nombre)) = (caps.get(0), caps.get(1)) else {
            continue;
        };

        let suivant = expr[tout.end()..].chars().next();
        if suivant.is_some_and(|c| c.is_ascii_digit() || c == '.') {
            continue;
        }

        out.push_str(&expr[dernier..tout.start()]);
        out.push('(');
        out.push_str(nombre.as_str());
        out.push_str("/100)");
        dernier = tout.end();
    }

    out.push_str(&expr[dernier..]);
    out
}
