//! Noyau — évaluation (pipeline réel)
//!
//! texte normalisé -> jetons -> RPN -> Expr -> f64 -> contrôle “fini”
//!
//! La normalisation (fin nettoyée, parenthèses, % suffixe) est faite AVANT, dans normalise.rs :
//! ici on n’accepte que de l’arithmétique bien formée.

use super::erreur::{ErreurCalc, Resultat};
use super::jetons::{format_tokens, tokenize};
use super::rpn::{from_rpn, to_rpn};

/// Au-delà, l’AST (évalué et libéré récursivement) risquerait de déborder la pile.
pub const JETONS_MAX: usize = 8_000;

/// API publique : évalue une expression bien formée.
///
/// Erreurs : syntaxe (jetons/RPN/AST) ou résultat non fini (÷0, ln(0), sqrt(-1)...).
pub fn eval_expression(expr_str: &str) -> Resultat<f64> {
    let s = expr_str.trim();
    if s.is_empty() {
        return Err(ErreurCalc::NormalisationVide);
    }

    let jetons = tokenize(s)?;
    if jetons.len() > JETONS_MAX {
        log::debug!("expression trop longue: {} jetons", jetons.len());
        return Err(ErreurCalc::ExpressionInvalide);
    }
    let rpn = to_rpn(&jetons)?;
    log::trace!(
        "jetons: {} | rpn: {}",
        format_tokens(&jetons),
        format_tokens(&rpn)
    );

    let valeur = from_rpn(&rpn)?.evaluer();
    if !valeur.is_finite() {
        return Err(ErreurCalc::NonFini);
    }
    Ok(valeur)
}
