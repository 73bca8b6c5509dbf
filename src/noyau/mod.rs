//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - action.rs    : vocabulaire des actions (boutons + clavier)
//! - moteur.rs    : machine à états (expression, “juste évalué”, rendu)
//! - normalise.rs : fin nettoyée, parenthèses fermées, % suffixe
//! - jetons.rs    : tokenisation
//! - rpn.rs       : shunting-yard + construction Expr
//! - expr.rs      : AST flottant + fonctions/constantes
//! - eval.rs      : pipeline jetons -> valeur finie
//! - format.rs    : arrondi (chiffres significatifs) + texte canonique + libellé
//! - reglages.rs  : précision, sentinelle, placeholder
//! - erreur.rs    : ErreurCalc

pub mod action;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod normalise;
pub mod reglages;
pub mod rpn;

#[cfg(test)]
mod tests_moteur;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use action::Action;
pub use moteur::{Moteur, Rendu};
pub use reglages::Reglages;
