// src/noyau/erreur.rs
//
// Erreurs du noyau (jetons -> RPN -> Expr -> valeur).
// Le moteur ne les laisse jamais remonter : il les convertit en sentinelle.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErreurCalc {
    /// Après nettoyage de la fin, il ne reste rien à évaluer (ignoré en silence).
    #[error("rien à évaluer")]
    NormalisationVide,

    #[error("caractère inattendu: '{0}'")]
    CaractereInattendu(char),

    #[error("nombre invalide: {0}")]
    NombreInvalide(String),

    #[error("parenthèses déséquilibrées")]
    ParenthesesDesequilibrees,

    #[error("identifiant inconnu: {0}")]
    IdentifiantInconnu(String),

    #[error("fonction sans argument: {0}")]
    FonctionSansArgument(String),

    #[error("expression invalide")]
    ExpressionInvalide,

    /// Division par zéro, ln(0), sqrt(-1)...
    #[error("résultat non fini")]
    NonFini,
}

pub type Resultat<T> = std::result::Result<T, ErreurCalc>;
