// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name):
//    - si name ∈ {sin, cos, tan, log, ln, sqrt} => fonction unaire, DOIT être suivie de '('
//    - si name ∈ {pi, e} => constante (valeur)
//    - sinon => identifiant inconnu (pas de variables ici)
// - Moins unaire : jeton Neg préfixe, précédence entre * et ** ("-2**2" = -(2**2))
// - Plus unaire : ignoré
// - Pas de multiplication implicite : "2(3)" ou "2 3" sont refusés.
//
// NOTE:
// - Les fonctions sont traitées comme des opérateurs “collés” à leur argument
//   et sont sorties après la parenthèse fermante.

use super::erreur::{ErreurCalc, Resultat};
use super::expr::{constante, Expr, Fonction};
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash | Tok::Percent => 2,
        Tok::Neg => 3,
        Tok::Pow => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Pow)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Ident("sin"), LPar, Num(1), Slash, Num(2), RPar]
///   rpn:    [Num(1), Num(2), Slash, Ident("sin")]
pub fn to_rpn(tokens: &[Tok]) -> Resultat<Vec<Tok>> {
    if tokens.is_empty() {
        return Err(ErreurCalc::ExpressionInvalide);
    }

    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire et les juxtapositions interdites.
    let mut prev_was_value = false;

    // Fonction qui vient d’être lue : le jeton suivant doit être '('.
    let mut fonction_en_attente: Option<String> = None;

    for tok in tokens.iter().cloned() {
        if let Some(nom) = fonction_en_attente.take() {
            if !matches!(tok, Tok::LPar) {
                return Err(ErreurCalc::FonctionSansArgument(nom));
            }
        }

        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(ErreurCalc::ExpressionInvalide);
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Ident(name) => {
                if prev_was_value {
                    return Err(ErreurCalc::ExpressionInvalide);
                }
                if Fonction::depuis_nom(&name).is_some() {
                    // fonction : on la garde sur la pile (elle sortira après son argument)
                    fonction_en_attente = Some(name.clone());
                    ops.push(Tok::Ident(name));
                    prev_was_value = false;
                } else if constante(&name).is_some() {
                    out.push(Tok::Ident(name));
                    prev_was_value = true;
                } else {
                    return Err(ErreurCalc::IdentifiantInconnu(name));
                }
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurCalc::ExpressionInvalide);
                }
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                if !prev_was_value {
                    // "()" ou "sin()" ou "(1+)"
                    let n = ops.len();
                    if n >= 2 && matches!(ops[n - 1], Tok::LPar) {
                        if let Tok::Ident(nom) = &ops[n - 2] {
                            return Err(ErreurCalc::FonctionSansArgument(nom.clone()));
                        }
                    }
                    return Err(ErreurCalc::ExpressionInvalide);
                }

                // dépile jusqu’à '('
                let mut ouvrante = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Tok::LPar) {
                        ouvrante = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouvrante {
                    return Err(ErreurCalc::ParenthesesDesequilibrees);
                }

                // si une fonction est au sommet, on la sort aussi
                if matches!(ops.last(), Some(Tok::Ident(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }

                prev_was_value = true;
            }

            Tok::Minus | Tok::Plus if !prev_was_value => {
                // unaire : "-" devient Neg (préfixe, ne dépile rien), "+" disparaît
                if matches!(tok, Tok::Minus) {
                    ops.push(Tok::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Pow => {
                if !prev_was_value {
                    return Err(ErreurCalc::ExpressionInvalide);
                }

                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et on ne traverse pas une fonction (fonction reste collée à son argument)
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar | Tok::Ident(_)) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => return Err(ErreurCalc::ExpressionInvalide),
        }
    }

    if let Some(nom) = fonction_en_attente {
        return Err(ErreurCalc::FonctionSansArgument(nom));
    }

    // opérateur final sans opérande droit
    if !prev_was_value {
        return Err(ErreurCalc::ExpressionInvalide);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalc::ParenthesesDesequilibrees);
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
pub fn from_rpn(rpn: &[Tok]) -> Resultat<Expr> {
    let mut st: Vec<Expr> = Vec::new();

    for tok in rpn.iter().cloned() {
        match tok {
            Tok::Num(n) => st.push(Expr::Nombre(n)),

            Tok::Ident(name) => {
                if let Some(f) = Fonction::depuis_nom(&name) {
                    let x = st
                        .pop()
                        .ok_or_else(|| ErreurCalc::FonctionSansArgument(name.clone()))?;
                    st.push(Expr::Appel(f, Box::new(x)));
                } else if let Some(v) = constante(&name) {
                    st.push(Expr::Nombre(v));
                } else {
                    return Err(ErreurCalc::IdentifiantInconnu(name));
                }
            }

            Tok::Neg => {
                let x = st.pop().ok_or(ErreurCalc::ExpressionInvalide)?;
                st.push(Expr::Neg(Box::new(x)));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Percent | Tok::Pow => {
                let b = Box::new(st.pop().ok_or(ErreurCalc::ExpressionInvalide)?);
                let a = Box::new(st.pop().ok_or(ErreurCalc::ExpressionInvalide)?);

                let e = match tok {
                    Tok::Plus => Expr::Add(a, b),
                    Tok::Minus => Expr::Sub(a, b),
                    Tok::Star => Expr::Mul(a, b),
                    Tok::Slash => Expr::Div(a, b),
                    Tok::Percent => Expr::Mod(a, b),
                    _ => Expr::Pow(a, b),
                };

                st.push(e);
            }

            Tok::LPar | Tok::RPar => return Err(ErreurCalc::ParenthesesDesequilibrees),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(e), true) => Ok(e),
        _ => Err(ErreurCalc::ExpressionInvalide),
    }
}
