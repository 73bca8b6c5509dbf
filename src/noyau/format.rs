// src/noyau/format.rs

/* ------------------------ Arrondi ------------------------ */

/// Arrondit `x` à `chiffres` chiffres significatifs (passage par la notation scientifique).
///
/// Ex: 0.1 + 0.2 = 0.30000000000000004 -> 0.3 (12 chiffres)
pub fn arrondir_significatifs(x: f64, chiffres: usize) -> f64 {
    if !x.is_finite() || x == 0.0 {
        return x;
    }
    let chiffres = chiffres.max(1);
    let sci = format!("{:.*e}", chiffres - 1, x);
    sci.parse::<f64>().unwrap_or(x)
}

/* ------------------------ Texte canonique ------------------------ */

/// Forme décimale canonique d’un flottant fini (la plus courte qui se relit à l’identique).
///
/// - entiers sans ".0" : 14 et non 14.0
/// - -0 devient 0
/// - notation exponentielle pour |x| >= 1e21 ou |x| < 1e-6 : "1e+21", "1.5e-7"
///
/// Le résultat est toujours relisible par jetons::tokenize (enchaînement après "=").
pub fn format_nombre(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }

    let a = x.abs();
    if a >= 1e21 || a < 1e-6 {
        let sci = format!("{x:e}");
        // Rust écrit "1e21" : on rend le signe de l’exposant explicite
        return match sci.split_once('e') {
            Some((mantisse, exp)) if !exp.starts_with('-') => format!("{mantisse}e+{exp}"),
            _ => sci,
        };
    }

    format!("{x}")
}

/* ------------------------ Libellé secondaire ------------------------ */

/// Affichage “joli” d’une expression saisie : ** -> ^, * -> ×, / -> ÷.
pub fn format_expr_pretty(expr: &str) -> String {
    expr.replace("**", "^").replace('*', "×").replace('/', "÷")
}
