// src/noyau/jetons.rs

use super::erreur::{ErreurCalc, Resultat};
use super::format::format_nombre;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Fonctions + constantes (sin, ln, pi, e...)
    // NOTE: le parse (RPN->Expr) décidera si c’est une fonction ou une constante.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Percent, // modulo (le % suffixe est réécrit avant, voir normalise.rs)
    Pow,     // ** ou ^

    LPar,
    RPar,

    // Moins unaire : jamais produit par tokenize(), seulement par to_rpn().
    Neg,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - décimaux (ex: 12, 1.5, .5, 5.) avec exposant optionnel (ex: 1e+21, 2.5E-7)
/// - opérateurs + - * / % ** (et ^ comme alias de **)
/// - parenthèses ( )
/// - π (équivaut à ident("pi")), √ (équivaut à ident("sqrt"))
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules)
pub fn tokenize(s: &str) -> Resultat<Vec<Tok>> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => out.push(Tok::LPar),
            ')' => out.push(Tok::RPar),
            '+' => out.push(Tok::Plus),
            '-' => out.push(Tok::Minus),
            '/' => out.push(Tok::Slash),
            '%' => out.push(Tok::Percent),
            '^' => out.push(Tok::Pow),
            '*' => {
                if chars.get(i + 1) == Some(&'*') {
                    out.push(Tok::Pow);
                    i += 1;
                } else {
                    out.push(Tok::Star);
                }
            }
            'π' => out.push(Tok::Ident("pi".to_string())),
            '√' => out.push(Tok::Ident("sqrt".to_string())),
            _ => {
                if c.is_ascii_digit() || c == '.' {
                    let (n, fin) = lire_nombre(&chars, i)?;
                    out.push(Tok::Num(n));
                    i = fin;
                    continue;
                }

                if c.is_ascii_alphabetic() || c == '_' {
                    let start = i;
                    i += 1;
                    while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_')
                    {
                        i += 1;
                    }
                    let word: String = chars[start..i].iter().collect();
                    out.push(Tok::Ident(word.to_lowercase()));
                    continue;
                }

                return Err(ErreurCalc::CaractereInattendu(c));
            }
        }

        i += 1;
    }

    Ok(out)
}

/// Lit un décimal à partir de `start`. Retourne (valeur, index après le nombre).
///
/// L’exposant n’est consommé que s’il est complet (`e`, signe optionnel, au moins un chiffre) :
/// "2e" laisse le `e` au tokenizer (il deviendra un identifiant).
fn lire_nombre(chars: &[char], start: usize) -> Resultat<(f64, usize)> {
    let mut i = start;

    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
    }

    if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
        let mut j = i + 1;
        if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
            j += 1;
        }
        if j < chars.len() && chars[j].is_ascii_digit() {
            while j < chars.len() && chars[j].is_ascii_digit() {
                j += 1;
            }
            i = j;
        }
    }

    let texte: String = chars[start..i].iter().collect();
    if !texte.chars().any(|c| c.is_ascii_digit()) {
        return Err(ErreurCalc::NombreInvalide(texte));
    }

    // "5." et ".5" sont acceptés tels quels par f64::from_str.
    let n = texte
        .parse::<f64>()
        .map_err(|_| ErreurCalc::NombreInvalide(texte))?;
    Ok((n, i))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(n) => format_nombre(*n),
            Tok::Ident(name) => name.clone(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Percent => "%".to_string(),
            Tok::Pow => "**".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),

            Tok::Neg => "neg".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
