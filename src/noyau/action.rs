// src/noyau/action.rs
//
// Vocabulaire des actions (boutons + clavier).
// Un bouton porte un jeton ("7", "=", "DEL", "sin"...), une touche porte un nom egui
// ("Enter", "Backspace", "Escape") ou le texte tapé ("7", "(", "s"...).

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Chiffre, '.', '+', '-', '*', '/', '%'.
    Caractere(char),

    Egal,
    Effacer,
    Retour,

    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Racine,
    Puissance,

    Pi,
    E,

    /// Parenthèse “intelligente” : '(' ou ')' selon l’équilibre.
    Parenthese,
}

impl Action {
    /// Caractère littéral accepté tel quel dans l’expression.
    pub fn caractere(c: char) -> Option<Action> {
        if c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '%') {
            Some(Action::Caractere(c))
        } else {
            None
        }
    }

    /// Opérateur binaire : enchaîne sur un résultat, fusionne avec l’opérateur précédent.
    pub fn est_operateur(self) -> bool {
        matches!(
            self,
            Action::Caractere('+' | '-' | '*' | '/') | Action::Puissance
        )
    }

    /// Jeton d’un bouton de la vue.
    pub fn depuis_jeton(jeton: &str) -> Option<Action> {
        let a = match jeton {
            "=" => Action::Egal,
            "C" => Action::Effacer,
            "DEL" => Action::Retour,
            "sin" => Action::Sin,
            "cos" => Action::Cos,
            "tan" => Action::Tan,
            "log" => Action::Log,
            "ln" => Action::Ln,
            "sqrt" | "√" => Action::Racine,
            "pow" | "xʸ" => Action::Puissance,
            "pi" | "π" => Action::Pi,
            "e" => Action::E,
            "paren" | "( )" => Action::Parenthese,
            "×" => Action::Caractere('*'),
            "÷" => Action::Caractere('/'),
            "−" => Action::Caractere('-'),
            _ => return un_seul_caractere(jeton).and_then(Action::caractere),
        };
        Some(a)
    }

    /// Touche clavier (nom egui ou texte tapé).
    ///
    /// Raccourcis : s/c/t/l/r = sin/cos/tan/log/racine, ^ = puissance, ( ou ) = parenthèse.
    pub fn depuis_touche(touche: &str) -> Option<Action> {
        let a = match touche {
            "Enter" | "=" => Action::Egal,
            "Backspace" => Action::Retour,
            "Escape" => Action::Effacer,
            "(" | ")" => Action::Parenthese,
            "^" => Action::Puissance,
            "s" => Action::Sin,
            "c" => Action::Cos,
            "t" => Action::Tan,
            "l" => Action::Log,
            "r" => Action::Racine,
            _ => return un_seul_caractere(touche).and_then(Action::caractere),
        };
        Some(a)
    }
}

fn un_seul_caractere(s: &str) -> Option<char> {
    let mut it = s.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}
