// src/noyau/expr.rs
//
// AST flottant (f64).
// - Nombre : littéral ou constante déjà résolue (pi, e)
// - Appel  : fonction unaire de la liste fixe (sin, cos, tan, log, ln, sqrt)
//
// evaluer() ne signale rien : un NaN ou un infini remonte tel quel,
// c’est eval.rs qui décide que ce n’est pas un résultat.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log, // base 10
    Ln,
    Sqrt,
}

impl Fonction {
    /// Identificateurs reconnus comme fonctions (unaire).
    pub fn depuis_nom(nom: &str) -> Option<Fonction> {
        match nom {
            "sin" => Some(Fonction::Sin),
            "cos" => Some(Fonction::Cos),
            "tan" => Some(Fonction::Tan),
            "log" => Some(Fonction::Log),
            "ln" => Some(Fonction::Ln),
            "sqrt" => Some(Fonction::Sqrt),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
            Fonction::Log => "log",
            Fonction::Ln => "ln",
            Fonction::Sqrt => "sqrt",
        }
    }

    fn appliquer(self, x: f64) -> f64 {
        match self {
            Fonction::Sin => x.sin(),
            Fonction::Cos => x.cos(),
            Fonction::Tan => x.tan(),
            Fonction::Log => x.log10(),
            Fonction::Ln => x.ln(),
            Fonction::Sqrt => x.sqrt(),
        }
    }
}

/// Constantes nommées acceptées par l’évaluateur.
pub fn constante(nom: &str) -> Option<f64> {
    match nom {
        "pi" => Some(std::f64::consts::PI),
        "e" => Some(std::f64::consts::E),
        _ => None,
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Nombre(f64),

    Neg(Box<Expr>),
    Appel(Fonction, Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Mod(Box<Expr>, Box<Expr>), // reste flottant, signe du dividende
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn evaluer(&self) -> f64 {
        use Expr::*;

        match self {
            Nombre(n) => *n,
            Neg(x) => -x.evaluer(),
            Appel(f, x) => f.appliquer(x.evaluer()),

            Add(a, b) => a.evaluer() + b.evaluer(),
            Sub(a, b) => a.evaluer() - b.evaluer(),
            Mul(a, b) => a.evaluer() * b.evaluer(),
            Div(a, b) => a.evaluer() / b.evaluer(),
            Mod(a, b) => a.evaluer() % b.evaluer(),
            Pow(a, b) => a.evaluer().powf(b.evaluer()),
        }
    }
}
