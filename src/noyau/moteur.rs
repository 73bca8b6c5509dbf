//! src/noyau/moteur.rs
//!
//! Moteur d’expression (machine à états).
//!
//! Rôle : posséder l’expression en cours + le drapeau “vient d’être évaluée”,
//! appliquer une action (bouton/touche) et produire un Rendu pour la vue.
//!
//! Contrats :
//! - `appliquer` n’échoue jamais : une erreur d’évaluation devient la sentinelle ("Error").
//! - Une erreur est terminale pour l’expression (remise à vide), jamais retentée.
//! - Rien n’est global : le moteur appartient à l’état UI (AppCalc) qui le passe en &mut.

use super::action::Action;
use super::erreur::ErreurCalc;
use super::eval::eval_expression;
use super::expr::Fonction;
use super::format::{arrondir_significatifs, format_expr_pretty, format_nombre};
use super::normalise::{compter_parentheses, normaliser};
use super::reglages::Reglages;

/// Préfixes d’appel retirés d’un seul coup par Retour.
const PREFIXES_FONCTION: [&str; 6] = ["sqrt(", "sin(", "cos(", "tan(", "log(", "ln("];

/// Projection de l’état pour la vue (recalculée à chaque action).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Rendu {
    /// Champ principal : l’expression, ou la sentinelle après une erreur.
    pub affichage: String,
    /// Ligne secondaire : "2+3×4 =" après une évaluation réussie.
    pub libelle: String,
    /// Affiché en grisé quand `affichage` est vide.
    pub placeholder: String,
}

#[derive(Clone, Debug)]
pub struct Moteur {
    expr: String,
    juste_evalue: bool,
    libelle: String,
    erreur_affichee: bool,
    reglages: Reglages,
}

impl Default for Moteur {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl Moteur {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            expr: String::new(),
            juste_evalue: false,
            libelle: String::new(),
            erreur_affichee: false,
            reglages,
        }
    }

    pub fn expr(&self) -> &str {
        &self.expr
    }

    pub fn juste_evalue(&self) -> bool {
        self.juste_evalue
    }

    #[cfg(test)]
    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    pub fn rendu(&self) -> Rendu {
        let affichage = if self.erreur_affichee {
            self.reglages.sentinelle_erreur.clone()
        } else {
            self.expr.clone()
        };

        Rendu {
            affichage,
            libelle: self.libelle.clone(),
            placeholder: self.reglages.placeholder.clone(),
        }
    }

    /// Applique une action et retourne le nouveau rendu.
    ///
    /// Entrée de mode (après un résultat) :
    /// - opérateur binaire => on enchaîne sur le résultat ("14" puis "+" => "14+") ;
    ///   un résultat négatif est parenthésé devant la puissance ("-5" puis "^" => "(-5)**")
    /// - Egal / Retour     => on garde le résultat tel quel
    /// - tout le reste     => nouvelle expression (le résultat est oublié)
    pub fn appliquer(&mut self, action: Action) -> Rendu {
        self.erreur_affichee = false;

        if self.juste_evalue {
            if action.est_operateur() {
                self.juste_evalue = false;
                // "-5**2" se lirait -(5**2)
                if matches!(action, Action::Puissance) && self.expr.starts_with('-') {
                    self.expr = format!("({})", self.expr);
                }
            } else if !matches!(action, Action::Egal | Action::Retour) {
                self.expr.clear();
                self.juste_evalue = false;
            }
        }

        match action {
            Action::Caractere('%') => self.ajouter_pourcent(),
            Action::Caractere(c) if est_operateur(c) => self.ajouter_operateur(&c.to_string()),
            Action::Caractere(c) => self.expr.push(c),

            Action::Puissance => self.ajouter_operateur("**"),

            Action::Sin => self.ajouter_fonction(Fonction::Sin),
            Action::Cos => self.ajouter_fonction(Fonction::Cos),
            Action::Tan => self.ajouter_fonction(Fonction::Tan),
            Action::Log => self.ajouter_fonction(Fonction::Log),
            Action::Ln => self.ajouter_fonction(Fonction::Ln),
            Action::Racine => self.ajouter_fonction(Fonction::Sqrt),

            Action::Pi => self.expr.push_str(&format_nombre(std::f64::consts::PI)),
            Action::E => self.expr.push_str(&format_nombre(std::f64::consts::E)),

            Action::Parenthese => {
                let (ouvertes, fermees) = compter_parentheses(&self.expr);
                self.expr.push(if ouvertes > fermees { ')' } else { '(' });
            }

            Action::Effacer => self.effacer(),
            Action::Retour => self.retour(),
            Action::Egal => self.evaluer(),
        }

        self.rendu()
    }

    /* ------------------------ Saisie ------------------------ */

    /// Deux opérateurs de suite : le dernier gagne ("2+" puis "*" => "2*").
    fn ajouter_operateur(&mut self, op: &str) {
        if self.expr.ends_with("**") {
            self.expr.truncate(self.expr.len() - 2);
        } else if self.expr.ends_with(est_operateur) {
            self.expr.pop();
        }
        self.expr.push_str(op);
    }

    /// '%' n’a de sens qu’après une opérande : ignoré en début, après '(' ou un opérateur.
    fn ajouter_pourcent(&mut self) {
        let apres_operande = self
            .expr
            .chars()
            .last()
            .is_some_and(|c| !est_operateur(c) && c != '(');
        if apres_operande {
            self.expr.push('%');
        }
    }

    fn ajouter_fonction(&mut self, f: Fonction) {
        self.expr.push_str(f.nom());
        self.expr.push('(');
    }

    /// C : tout remettre à zéro (expression, libellé, mode).
    fn effacer(&mut self) {
        self.expr.clear();
        self.libelle.clear();
        self.juste_evalue = false;
    }

    /// Retour “intelligent” : un préfixe de fonction part d’un coup ("sin(" => ""),
    /// sinon un seul caractère. Sur un résultat, on repasse en édition.
    fn retour(&mut self) {
        self.juste_evalue = false;

        for pat in PREFIXES_FONCTION {
            if self.expr.ends_with(pat) {
                self.expr.truncate(self.expr.len() - pat.len());
                return;
            }
        }

        self.expr.pop();
    }

    /* ------------------------ Évaluation ------------------------ */

    fn evaluer(&mut self) {
        if self.expr.is_empty() {
            return;
        }

        let resultat = normaliser(&self.expr).and_then(|normalise| {
            log::debug!("évaluation: {:?} -> {:?}", self.expr, normalise);
            eval_expression(&normalise)
        });

        match resultat {
            Ok(valeur) => {
                let arrondi = arrondir_significatifs(valeur, self.reglages.chiffres_significatifs);
                self.libelle = format!("{} =", format_expr_pretty(self.expr.trim()));
                self.expr = format_nombre(arrondi);
                self.juste_evalue = true;
            }

            // Rien d’évaluable (ex: "+") : on ne touche à rien.
            Err(ErreurCalc::NormalisationVide) => {}

            Err(e) => {
                log::warn!("évaluation refusée pour {:?}: {e}", self.expr);
                self.expr.clear();
                self.libelle.clear();
                self.juste_evalue = false;
                self.erreur_affichee = true;
            }
        }
    }
}

fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}
