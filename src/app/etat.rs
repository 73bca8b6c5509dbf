//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder le moteur (une seule instance, explicite) et le dernier rendu.
//! La vue et le clavier ne touchent jamais l’expression directement : tout passe par `appliquer`.

use crate::noyau::{Action, Moteur, Rendu, Reglages};

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub moteur: Moteur,

    // --- sortie ---
    pub rendu: Rendu,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        let moteur = Moteur::new(reglages);
        let rendu = moteur.rendu();
        Self { moteur, rendu }
    }

    /// Bouton ou touche : une action, un nouveau rendu.
    pub fn appliquer(&mut self, action: Action) {
        log::trace!("action: {action:?}");
        self.rendu = self.moteur.appliquer(action);
    }

    /// Touche clavier (nom egui ou texte tapé). Les touches sans action sont ignorées.
    pub fn touche(&mut self, touche: &str) {
        if let Some(action) = Action::depuis_touche(touche) {
            self.appliquer(action);
        }
    }
}
