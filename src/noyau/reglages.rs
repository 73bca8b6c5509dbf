// src/noyau/reglages.rs
//
// Réglages du moteur (valeurs par défaut + garde-fous).

/// Précision par défaut du résultat (chiffres significatifs).
pub const CHIFFRES_DEFAUT: usize = 12;

/// Garde-fou : au-delà de 17 chiffres, un f64 n’a plus rien à dire.
pub const CHIFFRES_MAX: usize = 17;

#[derive(Clone, Debug, PartialEq)]
pub struct Reglages {
    pub chiffres_significatifs: usize,
    pub sentinelle_erreur: String,
    pub placeholder: String,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            chiffres_significatifs: CHIFFRES_DEFAUT,
            sentinelle_erreur: "Error".to_string(),
            placeholder: "0".to_string(),
        }
    }
}

impl Reglages {
    pub fn avec_chiffres(mut self, chiffres: usize) -> Self {
        self.chiffres_significatifs = chiffres.clamp(1, CHIFFRES_MAX);
        self
    }
}
