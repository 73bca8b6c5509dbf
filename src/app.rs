// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier : pas de champ texte à focaliser, on lit les événements de la frame.
// - Event::Text   : chiffres, opérateurs, ( ) ^ =, mnémoniques s/c/t/l/r
// - Event::Key    : Enter, Backspace, Escape

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

/// Traduit un événement egui en nom de touche compris par Action::depuis_touche.
fn nom_touche(ev: &egui::Event) -> Option<String> {
    match ev {
        egui::Event::Text(t) => Some(t.clone()),
        egui::Event::Key {
            key, pressed: true, ..
        } => match key {
            egui::Key::Enter => Some("Enter".to_string()),
            egui::Key::Backspace => Some("Backspace".to_string()),
            egui::Key::Escape => Some("Escape".to_string()),
            _ => None,
        },
        _ => None,
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let touches: Vec<String> = ctx.input(|i| i.events.iter().filter_map(nom_touche).collect());
        for t in touches {
            self.touche(&t);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
