// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : libellé secondaire ("2+3×4 =") au-dessus, expression (ou placeholder) en grand
// - Pavé : chaque bouton porte un jeton, traduit par Action::depuis_jeton
//
// Le clavier est géré dans app.rs (événements globaux), pas ici.

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Action;

/// Pavé 5 colonnes ; "" = case vide.
const PAVE: [[&str; 5]; 6] = [
    ["sin", "cos", "tan", "log", "ln"],
    ["√", "xʸ", "π", "e", "( )"],
    ["7", "8", "9", "÷", "C"],
    ["4", "5", "6", "×", "DEL"],
    ["1", "2", "3", "−", "%"],
    ["0", ".", "+", "=", ""],
];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    // ligne secondaire (hauteur stable même vide)
                    let libelle = if self.rendu.libelle.is_empty() {
                        " "
                    } else {
                        self.rendu.libelle.as_str()
                    };
                    ui.label(egui::RichText::new(libelle).monospace().weak());
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    let texte = if self.rendu.affichage.is_empty() {
                        egui::RichText::new(&self.rendu.placeholder).weak()
                    } else if self.moteur.juste_evalue() {
                        egui::RichText::new(&self.rendu.affichage).strong()
                    } else {
                        egui::RichText::new(&self.rendu.affichage)
                    };
                    ui.label(texte.monospace().size(28.0));
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(5)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in PAVE {
                    for jeton in ligne {
                        if jeton.is_empty() {
                            ui.label("");
                        } else {
                            self.bouton(ui, jeton);
                        }
                    }
                    ui.end_row();
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, jeton: &str) {
        let resp = ui.add_sized([56.0, 40.0], egui::Button::new(jeton));
        if !resp.clicked() {
            return;
        }

        match Action::depuis_jeton(jeton) {
            Some(action) => self.appliquer(action),
            None => log::warn!("bouton sans action: {jeton:?}"),
        }
    }
}
