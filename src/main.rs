// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : eframe::run_native + NativeOptions
//                                 ou mode sans fenêtre : --touches "2+3*4="
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>
//
// Journal : RUST_LOG=debug pour voir les expressions normalisées (natif seulement).

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use clap::Parser;

    use crate::noyau::reglages::CHIFFRES_DEFAUT;

    #[derive(Parser, Debug)]
    #[command(name = "calculatrice", about = "Calculatrice (clavier + boutons)")]
    pub struct Args {
        /// Séquence de touches à jouer sans fenêtre (ex: "2+3*4="), un caractère = une touche
        #[arg(short, long)]
        pub touches: Option<String>,

        /// Chiffres significatifs du résultat (1 à 17)
        #[arg(short, long, default_value_t = CHIFFRES_DEFAUT)]
        pub chiffres: usize,
    }
}

/// Joue une séquence de touches sur un moteur neuf et imprime le rendu final.
#[cfg(not(target_arch = "wasm32"))]
fn jouer_touches(reglages: noyau::Reglages, touches: &str) {
    let mut app = AppCalc::new(reglages);
    for c in touches.chars() {
        let t = c.to_string();
        if noyau::Action::depuis_touche(&t).is_none() {
            log::warn!("touche ignorée: {c:?}");
            continue;
        }
        app.touche(&t);
    }

    if !app.rendu.libelle.is_empty() {
        println!("{}", app.rendu.libelle);
    }
    println!("{}", app.rendu.affichage);
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use clap::Parser;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::Args::parse();
    let reglages = noyau::Reglages::default().avec_chiffres(args.chiffres);
    log::info!(
        "démarrage ({} chiffres significatifs)",
        reglages.chiffres_significatifs
    );

    if let Some(touches) = args.touches {
        jouer_touches(reglages, &touches);
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([360.0, 520.0])
            .with_min_inner_size([320.0, 460.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(reglages)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
