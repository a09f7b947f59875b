// src/app.rs
//
// Calculatrice à jetons — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Clavier (événements traités dans leur ordre d’arrivée) :
// - texte tapé -> Commande::depuis_touche
// - Backspace = ⇦, Enter = "=", Escape = C

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Commande;

impl AppCalc {
    /// Rejoue les événements clavier d’une frame, dans l’ordre.
    fn traiter_evenements(&mut self, evenements: &[egui::Event]) {
        for e in evenements {
            match e {
                egui::Event::Text(t) => {
                    for c in t.chars() {
                        self.touche(c);
                    }
                }
                egui::Event::Key {
                    key, pressed: true, ..
                } => {
                    let cmd = match key {
                        egui::Key::Backspace => Commande::Retour,
                        egui::Key::Enter => Commande::Egal,
                        egui::Key::Escape => Commande::Effacer,
                        _ => continue,
                    };
                    self.appuyer(cmd);
                }
                _ => {}
            }
        }
    }
}

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let evenements = ctx.input(|i| i.events.clone());
        self.traiter_evenements(&evenements);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });
    }
}
