// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Écran : formule (ligne 1) + réponse (ligne 2), alignées à droite
// - Pavé 6 × 4 (Commande::CLAVIER)
// - Couleurs : "=" en bleu, chiffres/./± en clair, le reste en gris
//
// Note :
// - Le survol est géré par egui (pas d’état de couleur à garder ici).

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Commande;

const COLONNES: usize = 4;
const HAUTEUR_TOUCHE: f32 = 64.0;

const COULEUR_EGAL: egui::Color32 = egui::Color32::from_rgb(135, 206, 250);
const COULEUR_CHIFFRE: egui::Color32 = egui::Color32::from_rgb(248, 248, 255);
const COULEUR_AUTRE: egui::Color32 = egui::Color32::from_rgb(205, 201, 201);

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(4.0, 4.0);

        self.ui_ecran(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        let formule = self.formule_affichee();
        let reponse = self.reponse_affichee();

        ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
            ui.add_space(12.0);
            ui.label(egui::RichText::new(formule).size(24.0).strong());
            ui.add_space(12.0);
            ui.label(egui::RichText::new(reponse).size(28.0).strong());
        });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let largeur = (ui.available_width() - ui.spacing().item_spacing.x * 3.0) / COLONNES as f32;

        egui::Grid::new("pave_calculatrice")
            .num_columns(COLONNES)
            .spacing([4.0, 4.0])
            .show(ui, |ui| {
                for (i, cmd) in Commande::CLAVIER.into_iter().enumerate() {
                    self.bouton(ui, cmd, [largeur, HAUTEUR_TOUCHE]);
                    if (i + 1) % COLONNES == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, cmd: Commande, taille: [f32; 2]) {
        let fond = match cmd {
            Commande::Egal => COULEUR_EGAL,
            Commande::Chiffre(_) | Commande::Point | Commande::Signe => COULEUR_CHIFFRE,
            _ => COULEUR_AUTRE,
        };

        let texte = egui::RichText::new(cmd.libelle())
            .size(20.0)
            .strong()
            .color(egui::Color32::BLACK);

        let resp = ui.add_sized(taille, egui::Button::new(texte).fill(fond));
        if resp.clicked() {
            self.appuyer(cmd);
        }
    }
}
