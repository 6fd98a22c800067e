// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Écran : ligne formule (discrète) + valeur courante (grosse, monospace)
//   + badge mémoire quand la case est occupée
// - Pavé : disposition classique en grille de quatre colonnes
//   (C/M/%/÷ · 789× · 456− · 123+ · 0.= · sin cos tan √ · log ln x^y x!)
// - Historique : panneau repliable, les plus récents en tête, avec bouton
//   d'effacement dédié
//
// Aucune règle de calcul ici : chaque bouton envoie son symbole au moteur
// et la vue relit l'état.

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Calculatrice de poche");
                ui.add_space(6.0);

                self.ui_ecran(ui);

                ui.add_space(8.0);

                self.ui_pave(ui);

                ui.add_space(8.0);
                ui.separator();

                self.ui_historique(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                // formule en cours (souvent vide)
                let formule = self.moteur.formule();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.weak(egui::RichText::new(formule).monospace());
                });

                // valeur courante (ou "Error")
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(
                        egui::RichText::new(self.moteur.affichage())
                            .monospace()
                            .size(30.0),
                    );
                });

                if let Some(m) = self.moteur.memoire() {
                    ui.small(format!("M = {m}"));
                }
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton(ui, "C", "clear");
                self.bouton(ui, "M", "memory");
                self.bouton(ui, "%", "%");
                self.bouton(ui, "÷", "/");
                ui.end_row();

                self.bouton(ui, "7", "7");
                self.bouton(ui, "8", "8");
                self.bouton(ui, "9", "9");
                self.bouton(ui, "×", "*");
                ui.end_row();

                self.bouton(ui, "4", "4");
                self.bouton(ui, "5", "5");
                self.bouton(ui, "6", "6");
                self.bouton(ui, "−", "-");
                ui.end_row();

                self.bouton(ui, "1", "1");
                self.bouton(ui, "2", "2");
                self.bouton(ui, "3", "3");
                self.bouton(ui, "+", "+");
                ui.end_row();

                self.bouton(ui, "0", "0");
                self.bouton(ui, ".", ".");
                self.bouton(ui, "=", "=");
                ui.label("");
                ui.end_row();

                self.bouton(ui, "sin", "sin");
                self.bouton(ui, "cos", "cos");
                self.bouton(ui, "tan", "tan");
                self.bouton(ui, "√", "sqrt");
                ui.end_row();

                self.bouton(ui, "log", "log");
                self.bouton(ui, "ln", "ln");
                self.bouton(ui, "x^y", "^");
                self.bouton(ui, "x!", "!");
                ui.end_row();
            });
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, symbole: &str) {
        let resp = ui.add_sized([56.0, 32.0], egui::Button::new(label));
        if resp.clicked() {
            self.touche(symbole);
        }
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.moteur.historique_len() == 0 {
                    ui.weak("(vide)");
                    return;
                }

                // copie locale : la liste doit rester lisible pendant que le
                // bouton d'effacement emprunte l'état en mutation
                let entrees: Vec<(String, String)> = self
                    .moteur
                    .historique()
                    .map(|e| (e.formule.clone(), e.resultat.clone()))
                    .collect();

                for (formule, resultat) in &entrees {
                    ui.monospace(format!("{formule} = {resultat}"));
                }

                ui.add_space(4.0);
                if ui.button("Effacer l'historique").clicked() {
                    self.effacer_historique();
                }
            });
    }
}
