// src/app.rs
//
// Calculatrice de poche — module App (racine)
// -------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Le clavier physique est traduit ici en symboles de touches du moteur :
// chiffres, . + - * / ^ % =, Enter (=), Escape (clear), Backspace.
// egui consomme les évènements, la plateforme ne voit donc pas de
// comportement par défaut à supprimer.

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        for symbole in symboles_clavier(ctx) {
            self.touche(&symbole);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}

/// Traduit les évènements clavier egui de cette frame en symboles du moteur.
fn symboles_clavier(ctx: &egui::Context) -> Vec<String> {
    let mut out = Vec::new();

    ctx.input(|i| {
        for ev in &i.events {
            match ev {
                // caractères tapés : '=' arrive ici, pas par Key::Equals,
                // donc pas de double déclenchement avec Enter
                egui::Event::Text(t) => {
                    for c in t.chars() {
                        if matches!(c, '0'..='9' | '.' | '+' | '-' | '*' | '/' | '^' | '%' | '=')
                        {
                            out.push(c.to_string());
                        }
                    }
                }

                egui::Event::Key {
                    key, pressed: true, ..
                } => match key {
                    egui::Key::Enter => out.push("=".to_string()),
                    egui::Key::Escape => out.push("clear".to_string()),
                    egui::Key::Backspace => out.push("backspace".to_string()),
                    _ => {}
                },

                _ => {}
            }
        }
    });

    out
}
