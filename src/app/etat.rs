//! src/app/etat.rs
//!
//! État UI (sans vue, sans calcul).
//!
//! Rôle : porter l'instance du Moteur et relayer les actions des boutons
//! et du clavier. Les règles de calcul vivent toutes dans noyau::moteur ;
//! ici rien ne décide, tout transite.

use crate::noyau::Moteur;

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub moteur: Moteur,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            moteur: Moteur::new(),
        }
    }
}

impl AppCalc {
    /// Relaye un symbole de touche au moteur (symboles inconnus ignorés).
    pub fn touche(&mut self, symbole: &str) {
        self.moteur.appuyer_texte(symbole);
    }

    /// Bouton du panneau d'historique. Seule voie d'effacement :
    /// `clear` ne touche ni à la mémoire ni à l'historique.
    pub fn effacer_historique(&mut self) {
        self.moteur.effacer_historique();
    }
}
