//! Noyau de la calculatrice
//!
//! Organisation interne :
//! - erreur.rs  : ErreurEval (la seule famille d'erreurs d'évaluation)
//! - jetons.rs  : tokenisation (nombres f64, identifiants, opérateurs)
//! - rpn.rs     : shunting-yard + réduction RPN
//! - eval.rs    : pipeline complet texte -> f64
//! - format.rs  : mise en forme des résultats (décimal / exponentiel)
//! - moteur.rs  : machine à touches (affichage, formule, mémoire, historique)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod moteur;
pub mod rpn;

#[cfg(test)]
mod tests_moteur;


// API publique minimale
pub use erreur::ErreurEval;
pub use eval::eval_expression;
pub use format::format_resultat;
pub use moteur::{EntreeHistorique, Fonction, Moteur, Touche, MARQUEUR_ERREUR};
