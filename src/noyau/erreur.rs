// src/noyau/erreur.rs
//
// L'unique type d'erreur du noyau : toute évaluation ratée finit ici,
// et le moteur la traduit uniformément en marqueur "Error" à l'écran.

use thiserror::Error;

/// Échec d'évaluation d'une expression.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ErreurEval {
    /// Entrée mal formée : jeton inattendu, parenthèses déséquilibrées,
    /// mauvaise arité de fonction, expression vide...
    #[error("syntaxe invalide: {0}")]
    Syntaxe(String),

    /// Opération hors de son domaine (racine d'un négatif,
    /// factorielle non entière ou négative).
    #[error("hors domaine: {0}")]
    Domaine(String),

    /// Le calcul a produit un NaN ou un infini (division par zéro,
    /// débordement).
    #[error("résultat non fini")]
    NonFini,
}
