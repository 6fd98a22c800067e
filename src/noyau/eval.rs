// src/noyau/eval.rs
//
// Pipeline complet : texte -> jetons -> RPN -> f64.
// C'est la routine interne que le moteur appelle pour '=' et pour les
// fonctions unaires ; elle ne connaît ni l'affichage ni l'historique.

use tracing::debug;

use super::erreur::ErreurEval;
use super::jetons::tokenize;
use super::rpn::{eval_rpn, to_rpn};

/// Évalue une expression arithmétique infixe et retourne un réel fini.
///
/// Grammaire : + - * / ^ ( ), fonctions sin/cos/tan/log/ln/sqrt/factorial,
/// constantes pi et e, `^` associatif à droite. Le '^' est compris tel quel
/// par l'évaluateur, aucune réécriture préalable n'est nécessaire.
pub fn eval_expression(texte: &str) -> Result<f64, ErreurEval> {
    let s = texte.trim();
    if s.is_empty() {
        return Err(ErreurEval::Syntaxe("entrée vide".into()));
    }

    let jetons = tokenize(s)?;
    debug!(expression = s, ?jetons, "jetons");

    let rpn = to_rpn(&jetons)?;
    debug!(?rpn, "rpn");

    let v = eval_rpn(&rpn)?;
    debug!(valeur = v, "évaluation réussie");
    Ok(v)
}
