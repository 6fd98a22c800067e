// src/noyau/format.rs

/// Met en forme un résultat numérique pour l'affichage.
///
/// Règles:
/// - |n| > 1e10 ou 0 < |n| < 1e-10 : notation exponentielle, 6 décimales
///   de mantisse (ex: 1.000000e-11)
/// - sinon : décimal arrondi à 10 décimales max, zéros et point finaux
///   retirés (3.1000000000 -> 3.1, 4.0000000000 -> 4)
///
/// Le seuil s'applique à la valeur absolue : un résultat négatif ordinaire
/// reste en décimal. Le zéro (y compris -0) s'affiche "0".
pub fn format_resultat(n: f64) -> String {
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if abs > 1e10 || abs < 1e-10 {
        return format!("{n:.6e}");
    }

    let s = format!("{n:.10}");
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}
