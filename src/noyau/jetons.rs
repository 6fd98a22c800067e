// src/noyau/jetons.rs

use super::erreur::ErreurEval;

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Nombre(f64),

    // Fonctions nommées (sin/cos/tan/log/ln/sqrt/factorial).
    // NOTE: le parse (to_rpn) vérifie que l'identifiant est bien une fonction connue.
    Ident(String),

    Plus,
    Moins,
    Fois,
    Divise,
    Puissance, // ^

    ParG,
    ParD,
    Virgule, // séparateur d'arguments : log(x, base)
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, 0.25)
/// - notation exponentielle (ex: 1.000000e-11) — les résultats formatés
///   peuvent être réinjectés dans une formule, il faut donc les relire
/// - opérateurs + - * / ^
/// - parenthèses ( ) et virgule
/// - constantes pi / π / e (résolues directement en Nombre)
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules)
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurEval> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses + virgule
        if c == '(' {
            out.push(Jeton::ParG);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::ParD);
            i += 1;
            continue;
        }
        if c == ',' {
            out.push(Jeton::Virgule);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Jeton::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Jeton::Moins);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Jeton::Fois);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Jeton::Divise);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Jeton::Puissance);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Identifiants ASCII (+ π unicode) : fonctions ou constantes
        if c == 'π' {
            out.push(Jeton::Nombre(std::f64::consts::PI));
            i += 1;
            continue;
        }
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let w = word.to_lowercase();

            // Constantes résolues ici, le reste part en Ident (vérifié au parse)
            match w.as_str() {
                "pi" => out.push(Jeton::Nombre(std::f64::consts::PI)),
                "e" => out.push(Jeton::Nombre(std::f64::consts::E)),
                _ => out.push(Jeton::Ident(w)),
            }
            continue;
        }

        // Nombre : chiffres, point décimal optionnel, exposant optionnel.
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }

            // Exposant : e/E suivi d'un chiffre ou d'un signe+chiffre, sinon
            // le 'e' est la constante d'Euler et on s'arrête avant.
            if i < chars.len() && (chars[i] == 'e' || chars[i] == 'E') {
                let mut j = i + 1;
                if j < chars.len() && (chars[j] == '+' || chars[j] == '-') {
                    j += 1;
                }
                if j < chars.len() && chars[j].is_ascii_digit() {
                    i = j;
                    while i < chars.len() && chars[i].is_ascii_digit() {
                        i += 1;
                    }
                }
            }

            let lit: String = chars[start..i].iter().collect();
            let v: f64 = lit
                .parse()
                .map_err(|_| ErreurEval::Syntaxe(format!("nombre invalide: '{lit}'")))?;
            out.push(Jeton::Nombre(v));
            continue;
        }

        return Err(ErreurEval::Syntaxe(format!("caractère inattendu: '{c}'")));
    }

    Ok(out)
}
