// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur f64
// Objectif:
// - Convertir une suite de Jeton en RPN (postfix), arité des fonctions comprise
// - Puis réduire la RPN sur une pile de f64
//
// Règles:
// - Ident(nom): doit être une fonction connue (sin/cos/tan/log/ln/sqrt/factorial)
// - Moins unaire:
//    - si '-' arrive quand on n'attend PAS une valeur, c'est une négation
//      préfixe (Neg), moins prioritaire que ^ : "-2^2" => -(2^2)
// - Virgule : compte les arguments de l'appel englobant (log(x, base))
//
// NOTE:
// - Les fonctions sont traitées comme des opérateurs "collés" à leur parenthèse
//   et sortent juste après la parenthèse fermante, avec leur arité.

use super::erreur::ErreurEval;
use super::jetons::Jeton;

#[derive(Clone, Debug, PartialEq)]
pub enum JetonRpn {
    Nombre(f64),

    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,

    /// Négation préfixe (moins unaire).
    Neg,

    /// Appel de fonction : nom + nombre d'arguments consommés sur la pile.
    Fonction(String, usize),
}

// Pile interne du shunting-yard. Les parenthèses mémorisent leurs virgules
// pour reconstituer l'arité au moment de la fermeture.
#[derive(Clone, Debug)]
enum PileOp {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
    Neg,
    ParG { virgules: usize },
    Fonction(String),
}

fn precedence(op: &PileOp) -> i32 {
    match op {
        PileOp::Plus | PileOp::Moins => 1,
        PileOp::Fois | PileOp::Divise | PileOp::Neg => 2,
        PileOp::Puissance => 3,
        _ => 0,
    }
}

fn precedence_jeton(t: &Jeton) -> i32 {
    match t {
        Jeton::Plus | Jeton::Moins => 1,
        Jeton::Fois | Jeton::Divise => 2,
        Jeton::Puissance => 3,
        _ => 0,
    }
}

fn is_right_associative(t: &Jeton) -> bool {
    matches!(t, Jeton::Puissance)
}

/// Identifiants reconnus comme fonctions.
fn is_fonction_ident(nom: &str) -> bool {
    matches!(
        nom,
        "sin" | "cos" | "tan" | "log" | "ln" | "sqrt" | "factorial"
    )
}

fn op_vers_rpn(op: PileOp) -> Result<JetonRpn, ErreurEval> {
    Ok(match op {
        PileOp::Plus => JetonRpn::Plus,
        PileOp::Moins => JetonRpn::Moins,
        PileOp::Fois => JetonRpn::Fois,
        PileOp::Divise => JetonRpn::Divise,
        PileOp::Puissance => JetonRpn::Puissance,
        PileOp::Neg => JetonRpn::Neg,
        PileOp::ParG { .. } => {
            return Err(ErreurEval::Syntaxe("parenthèses non fermées".into()))
        }
        PileOp::Fonction(nom) => {
            return Err(ErreurEval::Syntaxe(format!(
                "fonction '{nom}' sans parenthèses"
            )))
        }
    })
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Ident("sqrt"), ParG, Nombre(9), ParD]
///   rpn:    [Nombre(9), Fonction("sqrt", 1)]
pub fn to_rpn(jetons: &[Jeton]) -> Result<Vec<JetonRpn>, ErreurEval> {
    let mut out: Vec<JetonRpn> = Vec::new();
    let mut ops: Vec<PileOp> = Vec::new();

    // "valeur" = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Nombre(v) => {
                out.push(JetonRpn::Nombre(v));
                prev_was_value = true;
            }

            Jeton::Ident(nom) => {
                if !is_fonction_ident(&nom) {
                    return Err(ErreurEval::Syntaxe(format!("identifiant inconnu: '{nom}'")));
                }
                // fonction : reste sur la pile, sortira à la parenthèse fermante
                ops.push(PileOp::Fonction(nom));
                prev_was_value = false;
            }

            Jeton::ParG => {
                ops.push(PileOp::ParG { virgules: 0 });
                prev_was_value = false;
            }

            Jeton::Virgule => {
                // dépile les opérateurs de l'argument courant, puis note la virgule
                while !matches!(ops.last(), Some(PileOp::ParG { .. })) {
                    match ops.pop() {
                        Some(op) => out.push(op_vers_rpn(op)?),
                        None => {
                            return Err(ErreurEval::Syntaxe(
                                "virgule hors d'un appel de fonction".into(),
                            ))
                        }
                    }
                }
                if let Some(PileOp::ParG { virgules }) = ops.last_mut() {
                    *virgules += 1;
                }
                prev_was_value = false;
            }

            Jeton::ParD => {
                // dépile jusqu'à '('
                let virgules = loop {
                    match ops.pop() {
                        Some(PileOp::ParG { virgules }) => break virgules,
                        Some(op) => out.push(op_vers_rpn(op)?),
                        None => {
                            return Err(ErreurEval::Syntaxe("parenthèse fermante en trop".into()))
                        }
                    }
                };

                // si une fonction précède la parenthèse, elle sort avec son arité
                if let Some(PileOp::Fonction(_)) = ops.last() {
                    if let Some(PileOp::Fonction(nom)) = ops.pop() {
                        out.push(JetonRpn::Fonction(nom, virgules + 1));
                    }
                } else if virgules > 0 {
                    return Err(ErreurEval::Syntaxe(
                        "virgule hors d'un appel de fonction".into(),
                    ));
                }

                prev_was_value = true;
            }

            Jeton::Plus | Jeton::Fois | Jeton::Divise | Jeton::Puissance => {
                depiler_operateurs(&jeton, &mut ops, &mut out)?;
                ops.push(match jeton {
                    Jeton::Plus => PileOp::Plus,
                    Jeton::Fois => PileOp::Fois,
                    Jeton::Divise => PileOp::Divise,
                    Jeton::Puissance => PileOp::Puissance,
                    _ => unreachable!(),
                });
                prev_was_value = false;
            }

            Jeton::Moins => {
                if !prev_was_value {
                    // négation préfixe : s'empile sans rien dépiler
                    // (rien à sa gauche ne lui appartient)
                    ops.push(PileOp::Neg);
                } else {
                    depiler_operateurs(&Jeton::Moins, &mut ops, &mut out)?;
                    ops.push(PileOp::Moins);
                }
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        out.push(op_vers_rpn(op)?);
    }

    Ok(out)
}

/// Dépile vers `out` tant que la précédence/associativité l'exige.
/// S'arrête sur '(' et sur une fonction (collée à son argument).
fn depiler_operateurs(
    jeton: &Jeton,
    ops: &mut Vec<PileOp>,
    out: &mut Vec<JetonRpn>,
) -> Result<(), ErreurEval> {
    while let Some(top) = ops.last() {
        if matches!(top, PileOp::ParG { .. } | PileOp::Fonction(_)) {
            break;
        }

        let p_top = precedence(top);
        let p_tok = precedence_jeton(jeton);

        let doit_pop = if is_right_associative(jeton) {
            p_top > p_tok
        } else {
            p_top >= p_tok
        };

        if doit_pop {
            let op = ops.pop().unwrap();
            out.push(op_vers_rpn(op)?);
        } else {
            break;
        }
    }
    Ok(())
}

/// Réduit une RPN sur une pile de f64.
///
/// Chaque étape doit produire un réel fini : division par zéro, débordement
/// et sorties de domaine sont coupés ici, jamais plus tard.
pub fn eval_rpn(rpn: &[JetonRpn]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::new();

    for jeton in rpn.iter() {
        match jeton {
            JetonRpn::Nombre(v) => st.push(*v),

            JetonRpn::Plus | JetonRpn::Moins | JetonRpn::Fois | JetonRpn::Divise
            | JetonRpn::Puissance => {
                let b = st.pop().ok_or_else(expression_invalide)?;
                let a = st.pop().ok_or_else(expression_invalide)?;

                let v = match jeton {
                    JetonRpn::Plus => a + b,
                    JetonRpn::Moins => a - b,
                    JetonRpn::Fois => a * b,
                    JetonRpn::Divise => a / b,
                    JetonRpn::Puissance => a.powf(b),
                    _ => unreachable!(),
                };

                st.push(fini(v)?);
            }

            JetonRpn::Neg => {
                let x = st.pop().ok_or_else(expression_invalide)?;
                st.push(-x);
            }

            JetonRpn::Fonction(nom, arite) => {
                let v = appliquer_fonction(nom, *arite, &mut st)?;
                st.push(fini(v)?);
            }
        }
    }

    if st.len() != 1 {
        return Err(expression_invalide());
    }
    Ok(st.pop().unwrap())
}

fn expression_invalide() -> ErreurEval {
    ErreurEval::Syntaxe("expression invalide".into())
}

fn fini(v: f64) -> Result<f64, ErreurEval> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurEval::NonFini)
    }
}

fn appliquer_fonction(nom: &str, arite: usize, st: &mut Vec<f64>) -> Result<f64, ErreurEval> {
    // log accepte 1 ou 2 arguments, tout le reste exactement 1
    if nom == "log" && arite == 2 {
        let base = st.pop().ok_or_else(expression_invalide)?;
        let x = st.pop().ok_or_else(expression_invalide)?;
        return Ok(x.ln() / base.ln());
    }
    if arite != 1 {
        return Err(ErreurEval::Syntaxe(format!(
            "'{nom}' n'accepte pas {arite} arguments"
        )));
    }

    let x = st.pop().ok_or_else(expression_invalide)?;

    match nom {
        "sin" => Ok(x.sin()),
        "cos" => Ok(x.cos()),
        "tan" => Ok(x.tan()),

        // log à un argument = logarithme naturel (pas décimal)
        "log" | "ln" => Ok(x.ln()),

        "sqrt" => {
            if x < 0.0 {
                return Err(ErreurEval::Domaine("racine d'un négatif".into()));
            }
            Ok(x.sqrt())
        }

        "factorial" => factorielle(x),

        _ => Err(ErreurEval::Syntaxe(format!("fonction inconnue: '{nom}'"))),
    }
}

/// Factorielle sur f64 : entiers 0..=170 seulement (171! déborde).
fn factorielle(x: f64) -> Result<f64, ErreurEval> {
    if x < 0.0 || x.fract() != 0.0 {
        return Err(ErreurEval::Domaine(
            "factorielle d'un non-entier ou d'un négatif".into(),
        ));
    }
    if x > 170.0 {
        return Err(ErreurEval::NonFini);
    }

    let n = x as u32;
    let mut acc = 1.0_f64;
    for k in 2..=n {
        acc *= f64::from(k);
    }
    Ok(acc)
}
