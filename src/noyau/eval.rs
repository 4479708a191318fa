//! Noyau — évaluation (pipeline réel)
//!
//! garde -> tokenize -> RPN -> pile d’opérandes -> nettoyage de précision
//!
//! Tout vit le temps d’un appel : pas d’état global, pas de cache.
//! Le noyau ne logue rien ; l’appelant décide.

use super::erreur::EvalError;
use super::garde::verifier_caracteres;
use super::jetons::{format_tokens, tokenize, Operateur, Tok};
use super::precision::precise;
use super::rpn::to_postfix;

#[derive(Default, Clone, Debug, PartialEq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

fn depiler(st: &mut Vec<f64>) -> Result<f64, EvalError> {
    st.pop().ok_or(EvalError::StackUnderflow)
}

/// (a, b) avec b dépilé en premier : a est l’opérande de gauche.
fn depiler_paire(st: &mut Vec<f64>) -> Result<(f64, f64), EvalError> {
    let b = depiler(st)?;
    let a = depiler(st)?;
    Ok((a, b))
}

/// Évalue une suite postfixée avec une pile d’opérandes.
///
/// Division par zéro & co : ±inf / NaN (IEEE-754), pas une erreur.
pub fn evaluate(postfix: &[Tok]) -> Result<f64, EvalError> {
    let mut st: Vec<f64> = Vec::with_capacity(postfix.len());

    for &tok in postfix {
        match tok {
            Tok::Num(v) => st.push(v),

            Tok::Op(op) => {
                let v = match op {
                    Operateur::MoinsUnaire => -depiler(&mut st)?,
                    Operateur::Percent => depiler(&mut st)? / 100.0,
                    Operateur::Plus => depiler_paire(&mut st).map(|(a, b)| a + b)?,
                    Operateur::Minus => depiler_paire(&mut st).map(|(a, b)| a - b)?,
                    Operateur::Star => depiler_paire(&mut st).map(|(a, b)| a * b)?,
                    Operateur::Slash => depiler_paire(&mut st).map(|(a, b)| a / b)?,
                    Operateur::Caret => depiler_paire(&mut st).map(|(a, b)| a.powf(b))?,
                };
                st.push(v);
            }

            // to_postfix ne laisse jamais de parenthèse
            Tok::LPar | Tok::RPar => return Err(EvalError::MismatchedParenthesis),
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(EvalError::InvalidExpression),
    }
}

/// API publique : évalue une expression saisie par l’utilisateur.
///
/// Retourne la valeur nettoyée (12 décimales), ou ±inf / NaN tels quels.
pub fn evaluate_expression(raw: &str) -> Result<f64, EvalError> {
    evaluer_avec_demarche(raw).map(|(v, _d)| v)
}

/// Comme [`evaluate_expression`], mais garde aussi la démarche (jetons + RPN).
pub fn evaluer_avec_demarche(raw: &str) -> Result<(f64, Demarche), EvalError> {
    verifier_caracteres(raw)?;

    // 1) Jetons
    let jetons = tokenize(raw)?;

    // 2) RPN
    let rpn = to_postfix(&jetons)?;

    // 3) Pile + nettoyage
    let v = precise(evaluate(&rpn)?);

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };

    Ok((v, d))
}
