// src/noyau/garde.rs
//
// Garde de caractères (défense en profondeur)
// -------------------------------------------
// Le noyau fait confiance à l’appelant pour le jeu de caractères,
// mais evaluate_expression passe TOUJOURS ici avant jetons/rpn/eval.
// Jeu permis : [0-9+\-*/().^%\s]

use lazy_static::lazy_static;
use regex::Regex;

use super::erreur::EvalError;

lazy_static! {
    /// Premier caractère hors du jeu permis.
    static ref CARACTERE_INTERDIT: Regex = Regex::new(r"[^0-9+\-*/().^%\s]").unwrap();
}

/// Vérifie que `s` n’est pas vide et ne contient que des caractères permis.
/// La position rendue est un index de caractère (pas d’octet).
pub fn verifier_caracteres(s: &str) -> Result<(), EvalError> {
    if s.trim().is_empty() {
        return Err(EvalError::EmptyInput);
    }

    match CARACTERE_INTERDIT.find(s) {
        None => Ok(()),
        Some(m) => {
            let caractere = m.as_str().chars().next().unwrap_or('\u{FFFD}');
            let position = s[..m.start()].chars().count();
            Err(EvalError::InvalidCharacter {
                caractere,
                position,
            })
        }
    }
}
