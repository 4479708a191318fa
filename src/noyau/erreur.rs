// src/noyau/erreur.rs

/// Erreurs typées du noyau.
///
/// Les cas numériques (division par zéro, 0^négatif...) ne sont PAS des erreurs :
/// ils sortent en ±inf / NaN, et l’appelant décide de l’affichage.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvalError {
    #[error("entrée vide")]
    EmptyInput,

    #[error("caractère inattendu: '{caractere}' (position {position})")]
    InvalidCharacter { caractere: char, position: usize },

    #[error("parenthèses non équilibrées")]
    MismatchedParenthesis,

    #[error("opérande manquant pour un opérateur")]
    StackUnderflow,

    #[error("expression invalide")]
    InvalidExpression,
}
