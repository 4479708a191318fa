//! Noyau d’évaluation sûr (aucune exécution dynamique de code)
//!
//! Organisation interne :
//! - erreur.rs    : EvalError (erreurs typées)
//! - garde.rs     : jeu de caractères permis (avant tout le reste)
//! - jetons.rs    : tokenisation + métadonnées des opérateurs
//! - rpn.rs       : shunting-yard -> postfix
//! - eval.rs      : pile d’opérandes + pipeline complet
//! - precision.rs : nettoyage 12 décimales
//! - format.rs    : affichage du résultat ("Error" pour les non-finis)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod garde;
pub mod jetons;
pub mod precision;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

// API publique minimale
pub use erreur::EvalError;
pub use eval::{evaluate_expression, evaluer_avec_demarche, Demarche};
