//! Calculatrice RPN — évaluateur d’expressions sûr.
//!
//! `evaluate_expression("200 + 10 %")` -> `Ok(200.1)` ; aucune exécution dynamique de code.

pub mod config;
pub mod noyau;

pub use noyau::{evaluate_expression, EvalError};
