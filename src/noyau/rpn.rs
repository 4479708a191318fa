// src/noyau/rpn.rs
//
// Shunting-yard -> RPN (postfix)
//
// Règles:
// - Moins unaire : '-' arrivé en début d’expression, après un opérateur ou après '('
//   devient Operateur::MoinsUnaire (précédence 5, droite).
// - '%' est postfixé : empilé comme un opérateur de précédence 5.
// - Une parenthèse orpheline (d’un côté ou de l’autre) est une erreur, jamais
//   “avalée” comme un opérateur.

use super::erreur::EvalError;
use super::jetons::{Associativite, Operateur, Tok};

/// Catégorie du jeton précédent (sert au moins unaire).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Precedent {
    Debut,
    Nombre,
    Operateur,
    ParOuvrante,
    ParFermante,
}

/// Entrée de la pile d’opérateurs.
#[derive(Clone, Copy, Debug)]
enum Pile {
    Op(Operateur),
    LPar,
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(3), Star, Minus, Num(2)]
///   rpn:    [Num(3), Num(2), MoinsUnaire, Star]
pub fn to_postfix(tokens: &[Tok]) -> Result<Vec<Tok>, EvalError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Pile> = Vec::new();
    let mut prev = Precedent::Debut;

    for &tok in tokens {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev = Precedent::Nombre;
            }

            Tok::LPar => {
                ops.push(Pile::LPar);
                prev = Precedent::ParOuvrante;
            }

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vide avant => ')' orpheline
                loop {
                    match ops.pop() {
                        Some(Pile::LPar) => break,
                        Some(Pile::Op(op)) => out.push(Tok::Op(op)),
                        None => return Err(EvalError::MismatchedParenthesis),
                    }
                }
                prev = Precedent::ParFermante;
            }

            Tok::Op(Operateur::Percent) => {
                // 5 est la précédence max : rien ne la dépasse strictement,
                // on garde quand même la règle générale.
                let p = Operateur::Percent.precedence();
                while let Some(&Pile::Op(top)) = ops.last() {
                    if top.precedence() > p {
                        out.push(Tok::Op(top));
                        ops.pop();
                    } else {
                        break;
                    }
                }
                ops.push(Pile::Op(Operateur::Percent));
                prev = Precedent::Operateur;
            }

            Tok::Op(op) => {
                let op = match op {
                    Operateur::Minus
                        if matches!(
                            prev,
                            Precedent::Debut | Precedent::Operateur | Precedent::ParOuvrante
                        ) =>
                    {
                        Operateur::MoinsUnaire
                    }
                    autre => autre,
                };

                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(&Pile::Op(top)) = ops.last() {
                    let p_top = top.precedence();
                    let p_tok = op.precedence();

                    let doit_pop = p_top > p_tok
                        || (p_top == p_tok && op.associativite() == Associativite::Gauche);

                    if doit_pop {
                        out.push(Tok::Op(top));
                        ops.pop();
                    } else {
                        break;
                    }
                }

                ops.push(Pile::Op(op));
                prev = Precedent::Operateur;
            }
        }
    }

    // vide la pile ops
    while let Some(p) = ops.pop() {
        match p {
            Pile::Op(op) => out.push(Tok::Op(op)),
            Pile::LPar => return Err(EvalError::MismatchedParenthesis),
        }
    }

    Ok(out)
}
