// src/noyau/jetons.rs

use super::erreur::EvalError;

/// Opérateurs reconnus. Ensemble fermé : pas de symbole “inconnu” possible.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Minus,
    Star,
    Slash,
    Caret,   // ^
    Percent, // % postfixé
    MoinsUnaire,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

impl Operateur {
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Minus => 2,
            Operateur::Star | Operateur::Slash => 3,
            Operateur::Caret => 4,
            Operateur::Percent | Operateur::MoinsUnaire => 5,
        }
    }

    /// `%` est unaire postfixé : l’associativité ne sert jamais, on le range à gauche.
    pub fn associativite(self) -> Associativite {
        match self {
            Operateur::Caret | Operateur::MoinsUnaire => Associativite::Droite,
            _ => Associativite::Gauche,
        }
    }

    pub fn symbole(self) -> &'static str {
        match self {
            Operateur::Plus => "+",
            Operateur::Minus => "-",
            Operateur::Star => "*",
            Operateur::Slash => "/",
            Operateur::Caret => "^",
            Operateur::Percent => "%",
            Operateur::MoinsUnaire => "u-",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),
    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres `[0-9]*\.?[0-9]+` (ex: 12, 3.5, .5) ; pas d’exposant, pas de signe
/// - opérateurs + - * / ^ et % (postfixé)
/// - parenthèses ( )
///
/// Le moins n’est PAS désambiguïsé ici (c’est le travail de rpn.rs).
/// Un reste non lisible (ex: "." seul, "1.") est signalé, jamais tronqué.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, EvalError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let tok = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Op(Operateur::Plus)),
            '-' => Some(Tok::Op(Operateur::Minus)),
            '*' => Some(Tok::Op(Operateur::Star)),
            '/' => Some(Tok::Op(Operateur::Slash)),
            '^' => Some(Tok::Op(Operateur::Caret)),
            '%' => Some(Tok::Op(Operateur::Percent)),
            _ => None,
        };
        if let Some(t) = tok {
            out.push(t);
            i += 1;
            continue;
        }

        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }

            // partie décimale seulement si au moins un chiffre suit le point
            if i + 1 < chars.len() && chars[i] == '.' && chars[i + 1].is_ascii_digit() {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }

            if i == start {
                // point sans chiffre derrière
                return Err(EvalError::InvalidCharacter {
                    caractere: c,
                    position: i,
                });
            }

            let texte: String = chars[start..i].iter().collect();
            let v = texte
                .parse::<f64>()
                .map_err(|_| EvalError::InvalidCharacter {
                    caractere: c,
                    position: start,
                })?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(EvalError::InvalidCharacter {
            caractere: c,
            position: i,
        });
    }

    Ok(out)
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
