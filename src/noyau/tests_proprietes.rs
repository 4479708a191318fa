//! Tests de propriétés : précision + idempotence + robustesse + déterminisme.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - seules les erreurs typées sont acceptées, jamais de panique

use std::time::{Duration, Instant};

use super::precision::precise;
use super::{evaluate_expression, EvalError};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération ------------------------ */

/// Décimal exact en micro-unités : (texte, valeur * 10^6).
fn gen_decimal(rng: &mut Rng, limite_entier: u32) -> (String, i64) {
    let entier = rng.pick(limite_entier) as i64;
    let micro = rng.pick(1_000_000) as i64;
    let chiffres = rng.pick(7) as usize; // 0..=6 décimales

    // tronque micro à `chiffres` décimales
    let pas = 10_i64.pow(6 - chiffres as u32);
    let micro = micro / pas * pas;

    let texte = if chiffres == 0 {
        format!("{entier}")
    } else {
        let frac = format!("{:06}", micro);
        format!("{entier}.{}", &frac[..chiffres])
    };
    (texte, entier * 1_000_000 + micro)
}

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(4) {
        0 => format!("{}", rng.pick(100)),
        1 => format!("{}.{}", rng.pick(10), rng.pick(100)),
        2 => format!(".{}", rng.pick(10)),
        _ => format!("{}", rng.pick(10)),
    }
}

fn gen_expr(rng: &mut Rng, depth: usize) -> String {
    if depth == 0 {
        return gen_atome(rng);
    }

    match rng.pick(9) {
        0 => gen_atome(rng),
        1 => format!("({} + {})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        2 => format!("{} - {}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        3 => format!("{} * {}", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        4 => format!("({} / {})", gen_expr(rng, depth - 1), gen_expr(rng, depth - 1)),
        5 => format!("{} ^ {}", gen_atome(rng), rng.pick(4)),
        6 => format!("-{}", gen_expr(rng, depth - 1)),
        7 => format!("{} %", gen_expr(rng, depth - 1)),
        _ => format!("({})", gen_expr(rng, depth - 1)),
    }
}

/// Fragments volontairement cassés : parenthèses, opérateurs pendants, nombres collés.
fn gen_bruit(rng: &mut Rng) -> String {
    const MORCEAUX: [&str; 12] = ["(", ")", "+", "-", "*", "/", "^", "%", "1", "2.5", " ", ".7"];
    let n = 1 + rng.pick(10) as usize;
    (0..n).map(|_| MORCEAUX[rng.pick(12) as usize]).collect()
}

/* ------------------------ Tests ------------------------ */

/// Somme exacte en micro-unités, relue comme le littéral décimal correspondant.
fn somme_attendue(ma: i64, mb: i64) -> f64 {
    let m = ma + mb;
    format!("{}.{:06}", m / 1_000_000, m % 1_000_000)
        .parse()
        .unwrap()
}

#[test]
fn prop_somme_decimale_douze_chiffres_significatifs() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let (ta, ma) = gen_decimal(&mut rng, 1_000_000);
        let (tb, mb) = gen_decimal(&mut rng, 1_000_000);
        let expr = format!("{ta} + {tb}");

        let v = evaluate_expression(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        let attendu = somme_attendue(ma, mb);

        assert!(
            (v - attendu).abs() <= attendu.abs() * 1e-12,
            "expr={expr:?} v={v} attendu={attendu}"
        );
    }
}

#[test]
fn prop_somme_decimale_exacte_sous_mille() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // somme < 2048 : l’erreur binaire reste sous un demi-pas de 1e-12,
    // le nettoyage rend exactement le littéral
    let mut rng = Rng::new(0xD1CE_u64);

    for _ in 0..400 {
        budget(t0, max);

        let (ta, ma) = gen_decimal(&mut rng, 1_000);
        let (tb, mb) = gen_decimal(&mut rng, 1_000);
        let expr = format!("{ta} + {tb}");

        let v = evaluate_expression(&expr).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert_eq!(v, somme_attendue(ma, mb), "expr={expr:?}");
    }
}

#[test]
fn prop_nettoyage_idempotent() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xBADC0DE_u64);

    for _ in 0..500 {
        budget(t0, max);

        let expr = gen_expr(&mut rng, 3);
        if let Ok(v) = evaluate_expression(&expr) {
            if v.is_finite() {
                assert_eq!(precise(v), v, "expr={expr:?}");
            }
        }
    }

    // balayage direct, y compris la zone 4096..9007 et au-delà de 2^53 / 1e12
    for _ in 0..2000 {
        budget(t0, max);

        let entier = rng.pick(2_000_000) as f64;
        let frac = rng.next_u32() as f64 / u32::MAX as f64;
        let v = precise(entier + frac);
        assert_eq!(precise(v), v, "v={v}");
    }
}

#[test]
fn prop_determinisme_et_erreurs_typees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let mut rng = Rng::new(0xFEED_u64);

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..300 {
        budget(t0, max);

        let expr = if rng.pick(2) == 0 {
            gen_expr(&mut rng, 4)
        } else {
            gen_bruit(&mut rng)
        };

        let a = evaluate_expression(&expr);
        let b = evaluate_expression(&expr);

        match (&a, &b) {
            (Ok(x), Ok(y)) => {
                assert!(x == y || (x.is_nan() && y.is_nan()), "expr={expr:?}");
                seen_ok += 1;
            }
            (Err(e), Err(f)) => {
                assert_eq!(e, f, "expr={expr:?}");
                assert!(
                    matches!(
                        e,
                        EvalError::EmptyInput
                            | EvalError::InvalidCharacter { .. }
                            | EvalError::MismatchedParenthesis
                            | EvalError::StackUnderflow
                            | EvalError::InvalidExpression
                    ),
                    "expr={expr:?}"
                );
                seen_err += 1;
            }
            _ => panic!("non déterministe: expr={expr:?}"),
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 10, "trop peu d’erreurs: {seen_err}");
}

#[test]
fn prop_parentheses_imbriquees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let n = 500;
    let expr = format!("{}7{}", "(".repeat(n), ")".repeat(n));
    budget(t0, max);
    assert_eq!(evaluate_expression(&expr), Ok(7.0));

    let manque = format!("{}7{}", "(".repeat(n), ")".repeat(n - 1));
    assert_eq!(
        evaluate_expression(&manque),
        Err(EvalError::MismatchedParenthesis)
    );
}

#[test]
fn prop_longue_chaine_gauche() {
    // 1 - 1 - 1 ... : associativité gauche sur une longue chaîne
    let n = 1000;
    let expr = vec!["1"; n].join(" - ");
    assert_eq!(evaluate_expression(&expr), Ok(1.0 - (n as f64 - 1.0)));
}
