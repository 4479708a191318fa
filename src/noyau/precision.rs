// src/noyau/precision.rs

/// Échelle du nettoyage : 12 décimales.
const ECHELLE: f64 = 1e12;

/// Passes supplémentaires max pour atteindre un point fixe.
const PASSES_MAX: usize = 4;

/// Une passe : `round(v * 1e12) / 1e12`.
/// Un entier est déjà un point fixe ; `v * 1e12` qui déborde laisse `v` intact.
fn arrondi_12(v: f64) -> f64 {
    let scaled = v * ECHELLE;
    if !scaled.is_finite() || v.fract() == 0.0 {
        return v;
    }
    scaled.round() / ECHELLE
}

/// Nettoyage de précision : `round(v * 1e12) / 1e12`.
///
/// - 0.1 + 0.2 = 0.30000000000000004 -> 0.3
/// - inf / NaN passent tels quels (l’appelant les affiche en "Error")
/// - vers |v| ~ 4096..9007 l’espacement des f64 frôle 1e-12 : une passe peut
///   retomber à côté, on répète jusqu’au point fixe (sinon `v` intact),
///   donc `precise(precise(v)) == precise(v)`.
pub fn precise(v: f64) -> f64 {
    if !v.is_finite() {
        return v;
    }
    let mut r = arrondi_12(v);
    for _ in 0..PASSES_MAX {
        let suivant = arrondi_12(r);
        if suivant == r {
            return r;
        }
        r = suivant;
    }
    v
}
