// src/noyau/format.rs
//
// Affichage du résultat (côté appelant) : tout non-fini devient "Error",
// comme n’importe quelle EvalError.
//
// Règle d’écran : on peut couper des décimales, jamais des chiffres de la
// partie entière. Si la partie entière ne tient pas, on passe en "1.23e+19".

/// Texte affiché pour toute valeur non finie ou toute erreur.
pub const TEXTE_ERREUR: &str = "Error";

/// Au-delà : notation exponentielle (1e+21).
const SEUIL_EXPO_HAUT: f64 = 1e21;
/// En deçà (hors zéro) : notation exponentielle (2.5e-7).
const SEUIL_EXPO_BAS: f64 = 1e-6;

/// Formate une valeur pour l’écran :
/// - inf / NaN -> "Error"
/// - -0 -> "0"
/// - |v| >= 1e21 ou |v| < 1e-6 -> "1e+21", "2.5e-7"
/// - sinon la plus courte écriture décimale (1.5, -6, 200.1)
pub fn format_resultat(v: f64) -> String {
    if !v.is_finite() {
        return TEXTE_ERREUR.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let a = v.abs();
    if a >= SEUIL_EXPO_HAUT || a < SEUIL_EXPO_BAS {
        let (mantisse, exposant) = decouper_expo(v);
        return format!("{mantisse}e{exposant}");
    }
    format!("{v}")
}

/// Comme [`format_resultat`], mais tient dans `largeur` caractères quand c’est possible.
///
/// - écriture décimale : on coupe les décimales (et le point s’il reste seul)
/// - partie entière trop large : mantisse raccourcie, exposant intact
pub fn format_affichage(v: f64, largeur: usize) -> String {
    let s = format_resultat(v);
    if !v.is_finite() || s.chars().count() <= largeur {
        return s;
    }

    if !s.contains('e') {
        let entier = s.split('.').next().unwrap_or(&s);
        if entier.chars().count() <= largeur {
            let t = sans_point_final(tronquer(&s, largeur));
            // "-0.00000" ne dit plus rien : mieux vaut l’exposant
            if t.chars().any(|c| matches!(c, '1'..='9')) {
                return t;
            }
        }
    }

    let (mantisse, exposant) = decouper_expo(v);
    let suffixe = format!("e{exposant}");
    let tete = if v < 0.0 { 2 } else { 1 }; // signe + premier chiffre
    let place = largeur.saturating_sub(suffixe.chars().count()).max(tete);
    let m = sans_point_final(tronquer(&mantisse, place));
    format!("{m}{suffixe}")
}

/// (mantisse, exposant signé) : 1e21 -> ("1", "+21"), -2.5e-7 -> ("-2.5", "-7").
fn decouper_expo(v: f64) -> (String, String) {
    let s = format!("{v:e}");
    match s.split_once('e') {
        Some((m, e)) if e.starts_with('-') => (m.to_string(), e.to_string()),
        Some((m, e)) => (m.to_string(), format!("+{e}")),
        None => (s, "+0".to_string()),
    }
}

fn sans_point_final(s: String) -> String {
    match s.strip_suffix('.') {
        Some(t) => t.to_string(),
        None => s,
    }
}

/// Garde au plus `largeur` caractères (pas d’octets).
pub fn tronquer(s: &str, largeur: usize) -> String {
    s.chars().take(largeur).collect()
}
