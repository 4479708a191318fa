//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, affichage, erreur, démarche)
//! et offrir des opérations simples (C/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

use calculatrice_rpn::config::Config;
use calculatrice_rpn::noyau::format::{format_affichage, TEXTE_ERREUR};
use calculatrice_rpn::noyau::Demarche;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub affichage: String, // résultat formaté ("Error" si non-fini ou erreur)
    pub erreur: String,    // message précis (si parsing/éval échoue)

    // --- démarche (jetons + RPN) ---
    pub demarche: Demarche,

    // --- paramètres (config) ---
    pub largeur_affichage: usize,
    pub demarche_visible: bool,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl AppCalc {
    pub fn new(cfg: &Config) -> Self {
        Self {
            entree: String::new(),
            affichage: "0".to_string(),
            erreur: String::new(),
            demarche: Demarche::default(),
            largeur_affichage: cfg.largeur_affichage,
            demarche_visible: cfg.demarche_visible,
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }

    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.affichage = "0".to_string();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// L’écran montre "Error" (même signal que pour un non-fini),
    /// le message précis reste disponible en dessous.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.affichage = TEXTE_ERREUR.to_string();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat (valeur + démarche).
    pub fn set_resultat(&mut self, v: f64, demarche: Demarche) {
        self.erreur.clear();
        self.affichage = format_affichage(v, self.largeur_affichage);
        self.demarche = demarche;
        self.focus_entree = true;
    }
}
