//! src/config.rs
//!
//! Configuration utilisateur (TOML), lue une fois au démarrage.
//!
//! Emplacement : `<config_dir>/calculatrice-rpn/config.toml`.
//! - fichier absent  => valeurs par défaut (pas une erreur)
//! - fichier invalide => ConfigError (main.rs logue et retombe sur les défauts)

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Largeur d’affichage par défaut (caractères).
const LARGEUR_DEFAUT: usize = 20;

/// Garde-fous sur la largeur d’affichage.
const LARGEUR_MIN: usize = 8;
const LARGEUR_MAX: usize = 64;

const DOSSIER_APP: &str = "calculatrice-rpn";
const FICHIER: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("lecture de {chemin}: {source}")]
    Io {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML invalide dans {chemin}: {source}")]
    Toml {
        chemin: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Nombre max de caractères du résultat à l’écran.
    pub largeur_affichage: usize,
    /// Panneau “Démarche” (jetons + RPN) visible.
    pub demarche_visible: bool,
    /// Niveau de log si RUST_LOG est absent.
    pub niveau_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            largeur_affichage: LARGEUR_DEFAUT,
            demarche_visible: true,
            niveau_log: "info".to_string(),
        }
    }
}

impl Config {
    /// Chemin standard du fichier (None si pas de dossier de config, ex: wasm).
    pub fn chemin_defaut() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join(DOSSIER_APP).join(FICHIER))
    }

    /// Charge depuis l’emplacement standard.
    pub fn charger() -> Result<Self, ConfigError> {
        match Self::chemin_defaut() {
            Some(chemin) => Self::charger_depuis(&chemin),
            None => Ok(Self::default()),
        }
    }

    pub fn charger_depuis(chemin: &Path) -> Result<Self, ConfigError> {
        let texte = match std::fs::read_to_string(chemin) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(source) => {
                return Err(ConfigError::Io {
                    chemin: chemin.to_path_buf(),
                    source,
                })
            }
        };

        Self::depuis_toml(&texte).map_err(|source| ConfigError::Toml {
            chemin: chemin.to_path_buf(),
            source,
        })
    }

    /// Parse + bornes.
    pub fn depuis_toml(texte: &str) -> Result<Self, toml::de::Error> {
        let mut cfg: Config = toml::from_str(texte)?;
        cfg.largeur_affichage = cfg.largeur_affichage.clamp(LARGEUR_MIN, LARGEUR_MAX);
        Ok(cfg)
    }
}
