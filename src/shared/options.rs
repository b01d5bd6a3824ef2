//! Zentrale Konfiguration für den Regionen-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

use crate::core::IsoProjection;

// ── Projektion ──────────────────────────────────────────────────────

/// Halbe Tile-Breite in Szenen-Einheiten.
pub const TILE_HALF_WIDTH: f32 = 32.0;
/// Halbe Tile-Höhe in Szenen-Einheiten.
pub const TILE_HALF_HEIGHT: f32 = 16.0;
/// Szenen-Höhe einer Elevation-Stufe.
pub const ELEVATION_STEP_HEIGHT: f32 = 16.0;

// ── Renderer ────────────────────────────────────────────────────────

/// Renderer-Name für Regionen ohne eigenen Renderer.
pub const DEFAULT_RENDERER: &str = "default";

const CONFIG_FILE_NAME: &str = "iso_region_editor.toml";

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `iso_region_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Projektion ──────────────────────────────────────────────
    /// Halbe Tile-Breite in Szenen-Einheiten
    pub tile_half_width: f32,
    /// Halbe Tile-Höhe in Szenen-Einheiten
    pub tile_half_height: f32,
    /// Szenen-Höhe einer Elevation-Stufe
    pub elevation_step_height: f32,

    // ── Renderer ────────────────────────────────────────────────
    /// Fallback-Renderer für Regionen ohne Renderer-Namen
    pub default_renderer: String,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            tile_half_width: TILE_HALF_WIDTH,
            tile_half_height: TILE_HALF_HEIGHT,
            elevation_step_height: ELEVATION_STEP_HEIGHT,
            default_renderer: DEFAULT_RENDERER.to_string(),
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei; bei Fehler Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("iso-region-editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Projektion mit den konfigurierten Tile-Maßen.
    pub fn projection(&self) -> IsoProjection {
        IsoProjection::new(
            self.tile_half_width,
            self.tile_half_height,
            self.elevation_step_height,
        )
    }
}
