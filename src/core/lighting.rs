//! Globale Beleuchtungsdaten der Map (nur Daten, keine Lichtberechnung).

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Umgebungslicht.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmbientLight {
    /// RGB-Farbe [0, 1]
    pub color: [f32; 3],
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: [1.0, 1.0, 1.0],
            intensity: 1.0,
        }
    }
}

/// Punktlicht an einer Welt-Position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LightDescription {
    pub world_position: Vec3,
    pub color: [f32; 3],
    pub intensity: f32,
    pub radius: f32,
}

/// Beleuchtung einer Map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lighting {
    #[serde(default)]
    pub ambient: AmbientLight,
    #[serde(default)]
    pub lights: Vec<LightDescription>,
}
