//! Persistierte Form einer Map (bereits geparste Daten).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{Lighting, RegionDescription, RendererDescription};

/// Vollständige Beschreibung einer Map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapDescription {
    pub regions: Vec<RegionDescription>,
    #[serde(default)]
    pub lighting: Lighting,
    /// Zell-Renderer nach Name
    #[serde(default)]
    pub renderers: IndexMap<String, RendererDescription>,
}

impl MapDescription {
    /// Parst eine Map-Beschreibung aus JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Schreibt die Beschreibung als eingerücktes JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
