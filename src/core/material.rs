//! Material-Overrides pro Zelle und Oberflächen-Kontext.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Oberfläche einer Zelle, auf die ein Material wirkt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MaterialContext {
    /// Deckfläche
    Ground,
    /// Linke Stufenfläche
    LeftElevation,
    /// Rechte Stufenfläche
    RightElevation,
}

impl MaterialContext {
    pub const ALL: [MaterialContext; 3] = [
        MaterialContext::Ground,
        MaterialContext::LeftElevation,
        MaterialContext::RightElevation,
    ];
}

/// Überschreibt Parameter des Renderer-Materials für eine Zelle.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaterialOverride {
    /// Ersetzt den Materialnamen des Renderers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Zusätzliche Shader-Parameter (Name → Wert)
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub parameters: BTreeMap<String, f32>,
}

impl MaterialOverride {
    /// Override, das nur den Materialnamen ersetzt.
    pub fn material(name: impl Into<String>) -> Self {
        Self {
            material: Some(name.into()),
            parameters: BTreeMap::new(),
        }
    }
}

/// Dünn besetzte Override-Arrays pro Kontext.
///
/// Index ist der lokale Zellindex `y * width + x` der besitzenden Region.
/// Arrays wachsen nur bis zum höchsten belegten Index.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MaterialOverrides {
    entries: BTreeMap<MaterialContext, Vec<Option<MaterialOverride>>>,
}

impl MaterialOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true`, wenn kein einziges Override gesetzt ist.
    pub fn is_empty(&self) -> bool {
        self.entries
            .values()
            .all(|cells| cells.iter().all(Option::is_none))
    }

    pub fn get(&self, context: MaterialContext, index: usize) -> Option<&MaterialOverride> {
        self.entries.get(&context)?.get(index)?.as_ref()
    }

    /// Setzt ein Override und füllt das Array bei Bedarf mit `None` auf.
    pub fn set(&mut self, context: MaterialContext, index: usize, value: MaterialOverride) {
        let cells = self.entries.entry(context).or_default();
        if cells.len() <= index {
            cells.resize(index + 1, None);
        }
        cells[index] = Some(value);
    }

    /// Entfernt ein Override; gibt den alten Wert zurück.
    pub fn clear(&mut self, context: MaterialContext, index: usize) -> Option<MaterialOverride> {
        self.entries.get_mut(&context)?.get_mut(index)?.take()
    }

    /// Anzahl gesetzter Overrides über alle Kontexte.
    pub fn count(&self) -> usize {
        self.entries
            .values()
            .map(|cells| cells.iter().filter(|c| c.is_some()).count())
            .sum()
    }

    /// Alle gesetzten Overrides als `(Kontext, Index, Override)`.
    pub fn iter(&self) -> impl Iterator<Item = (MaterialContext, usize, &MaterialOverride)> {
        self.entries.iter().flat_map(|(context, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(index, cell)| cell.as_ref().map(|o| (*context, index, o)))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_pads_with_none() {
        let mut overrides = MaterialOverrides::new();
        overrides.set(MaterialContext::Ground, 3, MaterialOverride::material("sand"));

        assert_eq!(overrides.count(), 1);
        assert!(overrides.get(MaterialContext::Ground, 0).is_none());
        assert_eq!(
            overrides
                .get(MaterialContext::Ground, 3)
                .and_then(|o| o.material.as_deref()),
            Some("sand")
        );
        assert!(overrides.get(MaterialContext::LeftElevation, 3).is_none());
    }

    #[test]
    fn test_cleared_overrides_count_as_empty() {
        let mut overrides = MaterialOverrides::new();
        overrides.set(MaterialContext::RightElevation, 0, MaterialOverride::material("rock"));
        assert!(!overrides.is_empty());

        assert!(overrides.clear(MaterialContext::RightElevation, 0).is_some());
        assert!(overrides.is_empty());
    }

    #[test]
    fn test_serde_shape_is_context_keyed_sparse_array() {
        let mut overrides = MaterialOverrides::new();
        overrides.set(MaterialContext::LeftElevation, 1, MaterialOverride::material("moss"));

        let json = serde_json::to_value(&overrides).expect("Serialisierung");
        assert_eq!(
            json,
            serde_json::json!({ "leftElevation": [null, { "material": "moss" }] })
        );
    }
}
