//! Platzierte Deko-Assets und die Footprint-Auflösung.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{Area, Position};

/// Verweis auf ein Asset in der externen Asset-Datenbank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetLocator {
    /// Katalog bzw. Sprite-Atlas
    pub catalog: String,
    /// Asset-Name innerhalb des Katalogs
    pub asset: String,
}

impl AssetLocator {
    pub fn new(catalog: impl Into<String>, asset: impl Into<String>) -> Self {
        Self {
            catalog: catalog.into(),
            asset: asset.into(),
        }
    }
}

impl std::fmt::Display for AssetLocator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.catalog, self.asset)
    }
}

/// Liefert die Grundfläche (Breite × Höhe in Zellen) eines Assets.
pub trait FootprintResolver {
    fn resolve_footprint(&self, locator: &AssetLocator) -> Option<(u32, u32)>;
}

/// Einfache Footprint-Tabelle, z.B. für Tests und das CLI.
#[derive(Debug, Clone, Default)]
pub struct StaticFootprints {
    footprints: HashMap<AssetLocator, (u32, u32)>,
}

impl StaticFootprints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, locator: AssetLocator, footprint: (u32, u32)) -> Self {
        self.footprints.insert(locator, footprint);
        self
    }

    pub fn insert(&mut self, locator: AssetLocator, footprint: (u32, u32)) {
        self.footprints.insert(locator, footprint);
    }
}

impl FootprintResolver for StaticFootprints {
    fn resolve_footprint(&self, locator: &AssetLocator) -> Option<(u32, u32)> {
        self.footprints.get(locator).copied()
    }
}

/// Ein auf einer Region platziertes Asset.
///
/// Die Position ist lokal zur besitzenden Region, sobald die Platzierung
/// an einer Region hängt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetPlacement {
    pub id: String,
    pub asset_locator: AssetLocator,
    #[serde(default)]
    pub horizontally_flipped: bool,
    #[serde(flatten)]
    pub position: Position,
    #[serde(default)]
    pub name: String,
}

impl AssetPlacement {
    pub fn new(id: impl Into<String>, asset_locator: AssetLocator, position: Position) -> Self {
        Self {
            id: id.into(),
            asset_locator,
            horizontally_flipped: false,
            position,
            name: String::new(),
        }
    }

    pub fn flipped(mut self, flipped: bool) -> Self {
        self.horizontally_flipped = flipped;
        self
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Footprint unter Berücksichtigung der Spiegelung (Achsen getauscht).
    pub fn effective_footprint(&self, resolver: &dyn FootprintResolver) -> Option<(i32, i32)> {
        let (width, height) = resolver.resolve_footprint(&self.asset_locator)?;
        Some(oriented_footprint((width, height), self.horizontally_flipped))
    }
}

/// Tauscht die Footprint-Achsen bei gespiegelten Assets.
pub fn oriented_footprint(footprint: (u32, u32), flipped: bool) -> (i32, i32) {
    let (width, height) = (footprint.0 as i32, footprint.1 as i32);
    if flipped {
        (height, width)
    } else {
        (width, height)
    }
}

/// Belegte Fläche einer Platzierung: `(x − fw, y − fh, fw, fh)`.
///
/// Die Fläche ist gegenüber den tatsächlich belegten Zellen um eine Zelle
/// verschoben; sie wird nur untereinander verglichen.
pub fn occupied_area(position: &Position, footprint: (i32, i32)) -> Area {
    Area::new(
        position.x - footprint.0,
        position.y - footprint.1,
        footprint.0,
        footprint.1,
    )
}
