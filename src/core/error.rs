//! Fehlerarten des Regionen-Kerns.

use thiserror::Error;

use super::{Area, AssetLocator};

/// Vorbedingungsfehler; alle werden vor jeder Mutation erkannt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MapError {
    /// Footprint ragt über den Regionsrand hinaus
    #[error("Asset zu nah am Regionsrand (lokal {local_x}/{local_y}, Footprint {width}×{height})")]
    AssetTooCloseToRegionBorder {
        local_x: i32,
        local_y: i32,
        width: i32,
        height: i32,
    },
    /// Footprint überlappt eine bestehende Platzierung
    #[error("Anderes Asset im Weg: {other_id}")]
    OtherAssetInTheWay { other_id: String },
    /// Renderer fehlt in der Registry
    #[error("Renderer nicht registriert: {name}")]
    RendererNotRegistered { name: String },
    /// Resolver kennt den Footprint des Assets nicht
    #[error("Footprint für Asset {locator} nicht verfügbar")]
    FootprintUnavailable { locator: AssetLocator },
    /// Geladene Regionen verletzen die Partitions-Invariante
    #[error("Regionen überlappen sich: {first} und {second}")]
    OverlappingRegions { first: Area, second: Area },
    /// Geladene Platzierung liegt außerhalb der lokalen Regionsfläche
    #[error("Platzierung {id} liegt außerhalb der Region {area}")]
    PlacementOutsideRegion { id: String, area: Area },
    /// Zielzelle gehört zu keiner Region
    #[error("Keine Region an Zelle ({x}, {y})")]
    NoRegionAt { x: i32, y: i32 },
}

/// Ergebnis-Typ des Regionen-Kerns.
pub type MapResult<T> = Result<T, MapError>;
