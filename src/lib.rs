//! Regionen-Kern für isometrische Tile-Maps.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;

pub use app::{AppCommand, AppController, AppIntent, AppState, SelectionState};
pub use core::{
    Area, AssetLocator, AssetPlacement, IsoProjection, MapDescription, MapError, MapModel,
    MapResult, Position, RegionDescription, RegionModel, RendererDescription, RendererRegistry,
    StaticFootprints,
};
pub use shared::EditorOptions;
