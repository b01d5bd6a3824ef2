//! Core-Domänentypen: Flächen, Positionen, Projektion, Regionen und die Map.

pub mod area;
pub mod asset_placement;
pub mod draw_order;
pub mod error;
pub mod lighting;
pub mod map_description;
/// Map-Modell mit Höhen-Editing, Merge-Pass und Abfragen
pub mod map_model;
pub mod material;
pub mod notify;
pub mod position;
pub mod projection;
/// Einzelne Region: Unterteilung, Merge, Asset-Validierung und Aufbau
pub mod region;
pub mod region_description;
pub mod renderer;

pub use area::Area;
pub use asset_placement::{
    occupied_area, oriented_footprint, AssetLocator, AssetPlacement, FootprintResolver,
    StaticFootprints,
};
pub use draw_order::{compare_draw_order, sort_for_drawing};
pub use error::{MapError, MapResult};
pub use lighting::{AmbientLight, LightDescription, Lighting};
pub use map_description::MapDescription;
pub use map_model::MapModel;
pub use material::{MaterialContext, MaterialOverride, MaterialOverrides};
pub use notify::{ChangeNotifier, SubscriptionId};
pub use position::Position;
pub use projection::IsoProjection;
pub use region::{
    CellBuild, CellMaterial, MapId, PlacementBuild, RegionBuild, RegionId, RegionModel,
    Subdivision,
};
pub use region_description::RegionDescription;
pub use renderer::{RendererDescription, RendererHandle, RendererRegistry};
