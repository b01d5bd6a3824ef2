//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält Konfiguration, die zwischen `core` und `app` geteilt wird.

pub mod options;

pub use options::EditorOptions;
pub use options::{DEFAULT_RENDERER, ELEVATION_STEP_HEIGHT, TILE_HALF_HEIGHT, TILE_HALF_WIDTH};
