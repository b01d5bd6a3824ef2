use glam::IVec2;

use crate::core::{Area, AssetPlacement, MapDescription};
use crate::shared::EditorOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Map-Datei laden
    LoadMapFile { path: String },
    /// Map aus Beschreibung laden
    LoadMapDescription { description: Box<MapDescription> },
    /// Map als JSON speichern
    SaveMapFile { path: Option<String> },
    /// Zelle selektieren (additiv = Auswahl-Rechteck erweitern)
    SelectCell { cell: IVec2, additive: bool },
    /// Auswahl leeren
    ClearSelection,
    /// Elevation unter `area` erhöhen
    RaiseArea { area: Option<Area> },
    /// Elevation unter `area` senken
    LowerArea { area: Option<Area> },
    /// Asset platzieren (Position in Map-Koordinaten)
    PlaceAsset { placement: AssetPlacement },
    /// Platzierung entfernen
    RemoveAsset { id: String },
    /// Optionen übernehmen
    ApplyOptions { options: Box<EditorOptions> },
}
