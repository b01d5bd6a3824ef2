use glam::Vec2;

use crate::core::{AssetLocator, MapDescription};
use crate::shared::EditorOptions;

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Map aus einer JSON-Datei laden
    LoadMapRequested { path: String },
    /// Map aus einer bereits geparsten Beschreibung laden
    MapDescriptionReceived { description: Box<MapDescription> },
    /// Map speichern (`None` = unter aktuellem Pfad)
    SaveMapRequested { path: Option<String> },
    /// Zelle unter einem Szenenpunkt angeklickt
    CellClicked { scene_pos: Vec2, additive: bool },
    /// Auswahl verwerfen
    ClearSelectionRequested,
    /// Elevation der Auswahl erhöhen
    RaiseSelectionRequested,
    /// Elevation der Auswahl senken
    LowerSelectionRequested,
    /// Asset an einem Szenenpunkt platzieren
    PlaceAssetRequested {
        id: String,
        locator: AssetLocator,
        scene_pos: Vec2,
        flipped: bool,
    },
    /// Platzierung entfernen
    RemoveAssetRequested { id: String },
    /// Optionen übernehmen
    OptionsChanged { options: Box<EditorOptions> },
}
