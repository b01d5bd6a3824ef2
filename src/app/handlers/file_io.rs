//! Handler für Datei-Operationen (Laden, Speichern).

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::MapDescription;

/// Lädt eine Map aus dem übergebenen Pfad.
pub fn load(state: &mut AppState, path: String) -> anyhow::Result<()> {
    use_cases::file_io::load_map_file(state, path)
}

/// Lädt eine Map aus einer geparsten Beschreibung.
pub fn load_description(state: &mut AppState, description: MapDescription) -> anyhow::Result<()> {
    use_cases::file_io::load_map_description(state, description)
}

/// Speichert die Map.
///
/// `None` speichert unter dem aktuell bekannten Pfad.
/// `Some(p)` speichert explizit unter dem neuen Pfad `p`.
pub fn save(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    use_cases::file_io::save_map_file(state, path)
}
