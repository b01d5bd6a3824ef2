//! Use-Case-Funktionen für Dateiaktionen.
//! Alle Dateisystem-Operationen (I/O) sind hier zentralisiert.

use anyhow::Context;

use crate::app::{AppState, SelectionState};
use crate::core::{MapDescription, MapModel};

/// Lädt eine JSON-Map-Datei in den AppState.
pub fn load_map_file(state: &mut AppState, path: String) -> anyhow::Result<()> {
    let json = std::fs::read_to_string(&path)
        .with_context(|| format!("Map-Datei nicht lesbar: {}", path))?;
    let description = MapDescription::from_json(&json)
        .with_context(|| format!("Map-Datei fehlerhaft: {}", path))?;

    load_map_description(state, description)?;
    // Merke Pfad für späteres Save
    state.current_file_path = Some(path);
    Ok(())
}

/// Ersetzt die geladene Map durch eine neue aus `description`.
///
/// Bei Fehlern bleibt die bisherige Map erhalten.
pub fn load_map_description(state: &mut AppState, description: MapDescription) -> anyhow::Result<()> {
    let mut map = MapModel::from_description(description, state.renderers.clone())
        .context("Map-Beschreibung ungültig")?;
    map.set_default_renderer(state.options.default_renderer.clone());

    log::info!(
        "Map geladen: {} Regionen, {} Zellen",
        map.region_count(),
        map.covered_cells()
    );

    state.selection = SelectionState::new();
    state.status_message = None;
    state.map = Some(map);
    Ok(())
}

/// Schreibt die Map als JSON unter `path` bzw. dem zuletzt bekannten Pfad.
pub fn save_map_file(state: &mut AppState, path: Option<String>) -> anyhow::Result<()> {
    let map = state.map.as_ref().context("Keine Map geladen")?;
    let path = path
        .or_else(|| state.current_file_path.clone())
        .context("Kein Speicherpfad bekannt")?;

    let json = map.to_description().to_json()?;
    std::fs::write(&path, json).with_context(|| format!("Map-Datei nicht schreibbar: {}", path))?;
    log::info!("Map gespeichert nach: {}", path);

    state.current_file_path = Some(path);
    Ok(())
}
