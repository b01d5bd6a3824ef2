//! Application State: zentrale Datenhaltung.

use glam::IVec2;

use super::CommandLog;
use crate::core::{Area, MapModel, RegionId, RendererRegistry, StaticFootprints};
use crate::shared::EditorOptions;

/// Auswahlbezogener Anwendungszustand
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectionState {
    /// Auswahl-Rechteck in Map-Zellen
    pub area: Option<Area>,
    /// Region der zuletzt angeklickten Zelle
    pub focused_region: Option<RegionId>,
}

impl SelectionState {
    /// Erstellt einen leeren Selektionszustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ersetzt die Auswahl durch eine Zelle oder erweitert das Rechteck um sie.
    pub fn select_cell(&mut self, cell: IVec2, additive: bool) {
        let clicked = Area::cell(cell.x, cell.y);
        self.area = match self.area {
            Some(current) if additive => Some(current.bounding_union(&clicked)),
            _ => Some(clicked),
        };
    }

    pub fn clear(&mut self) {
        self.area = None;
        self.focused_region = None;
    }

    pub fn is_empty(&self) -> bool {
        self.area.is_none()
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktuell geladene Map (None = keine Map geladen)
    pub map: Option<MapModel>,
    /// Renderer-Registry, geteilt über Map-Ladevorgänge hinweg
    pub renderers: RendererRegistry,
    /// Bekannte Asset-Footprints
    pub footprints: StaticFootprints,
    /// Selection-State
    pub selection: SelectionState,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Projektion, Default-Renderer)
    pub options: EditorOptions,
    /// Pfad der zuletzt geladenen/gespeicherten Map-Datei
    pub current_file_path: Option<String>,
    /// Letzte Statusmeldung für den Benutzer
    pub status_message: Option<String>,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State
    pub fn new() -> Self {
        Self {
            map: None,
            renderers: RendererRegistry::new(),
            footprints: StaticFootprints::new(),
            selection: SelectionState::new(),
            command_log: CommandLog::new(),
            options: EditorOptions::default(),
            current_file_path: None,
            status_message: None,
        }
    }

    /// Gibt die Anzahl der Regionen zurück (für Status-Anzeige)
    pub fn region_count(&self) -> usize {
        self.map.as_ref().map_or(0, MapModel::region_count)
    }

    /// Gibt die Anzahl der abgedeckten Zellen zurück
    pub fn covered_cells(&self) -> usize {
        self.map.as_ref().map_or(0, MapModel::covered_cells)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_additive_selection_grows_bounding_area() {
        let mut selection = SelectionState::new();

        selection.select_cell(IVec2::new(2, 3), false);
        selection.select_cell(IVec2::new(4, 1), true);
        assert_eq!(selection.area, Some(Area::new(2, 1, 3, 3)));

        selection.select_cell(IVec2::new(0, 0), false);
        assert_eq!(selection.area, Some(Area::new(0, 0, 1, 1)));
    }
}
