//! Use-Case: Zellen-Selektion.

use glam::IVec2;

use crate::app::AppState;

/// Selektiert eine Zelle und merkt sich die Region darunter.
pub fn select_cell(state: &mut AppState, cell: IVec2, additive: bool) {
    state.selection.select_cell(cell, additive);
    state.selection.focused_region = state
        .map
        .as_ref()
        .and_then(|map| map.region_at(cell.x, cell.y))
        .map(|region| region.id());
    log::debug!(
        "Auswahl: {}",
        state
            .selection
            .area
            .map_or_else(|| "-".to_string(), |a| a.to_string())
    );
}
