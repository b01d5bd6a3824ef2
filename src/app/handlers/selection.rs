//! Handler für Selektions-Operationen.

use glam::IVec2;

use crate::app::use_cases;
use crate::app::AppState;

/// Selektiert eine Zelle bzw. erweitert das Auswahl-Rechteck.
pub fn select_cell(state: &mut AppState, cell: IVec2, additive: bool) {
    use_cases::selection::select_cell(state, cell, additive);
}

/// Hebt die Selektion auf.
pub fn clear(state: &mut AppState) {
    state.selection.clear();
}
