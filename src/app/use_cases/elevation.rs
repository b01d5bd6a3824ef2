//! Use-Case: Elevation einer Fläche ändern.

use crate::app::AppState;
use crate::core::Area;

/// Erhöht (`step > 0`) oder senkt (`step < 0`) die Elevation unter `area`.
///
/// Gibt zurück, ob sich die Map geändert hat.
pub fn change_elevation(state: &mut AppState, area: Option<Area>, step: i32) -> bool {
    let Some(map) = state.map.as_mut() else {
        log::warn!("Elevation nicht geändert: keine Map geladen");
        return false;
    };

    let changed = if step > 0 {
        map.increase_elevation(area)
    } else {
        map.decrease_elevation(area)
    };

    state.status_message = if changed {
        Some(format!(
            "{} Regionen, {} Zellen",
            map.region_count(),
            map.covered_cells()
        ))
    } else {
        Some("Keine Änderung".to_string())
    };
    changed
}
