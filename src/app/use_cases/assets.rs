//! Use-Case: Assets platzieren und entfernen.

use crate::app::AppState;
use crate::core::AssetPlacement;

/// Platziert ein Asset über die Footprints des AppState.
pub fn place_asset(state: &mut AppState, placement: AssetPlacement) {
    let Some(map) = state.map.as_mut() else {
        log::warn!("Asset nicht platziert: keine Map geladen");
        return;
    };

    let id = placement.id.clone();
    state.status_message = match map.add_asset(placement, &state.footprints) {
        Ok(region_id) => {
            log::info!("Asset {} in Region {} platziert", id, region_id);
            None
        }
        Err(err) => Some(err.to_string()),
    };
}

/// Entfernt eine Platzierung; unbekannte IDs werden nur geloggt.
pub fn remove_asset(state: &mut AppState, id: &str) {
    let Some(map) = state.map.as_mut() else {
        return;
    };
    if map.remove_asset(id).is_none() {
        log::debug!("Keine Platzierung mit ID {} gefunden", id);
    }
}
