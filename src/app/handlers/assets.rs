//! Handler für Asset-Platzierungen.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::AssetPlacement;

/// Platziert ein Asset; Ablehnungen landen in der Statusmeldung.
pub fn place(state: &mut AppState, placement: AssetPlacement) {
    use_cases::assets::place_asset(state, placement);
}

pub fn remove(state: &mut AppState, id: &str) {
    use_cases::assets::remove_asset(state, id);
}
