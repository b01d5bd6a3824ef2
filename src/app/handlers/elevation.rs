//! Handler für Höhen-Editing.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::Area;

pub fn raise(state: &mut AppState, area: Option<Area>) {
    use_cases::elevation::change_elevation(state, area, 1);
}

pub fn lower(state: &mut AppState, area: Option<Area>) {
    use_cases::elevation::change_elevation(state, area, -1);
}
