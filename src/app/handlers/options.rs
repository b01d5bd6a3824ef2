//! Handler für Laufzeit-Optionen.

use crate::app::AppState;
use crate::shared::EditorOptions;

/// Übernimmt neue Optionen; der Default-Renderer gilt sofort für die geladene Map.
pub fn apply(state: &mut AppState, options: EditorOptions) {
    if let Some(map) = state.map.as_mut() {
        map.set_default_renderer(options.default_renderer.clone());
    }
    state.options = options;
}
