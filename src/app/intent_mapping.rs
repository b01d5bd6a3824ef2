//! Mapping von Eingabe-Intents auf mutierende App-Commands.

use super::{AppCommand, AppIntent, AppState};
use crate::core::{AssetPlacement, Position};

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::LoadMapRequested { path } => vec![
            AppCommand::ClearSelection,
            AppCommand::LoadMapFile { path },
        ],
        AppIntent::MapDescriptionReceived { description } => vec![
            AppCommand::ClearSelection,
            AppCommand::LoadMapDescription { description },
        ],
        AppIntent::SaveMapRequested { path } => vec![AppCommand::SaveMapFile { path }],
        AppIntent::CellClicked {
            scene_pos,
            additive,
        } => {
            let projection = state.options.projection();
            let hit = state
                .map
                .as_ref()
                .and_then(|map| map.hit_test(scene_pos, &projection));
            match hit {
                Some((_, cell)) => vec![AppCommand::SelectCell { cell, additive }],
                None if additive => Vec::new(),
                None => vec![AppCommand::ClearSelection],
            }
        }
        AppIntent::ClearSelectionRequested => vec![AppCommand::ClearSelection],
        // Ohne Auswahl bleibt die Map unverändert
        AppIntent::RaiseSelectionRequested => state
            .selection
            .area
            .map(|area| AppCommand::RaiseArea { area: Some(area) })
            .into_iter()
            .collect(),
        AppIntent::LowerSelectionRequested => state
            .selection
            .area
            .map(|area| AppCommand::LowerArea { area: Some(area) })
            .into_iter()
            .collect(),
        AppIntent::PlaceAssetRequested {
            id,
            locator,
            scene_pos,
            flipped,
        } => {
            let projection = state.options.projection();
            let Some(map) = state.map.as_ref() else {
                return Vec::new();
            };
            let Some((region_id, _)) = map.hit_test(scene_pos, &projection) else {
                log::debug!("Kein Asset platziert: keine Region unter {}", scene_pos);
                return Vec::new();
            };
            let elevation = map.region(region_id).map_or(0, |r| r.elevation());
            // Elevation wird beim Aufbau von der Region geerbt
            let position = Position {
                elevation: None,
                ..projection.scene_to_map_at_elevation(scene_pos, elevation as f32)
            };
            let placement = AssetPlacement::new(id, locator, position).flipped(flipped);
            vec![AppCommand::PlaceAsset { placement }]
        }
        AppIntent::RemoveAssetRequested { id } => vec![AppCommand::RemoveAsset { id }],
        AppIntent::OptionsChanged { options } => vec![AppCommand::ApplyOptions { options }],
    }
}
