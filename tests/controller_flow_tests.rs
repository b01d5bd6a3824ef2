use glam::{IVec2, Vec2, Vec3};
use iso_region_editor::{
    AppCommand, AppController, AppIntent, AppState, Area, AssetLocator, MapDescription, Position,
};

const TERRACED_MAP: &str = include_str!("fixtures/terraced_map.json");

fn loaded_state() -> (AppController, AppState) {
    let mut controller = AppController::new();
    let mut state = AppState::new();
    let description = MapDescription::from_json(TERRACED_MAP).expect("Fixture sollte parsen");

    controller
        .handle_intent(
            &mut state,
            AppIntent::MapDescriptionReceived {
                description: Box::new(description),
            },
        )
        .expect("Fixture sollte laden");
    (controller, state)
}

fn scene_of(state: &AppState, x: i32, y: i32) -> Vec2 {
    let elevation = state
        .map
        .as_ref()
        .and_then(|m| m.cell_elevation(x, y))
        .unwrap_or(0);
    Position::new(x, y)
        .with_elevation(elevation)
        .with_world_offset(Vec3::new(0.5, 0.5, 0.0))
        .scene_position(&state.options.projection())
}

fn click(controller: &mut AppController, state: &mut AppState, x: i32, y: i32, additive: bool) {
    let scene_pos = scene_of(state, x, y);
    controller
        .handle_intent(
            state,
            AppIntent::CellClicked {
                scene_pos,
                additive,
            },
        )
        .expect("Klick sollte ohne Fehler durchlaufen");
}

#[test]
fn test_load_description_logs_commands_and_resets_selection() {
    let (_, state) = loaded_state();

    assert_eq!(state.region_count(), 2);
    assert!(state.selection.is_empty());
    let entries = state.command_log.entries();
    assert_eq!(entries.len(), 2);
    assert!(matches!(entries[0], AppCommand::ClearSelection));
    assert!(matches!(entries[1], AppCommand::LoadMapDescription { .. }));
}

#[test]
fn test_clicks_grow_selection_and_raise_applies_to_it() {
    let (mut controller, mut state) = loaded_state();

    click(&mut controller, &mut state, 1, 0, false);
    click(&mut controller, &mut state, 3, 1, true);
    assert_eq!(state.selection.area, Some(Area::new(1, 0, 3, 2)));
    assert!(state.selection.focused_region.is_some());

    controller
        .handle_intent(&mut state, AppIntent::RaiseSelectionRequested)
        .expect("Raise sollte durchlaufen");

    let map = state.map.as_ref().expect("Map geladen");
    assert_eq!(map.cell_elevation(1, 0), Some(1));
    assert_eq!(map.cell_elevation(3, 1), Some(1));
    assert_eq!(map.cell_elevation(0, 0), Some(0));
    assert_eq!(map.covered_cells(), 16);
    assert!(matches!(
        state.command_log.entries().last(),
        Some(AppCommand::RaiseArea { area: Some(a) }) if *a == Area::new(1, 0, 3, 2)
    ));
}

#[test]
fn test_click_on_terrace_hits_raised_cell() {
    let (mut controller, mut state) = loaded_state();

    click(&mut controller, &mut state, 3, 3, false);

    assert_eq!(state.selection.area, Some(Area::cell(3, 3)));
}

#[test]
fn test_lower_flat_ground_reports_no_change() {
    let (mut controller, mut state) = loaded_state();
    click(&mut controller, &mut state, 0, 0, false);

    controller
        .handle_intent(&mut state, AppIntent::LowerSelectionRequested)
        .expect("Lower sollte durchlaufen");

    assert_eq!(state.region_count(), 2);
    assert_eq!(state.status_message.as_deref(), Some("Keine Änderung"));
}

#[test]
fn test_click_behind_terrace_hits_front_cell() {
    let (mut controller, mut state) = loaded_state();

    // Die Terrasse (Elevation 2) verdeckt die Bodenzelle (1, 1)
    click(&mut controller, &mut state, 1, 1, false);

    assert_eq!(state.selection.area, Some(Area::cell(2, 2)));
}

#[test]
fn test_place_asset_rejects_occupied_cell() {
    let (mut controller, mut state) = loaded_state();
    let oak = AssetLocator::new("nature", "oak");
    state.footprints.insert(oak.clone(), (1, 1));

    // Die Eiche der Fixture steht auf (2, 1) und belegt (1, 0)
    controller
        .handle_command(
            &mut state,
            AppCommand::PlaceAsset {
                placement: iso_region_editor::AssetPlacement::new(
                    "tree-2",
                    oak,
                    Position::new(2, 1),
                ),
            },
        )
        .expect("Ablehnung ist kein Command-Fehler");

    let message = state.status_message.expect("Platzierung sollte abgelehnt werden");
    assert!(message.contains("tree-1"), "Meldung: {message}");
}

#[test]
fn test_place_asset_on_terrace_stores_local_position() {
    let (mut controller, mut state) = loaded_state();
    let oak = AssetLocator::new("nature", "oak");
    state.footprints.insert(oak.clone(), (1, 1));

    let scene_pos = scene_of(&state, 3, 3);
    controller
        .handle_intent(
            &mut state,
            AppIntent::PlaceAssetRequested {
                id: "tree-3".into(),
                locator: oak,
                scene_pos,
                flipped: false,
            },
        )
        .expect("Intent sollte durchlaufen");
    assert_eq!(state.status_message, None);

    let map = state.map.as_ref().expect("Map geladen");
    let terrace = map.region_at(3, 3).expect("Terrasse");
    assert!(terrace
        .description()
        .asset_placements
        .iter()
        .any(|p| p.id == "tree-3" && p.position.cell() == IVec2::new(3, 1)));
}

#[test]
fn test_placed_asset_follows_raised_region() {
    let (mut controller, mut state) = loaded_state();
    let oak = AssetLocator::new("nature", "oak");
    state.footprints.insert(oak.clone(), (1, 1));

    let scene_pos = scene_of(&state, 3, 3);
    controller
        .handle_intent(
            &mut state,
            AppIntent::PlaceAssetRequested {
                id: "tree-3".into(),
                locator: oak,
                scene_pos,
                flipped: false,
            },
        )
        .expect("Intent sollte durchlaufen");
    controller
        .handle_command(
            &mut state,
            AppCommand::RaiseArea {
                area: Some(Area::new(0, 2, 4, 2)),
            },
        )
        .expect("Raise sollte durchlaufen");

    let map = state.map.as_ref().expect("Map geladen");
    assert_eq!(map.cell_elevation(3, 3), Some(3));
    let projection = state.options.projection();
    let tree = map
        .build_regions(&projection)
        .into_iter()
        .filter_map(|(_, result)| result.ok())
        .flat_map(|build| build.placements)
        .find(|p| p.id == "tree-3")
        .expect("Platzierung aufgebaut");
    assert_eq!(tree.position.cell(), IVec2::new(3, 3));
    assert_eq!(tree.position.elevation, Some(3));
}

#[test]
fn test_save_and_reload_through_file() {
    let (mut controller, mut state) = loaded_state();
    click(&mut controller, &mut state, 0, 0, false);
    controller
        .handle_intent(&mut state, AppIntent::RaiseSelectionRequested)
        .expect("Raise sollte durchlaufen");

    let path = std::env::temp_dir().join(format!(
        "iso_region_editor_flow_{}.json",
        std::process::id()
    ));
    let path_str = path.to_string_lossy().into_owned();
    controller
        .handle_intent(
            &mut state,
            AppIntent::SaveMapRequested {
                path: Some(path_str.clone()),
            },
        )
        .expect("Speichern sollte funktionieren");

    let mut reloaded = AppState::new();
    controller
        .handle_intent(&mut reloaded, AppIntent::LoadMapRequested { path: path_str.clone() })
        .expect("Laden sollte funktionieren");
    let _ = std::fs::remove_file(&path);

    assert_eq!(reloaded.current_file_path.as_deref(), Some(path_str.as_str()));
    assert_eq!(reloaded.region_count(), state.region_count());
    let map = reloaded.map.as_ref().expect("Map geladen");
    assert_eq!(map.cell_elevation(0, 0), Some(1));
}

#[test]
fn test_failed_load_keeps_previous_map() {
    let (mut controller, mut state) = loaded_state();

    let result = controller.handle_intent(
        &mut state,
        AppIntent::LoadMapRequested {
            path: "/nonexistent/iso_region_editor/map.json".into(),
        },
    );

    assert!(result.is_err());
    assert_eq!(state.region_count(), 2);
}

#[test]
fn test_save_without_map_fails() {
    let mut controller = AppController::new();
    let mut state = AppState::new();

    let result = controller.handle_intent(&mut state, AppIntent::SaveMapRequested { path: None });

    assert!(result.is_err());
}
