use approx::assert_relative_eq;
use iso_region_editor::core::MaterialContext;
use iso_region_editor::{IsoProjection, MapDescription, MapModel, RendererRegistry};

const TERRACED_MAP: &str = include_str!("fixtures/terraced_map.json");

fn load_fixture() -> (MapModel, RendererRegistry) {
    let description = MapDescription::from_json(TERRACED_MAP).expect("Fixture sollte parsen");
    let registry = RendererRegistry::new();
    let map = MapModel::from_description(description, registry.clone())
        .expect("Fixture sollte eine gültige Partition sein");
    (map, registry)
}

#[test]
fn test_fixture_loads_regions_renderers_and_lighting() {
    let (map, registry) = load_fixture();

    assert_eq!(map.region_count(), 2);
    assert_eq!(map.covered_cells(), 16);
    assert_eq!(registry.names(), vec!["grass".to_string(), "rock".to_string()]);
    assert_relative_eq!(map.lighting.ambient.intensity, 0.8);
    assert_eq!(map.lighting.lights.len(), 1);
    assert_eq!(map.cell_elevation(3, 3), Some(2));
    assert_eq!(map.cell_elevation(3, 1), Some(0));
}

#[test]
fn test_build_applies_material_override_and_resolves_placements() {
    let (map, _) = load_fixture();
    let projection = IsoProjection::default();

    let builds: Vec<_> = map
        .build_regions(&projection)
        .into_iter()
        .map(|(_, result)| result.expect("alle Renderer registriert"))
        .collect();

    let rock = builds
        .iter()
        .find(|b| b.renderer == "rock")
        .expect("Rock-Region aufgebaut");
    let moss = rock
        .cells
        .iter()
        .find(|c| c.cell == glam::IVec2::new(1, 2))
        .expect("Zelle (1, 2)");
    assert_eq!(moss.material(MaterialContext::Ground).name, "moss");
    assert_eq!(moss.material(MaterialContext::LeftElevation).name, "rock_side");
    assert!(rock
        .cells
        .iter()
        .filter(|c| c.cell != glam::IVec2::new(1, 2))
        .all(|c| c.ground.name == "rock_top"));

    let grass = builds
        .iter()
        .find(|b| b.renderer == "grass")
        .expect("Gras-Region aufgebaut");
    assert_eq!(grass.placements.len(), 1);
    let tree = &grass.placements[0];
    assert_eq!(tree.position.cell(), glam::IVec2::new(2, 1));
    assert_eq!(tree.position.elevation, Some(0));
    let expected = projection.map_to_scene(2, 1);
    assert_relative_eq!(tree.scene_position.x, expected.x);
    assert_relative_eq!(tree.scene_position.y, expected.y);
}

#[test]
fn test_visible_elevation_at_terrace_edge() {
    let (map, _) = load_fixture();

    // Vordere Kante der Terrasse: kein Nachbar bei y = 4
    assert_eq!(map.left_visible_elevation(0, 3), 2);
    // Rechte Kante: kein Nachbar bei x = 4
    assert_eq!(map.right_visible_elevation(3, 2), 2);
    // Zwischen zwei Terrassenzellen keine Stufe
    assert_eq!(map.right_visible_elevation(1, 2), 0);
    // Untere Ebene liegt hinter der Terrasse
    assert_eq!(map.left_visible_elevation(0, 1), 0);
}

#[test]
fn test_json_export_reloads_to_same_description() {
    let (map, _) = load_fixture();

    let json = map.to_description().to_json().expect("Export serialisierbar");
    let reparsed = MapDescription::from_json(&json).expect("Export parsebar");
    let reloaded =
        MapModel::from_description(reparsed.clone(), RendererRegistry::new()).expect("gültig");

    assert_eq!(reloaded.to_description(), reparsed);
    assert!(json.contains("\"assetLocator\""));
    assert!(json.contains("\"materialOverrides\""));
}
