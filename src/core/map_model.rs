//! Die Map: geordnete Regionen, Beleuchtung, Renderer-Registry und die
//! Orchestrierung von Höhenänderungen.

use std::sync::atomic::{AtomicU64, Ordering};

use glam::{IVec2, Vec2};

use super::draw_order::sort_for_drawing;
use super::notify::{ChangeNotifier, SubscriptionId};
use super::region::{MapId, RegionBuild, RegionId};
use super::{
    Area, AssetPlacement, FootprintResolver, IsoProjection, Lighting, MapDescription, MapError,
    MapResult, MaterialContext, MaterialOverride, RegionDescription, RegionModel,
    RendererRegistry,
};
use crate::shared::options::DEFAULT_RENDERER;

static NEXT_MAP_ID: AtomicU64 = AtomicU64::new(1);

/// Besitzt alle Regionen einer Map.
///
/// Invariante: keine zwei Regionsflächen überlappen sich. Alle mutierenden
/// Methoden laufen synchron auf dem besitzenden Thread; nur die
/// Renderer-Registry ist threadübergreifend geteilt.
#[derive(Debug)]
pub struct MapModel {
    id: MapId,
    /// Regionen in Zeichenreihenfolge
    regions: Vec<RegionModel>,
    /// Umgebungslicht und Punktlichter
    pub lighting: Lighting,
    renderers: RendererRegistry,
    default_renderer: String,
    notifier: ChangeNotifier,
}

impl MapModel {
    /// Erstellt eine leere Map mit der übergebenen Registry.
    pub fn new(renderers: RendererRegistry) -> Self {
        Self {
            id: NEXT_MAP_ID.fetch_add(1, Ordering::Relaxed),
            regions: Vec::new(),
            lighting: Lighting::default(),
            renderers,
            default_renderer: DEFAULT_RENDERER.to_string(),
            notifier: ChangeNotifier::new(),
        }
    }

    /// Lädt eine Map aus ihrer Beschreibung.
    ///
    /// Überlappende Regionen und Platzierungen außerhalb ihrer Region werden
    /// abgelehnt, bevor irgendetwas registriert wird.
    pub fn from_description(
        description: MapDescription,
        renderers: RendererRegistry,
    ) -> MapResult<Self> {
        let MapDescription {
            regions,
            lighting,
            renderers: renderer_descriptions,
        } = description;

        for (i, first) in regions.iter().enumerate() {
            if let Some(second) = regions[i + 1..].iter().find(|r| r.area.intersects(&first.area)) {
                return Err(MapError::OverlappingRegions {
                    first: first.area,
                    second: second.area,
                });
            }
        }

        for region in &regions {
            let local_area = Area::new(0, 0, region.area.width, region.area.height);
            if let Some(outside) = region
                .asset_placements
                .iter()
                .find(|p| !local_area.contains(p.position.cell()))
            {
                return Err(MapError::PlacementOutsideRegion {
                    id: outside.id.clone(),
                    area: region.area,
                });
            }
        }

        for (name, renderer) in renderer_descriptions {
            renderers.register(name, renderer);
        }

        let mut map = Self::new(renderers);
        let map_id = map.id;
        map.lighting = lighting;
        map.regions = regions
            .into_iter()
            .map(|region| RegionModel::new(map_id, region))
            .collect();
        sort_for_drawing(&mut map.regions);

        log::info!(
            "Map {} geladen: {} Regionen, {} Zellen",
            map.id,
            map.region_count(),
            map.covered_cells()
        );
        Ok(map)
    }

    /// Exportiert die Map in Zeichenreihenfolge.
    pub fn to_description(&self) -> MapDescription {
        MapDescription {
            regions: self
                .regions
                .iter()
                .map(|region| region.description().clone())
                .collect(),
            lighting: self.lighting.clone(),
            renderers: self.renderers.snapshot(),
        }
    }

    pub fn id(&self) -> MapId {
        self.id
    }

    pub fn regions(&self) -> &[RegionModel] {
        &self.regions
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// Summe aller Regionsflächen in Zellen.
    pub fn covered_cells(&self) -> usize {
        self.regions.iter().map(|r| r.area().cell_count()).sum()
    }

    pub fn renderers(&self) -> &RendererRegistry {
        &self.renderers
    }

    pub fn default_renderer(&self) -> &str {
        &self.default_renderer
    }

    /// Renderer für Regionen ohne eigenen Renderer.
    pub fn set_default_renderer(&mut self, name: impl Into<String>) {
        self.default_renderer = name.into();
    }

    /// Registriert einen Änderungs-Callback.
    ///
    /// Der Callback läuft synchron innerhalb der mutierenden Methode.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&MapModel) + Send + 'static,
    ) -> SubscriptionId {
        self.notifier.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.notifier.unsubscribe(id)
    }

    fn notify_changed(&mut self) {
        let mut notifier = std::mem::take(&mut self.notifier);
        notifier.emit(self);
        self.notifier = notifier;
    }

    // ── Abfragen ────────────────────────────────────────────────────

    pub fn region(&self, id: RegionId) -> Option<&RegionModel> {
        self.regions.iter().find(|r| r.id() == id)
    }

    /// Region, die die Zelle enthält.
    pub fn region_at(&self, x: i32, y: i32) -> Option<&RegionModel> {
        let cell = IVec2::new(x, y);
        self.regions.iter().find(|r| r.area().contains(cell))
    }

    pub fn cell_elevation(&self, x: i32, y: i32) -> Option<i32> {
        self.region_at(x, y).map(RegionModel::elevation)
    }

    /// Sichtbare Höhe der linken Stufenfläche (Nachbar `(x, y + 1)`).
    pub fn left_visible_elevation(&self, x: i32, y: i32) -> i32 {
        self.visible_step(x, y, IVec2::new(x, y + 1))
    }

    /// Sichtbare Höhe der rechten Stufenfläche (Nachbar `(x + 1, y)`).
    pub fn right_visible_elevation(&self, x: i32, y: i32) -> i32 {
        self.visible_step(x, y, IVec2::new(x + 1, y))
    }

    fn visible_step(&self, x: i32, y: i32, neighbour: IVec2) -> i32 {
        let Some(elevation) = self.cell_elevation(x, y) else {
            return 0;
        };
        let neighbour_elevation = self.cell_elevation(neighbour.x, neighbour.y).unwrap_or(0);
        (elevation - neighbour_elevation).max(0)
    }

    /// Vorderste Region unter einem Szenenpunkt samt getroffener Zelle.
    pub fn hit_test(&self, scene: Vec2, projection: &IsoProjection) -> Option<(RegionId, IVec2)> {
        self.regions.iter().rev().find_map(|region| {
            let position = projection.scene_to_map_at_elevation(scene, region.elevation() as f32);
            let cell = position.cell();
            region.area().contains(cell).then_some((region.id(), cell))
        })
    }

    // ── Mutationen ─────────────────────────────────────────────────

    /// Fügt eine neue Region ein, sofern sie keine bestehende überlappt.
    pub fn insert_region(&mut self, description: RegionDescription) -> MapResult<RegionId> {
        if let Some(existing) = self
            .regions
            .iter()
            .find(|r| r.area().intersects(&description.area))
        {
            return Err(MapError::OverlappingRegions {
                first: existing.area(),
                second: description.area,
            });
        }

        let region = RegionModel::new(self.id, description);
        let id = region.id();
        self.regions.push(region);
        sort_for_drawing(&mut self.regions);
        self.notify_changed();
        Ok(id)
    }

    /// Wendet `op` auf die Region(en) unter `area` an.
    ///
    /// Nur die erste betroffene Region wird bearbeitet: entweder die erste
    /// vollständig enthaltene (bzw. bei `area == None` die erste überhaupt)
    /// oder die erste teilweise überlappende, die dafür unterteilt wird.
    /// Mehrere disjunkte Regionen unter einer großen Auswahl werden bewusst
    /// nicht in einem Aufruf bearbeitet.
    ///
    /// Nur wenn `op` etwas geändert hat (oder eine Region angelegt wurde),
    /// werden kompatible Regionen gemergt, neu sortiert und genau eine
    /// Benachrichtigung ausgelöst.
    /// Gibt zurück, ob sich etwas geändert hat.
    pub fn change_elevation<F>(&mut self, area: Option<Area>, create_if_missing: bool, mut op: F) -> bool
    where
        F: FnMut(&mut RegionModel) -> bool,
    {
        let mut touched = false;
        let mut changed = false;
        let mut replacement: Option<(usize, Vec<RegionModel>)> = None;

        for (index, region) in self.regions.iter_mut().enumerate() {
            let fully_covered = area.map_or(true, |target| target.contains_area(&region.area()));
            if fully_covered {
                touched = true;
                changed = op(region);
                break;
            }

            let Some(target) = area else { break };
            let Some(mut subdivision) = region.subdivide(&target) else {
                continue;
            };
            touched = true;
            if op(&mut subdivision.main) {
                changed = true;
                replacement = Some((index, subdivision.into_regions()));
            } else {
                log::debug!("Unterteilung von Region {} verworfen: keine Änderung", region.id());
            }
            break;
        }

        if let Some((index, parts)) = replacement {
            self.regions.remove(index);
            self.regions.extend(parts);
        }

        if !touched && create_if_missing {
            if let Some(target) = area.filter(|a| a.cell_count() > 0) {
                log::info!("Neue Region {} mit Elevation 1 angelegt", target);
                self.regions
                    .push(RegionModel::new(self.id, RegionDescription::new(target, 1, None)));
                changed = true;
            }
        }

        // Ohne angewandte Änderung bleibt auch die Partition unangetastet
        if !changed {
            return false;
        }

        let merges = self.merge_compatible_regions();
        sort_for_drawing(&mut self.regions);
        log::debug!(
            "Elevation geändert: {} Regionen nach {} Merges",
            self.regions.len(),
            merges
        );
        self.notify_changed();
        true
    }

    /// Erhöht die Elevation unter `area`; legt bei Bedarf eine Region an.
    pub fn increase_elevation(&mut self, area: Option<Area>) -> bool {
        self.change_elevation(area, true, RegionModel::raise)
    }

    /// Senkt die Elevation unter `area`; Regionen auf Elevation 0 bleiben unverändert.
    pub fn decrease_elevation(&mut self, area: Option<Area>) -> bool {
        self.change_elevation(area, false, RegionModel::lower)
    }

    /// Verschmilzt kompatible Regionen bis zum Fixpunkt.
    ///
    /// Nach jedem erfolgreichen Merge beginnt die Paarsuche von vorn.
    /// Gibt die Anzahl der Merges zurück.
    pub fn merge_compatible_regions(&mut self) -> usize {
        let mut merges = 0;
        'scan: loop {
            for i in 0..self.regions.len() {
                for j in i + 1..self.regions.len() {
                    let Some(merged) = self.regions[i].merged(&self.regions[j]) else {
                        continue;
                    };
                    log::debug!(
                        "Regionen {} und {} zu {} gemergt",
                        self.regions[i].area(),
                        self.regions[j].area(),
                        merged.area()
                    );
                    self.regions.remove(j);
                    self.regions.remove(i);
                    self.regions.push(merged);
                    merges += 1;
                    continue 'scan;
                }
            }
            break;
        }
        merges
    }

    /// Platziert ein Asset; die Position ist in Map-Koordinaten.
    pub fn add_asset(
        &mut self,
        placement: AssetPlacement,
        resolver: &dyn FootprintResolver,
    ) -> MapResult<RegionId> {
        let cell = placement.position.cell();
        let region = self
            .regions
            .iter_mut()
            .find(|r| r.area().contains(cell))
            .ok_or(MapError::NoRegionAt {
                x: cell.x,
                y: cell.y,
            })?;

        let id = region.id();
        if let Err(err) = region.add_asset(placement, resolver) {
            log::info!("Platzierung abgelehnt: {}", err);
            return Err(err);
        }
        self.notify_changed();
        Ok(id)
    }

    /// Entfernt eine Platzierung aus der Region, die sie enthält.
    pub fn remove_asset(&mut self, id: &str) -> Option<AssetPlacement> {
        let removed = self.regions.iter_mut().find_map(|r| r.remove_asset(id))?;
        self.notify_changed();
        Some(removed)
    }

    /// Setzt ein Material-Override an einer absoluten Zelle.
    pub fn set_material_override(
        &mut self,
        context: MaterialContext,
        cell: IVec2,
        value: MaterialOverride,
    ) -> MapResult<()> {
        let region = self
            .regions
            .iter_mut()
            .find(|r| r.area().contains(cell))
            .ok_or(MapError::NoRegionAt {
                x: cell.x,
                y: cell.y,
            })?;
        region.set_material_override(context, cell, value);
        self.notify_changed();
        Ok(())
    }

    /// Baut alle Regionen auf. Fehler betreffen nur die jeweilige Region.
    pub fn build_regions(
        &self,
        projection: &IsoProjection,
    ) -> Vec<(RegionId, MapResult<RegionBuild>)> {
        self.regions
            .iter()
            .map(|region| {
                let result = region.build(&self.renderers, &self.default_renderer, projection);
                if let Err(err) = &result {
                    log::warn!("Region {} {} nicht aufgebaut: {}", region.id(), region.area(), err);
                }
                (region.id(), result)
            })
            .collect()
    }
}
