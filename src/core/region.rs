//! Lebende Region einer Map: Unterteilung, Merge, Elevation und Asset-Validierung.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::{IVec2, Vec2};

use super::asset_placement::{occupied_area, oriented_footprint};
use super::{
    Area, AssetLocator, AssetPlacement, FootprintResolver, IsoProjection, MapError, MapResult,
    MaterialContext, Position, RegionDescription, RendererRegistry,
};

/// Eindeutige Regions-ID (monoton vergeben).
pub type RegionId = u64;

/// Handle der besitzenden Map.
pub type MapId = u64;

static NEXT_REGION_ID: AtomicU64 = AtomicU64::new(1);

fn next_region_id() -> RegionId {
    NEXT_REGION_ID.fetch_add(1, Ordering::Relaxed)
}

/// Eine Region, gebunden an ihre Map über ein explizites Owner-Handle.
///
/// Gleichheit gilt ausschließlich über die ID.
#[derive(Debug, Clone)]
pub struct RegionModel {
    id: RegionId,
    owner: MapId,
    description: RegionDescription,
}

impl PartialEq for RegionModel {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RegionModel {}

/// Ergebnis einer Unterteilung.
#[derive(Debug, Clone)]
pub struct Subdivision {
    /// Region über der Schnittfläche
    pub main: RegionModel,
    /// Bis zu vier komplementäre Rechtecke (links, rechts, oben, unten)
    pub others: Vec<RegionModel>,
}

impl Subdivision {
    /// Alle entstandenen Regionen, Hauptregion zuerst.
    pub fn into_regions(self) -> Vec<RegionModel> {
        let mut regions = Vec::with_capacity(self.others.len() + 1);
        regions.push(self.main);
        regions.extend(self.others);
        regions
    }
}

impl RegionModel {
    /// Erstellt eine Region mit frischer ID.
    pub fn new(owner: MapId, description: RegionDescription) -> Self {
        Self {
            id: next_region_id(),
            owner,
            description,
        }
    }

    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn owner(&self) -> MapId {
        self.owner
    }

    pub fn description(&self) -> &RegionDescription {
        &self.description
    }

    pub fn into_description(self) -> RegionDescription {
        self.description
    }

    pub fn area(&self) -> Area {
        self.description.area
    }

    pub fn elevation(&self) -> i32 {
        self.description.elevation
    }

    pub fn renderer(&self) -> Option<&str> {
        self.description.renderer.as_deref()
    }

    pub fn set_elevation(&mut self, elevation: i32) {
        self.description.elevation = elevation;
    }

    /// Erhöht die Elevation um eine Stufe (gelingt immer).
    pub fn raise(&mut self) -> bool {
        self.description.elevation += 1;
        true
    }

    /// Senkt die Elevation um eine Stufe; bei 0 passiert nichts.
    pub fn lower(&mut self) -> bool {
        if self.description.elevation > 0 {
            self.description.elevation -= 1;
            true
        } else {
            false
        }
    }

    /// Setzt oder entfernt den Renderer.
    pub fn set_renderer(&mut self, renderer: Option<String>) {
        self.description.renderer = renderer;
    }

    /// Setzt ein Material-Override an einer absoluten Zelle.
    pub fn set_material_override(
        &mut self,
        context: MaterialContext,
        cell: IVec2,
        value: super::MaterialOverride,
    ) -> bool {
        self.description.set_material_override(context, cell, value)
    }

    /// Teilt die Region entlang von `sub_area`.
    ///
    /// Gibt `None` zurück, wenn sich die Flächen nicht überlappen. Die
    /// Schnittfläche und die komplementären Rechtecke partitionieren die
    /// ursprüngliche Fläche lückenlos und überlappungsfrei.
    pub fn subdivide(&self, sub_area: &Area) -> Option<Subdivision> {
        let area = self.area();
        let intersection = area.intersection(sub_area)?;

        let candidates = [
            // links
            Area::new(
                area.min_x(),
                area.min_y(),
                intersection.min_x() - area.min_x(),
                area.height,
            ),
            // rechts
            Area::new(
                intersection.max_x(),
                area.min_y(),
                area.max_x() - intersection.max_x(),
                area.height,
            ),
            // oben
            Area::new(
                intersection.min_x(),
                intersection.max_y(),
                intersection.width,
                area.max_y() - intersection.max_y(),
            ),
            // unten
            Area::new(
                intersection.min_x(),
                area.min_y(),
                intersection.width,
                intersection.min_y() - area.min_y(),
            ),
        ];

        let others = candidates
            .into_iter()
            .filter(|candidate| candidate.width > 0 && candidate.height > 0)
            .map(|candidate| self.derived(candidate))
            .collect::<Vec<_>>();

        log::debug!(
            "Region {} {} unterteilt: Haupt {} + {} Rest",
            self.id,
            area,
            intersection,
            others.len()
        );

        Some(Subdivision {
            main: self.derived(intersection),
            others,
        })
    }

    fn derived(&self, area: Area) -> RegionModel {
        RegionModel::new(self.owner, self.description.exported(area))
    }

    /// Prüft ob die beiden Regionen zu einem Rechteck verschmelzen können.
    ///
    /// Nur übereinander gestapelte Regionen gleicher Breite oder nebeneinander
    /// liegende Regionen gleicher Höhe werden gemergt.
    pub fn can_merge(&self, other: &RegionModel) -> bool {
        if self.elevation() != other.elevation() || self.renderer() != other.renderer() {
            return false;
        }

        let (a, b) = (self.area(), other.area());
        let stacked = a.width == b.width
            && a.x == b.x
            && (a.max_y() == b.min_y() || b.max_y() == a.min_y());
        let side_by_side = a.height == b.height
            && a.y == b.y
            && (a.max_x() == b.min_x() || b.max_x() == a.min_x());

        stacked || side_by_side
    }

    /// Neue Region über der Vereinigung beider Regionen, sofern kompatibel.
    pub fn merged(&self, other: &RegionModel) -> Option<RegionModel> {
        if !self.can_merge(other) {
            return None;
        }

        let area = self.area().bounding_union(&other.area());
        let description = RegionDescription::combined(area, &self.description, &other.description);
        Some(RegionModel::new(self.owner, description))
    }

    /// Map-Position → lokale Position dieser Region.
    pub fn local_position(&self, position: &Position) -> Position {
        position.translated(-self.area().origin())
    }

    /// Validiert eine Platzierung an der Map-Position `position` mit dem
    /// (bereits orientierten) Footprint und liefert die lokale Position.
    pub fn validate_asset_placement(
        &self,
        position: &Position,
        footprint: (i32, i32),
        resolver: &dyn FootprintResolver,
    ) -> MapResult<Position> {
        let local = self.local_position(position);
        let (width, height) = footprint;

        if local.x + 1 < width || local.y + 1 < height {
            return Err(MapError::AssetTooCloseToRegionBorder {
                local_x: local.x,
                local_y: local.y,
                width,
                height,
            });
        }

        let occupied = occupied_area(&local, footprint);
        for existing in &self.description.asset_placements {
            let Some(existing_footprint) = existing.effective_footprint(resolver) else {
                log::debug!(
                    "Footprint von {} unbekannt, wird bei der Kollision ignoriert",
                    existing.asset_locator
                );
                continue;
            };
            if occupied.intersects(&occupied_area(&existing.position, existing_footprint)) {
                return Err(MapError::OtherAssetInTheWay {
                    other_id: existing.id.clone(),
                });
            }
        }

        Ok(local)
    }

    /// Fügt eine Platzierung (Position in Map-Koordinaten) nach erfolgreicher
    /// Validierung hinzu.
    pub fn add_asset(
        &mut self,
        mut placement: AssetPlacement,
        resolver: &dyn FootprintResolver,
    ) -> MapResult<()> {
        let cell = placement.position.cell();
        if !self.area().contains(cell) {
            return Err(MapError::NoRegionAt {
                x: cell.x,
                y: cell.y,
            });
        }

        let footprint = resolver
            .resolve_footprint(&placement.asset_locator)
            .map(|fp| oriented_footprint(fp, placement.horizontally_flipped))
            .ok_or_else(|| MapError::FootprintUnavailable {
                locator: placement.asset_locator.clone(),
            })?;

        placement.position = self.validate_asset_placement(&placement.position, footprint, resolver)?;
        log::debug!(
            "Asset {} ({}) in Region {} bei lokal ({}, {}) platziert",
            placement.id,
            placement.asset_locator,
            self.id,
            placement.position.x,
            placement.position.y
        );
        self.description.asset_placements.push(placement);
        Ok(())
    }

    /// Entfernt eine Platzierung anhand ihrer ID.
    pub fn remove_asset(&mut self, id: &str) -> Option<AssetPlacement> {
        let index = self
            .description
            .asset_placements
            .iter()
            .position(|p| p.id == id)?;
        Some(self.description.asset_placements.remove(index))
    }

    /// Baut die Render-Beschreibung der Region auf.
    ///
    /// Schlägt fehl, wenn der Renderer nicht registriert ist; die übrigen
    /// Regionen einer Map sind davon nicht betroffen.
    pub fn build(
        &self,
        registry: &RendererRegistry,
        default_renderer: &str,
        projection: &IsoProjection,
    ) -> MapResult<RegionBuild> {
        let renderer_name = self.renderer().unwrap_or(default_renderer);
        let handle = registry.lookup(renderer_name)?;
        let area = self.area();
        let elevation = self.elevation();

        let cells = area
            .cells()
            .map(|cell| {
                let material = |context: MaterialContext| {
                    let base = handle.material(context);
                    match self.description.material_override_at(context, cell) {
                        Some(value) => CellMaterial {
                            name: value.material.clone().unwrap_or_else(|| base.to_string()),
                            parameters: value.parameters.clone(),
                        },
                        None => CellMaterial {
                            name: base.to_string(),
                            parameters: BTreeMap::new(),
                        },
                    }
                };
                CellBuild {
                    cell,
                    elevation,
                    ground: material(MaterialContext::Ground),
                    left_elevation: material(MaterialContext::LeftElevation),
                    right_elevation: material(MaterialContext::RightElevation),
                }
            })
            .collect();

        let placements = self
            .description
            .asset_placements
            .iter()
            .map(|placement| {
                let local = placement.position;
                let position = Position {
                    elevation: Some(local.elevation.unwrap_or(elevation)),
                    ..local.translated(area.origin())
                };
                PlacementBuild {
                    id: placement.id.clone(),
                    asset_locator: placement.asset_locator.clone(),
                    horizontally_flipped: placement.horizontally_flipped,
                    scene_position: position.scene_position(projection),
                    position,
                }
            })
            .collect();

        Ok(RegionBuild {
            region_id: self.id,
            renderer: handle.name,
            cells,
            placements,
        })
    }
}

/// Aufgelöstes Material einer Zellfläche.
#[derive(Debug, Clone, PartialEq)]
pub struct CellMaterial {
    pub name: String,
    pub parameters: BTreeMap<String, f32>,
}

/// Render-Beschreibung einer Zelle.
#[derive(Debug, Clone, PartialEq)]
pub struct CellBuild {
    /// Absolute Map-Zelle
    pub cell: IVec2,
    pub elevation: i32,
    pub ground: CellMaterial,
    pub left_elevation: CellMaterial,
    pub right_elevation: CellMaterial,
}

impl CellBuild {
    pub fn material(&self, context: MaterialContext) -> &CellMaterial {
        match context {
            MaterialContext::Ground => &self.ground,
            MaterialContext::LeftElevation => &self.left_elevation,
            MaterialContext::RightElevation => &self.right_elevation,
        }
    }
}

/// Render-Beschreibung einer Platzierung mit aufgelöster Elevation.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementBuild {
    pub id: String,
    pub asset_locator: AssetLocator,
    pub horizontally_flipped: bool,
    /// Absolute Position, Elevation immer gesetzt
    pub position: Position,
    pub scene_position: Vec2,
}

/// Render-Beschreibung einer ganzen Region.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionBuild {
    pub region_id: RegionId,
    /// Tatsächlich verwendeter Renderer
    pub renderer: String,
    pub cells: Vec<CellBuild>,
    pub placements: Vec<PlacementBuild>,
}
