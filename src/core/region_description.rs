//! Serialisierbare Nutzlast einer Region inklusive Override-/Asset-Import.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::{Area, AssetPlacement, MaterialContext, MaterialOverride, MaterialOverrides};

/// Beschreibung einer Region, wie sie persistiert und zwischen Regionen
/// umverteilt wird.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionDescription {
    #[serde(flatten)]
    pub area: Area,
    pub elevation: i32,
    /// Renderer-Name (`None` = Standard-Renderer)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub renderer: Option<String>,
    #[serde(default, skip_serializing_if = "MaterialOverrides::is_empty")]
    pub material_overrides: MaterialOverrides,
    #[serde(default)]
    pub asset_placements: Vec<AssetPlacement>,
}

impl RegionDescription {
    /// Leere Beschreibung ohne Overrides und Assets.
    pub fn new(area: Area, elevation: i32, renderer: Option<String>) -> Self {
        Self {
            area,
            elevation,
            renderer,
            material_overrides: MaterialOverrides::new(),
            asset_placements: Vec::new(),
        }
    }

    /// Exportiert einen Teilbereich: gleiche Elevation und gleicher Renderer,
    /// Overrides und Assets der Zellen in `area`, in deren lokales System übertragen.
    pub fn exported(&self, area: Area) -> Self {
        let mut description = Self::new(area, self.elevation, self.renderer.clone());
        description.import_material_overrides(self);
        description.import_assets(self);
        description
    }

    /// Vereinigt zwei Beschreibungen zu einer über `area`.
    ///
    /// Elevation und Renderer stammen von `first`; der Aufrufer stellt sicher,
    /// dass beide übereinstimmen.
    pub fn combined(area: Area, first: &Self, second: &Self) -> Self {
        let mut description = Self::new(area, first.elevation, first.renderer.clone());
        for source in [first, second] {
            description.import_material_overrides(source);
            description.import_assets(source);
        }
        description
    }

    /// Kopiert die Overrides aller Zellen, die in beiden Regionen liegen,
    /// an den jeweiligen lokalen Index dieser Region.
    pub fn import_material_overrides(&mut self, other: &RegionDescription) {
        let Some(shared) = self.area.intersection(&other.area) else {
            return;
        };

        for (context, source_index, value) in other.material_overrides.iter() {
            let Some(cell) = cell_of_index(&other.area, source_index) else {
                continue;
            };
            if !shared.contains(cell) {
                continue;
            }
            if let Some(target_index) = self.area.local_index(self.area.to_local(cell)) {
                self.material_overrides
                    .set(context, target_index, value.clone());
            }
        }
    }

    /// Übernimmt alle Platzierungen aus `other`, deren absolute Position in
    /// dieser Region liegt.
    ///
    /// Die Positionen werden dabei in das lokale System dieser Region umgerechnet.
    pub fn import_assets(&mut self, other: &RegionDescription) {
        let delta = other.area.origin() - self.area.origin();
        for placement in &other.asset_placements {
            let absolute = other.area.to_absolute(placement.position.cell());
            if !self.area.contains(absolute) {
                continue;
            }
            let mut imported = placement.clone();
            imported.position = placement.position.translated(delta);
            self.asset_placements.push(imported);
        }
    }

    /// Override einer absoluten Zelle.
    pub fn material_override_at(
        &self,
        context: MaterialContext,
        cell: IVec2,
    ) -> Option<&MaterialOverride> {
        let index = self.area.local_index(self.area.to_local(cell))?;
        self.material_overrides.get(context, index)
    }

    /// Setzt das Override einer absoluten Zelle; `false` außerhalb der Region.
    pub fn set_material_override(
        &mut self,
        context: MaterialContext,
        cell: IVec2,
        value: MaterialOverride,
    ) -> bool {
        let Some(index) = self.area.local_index(self.area.to_local(cell)) else {
            return false;
        };
        self.material_overrides.set(context, index, value);
        true
    }

    /// Absolute Zelle einer (lokalen) Platzierung.
    pub fn absolute_cell(&self, placement: &AssetPlacement) -> IVec2 {
        self.area.to_absolute(placement.position.cell())
    }
}

/// Absolute Zelle zu einem lokalen Index; `None` außerhalb der Fläche.
fn cell_of_index(area: &Area, index: usize) -> Option<IVec2> {
    if area.width <= 0 {
        return None;
    }
    let width = area.width as usize;
    let local = IVec2::new((index % width) as i32, (index / width) as i32);
    area.local_index(local)?;
    Some(area.to_absolute(local))
}
