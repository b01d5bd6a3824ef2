//! Map-Position mit optionaler Elevation und fraktionalem Welt-Offset.

use glam::{IVec2, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::IsoProjection;

/// Position auf dem Tile-Raster.
///
/// `elevation == None` bedeutet: beim Aufbau die Elevation der Region erben.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub x: i32,
    pub y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<i32>,
    /// Fraktionaler Anteil innerhalb der Zelle (und Stufe)
    #[serde(default)]
    pub world_offset: Vec3,
}

impl Position {
    /// Position ohne Elevation und ohne Offset.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            elevation: None,
            world_offset: Vec3::ZERO,
        }
    }

    pub fn with_elevation(mut self, elevation: i32) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn with_world_offset(mut self, offset: Vec3) -> Self {
        self.world_offset = offset;
        self
    }

    /// Zerlegt eine Welt-Position in Zelle, Stufe und Offset.
    ///
    /// X/Y werden abgerundet (`floor`), Z wird Richtung Null abgeschnitten.
    /// Die Asymmetrie ist gewollt kompatibel zu bestehenden Map-Daten.
    pub fn from_world(world: Vec3) -> Self {
        let x = world.x.floor();
        let y = world.y.floor();
        let elevation = world.z.trunc();
        Self {
            x: x as i32,
            y: y as i32,
            elevation: Some(elevation as i32),
            world_offset: Vec3::new(world.x - x, world.y - y, world.z - elevation),
        }
    }

    pub fn cell(&self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// `(x, y, elevation ∨ 0) + world_offset`
    pub fn world_position(&self) -> Vec3 {
        Vec3::new(
            self.x as f32,
            self.y as f32,
            self.elevation.unwrap_or(0) as f32,
        ) + self.world_offset
    }

    pub fn scene_position(&self, projection: &IsoProjection) -> Vec2 {
        projection.world_to_scene(self.world_position())
    }

    /// Kopie mit verschobener Zelle (Elevation und Offset bleiben).
    pub fn translated(&self, delta: IVec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..*self
        }
    }
}
