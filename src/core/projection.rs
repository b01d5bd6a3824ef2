//! Isometrische Projektion Map ⇄ Welt ⇄ Szene.
//!
//! Welt-Koordinaten sind kontinuierliche Map-Koordinaten (`x`, `y`) plus
//! Höhe `z` in Elevation-Stufen. Szenen-Koordinaten sind Bildschirm-Einheiten
//! mit Y nach oben.

use glam::{Vec2, Vec3};

use super::Position;
use crate::shared::options::{ELEVATION_STEP_HEIGHT, TILE_HALF_HEIGHT, TILE_HALF_WIDTH};

/// Zustandslose Projektion mit den festen Tile-Konstanten eines Projekts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IsoProjection {
    /// Halbe Tile-Breite in Szenen-Einheiten
    pub half_width: f32,
    /// Halbe Tile-Höhe in Szenen-Einheiten
    pub half_height: f32,
    /// Szenen-Höhe einer Elevation-Stufe
    pub elevation_height: f32,
}

impl IsoProjection {
    pub fn new(half_width: f32, half_height: f32, elevation_height: f32) -> Self {
        Self {
            half_width,
            half_height,
            elevation_height,
        }
    }

    /// Welt → Szene: `(hw·(x−y), −hh·(x+y) + z·eh)`.
    pub fn world_to_scene(&self, world: Vec3) -> Vec2 {
        Vec2::new(
            self.half_width * (world.x - world.y),
            -self.half_height * (world.x + world.y) + world.z * self.elevation_height,
        )
    }

    /// Szene → Welt auf Höhe `z = 0`.
    pub fn scene_to_world(&self, scene: Vec2) -> Vec2 {
        let x = ((scene.x / self.half_width) - (scene.y / self.half_height)) / 2.0;
        let y = -(scene.y / self.half_height) - x;
        Vec2::new(x, y)
    }

    /// Map-Zelle (Höhe 0) → Szene.
    pub fn map_to_scene(&self, x: i32, y: i32) -> Vec2 {
        self.world_to_scene(Vec3::new(x as f32, y as f32, 0.0))
    }

    /// Szene → Map-Position auf Höhe 0.
    pub fn scene_to_map(&self, scene: Vec2) -> Position {
        self.scene_to_map_at_elevation(scene, 0.0)
    }

    /// Szene → Map-Position, wobei der Szenenpunkt auf Höhe `z` liegt.
    ///
    /// Der Höhenanteil wird vor dem Zurückprojizieren abgezogen.
    pub fn scene_to_map_at_elevation(&self, scene: Vec2, z: f32) -> Position {
        let ground = self.scene_to_world(Vec2::new(scene.x, scene.y - z * self.elevation_height));
        Position::from_world(ground.extend(z))
    }
}

impl Default for IsoProjection {
    fn default() -> Self {
        Self::new(TILE_HALF_WIDTH, TILE_HALF_HEIGHT, ELEVATION_STEP_HEIGHT)
    }
}
