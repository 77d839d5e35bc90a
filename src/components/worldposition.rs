//! World-space position component.
//!
//! The [`WorldPosition`] component stores an entity's position in world
//! space as floating-point coordinates. Movement and physics systems own
//! and mutate it; the selection observers only ever read it.

use bevy_ecs::prelude::Component;
use glam::{IVec3, Vec3};
use serde::{Deserialize, Serialize};

/// World-space position (pivot) for an entity.
///
/// Selection tracking samples this position at gesture start and end and
/// maps it onto the block grid with [`WorldPosition::block_position`].
#[derive(Component, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct WorldPosition {
    /// 3D coordinates in world units.
    pub pos: Vec3,
}

impl WorldPosition {
    /// Create a WorldPosition from x, y and z.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self {
            pos: Vec3::new(x, y, z),
        }
    }

    /// Create a WorldPosition from an existing Vec3.
    pub fn from_vec(pos: Vec3) -> Self {
        Self { pos }
    }

    /// Block coordinate for this position.
    ///
    /// Each axis is truncated toward zero, so `(1.9, 5.0, -3.2)` maps to
    /// block `(1, 5, -3)`.
    pub fn block_position(&self) -> IVec3 {
        self.pos.as_ivec3()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_new_creates_correct_position() {
        let pos = WorldPosition::new(10.0, 20.0, 30.0);
        assert!(approx_eq(pos.pos.x, 10.0));
        assert!(approx_eq(pos.pos.y, 20.0));
        assert!(approx_eq(pos.pos.z, 30.0));
    }

    #[test]
    fn test_default_is_zero() {
        let pos = WorldPosition::default();
        assert!(approx_eq(pos.pos.x, 0.0));
        assert!(approx_eq(pos.pos.y, 0.0));
        assert!(approx_eq(pos.pos.z, 0.0));
    }

    #[test]
    fn test_from_vec() {
        let pos = WorldPosition::from_vec(Vec3::new(1.5, 2.5, 3.5));
        assert!(approx_eq(pos.pos.x, 1.5));
        assert!(approx_eq(pos.pos.z, 3.5));
    }

    #[test]
    fn test_block_position_truncates_fractions() {
        let pos = WorldPosition::new(1.9, 5.0, 2.7);
        assert_eq!(pos.block_position(), IVec3::new(1, 5, 2));
    }

    #[test]
    fn test_block_position_truncates_toward_zero() {
        // Truncation, not floor: -3.2 maps to -3 and -0.5 maps to 0.
        let pos = WorldPosition::new(-3.2, -0.5, -1.9);
        assert_eq!(pos.block_position(), IVec3::new(-3, 0, -1));
    }

    #[test]
    fn test_block_position_exact_integers() {
        let pos = WorldPosition::new(4.0, -7.0, 0.0);
        assert_eq!(pos.block_position(), IVec3::new(4, -7, 0));
    }
}
