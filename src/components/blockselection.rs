//! Block selection record and region math.
//!
//! The [`BlockSelection`] component tracks one in-progress selection
//! gesture for the entity it is attached to: the corner recorded when the
//! gesture started and the [`BlockRegion`] spanned so far. Host code
//! attaches the record before a gesture begins; the observers in
//! [`crate::systems::selection`] mutate it in place and never remove it.
//!
//! # Related
//!
//! - [`crate::events::selection`] – the gesture events that drive updates
//! - [`crate::components::worldposition::WorldPosition`] – source of the corners

use bevy_ecs::prelude::Component;
use glam::IVec3;
use serde::{Deserialize, Serialize};

/// Axis-aligned region of blocks, stored as inclusive min/max corners.
///
/// `min <= max` holds component-wise by construction. A region whose min
/// and max are equal covers exactly one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockRegion {
    /// Component-wise smallest corner, inclusive.
    pub min: IVec3,
    /// Component-wise largest corner, inclusive.
    pub max: IVec3,
}

impl BlockRegion {
    /// Region spanning two corners given in any order.
    ///
    /// Normalizes per axis: `min` is the component-wise minimum of the two
    /// corners, `max` the component-wise maximum.
    pub fn from_corners(a: IVec3, b: IVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Degenerate single-block region at the given corner.
    pub fn single(corner: IVec3) -> Self {
        Self {
            min: corner,
            max: corner,
        }
    }

    /// Number of blocks covered along each axis (corners are inclusive).
    pub fn size(&self) -> IVec3 {
        self.max - self.min + IVec3::ONE
    }

    /// Inclusive containment test in block coordinates.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn contains(&self, point: IVec3) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }
}

/// Per-entity record of an in-progress block selection gesture.
///
/// # Fields
/// - `start_position` - block corner recorded by the last gesture start,
///   `None` until a start event has touched this record
/// - `current_selection` - region spanned so far, recomputed on gesture
///   start and gesture end
///
/// A gesture start overwrites `start_position` and collapses the region to
/// a single block; a gesture end recomputes the region from the recorded
/// start and the current position without touching `start_position`.
#[derive(Component, Clone, Copy, Debug, Default, Serialize, Deserialize)]
pub struct BlockSelection {
    /// Corner where the active gesture started.
    pub start_position: Option<IVec3>,
    /// Region spanned by the gesture so far.
    pub current_selection: Option<BlockRegion>,
}

impl BlockSelection {
    /// Create an empty record with no gesture recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// True once a gesture start has been recorded.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn is_active(&self) -> bool {
        self.start_position.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== BLOCK REGION TESTS ====================

    #[test]
    fn test_from_corners_ordered() {
        let region = BlockRegion::from_corners(IVec3::new(1, 2, 3), IVec3::new(4, 5, 6));
        assert_eq!(region.min, IVec3::new(1, 2, 3));
        assert_eq!(region.max, IVec3::new(4, 5, 6));
    }

    #[test]
    fn test_from_corners_reversed() {
        let region = BlockRegion::from_corners(IVec3::new(4, 5, 6), IVec3::new(1, 2, 3));
        assert_eq!(region.min, IVec3::new(1, 2, 3));
        assert_eq!(region.max, IVec3::new(4, 5, 6));
    }

    #[test]
    fn test_from_corners_mixed_axes() {
        // Each axis normalizes independently.
        let region = BlockRegion::from_corners(IVec3::new(4, -2, 3), IVec3::new(1, 5, -6));
        assert_eq!(region.min, IVec3::new(1, -2, -6));
        assert_eq!(region.max, IVec3::new(4, 5, 3));
    }

    #[test]
    fn test_single_is_degenerate() {
        let region = BlockRegion::single(IVec3::new(7, -1, 0));
        assert_eq!(region.min, region.max);
        assert_eq!(region.size(), IVec3::ONE);
    }

    #[test]
    fn test_size_is_inclusive() {
        let region = BlockRegion::from_corners(IVec3::new(1, 5, -3), IVec3::new(4, 5, -3));
        assert_eq!(region.size(), IVec3::new(4, 1, 1));
    }

    #[test]
    fn test_contains_corners_and_interior() {
        let region = BlockRegion::from_corners(IVec3::new(0, 0, 0), IVec3::new(2, 2, 2));
        assert!(region.contains(IVec3::new(0, 0, 0)));
        assert!(region.contains(IVec3::new(2, 2, 2)));
        assert!(region.contains(IVec3::new(1, 2, 0)));
    }

    #[test]
    fn test_contains_rejects_outside_points() {
        let region = BlockRegion::from_corners(IVec3::new(0, 0, 0), IVec3::new(2, 2, 2));
        assert!(!region.contains(IVec3::new(-1, 0, 0)));
        assert!(!region.contains(IVec3::new(0, 3, 0)));
        assert!(!region.contains(IVec3::new(0, 0, -1)));
    }

    // ==================== BLOCK SELECTION TESTS ====================

    #[test]
    fn test_new_record_is_empty() {
        let record = BlockSelection::new();
        assert!(record.start_position.is_none());
        assert!(record.current_selection.is_none());
        assert!(!record.is_active());
    }

    #[test]
    fn test_record_becomes_active_with_start() {
        let mut record = BlockSelection::new();
        record.start_position = Some(IVec3::new(1, 2, 3));
        assert!(record.is_active());
    }
}
