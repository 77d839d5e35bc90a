//! Block selection tracking observers.
//!
//! Two observers keep a [`BlockSelection`] record in sync with the
//! player's drag gesture:
//!
//! 1. The host triggers
//!    [`StartSelectionEvent`](crate::events::selection::StartSelectionEvent)
//!    when the gesture begins. [`start_selection_observer`] samples the
//!    entity's [`WorldPosition`], records the truncated block corner as the
//!    gesture start, and collapses the region to that single block.
//! 2. The host triggers
//!    [`EndSelectionEvent`](crate::events::selection::EndSelectionEvent)
//!    when the gesture ends. [`end_selection_observer`] samples the
//!    position again and recomputes the region spanning both corners.
//!
//! Each successful update re-emits the matching derived event
//! ([`SelectionStartedEvent`] / [`SelectionCompletedEvent`]) so consumers
//! can react without polling the record.
//!
//! # Registration
//!
//! The observers perform no routing of their own; the host registers them
//! like any other global observer:
//!
//! ```ignore
//! world.spawn((Observer::new(start_selection_observer), Persistent));
//! world.spawn((Observer::new(end_selection_observer), Persistent));
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::blockselection::{BlockRegion, BlockSelection};
use crate::components::worldposition::WorldPosition;
use crate::events::selection::{
    EndSelectionEvent, SelectionCompletedEvent, SelectionStartedEvent, StartSelectionEvent,
};

/// Observer that begins a selection gesture.
///
/// Contract
/// - Truncates the world position of `event.entity` to a block corner.
/// - Sets the record's start to that corner and its region to the single
///   block at the corner. A start while a gesture is already active resets
///   the gesture the same way.
/// - Triggers exactly one [`SelectionStartedEvent`] on success.
/// - Skips without mutating or emitting when `event.entity` has no
///   [`WorldPosition`] or `event.selection` has no [`BlockSelection`].
pub fn start_selection_observer(
    trigger: On<StartSelectionEvent>,
    positions: Query<&WorldPosition>,
    mut selections: Query<&mut BlockSelection>,
    mut commands: Commands,
) {
    let event = trigger.event();

    let Ok(position) = positions.get(event.entity) else {
        debug!(
            "Ignoring selection start: {:?} has no WorldPosition",
            event.entity
        );
        return;
    };
    let Ok(mut selection) = selections.get_mut(event.selection) else {
        debug!(
            "Ignoring selection start: {:?} has no BlockSelection record",
            event.selection
        );
        return;
    };

    let corner = position.block_position();
    selection.start_position = Some(corner);
    selection.current_selection = Some(BlockRegion::single(corner));

    commands.trigger(SelectionStartedEvent {
        entity: event.entity,
        selection: event.selection,
    });
}

/// Observer that ends a selection gesture.
///
/// Contract
/// - Truncates the world position of `event.entity` to the end corner.
/// - Recomputes the record's region to span the recorded start corner and
///   the end corner; the corners may arrive in any order per axis.
/// - A missing start corner (end with no prior start) is computed as
///   start = end, yielding a single-block region. The fallback corner is
///   not written back to `start_position`.
/// - Triggers exactly one [`SelectionCompletedEvent`] on success.
/// - Skips without mutating or emitting under the same guards as
///   [`start_selection_observer`].
pub fn end_selection_observer(
    trigger: On<EndSelectionEvent>,
    positions: Query<&WorldPosition>,
    mut selections: Query<&mut BlockSelection>,
    mut commands: Commands,
) {
    let event = trigger.event();

    let Ok(position) = positions.get(event.entity) else {
        debug!(
            "Ignoring selection end: {:?} has no WorldPosition",
            event.entity
        );
        return;
    };
    let Ok(mut selection) = selections.get_mut(event.selection) else {
        debug!(
            "Ignoring selection end: {:?} has no BlockSelection record",
            event.selection
        );
        return;
    };

    let end_corner = position.block_position();
    let start_corner = selection.start_position.unwrap_or(end_corner);
    selection.current_selection = Some(BlockRegion::from_corners(start_corner, end_corner));

    commands.trigger(SelectionCompletedEvent {
        entity: event.entity,
        selection: event.selection,
    });
}
