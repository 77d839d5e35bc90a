//! Block selection gesture events.
//!
//! The host triggers [`StartSelectionEvent`] when the player presses the
//! select control and [`EndSelectionEvent`] when it is released. The
//! observers in [`crate::systems::selection`] consume them, update the
//! referenced [`BlockSelection`](crate::components::blockselection::BlockSelection)
//! record, and re-emit [`SelectionStartedEvent`] /
//! [`SelectionCompletedEvent`] for downstream consumers such as a renderer
//! drawing the selection outline.
//!
//! Events carry entity ids only. The selection record itself stays owned
//! by the world; observers resolve it through a query for the duration of
//! the call and never retain it.
//!
//! # Example
//!
//! ```ignore
//! world.trigger(StartSelectionEvent { entity: player, selection });
//! // ... the player drags ...
//! world.trigger(EndSelectionEvent { entity: player, selection });
//! ```

use bevy_ecs::prelude::*;

/// Event fired by the host when a selection gesture begins.
///
/// `entity` is the entity whose world position supplies the start corner;
/// `selection` is the entity holding the record to update. They may be the
/// same entity or distinct ones (e.g. a player entity and a selection-box
/// display entity).
#[derive(Event, Debug, Clone, Copy)]
pub struct StartSelectionEvent {
    /// Entity whose world position supplies the corner.
    pub entity: Entity,
    /// Entity holding the [`BlockSelection`](crate::components::blockselection::BlockSelection) record.
    pub selection: Entity,
}

/// Event fired by the host when a selection gesture ends.
///
/// Payload semantics are identical to [`StartSelectionEvent`].
#[derive(Event, Debug, Clone, Copy)]
pub struct EndSelectionEvent {
    /// Entity whose world position supplies the corner.
    pub entity: Entity,
    /// Entity holding the [`BlockSelection`](crate::components::blockselection::BlockSelection) record.
    pub selection: Entity,
}

/// Emitted after a gesture start has been applied to the record.
///
/// The record referenced by `selection` already holds the new start corner
/// and the collapsed single-block region when observers of this event run.
#[derive(Event, Debug, Clone, Copy)]
pub struct SelectionStartedEvent {
    /// Entity whose position was sampled.
    pub entity: Entity,
    /// Entity holding the updated record.
    pub selection: Entity,
}

/// Emitted after a gesture end has been applied to the record.
///
/// The record referenced by `selection` already holds the final region
/// spanning the gesture's start and end corners.
#[derive(Event, Debug, Clone, Copy)]
pub struct SelectionCompletedEvent {
    /// Entity whose position was sampled.
    pub entity: Entity,
    /// Entity holding the updated record.
    pub selection: Entity,
}
