//! Persistent entity marker component.
//!
//! Entities with the [`Persistent`] component will not be despawned when
//! the host clears a scene. The selection observers are spawned with this
//! marker so gesture tracking keeps working across scene transitions.

use bevy_ecs::prelude::Component;

/// Tag component used to mark entities that should persist across scene changes.
///
/// Entities with this component will not be despawned when switching scenes.
#[derive(Component, Clone, Debug)]
pub struct Persistent;
