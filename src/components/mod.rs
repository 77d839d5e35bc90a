//! ECS components for entities.
//!
//! This module groups the component types that can be attached to entities
//! taking part in selection tracking.
//!
//! Submodules overview:
//! - [`blockselection`] – per-entity record of an in-progress block selection
//! - [`persistent`] – marker for entities that survive scene cleanup
//! - [`worldposition`] – world-space position (pivot) for an entity

pub mod blockselection;
pub mod persistent;
pub mod worldposition;
