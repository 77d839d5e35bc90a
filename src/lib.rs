//! Block selection library.
//!
//! This module exposes the crate's ECS components, events, and systems
//! for use in integration tests and as a reusable library.

pub mod components;
pub mod events;
pub mod systems;
