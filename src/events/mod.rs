//! Event types exchanged with the host engine.
//!
//! Events provide a decoupled way for systems to communicate without tight
//! coupling or direct dependencies. The host triggers the gesture input
//! events; the observers in [`crate::systems::selection`] consume them and
//! re-emit the derived notifications.
//!
//! Submodules:
//! - [`selection`] – begin/end gesture inputs and started/completed outputs
//!
//! See the submodule for concrete event data, semantics, and example usage.
pub mod selection;
