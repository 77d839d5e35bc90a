//! Engine systems.
//!
//! Submodules overview
//! - [`selection`] – observers that track block selection gestures

pub mod selection;
