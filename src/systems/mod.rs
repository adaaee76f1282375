//! Engine systems.
//!
//! Submodules overview
//! - [`collision`] – pairwise hit/hurt overlap scan and callback dispatch

pub mod collision;
