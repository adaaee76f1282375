//! Event types emitted by the collision subsystem.
//!
//! Submodules:
//! - [`collision`] – collision notifications emitted by the query engine

pub mod collision;
