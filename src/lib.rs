//! Hitbox Engine library.
//!
//! Type-filtered axis-aligned collision detection for 2D games built on
//! bevy_ecs. Entities carry a [`components::mapposition::MapPosition`] anchor
//! plus hit and hurt box components; once per game-loop tick,
//! [`systems::collision::collision_pass`] scans the population for
//! type-compatible overlapping pairs and dispatches the reaction callbacks
//! registered on the boxes.

pub mod components;
pub mod error;
pub mod events;
pub mod geometry;
pub mod systems;
