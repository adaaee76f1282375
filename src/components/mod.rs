//! ECS components for entities.
//!
//! This module groups the component types the collision subsystem attaches
//! to entities. A collidable entity carries a [`mapposition::MapPosition`]
//! plus any combination of hit and hurt boxes.
//!
//! Submodules overview:
//! - [`hitbox`] – hit-area component with type filters and `on_hit` callback
//! - [`hurtbox`] – hurt-area component with `on_hurt`/`on_hit` callbacks
//! - [`mapposition`] – world-space anchor position for an entity

pub mod hitbox;
pub mod hurtbox;
pub mod mapposition;
