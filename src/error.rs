//! Error taxonomy for the collision subsystem.
//!
//! Both variants signal caller programming errors, not recoverable runtime
//! conditions: construction must be fixed before an entity is considered
//! ready, and a population handed to the query engine must be complete.
//! "No collision found" is the normal empty result, never an error.

use bevy_ecs::entity::Entity;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CollisionError {
    /// A box was constructed with explicit non-positive dimensions.
    #[error("box dimensions must be positive, got width={width} height={height}")]
    InvalidDimension { width: f32, height: f32 },

    /// An entity handed to the query engine lacks a required component.
    /// The engine never silently skips such an entity.
    #[error("entity {entity:?} is missing required component {component}")]
    MissingComponent {
        entity: Entity,
        component: &'static str,
    },
}
