//! Collision event types.
//!
//! The query engine emits one [`CollisionEvent`] per qualifying overlapping
//! pair per pass. The dispatch layer consumes these to invoke the callbacks
//! registered on the participating boxes; the type also derives bevy_ecs
//! [`Event`], so callers that prefer observers can trigger the same values
//! themselves.

use bevy_ecs::prelude::*;

use crate::geometry::Manifold;

/// Which compatibility rule qualified a pair.
///
/// Hit-to-hurt and hit-to-hit checks are independent rules; hurt-to-hurt
/// pairs are never checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionKind {
    /// `a`'s hit box registered against `b`'s hurt box.
    HitHurt,
    /// `a`'s hit box registered against `b`'s hit box.
    HitHit,
}

/// A detected collision between two entities.
///
/// `a` is always the entity whose hit box qualified the pair; `b` is the
/// target. The manifold is the strictly positive overlap of the two boxes'
/// world rectangles at scan time.
#[derive(Event, Debug, Clone, Copy)]
pub struct CollisionEvent {
    pub a: Entity,
    pub b: Entity,
    pub manifold: Manifold,
    pub kind: CollisionKind,
}
