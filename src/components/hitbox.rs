//! Hit-area component.
//!
//! A [`HitBox`] marks the region of an entity that registers contact
//! *against* other entities. Two independent compatibility lists control what
//! it can hit: `hits` filters other entities' hit boxes by [`HitBoxKind`],
//! `hits_hurtboxes` filters their hurt boxes by
//! [`HurtBoxKind`](super::hurtbox::HurtBoxKind). Hurt-to-hurt pairs are never
//! checked.
//!
//! The optional `on_hit` callback fires once per qualifying overlap, before
//! any hurt-side callbacks of the other entity. Callbacks receive
//! [`Commands`], so structural changes they make are deferred until the
//! current pass has fully dispatched.

use std::fmt;

use bevy_ecs::prelude::{Component, Entity};
use bevy_ecs::system::Commands;
use bitflags::bitflags;

use crate::components::hurtbox::{HurtBoxFilter, HurtBoxKind};
use crate::components::mapposition::MapPosition;
use crate::error::CollisionError;
use crate::geometry::{Manifold, Rect, VisualBounds};

/// Callback invoked when a box registers a hit.
///
/// Arguments: the owning entity, the other entity, the overlap manifold,
/// deferred commands.
pub type HitCallback = Box<dyn Fn(Entity, Entity, &Manifold, &mut Commands) + Send + Sync>;

/// Closed set of hit-box type tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HitBoxKind {
    Player,
    Enemy,
}

bitflags! {
    /// Set of [`HitBoxKind`] values, used as a hit box's hit-box
    /// compatibility list.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HitBoxFilter: u8 {
        const PLAYER = 1 << 0;
        const ENEMY = 1 << 1;
    }
}

impl HitBoxKind {
    /// The single-bit filter matching exactly this kind.
    pub fn filter(self) -> HitBoxFilter {
        match self {
            HitBoxKind::Player => HitBoxFilter::PLAYER,
            HitBoxKind::Enemy => HitBoxFilter::ENEMY,
        }
    }
}

/// Area of an entity that can register hits against compatible targets.
///
/// Dimensions are fixed at construction; only offsets and callbacks may be
/// set afterwards. World coordinates are derived per query from the owning
/// entity's [`MapPosition`], never cached.
#[derive(Component)]
pub struct HitBox {
    kind: HitBoxKind,
    hits: HitBoxFilter,
    hits_hurtboxes: HurtBoxFilter,
    width: f32,
    height: f32,
    offset_x: f32,
    offset_y: f32,
    pub on_hit: Option<HitCallback>,
}

impl HitBox {
    /// Create a hit box with explicit dimensions.
    ///
    /// Fails with [`CollisionError::InvalidDimension`] when either dimension
    /// is not strictly positive.
    pub fn with_size(
        kind: HitBoxKind,
        hits: HitBoxFilter,
        hits_hurtboxes: HurtBoxFilter,
        width: f32,
        height: f32,
    ) -> Result<Self, CollisionError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(CollisionError::InvalidDimension { width, height });
        }
        Ok(Self {
            kind,
            hits,
            hits_hurtboxes,
            width,
            height,
            offset_x: 0.0,
            offset_y: 0.0,
            on_hit: None,
        })
    }

    /// Create a hit box sized from an entity's visual bounds.
    ///
    /// Degenerate bounds are accepted; the resulting zero-area box simply
    /// never overlaps anything.
    pub fn from_bounds(
        kind: HitBoxKind,
        hits: HitBoxFilter,
        hits_hurtboxes: HurtBoxFilter,
        bounds: &VisualBounds,
    ) -> Self {
        Self {
            kind,
            hits,
            hits_hurtboxes,
            width: bounds.width(),
            height: bounds.height(),
            offset_x: 0.0,
            offset_y: 0.0,
            on_hit: None,
        }
    }

    /// Offset the box from the entity's anchor position.
    pub fn with_offset(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Attach the `on_hit` reaction callback.
    pub fn with_on_hit(
        mut self,
        callback: impl Fn(Entity, Entity, &Manifold, &mut Commands) + Send + Sync + 'static,
    ) -> Self {
        self.on_hit = Some(Box::new(callback));
        self
    }

    pub fn kind(&self) -> HitBoxKind {
        self.kind
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn offset(&self) -> (f32, f32) {
        (self.offset_x, self.offset_y)
    }

    /// Whether this box may register hits against a hurt box of `kind`.
    pub fn targets_hurtbox(&self, kind: HurtBoxKind) -> bool {
        self.hits_hurtboxes.contains(kind.filter())
    }

    /// Whether this box may register hits against a hit box of `kind`.
    pub fn targets_hitbox(&self, kind: HitBoxKind) -> bool {
        self.hits.contains(kind.filter())
    }

    /// World-space rectangle of this box for the given anchor position,
    /// centered on anchor + offset.
    pub fn rect(&self, position: &MapPosition) -> Rect {
        Rect::centered(
            position.x + self.offset_x,
            position.y + self.offset_y,
            self.width,
            self.height,
        )
    }
}

impl fmt::Debug for HitBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HitBox")
            .field("kind", &self.kind)
            .field("hits", &self.hits)
            .field("hits_hurtboxes", &self.hits_hurtboxes)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("offset_x", &self.offset_x)
            .field("offset_y", &self.offset_y)
            .field("on_hit", &self.on_hit.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_size_rejects_nonpositive_overrides() {
        let result = HitBox::with_size(
            HitBoxKind::Player,
            HitBoxFilter::empty(),
            HurtBoxFilter::FLESH,
            5.0,
            0.0,
        );
        assert_eq!(
            result.err(),
            Some(CollisionError::InvalidDimension { width: 5.0, height: 0.0 })
        );

        let result = HitBox::with_size(
            HitBoxKind::Player,
            HitBoxFilter::empty(),
            HurtBoxFilter::FLESH,
            -1.0,
            3.0,
        );
        assert!(matches!(
            result,
            Err(CollisionError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_rect_is_centered_on_position() {
        let hit = HitBox::with_size(
            HitBoxKind::Player,
            HitBoxFilter::empty(),
            HurtBoxFilter::FLESH,
            10.0,
            10.0,
        )
        .unwrap();
        let rect = hit.rect(&MapPosition::new(0.0, 0.0));
        assert_eq!(rect, Rect { left: -5.0, right: 5.0, bottom: -5.0, top: 5.0 });
    }

    #[test]
    fn test_rect_is_recomputed_per_position() {
        let hit = HitBox::with_size(
            HitBoxKind::Enemy,
            HitBoxFilter::PLAYER,
            HurtBoxFilter::empty(),
            2.0,
            2.0,
        )
        .unwrap()
        .with_offset(3.0, 0.0);
        assert_eq!(
            hit.rect(&MapPosition::new(0.0, 0.0)),
            Rect { left: 2.0, right: 4.0, bottom: -1.0, top: 1.0 }
        );
        assert_eq!(
            hit.rect(&MapPosition::new(-3.0, 5.0)),
            Rect { left: -1.0, right: 1.0, bottom: 4.0, top: 6.0 }
        );
    }

    #[test]
    fn test_targets_filters() {
        let hit = HitBox::with_size(
            HitBoxKind::Player,
            HitBoxFilter::ENEMY,
            HurtBoxFilter::FLESH,
            1.0,
            1.0,
        )
        .unwrap();
        assert!(hit.targets_hitbox(HitBoxKind::Enemy));
        assert!(!hit.targets_hitbox(HitBoxKind::Player));
        assert!(hit.targets_hurtbox(HurtBoxKind::Flesh));
        assert!(!hit.targets_hurtbox(HurtBoxKind::Shield));
    }

    #[test]
    fn test_from_bounds_tolerates_degenerate_bounds() {
        let bounds = VisualBounds { min_x: 1.0, min_y: 1.0, max_x: 1.0, max_y: 1.0 };
        let hit = HitBox::from_bounds(
            HitBoxKind::Enemy,
            HitBoxFilter::empty(),
            HurtBoxFilter::FLESH,
            &bounds,
        );
        assert_eq!(hit.width(), 0.0);
        assert_eq!(hit.height(), 0.0);
    }
}
