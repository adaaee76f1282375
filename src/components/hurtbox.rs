//! Hurt-area component.
//!
//! A [`HurtBox`] marks the region of an entity that can *be hit*. It carries
//! a type tag that hit boxes filter on, a local size and offset, and two
//! optional reaction callbacks:
//!
//! - `on_hurt` – fired when a compatible hit box overlaps this hurt box.
//!   Receives the hurt entity first, the hitting entity second.
//! - `on_hit` – fired right after `on_hurt` for the same event, with the
//!   overlap manifold. It never fires on its own; the asymmetry with the
//!   hit-box side is deliberate.
//!
//! Callbacks receive [`Commands`], so any structural change they make is
//! deferred until the current pass has fully dispatched.

use std::fmt;

use bevy_ecs::prelude::{Component, Entity};
use bevy_ecs::system::Commands;
use bitflags::bitflags;

use crate::components::hitbox::HitCallback;
use crate::components::mapposition::MapPosition;
use crate::error::CollisionError;
use crate::geometry::{Manifold, Rect, VisualBounds};

/// Callback invoked when an entity's hurt box is hit.
///
/// Arguments: the hurt entity, the hitting entity, deferred commands.
pub type HurtCallback = Box<dyn Fn(Entity, Entity, &mut Commands) + Send + Sync>;

/// Closed set of hurt-box type tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HurtBoxKind {
    Flesh,
    Shield,
}

bitflags! {
    /// Set of [`HurtBoxKind`] values, used as a hit box's hurt-box
    /// compatibility list.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HurtBoxFilter: u8 {
        const FLESH = 1 << 0;
        const SHIELD = 1 << 1;
    }
}

impl HurtBoxKind {
    /// The single-bit filter matching exactly this kind.
    pub fn filter(self) -> HurtBoxFilter {
        match self {
            HurtBoxKind::Flesh => HurtBoxFilter::FLESH,
            HurtBoxKind::Shield => HurtBoxFilter::SHIELD,
        }
    }
}

/// Area of an entity that registers incoming hits.
///
/// Dimensions are fixed at construction; only offsets and callbacks may be
/// set afterwards. World coordinates are derived per query from the owning
/// entity's [`MapPosition`], never cached.
#[derive(Component)]
pub struct HurtBox {
    kind: HurtBoxKind,
    width: f32,
    height: f32,
    offset_x: f32,
    offset_y: f32,
    pub on_hurt: Option<HurtCallback>,
    pub on_hit: Option<HitCallback>,
}

impl HurtBox {
    /// Create a hurt box with explicit dimensions.
    ///
    /// Fails with [`CollisionError::InvalidDimension`] when either dimension
    /// is not strictly positive.
    pub fn with_size(kind: HurtBoxKind, width: f32, height: f32) -> Result<Self, CollisionError> {
        if width <= 0.0 || height <= 0.0 {
            return Err(CollisionError::InvalidDimension { width, height });
        }
        Ok(Self {
            kind,
            width,
            height,
            offset_x: 0.0,
            offset_y: 0.0,
            on_hurt: None,
            on_hit: None,
        })
    }

    /// Create a hurt box sized from an entity's visual bounds.
    ///
    /// Degenerate bounds are accepted; the resulting zero-area box simply
    /// never overlaps anything.
    pub fn from_bounds(kind: HurtBoxKind, bounds: &VisualBounds) -> Self {
        Self {
            kind,
            width: bounds.width(),
            height: bounds.height(),
            offset_x: 0.0,
            offset_y: 0.0,
            on_hurt: None,
            on_hit: None,
        }
    }

    /// Offset the box from the entity's anchor position.
    pub fn with_offset(mut self, offset_x: f32, offset_y: f32) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }

    /// Attach the `on_hurt` reaction callback.
    pub fn with_on_hurt(
        mut self,
        callback: impl Fn(Entity, Entity, &mut Commands) + Send + Sync + 'static,
    ) -> Self {
        self.on_hurt = Some(Box::new(callback));
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

    pub fn kind(&self) -> HurtBoxKind {
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

impl fmt::Debug for HurtBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HurtBox")
            .field("kind", &self.kind)
            .field("width", &self.width)
            .field("height", &self.height)
            .field("offset_x", &self.offset_x)
            .field("offset_y", &self.offset_y)
            .field("on_hurt", &self.on_hurt.is_some())
            .field("on_hit", &self.on_hit.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_size_rejects_zero_dimension() {
        let result = HurtBox::with_size(HurtBoxKind::Flesh, 5.0, 0.0);
        assert_eq!(
            result.err(),
            Some(CollisionError::InvalidDimension { width: 5.0, height: 0.0 })
        );
    }

    #[test]
    fn test_from_bounds_takes_extents_verbatim() {
        let bounds = VisualBounds { min_x: -4.0, min_y: -1.0, max_x: 4.0, max_y: 2.0 };
        let hurt = HurtBox::from_bounds(HurtBoxKind::Flesh, &bounds);
        assert_eq!(hurt.width(), 8.0);
        assert_eq!(hurt.height(), 3.0);
    }

    #[test]
    fn test_rect_applies_offset() {
        let hurt = HurtBox::with_size(HurtBoxKind::Shield, 4.0, 2.0)
            .unwrap()
            .with_offset(1.0, -1.0);
        let rect = hurt.rect(&MapPosition::new(10.0, 10.0));
        assert_eq!(rect, Rect { left: 9.0, right: 13.0, bottom: 8.0, top: 10.0 });
    }

    #[test]
    fn test_kind_filter_roundtrip() {
        assert!(HurtBoxFilter::FLESH.contains(HurtBoxKind::Flesh.filter()));
        assert!(!HurtBoxFilter::FLESH.contains(HurtBoxKind::Shield.filter()));
    }
}
