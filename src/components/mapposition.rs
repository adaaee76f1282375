use bevy_ecs::prelude::Component;

/// World-space anchor position of an entity.
///
/// This is the position the collision engine reads fresh on every pass; box
/// components carry only local offsets relative to it.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct MapPosition {
    pub x: f32,
    pub y: f32,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}
