//! Axis-aligned rectangle primitives for the collision subsystem.
//!
//! Everything in this module is plain data with no ECS or rendering
//! dependency. [`Rect`] is a world-space axis-aligned rectangle, [`Manifold`]
//! is the overlap of two rectangles with derived extents, and
//! [`VisualBounds`] carries the bounding size a renderer computed for an
//! entity's visual, consumed only at box construction time.

/// World-space axis-aligned rectangle.
///
/// Rectangles produced by this crate always satisfy `left <= right` and
/// `bottom <= top`; zero-area rectangles are legal and simply never overlap
/// anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Rect {
    /// Build a rectangle of the given size centered on `(cx, cy)`.
    ///
    /// Boxes are anchored at their center point, so a 10x10 box at the
    /// origin spans `{left: -5, right: 5, bottom: -5, top: 5}`.
    pub fn centered(cx: f32, cy: f32, width: f32, height: f32) -> Self {
        Self {
            left: cx - width / 2.0,
            right: cx + width / 2.0,
            bottom: cy - height / 2.0,
            top: cy + height / 2.0,
        }
    }

    /// Point containment in world space. Edges are inclusive.
    pub fn contains_point(&self, x: f32, y: f32) -> bool {
        x >= self.left && x <= self.right && y >= self.bottom && y <= self.top
    }
}

/// Overlap rectangle of two [`Rect`]s with derived `width` and `height`.
///
/// A manifold with `width <= 0` or `height <= 0` means the rectangles do not
/// overlap (edge contact counts as no overlap); such manifolds are
/// representable but never reported as collisions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Manifold {
    pub rect: Rect,
    pub width: f32,
    pub height: f32,
}

impl Manifold {
    /// Compute the overlap of `a` and `b`. Commutative.
    pub fn between(a: &Rect, b: &Rect) -> Self {
        let rect = Rect {
            left: a.left.max(b.left),
            right: a.right.min(b.right),
            bottom: a.bottom.max(b.bottom),
            top: a.top.min(b.top),
        };
        Self {
            rect,
            width: rect.right - rect.left,
            height: rect.top - rect.bottom,
        }
    }

    /// True when the two source rectangles share strictly positive area.
    pub fn overlapping(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Axis-aligned bounding size of an entity's visual representation.
///
/// Supplied by the renderer (or any other bounds provider) when a box
/// component is constructed without explicit size overrides. The collision
/// core never talks to a renderer directly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualBounds {
    pub min_x: f32,
    pub min_y: f32,
    pub max_x: f32,
    pub max_y: f32,
}

impl VisualBounds {
    pub fn width(&self) -> f32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f32 {
        self.max_y - self.min_y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_centered_spans_half_extents() {
        let rect = Rect::centered(0.0, 0.0, 10.0, 10.0);
        assert!(approx_eq(rect.left, -5.0));
        assert!(approx_eq(rect.right, 5.0));
        assert!(approx_eq(rect.bottom, -5.0));
        assert!(approx_eq(rect.top, 5.0));
    }

    #[test]
    fn test_contains_point_inside_and_edges() {
        let rect = Rect::centered(0.0, 0.0, 4.0, 4.0);
        assert!(rect.contains_point(0.0, 0.0));
        assert!(rect.contains_point(2.0, 2.0)); // edges inclusive
        assert!(!rect.contains_point(2.1, 0.0));
    }

    #[test]
    fn test_manifold_is_commutative() {
        let a = Rect { left: 0.0, right: 10.0, bottom: 0.0, top: 10.0 };
        let b = Rect { left: 5.0, right: 15.0, bottom: 5.0, top: 15.0 };
        assert_eq!(Manifold::between(&a, &b), Manifold::between(&b, &a));
    }

    #[test]
    fn test_manifold_self_overlap_is_identity() {
        let a = Rect { left: -3.0, right: 4.0, bottom: 1.0, top: 9.0 };
        let m = Manifold::between(&a, &a);
        assert_eq!(m.rect, a);
        assert!(approx_eq(m.width, 7.0));
        assert!(approx_eq(m.height, 8.0));
    }

    #[test]
    fn test_manifold_partial_overlap() {
        let a = Rect { left: 0.0, right: 10.0, bottom: 0.0, top: 10.0 };
        let b = Rect { left: 5.0, right: 15.0, bottom: 5.0, top: 15.0 };
        let m = Manifold::between(&a, &b);
        assert!(approx_eq(m.rect.left, 5.0));
        assert!(approx_eq(m.rect.right, 10.0));
        assert!(approx_eq(m.rect.bottom, 5.0));
        assert!(approx_eq(m.rect.top, 10.0));
        assert!(approx_eq(m.width, 5.0));
        assert!(approx_eq(m.height, 5.0));
        assert!(m.overlapping());
    }

    #[test]
    fn test_manifold_edge_contact_is_not_overlap() {
        let a = Rect { left: 0.0, right: 10.0, bottom: 0.0, top: 10.0 };
        let b = Rect { left: 10.0, right: 20.0, bottom: 0.0, top: 10.0 };
        let m = Manifold::between(&a, &b);
        assert!(approx_eq(m.width, 0.0));
        assert!(!m.overlapping());
    }

    #[test]
    fn test_manifold_disjoint_has_nonpositive_extent() {
        let a = Rect { left: 0.0, right: 1.0, bottom: 0.0, top: 1.0 };
        let b = Rect { left: 5.0, right: 6.0, bottom: 5.0, top: 6.0 };
        let m = Manifold::between(&a, &b);
        assert!(m.width <= 0.0 || m.height <= 0.0);
        assert!(!m.overlapping());
    }

    #[test]
    fn test_visual_bounds_extents() {
        let bounds = VisualBounds { min_x: -2.0, min_y: 1.0, max_x: 3.0, max_y: 4.0 };
        assert!(approx_eq(bounds.width(), 5.0));
        assert!(approx_eq(bounds.height(), 3.0));
    }
}
