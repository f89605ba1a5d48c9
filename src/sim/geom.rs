//! Axis-aligned rectangle geometry
//!
//! Positions grow right (+x) and down (+y), in tile units. A rectangle is
//! anchored at its top-left corner.

use glam::Vec2;

use crate::error::EngineError;

/// Axis-aligned rectangle (top-left corner + extent)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict overlap test: rectangles sharing only an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        other.left() < self.right()
            && other.right() > self.left()
            && other.top() < self.bottom()
            && other.bottom() > self.top()
    }
}

/// Reject vectors with NaN or infinite components
pub fn ensure_finite(name: &str, v: Vec2) -> Result<Vec2, EngineError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(EngineError::invalid(format!("{} must be finite, got {}", name, v)))
    }
}

/// Reject sizes that are non-finite or negative on either axis
pub fn ensure_size(v: Vec2) -> Result<Vec2, EngineError> {
    let v = ensure_finite("size", v)?;
    if v.x < 0.0 || v.y < 0.0 {
        return Err(EngineError::invalid(format!(
            "size must be non-negative, got {}",
            v
        )));
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0));
        assert_eq!(r.left(), 1.0);
        assert_eq!(r.top(), 2.0);
        assert_eq!(r.right(), 4.0);
        assert_eq!(r.bottom(), 6.0);
    }

    #[test]
    fn test_disjoint_rects_do_not_overlap() {
        let a = Rect::new(Vec2::ZERO, Vec2::ONE);
        let b = Rect::new(Vec2::new(2.0, 2.0), Vec2::ONE);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
    }

    #[test]
    fn test_shared_edge_is_not_overlap() {
        let a = Rect::new(Vec2::ZERO, Vec2::ONE);
        let right = Rect::new(Vec2::new(1.0, 0.0), Vec2::ONE);
        let below = Rect::new(Vec2::new(0.0, 1.0), Vec2::ONE);
        let corner = Rect::new(Vec2::ONE, Vec2::ONE);
        assert!(!a.overlaps(&right));
        assert!(!a.overlaps(&below));
        assert!(!a.overlaps(&corner));
    }

    #[test]
    fn test_partial_and_contained_overlap() {
        let a = Rect::new(Vec2::ZERO, Vec2::new(2.0, 2.0));
        let partial = Rect::new(Vec2::new(1.5, 1.5), Vec2::ONE);
        let inside = Rect::new(Vec2::new(0.5, 0.5), Vec2::new(0.5, 0.5));
        assert!(a.overlaps(&partial));
        assert!(a.overlaps(&inside));
        assert!(inside.overlaps(&a));
        // Same bounds overlap as long as the area is non-zero
        assert!(a.overlaps(&a));
    }

    #[test]
    fn test_ensure_finite_and_size() {
        assert!(ensure_finite("pos", Vec2::new(1.0, -3.0)).is_ok());
        assert!(ensure_finite("pos", Vec2::new(f32::NAN, 0.0)).is_err());
        assert!(ensure_finite("speed", Vec2::new(0.0, f32::INFINITY)).is_err());
        assert!(ensure_size(Vec2::ZERO).is_ok());
        assert!(matches!(
            ensure_size(Vec2::new(-1.0, 1.0)),
            Err(EngineError::InvalidArgument(_))
        ));
    }

    fn exact() -> impl Strategy<Value = Vec2> {
        // Integer-valued components keep float addition exact
        (-10_000i32..10_000, -10_000i32..10_000).prop_map(|(x, y)| Vec2::new(x as f32, y as f32))
    }

    proptest! {
        #[test]
        fn prop_vector_addition_is_componentwise(a in exact(), b in exact()) {
            let sum = a + b;
            prop_assert_eq!(sum.x, a.x + b.x);
            prop_assert_eq!(sum.y, a.y + b.y);
        }

        #[test]
        fn prop_vector_addition_is_associative(a in exact(), b in exact(), c in exact()) {
            prop_assert_eq!((a + b) + c, a + (b + c));
        }

        #[test]
        fn prop_times_one_is_identity(a in exact()) {
            prop_assert_eq!(a * 1.0, a);
        }

        #[test]
        fn prop_overlap_is_symmetric(a in exact(), b in exact(), w in 0i32..50, h in 0i32..50) {
            let size = Vec2::new(w as f32, h as f32);
            let ra = Rect::new(a * 0.01, size * 0.1);
            let rb = Rect::new(b * 0.01, size * 0.1);
            prop_assert_eq!(ra.overlaps(&rb), rb.overlaps(&ra));
        }
    }
}
