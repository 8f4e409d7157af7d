//! # Outlines
//!
//! A closed 2D loop of points in world-plane coordinates, plus its
//! axis-aligned bounds.

use glam::DVec2;

/// A closed 2D outline.
///
/// The last point connects back to the first; the loop is not repeated.
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    /// Boundary vertices in insertion order (either winding)
    pub points: Vec<DVec2>,
}

impl Outline {
    /// Creates an outline from boundary vertices.
    ///
    /// # Example
    ///
    /// ```rust
    /// use glam::DVec2;
    /// use shape_mesh::Outline;
    ///
    /// let tri = Outline::new(vec![DVec2::ZERO, DVec2::X, DVec2::Y]);
    /// assert_eq!(tri.vertex_count(), 3);
    /// ```
    pub fn new(points: Vec<DVec2>) -> Self {
        Self { points }
    }

    /// Creates a square outline centered at the origin.
    pub fn centered_square(size: f64) -> Self {
        let h = size / 2.0;
        Self::new(vec![
            DVec2::new(-h, -h),
            DVec2::new(h, -h),
            DVec2::new(h, h),
            DVec2::new(-h, h),
        ])
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Twice the signed area (shoelace). Positive for counter-clockwise loops.
    pub fn signed_area_2x(&self) -> f64 {
        let n = self.points.len();
        (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.perp_dot(b)
            })
            .sum()
    }

    /// Axis-aligned bounds, `None` for an empty outline.
    pub fn bounds(&self) -> Option<Bounds2> {
        let (first, rest) = self.points.split_first()?;
        let (min, max) = rest
            .iter()
            .fold((*first, *first), |(min, max), p| (min.min(*p), max.max(*p)));
        Some(Bounds2 { min, max })
    }
}

/// Axis-aligned bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    pub min: DVec2,
    pub max: DVec2,
}

impl Bounds2 {
    /// Center of the rectangle. This is the drag anchor of a polygon, not the
    /// vertex centroid.
    pub fn center(&self) -> DVec2 {
        (self.min + self.max) * 0.5
    }
}
