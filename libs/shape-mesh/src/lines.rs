//! # Line and Backdrop Geometry
//!
//! Buffers for draft guide edges and for the static backdrop (ground plane
//! and grid) that sits under the drawing.

use glam::DVec2;

use crate::mesh::Mesh;
use crate::outline::Outline;
use crate::triangulate::outline_mesh;

/// A single segment as `[x0, y0, 0, x1, y1, 0]`.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use shape_mesh::segment_points;
///
/// let pts = segment_points(DVec2::new(1.0, 1.0), DVec2::new(2.0, 1.0));
/// assert_eq!(pts, [1.0, 1.0, 0.0, 2.0, 1.0, 0.0]);
/// ```
pub fn segment_points(from: DVec2, to: DVec2) -> [f32; 6] {
    [from.x as f32, from.y as f32, 0.0, to.x as f32, to.y as f32, 0.0]
}

/// Grid line segments covering a centered square of edge `size`, split into
/// `divisions` cells per side. Lies in the XY plane at z = 0.
///
/// Returns `(divisions + 1) * 2` segments as consecutive point pairs.
pub fn grid_lines(size: f64, divisions: u32) -> Vec<f32> {
    let half = size / 2.0;
    let step = size / f64::from(divisions.max(1));
    let mut points = Vec::with_capacity((divisions as usize + 1) * 12);

    for i in 0..=divisions.max(1) {
        let offset = -half + step * f64::from(i);
        points.extend(segment_points(DVec2::new(offset, -half), DVec2::new(offset, half)));
        points.extend(segment_points(DVec2::new(-half, offset), DVec2::new(half, offset)));
    }
    points
}

/// Flat square mesh centered at the origin.
pub fn plane_mesh(size: f64) -> Mesh {
    // A square of finite size always triangulates
    outline_mesh(&Outline::centered_square(size)).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_line_count() {
        let points = grid_lines(10.0, 10);
        // 11 vertical + 11 horizontal segments, 6 floats each
        assert_eq!(points.len(), 22 * 6);
    }

    #[test]
    fn test_grid_spans_plane() {
        let points = grid_lines(10.0, 10);
        let max = points.iter().cloned().fold(f32::MIN, f32::max);
        let min = points.iter().cloned().fold(f32::MAX, f32::min);
        assert_eq!(max, 5.0);
        assert_eq!(min, -5.0);
    }

    #[test]
    fn test_grid_zero_divisions_is_single_cell() {
        assert_eq!(grid_lines(2.0, 0).len(), 4 * 6);
    }

    #[test]
    fn test_plane_mesh() {
        let plane = plane_mesh(10.0);
        assert_eq!(plane.vertex_count(), 4);
        assert_eq!(plane.triangle_count(), 2);
        assert!((plane.area() - 100.0).abs() < 1e-9);
    }
}
