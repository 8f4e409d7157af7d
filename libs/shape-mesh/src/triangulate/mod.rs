//! # Outline Triangulation
//!
//! Ear clipping for simple (non self-intersecting) outlines of either
//! winding. The resulting triangles are always counter-clockwise so they
//! face the camera looking down -Z.
//!
//! Outlines are not validated. A self-intersecting loop still terminates:
//! once no ear can be found, flat corners are dropped and whatever remains
//! is fanned from its first vertex.

use config::constants::{AREA_EPSILON, MIN_POLYGON_VERTICES};
use glam::DVec2;

use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::outline::Outline;

/// Builds the flat fill mesh of an outline at z = 0.
///
/// Vertices keep the outline order, so vertex `i` of the mesh is point `i`
/// of the outline.
///
/// # Errors
///
/// Fails when the outline has fewer than three points or a non-finite
/// coordinate. Collinear outlines succeed with zero triangles.
///
/// # Example
///
/// ```rust
/// use glam::DVec2;
/// use shape_mesh::{outline_mesh, Outline};
///
/// let tri = Outline::new(vec![DVec2::ZERO, DVec2::X, DVec2::Y]);
/// let mesh = outline_mesh(&tri).unwrap();
/// assert_eq!(mesh.indices_u32(), vec![0, 1, 2]);
/// ```
pub fn outline_mesh(outline: &Outline) -> Result<Mesh, MeshError> {
    let n = outline.vertex_count();
    if n < MIN_POLYGON_VERTICES {
        return Err(MeshError::degenerate(format!(
            "outline needs {MIN_POLYGON_VERTICES} vertices, got {n}"
        )));
    }
    if let Some(index) = outline.points.iter().position(|p| !p.is_finite()) {
        return Err(MeshError::NonFinite { index });
    }

    let mut mesh = Mesh::with_capacity(n, n - 2);
    for point in &outline.points {
        mesh.add_vertex(point.extend(0.0));
    }
    for [a, b, c] in ear_clip(&outline.points) {
        mesh.add_triangle(a, b, c);
    }
    Ok(mesh)
}

/// Triangulates a closed loop, returning counter-clockwise index triples.
pub fn ear_clip(points: &[DVec2]) -> Vec<[u32; 3]> {
    if points.len() < 3 {
        return Vec::new();
    }

    let mut ring: Vec<usize> = (0..points.len()).collect();
    if Outline::new(points.to_vec()).signed_area_2x() < 0.0 {
        ring.reverse();
    }

    let mut triangles = Vec::with_capacity(points.len() - 2);
    while ring.len() > 3 {
        if let Some(i) = find_ear(points, &ring) {
            triangles.push(corner_indices(&ring, i));
            ring.remove(i);
            continue;
        }

        match (0..ring.len()).find(|&i| corner_turn(points, &ring, i).abs() <= AREA_EPSILON) {
            Some(flat) => {
                ring.remove(flat);
            }
            None => {
                fan(points, &ring, &mut triangles);
                return triangles;
            }
        }
    }

    if corner_turn(points, &ring, 1) > AREA_EPSILON {
        triangles.push(corner_indices(&ring, 1));
    }
    triangles
}

fn neighbours(ring: &[usize], i: usize) -> (usize, usize, usize) {
    let n = ring.len();
    (ring[(i + n - 1) % n], ring[i], ring[(i + 1) % n])
}

fn corner_indices(ring: &[usize], i: usize) -> [u32; 3] {
    let (a, b, c) = neighbours(ring, i);
    [a as u32, b as u32, c as u32]
}

/// Twice the signed area of the corner at `ring[i]`; positive when convex.
fn corner_turn(points: &[DVec2], ring: &[usize], i: usize) -> f64 {
    let (a, b, c) = neighbours(ring, i);
    (points[b] - points[a]).perp_dot(points[c] - points[b])
}

fn find_ear(points: &[DVec2], ring: &[usize]) -> Option<usize> {
    (0..ring.len()).find(|&i| {
        if corner_turn(points, ring, i) <= AREA_EPSILON {
            return false;
        }
        let (a, b, c) = neighbours(ring, i);
        let (pa, pb, pc) = (points[a], points[b], points[c]);
        ring.iter()
            .filter(|&&k| k != a && k != b && k != c)
            .map(|&k| points[k])
            .filter(|&p| p != pa && p != pb && p != pc)
            .all(|p| !point_in_triangle(p, pa, pb, pc))
    })
}

fn fan(points: &[DVec2], ring: &[usize], triangles: &mut Vec<[u32; 3]>) {
    let root = ring[0];
    for pair in ring[1..].windows(2) {
        let (b, c) = (pair[0], pair[1]);
        if (points[b] - points[root]).perp_dot(points[c] - points[root]).abs() > AREA_EPSILON {
            triangles.push([root as u32, b as u32, c as u32]);
        }
    }
}

/// Inclusive test against a counter-clockwise triangle.
fn point_in_triangle(p: DVec2, a: DVec2, b: DVec2, c: DVec2) -> bool {
    (b - a).perp_dot(p - a) >= 0.0 && (c - b).perp_dot(p - b) >= 0.0 && (a - c).perp_dot(p - c) >= 0.0
}

#[cfg(test)]
mod tests;
