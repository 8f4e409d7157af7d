use super::*;
use approx::assert_abs_diff_eq;

fn outline(points: &[(f64, f64)]) -> Outline {
    Outline::new(points.iter().map(|&(x, y)| DVec2::new(x, y)).collect())
}

fn assert_all_ccw(mesh: &Mesh) {
    for tri in mesh.triangles() {
        let [a, b, c] = tri.map(|i| mesh.vertices()[i as usize].truncate());
        assert!((b - a).perp_dot(c - a) > 0.0, "triangle {tri:?} is not CCW");
    }
}

#[test]
fn test_single_triangle() {
    let mesh = outline_mesh(&outline(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0)])).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 1);
    assert!(mesh.validate());
}

#[test]
fn test_vertices_keep_outline_order() {
    let src = outline(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0)]);
    let mesh = outline_mesh(&src).unwrap();
    for (v, p) in mesh.vertices().iter().zip(&src.points) {
        assert_eq!(v.truncate(), *p);
        assert_eq!(v.z, 0.0);
    }
}

#[test]
fn test_square() {
    let mesh = outline_mesh(&Outline::centered_square(2.0)).unwrap();
    assert_eq!(mesh.triangle_count(), 2);
    assert_abs_diff_eq!(mesh.area(), 4.0, epsilon = 1e-12);
}

#[test]
fn test_clockwise_input_produces_ccw_triangles() {
    let mesh = outline_mesh(&outline(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)])).unwrap();
    assert_eq!(mesh.triangle_count(), 2);
    assert_all_ccw(&mesh);
}

#[test]
fn test_concave_l_shape() {
    // Area 3: a 2x2 square missing its top-right unit cell
    let src = outline(&[
        (0.0, 0.0),
        (2.0, 0.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 2.0),
        (0.0, 2.0),
    ]);
    let mesh = outline_mesh(&src).unwrap();
    assert_eq!(mesh.triangle_count(), 4);
    assert!(mesh.validate());
    assert_all_ccw(&mesh);
    assert_abs_diff_eq!(mesh.area(), 3.0, epsilon = 1e-12);
}

#[test]
fn test_area_matches_shoelace_for_arrow() {
    let src = outline(&[(0.0, 0.0), (4.0, 2.0), (0.0, 4.0), (1.0, 2.0)]);
    let mesh = outline_mesh(&src).unwrap();
    assert_abs_diff_eq!(mesh.area(), src.signed_area_2x().abs() / 2.0, epsilon = 1e-12);
}

#[test]
fn test_collinear_points_yield_no_triangles() {
    let mesh = outline_mesh(&outline(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)])).unwrap();
    assert_eq!(mesh.vertex_count(), 3);
    assert_eq!(mesh.triangle_count(), 0);
}

#[test]
fn test_self_intersecting_bowtie_terminates() {
    let src = outline(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]);
    let mesh = outline_mesh(&src).unwrap();
    assert!(mesh.triangle_count() <= 2);
    assert!(mesh.triangles().iter().flatten().all(|&i| i < 4));
}

#[test]
fn test_too_few_points() {
    let err = outline_mesh(&outline(&[(0.0, 0.0), (1.0, 0.0)])).unwrap_err();
    assert!(matches!(err, MeshError::DegenerateGeometry { .. }));
}

#[test]
fn test_non_finite_point() {
    let err = outline_mesh(&outline(&[(0.0, 0.0), (f64::NAN, 0.0), (1.0, 1.0)])).unwrap_err();
    assert_eq!(err, MeshError::NonFinite { index: 1 });
}
