//! Completed polygons and their placed copies.
//!
//! A [`Polygon`] owns exactly one renderer object. It is never dropped while
//! that object is alive: owners hand it back through [`Polygon::release`].

use std::sync::Arc;

use scene_types::{Color, MeshId};
use shape_mesh::{outline_mesh, Bounds2, Mesh, MeshError, Outline};

use crate::renderer::SceneRenderer;
use crate::Point2D;

/// Vertices and triangulation shared by a polygon and all of its clones.
#[derive(Debug)]
struct Shape {
    vertices: Vec<Point2D>,
    bounds: Bounds2,
    mesh: Mesh,
}

/// Triangulated outline that has not been uploaded yet.
#[derive(Debug)]
pub struct PreparedShape(Arc<Shape>);

impl PreparedShape {
    /// Triangulates `vertices` without touching any renderer.
    pub fn new(vertices: Vec<Point2D>) -> Result<Self, MeshError> {
        let outline = Outline::new(vertices);
        let mesh = outline_mesh(&outline)?;
        let bounds = outline
            .bounds()
            .ok_or_else(|| MeshError::degenerate("outline has no vertices"))?;
        Ok(Self(Arc::new(Shape {
            vertices: outline.points,
            bounds,
            mesh,
        })))
    }
}

#[derive(Debug)]
#[must_use = "a polygon owns a scene object and must be released"]
pub struct Polygon {
    shape: Arc<Shape>,
    color: Color,
    mesh_id: MeshId,
    offset: Point2D,
}

impl Polygon {
    /// Uploads a prepared shape and adds it to the scene.
    pub fn upload<R: SceneRenderer>(renderer: &mut R, shape: PreparedShape, color: Color) -> Self {
        Self::instantiate(renderer, shape.0, color)
    }

    fn instantiate<R: SceneRenderer>(renderer: &mut R, shape: Arc<Shape>, color: Color) -> Self {
        let mesh_id = renderer.create_outline_mesh(&shape.mesh, color);
        renderer.add_to_scene(mesh_id);
        Self {
            shape,
            color,
            mesh_id,
            offset: Point2D::ZERO,
        }
    }

    /// Same vertices and color, new scene object, untranslated.
    pub fn duplicate<R: SceneRenderer>(&self, renderer: &mut R) -> Self {
        Self::instantiate(renderer, Arc::clone(&self.shape), self.color)
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.shape.vertices
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn mesh_id(&self) -> MeshId {
        self.mesh_id
    }

    pub fn offset(&self) -> Point2D {
        self.offset
    }

    /// Bounds in world coordinates, translation included.
    pub fn bounds(&self) -> Bounds2 {
        Bounds2 {
            min: self.shape.bounds.min + self.offset,
            max: self.shape.bounds.max + self.offset,
        }
    }

    /// Bounding-box center, the point that stays under the cursor while dragging.
    pub fn center(&self) -> Point2D {
        self.bounds().center()
    }

    pub fn move_center_to<R: SceneRenderer>(&mut self, renderer: &mut R, target: Point2D) {
        self.offset = target - self.shape.bounds.center();
        renderer.set_position(self.mesh_id, self.offset);
    }

    /// Removes the scene object and frees its geometry and material.
    pub fn release<R: SceneRenderer>(self, renderer: &mut R) {
        renderer.remove_from_scene(self.mesh_id);
    }
}

/// A copy whose placement was confirmed with a click.
#[derive(Debug)]
#[must_use = "a placed copy owns a scene object and must be released"]
pub struct PlacedCopy {
    polygon: Polygon,
}

impl PlacedCopy {
    pub fn new(polygon: Polygon) -> Self {
        Self { polygon }
    }

    pub fn polygon(&self) -> &Polygon {
        &self.polygon
    }

    pub fn center(&self) -> Point2D {
        self.polygon.center()
    }

    pub fn release<R: SceneRenderer>(self, renderer: &mut R) {
        self.polygon.release(renderer);
    }
}
