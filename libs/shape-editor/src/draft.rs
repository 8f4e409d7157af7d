//! The in-progress outline and its guide edges.

use scene_types::{Color, MeshId};

use crate::renderer::SceneRenderer;
use crate::Point2D;

/// Draft vertices in click order, plus one guide edge per consecutive pair.
#[derive(Debug, Default)]
pub struct DraftPath {
    vertices: Vec<Point2D>,
    guides: Vec<MeshId>,
}

impl DraftPath {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[Point2D] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn guide_count(&self) -> usize {
        self.guides.len()
    }

    /// Appends a vertex and draws the edge from the previous one.
    pub fn push<R: SceneRenderer>(&mut self, renderer: &mut R, point: Point2D, guide_color: Color) {
        if let Some(&last) = self.vertices.last() {
            let guide = renderer.create_guide_line(last, point, guide_color);
            renderer.add_to_scene(guide);
            self.guides.push(guide);
        }
        self.vertices.push(point);
    }

    /// Disposes every guide edge and forgets the vertices.
    pub fn clear<R: SceneRenderer>(&mut self, renderer: &mut R) {
        for guide in self.guides.drain(..) {
            renderer.remove_from_scene(guide);
        }
        self.vertices.clear();
    }
}
