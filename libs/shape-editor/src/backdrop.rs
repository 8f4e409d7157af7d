//! Static scene content under the drawing: a white ground plane and a grid.
//!
//! Installed once by the host. Reset leaves it alone.

use config::constants::{EditorConfig, GRID_COLOR, GRID_DIVISIONS, PLANE_COLOR};
use scene_types::{Color, MeshId, MeshKind};
use shape_mesh::{grid_lines, plane_mesh};

use crate::renderer::SceneRenderer;

#[derive(Debug)]
#[must_use = "the backdrop owns scene objects and must be removed"]
pub struct Backdrop {
    plane: MeshId,
    grid: MeshId,
}

impl Backdrop {
    /// Plane and grid span the same ground the viewport casts rays onto.
    pub fn install<R: SceneRenderer>(renderer: &mut R, config: &EditorConfig) -> Self {
        let size = config.ground_half_size() * 2.0;
        let plane = renderer.create_mesh(
            MeshKind::Plane,
            &plane_mesh(size),
            Color::rgb(PLANE_COLOR),
        );
        renderer.add_to_scene(plane);

        let grid = renderer.create_lines(
            MeshKind::Grid,
            &grid_lines(size, GRID_DIVISIONS),
            Color::rgb(GRID_COLOR),
        );
        renderer.add_to_scene(grid);

        Self { plane, grid }
    }

    pub fn ids(&self) -> [MeshId; 2] {
        [self.plane, self.grid]
    }

    pub fn remove<R: SceneRenderer>(self, renderer: &mut R) {
        renderer.remove_from_scene(self.grid);
        renderer.remove_from_scene(self.plane);
    }
}
