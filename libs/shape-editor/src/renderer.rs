//! The rendering collaborator the editor drives.

use scene_types::{Color, MeshId, MeshKind};
use shape_mesh::{segment_points, Mesh};

use crate::Point2D;

/// Scene operations the editor needs from a rendering backend.
///
/// Created objects start outside the scene; `add_to_scene` makes them
/// visible. `remove_from_scene` must also release the object's geometry and
/// material, so every id is removed at most once.
pub trait SceneRenderer {
    fn create_mesh(&mut self, kind: MeshKind, mesh: &Mesh, color: Color) -> MeshId;

    /// `points` holds consecutive `[x, y, z]` pairs, one pair per segment.
    fn create_lines(&mut self, kind: MeshKind, points: &[f32], color: Color) -> MeshId;

    fn add_to_scene(&mut self, id: MeshId);

    /// Translates an object within the ground plane.
    fn set_position(&mut self, id: MeshId, offset: Point2D);

    fn remove_from_scene(&mut self, id: MeshId);

    /// Paints the current scene. Hosts call this on their own cadence; the
    /// editor never does.
    fn render_frame(&mut self) {}

    fn create_outline_mesh(&mut self, mesh: &Mesh, color: Color) -> MeshId {
        self.create_mesh(MeshKind::Outline, mesh, color)
    }

    fn create_guide_line(&mut self, from: Point2D, to: Point2D, color: Color) -> MeshId {
        self.create_lines(MeshKind::GuideLine, &segment_points(from, to), color)
    }
}
