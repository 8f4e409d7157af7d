//! # Command Recorder
//!
//! A [`SceneRenderer`] that queues [`SceneCommand`]s instead of drawing.
//! The WASM host drains the queue once per animation frame and replays it
//! against three.js. The recorder also keeps the resource ledger (which ids
//! are alive, which are in the scene) that leak checks are written against.

use std::collections::BTreeSet;

use log::warn;
use scene_types::{Color, MeshId, MeshKind, SceneCommand};
use shape_mesh::Mesh;

use crate::renderer::SceneRenderer;
use crate::Point2D;

#[derive(Debug, Default)]
pub struct CommandRecorder {
    next_id: u32,
    pending: Vec<SceneCommand>,
    live: BTreeSet<MeshId>,
    in_scene: BTreeSet<MeshId>,
    created: usize,
    released: usize,
    frames: u64,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes every command queued since the last drain, oldest first.
    pub fn drain(&mut self) -> Vec<SceneCommand> {
        std::mem::take(&mut self.pending)
    }

    /// Resources created and not yet released.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }

    pub fn created_count(&self) -> usize {
        self.created
    }

    pub fn released_count(&self) -> usize {
        self.released
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn is_live(&self, id: MeshId) -> bool {
        self.live.contains(&id)
    }

    pub fn is_in_scene(&self, id: MeshId) -> bool {
        self.in_scene.contains(&id)
    }

    pub fn scene_len(&self) -> usize {
        self.in_scene.len()
    }

    fn allocate(&mut self) -> MeshId {
        let id = MeshId(self.next_id);
        self.next_id += 1;
        self.live.insert(id);
        self.created += 1;
        id
    }
}

impl SceneRenderer for CommandRecorder {
    fn create_mesh(&mut self, kind: MeshKind, mesh: &Mesh, color: Color) -> MeshId {
        let id = self.allocate();
        self.pending.push(SceneCommand::CreateMesh {
            id,
            kind,
            vertices: mesh.vertices_f32(),
            indices: mesh.indices_u32(),
            color,
        });
        id
    }

    fn create_lines(&mut self, kind: MeshKind, points: &[f32], color: Color) -> MeshId {
        let id = self.allocate();
        self.pending.push(SceneCommand::CreateLines {
            id,
            kind,
            points: points.to_vec(),
            color,
        });
        id
    }

    fn add_to_scene(&mut self, id: MeshId) {
        if !self.live.contains(&id) {
            warn!("add_to_scene: {id} was never created or already released");
            return;
        }
        if self.in_scene.insert(id) {
            self.pending.push(SceneCommand::Add { id });
        }
    }

    fn set_position(&mut self, id: MeshId, offset: Point2D) {
        if !self.live.contains(&id) {
            warn!("set_position: {id} is not live");
            return;
        }
        self.pending.push(SceneCommand::SetPosition {
            id,
            x: offset.x,
            y: offset.y,
        });
    }

    fn remove_from_scene(&mut self, id: MeshId) {
        if !self.live.remove(&id) {
            warn!("remove_from_scene: {id} released twice");
            return;
        }
        self.in_scene.remove(&id);
        self.released += 1;
        self.pending.push(SceneCommand::Remove { id });
    }

    fn render_frame(&mut self) {
        self.frames += 1;
    }
}

#[cfg(test)]
mod tests;
