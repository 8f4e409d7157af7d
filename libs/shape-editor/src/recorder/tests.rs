use super::*;
use glam::DVec2;
use shape_mesh::{outline_mesh, Outline};

fn square() -> Mesh {
    outline_mesh(&Outline::centered_square(1.0)).unwrap()
}

#[test]
fn ids_are_unique_and_tracked() {
    let mut rec = CommandRecorder::new();
    let a = rec.create_outline_mesh(&square(), Color(0xffa500));
    let b = rec.create_guide_line(DVec2::ZERO, DVec2::X, Color(0x00ff00));
    assert_ne!(a, b);
    assert_eq!(rec.live_count(), 2);
    assert_eq!(rec.created_count(), 2);
    assert!(!rec.is_in_scene(a));
}

#[test]
fn create_mesh_queues_buffers() {
    let mut rec = CommandRecorder::new();
    let id = rec.create_outline_mesh(&square(), Color(0xffa500));
    match &rec.pending[0] {
        SceneCommand::CreateMesh {
            id: cmd_id,
            kind,
            vertices,
            indices,
            color,
        } => {
            assert_eq!(*cmd_id, id);
            assert_eq!(*kind, MeshKind::Outline);
            assert_eq!(vertices.len(), 12);
            assert_eq!(indices.len(), 6);
            assert_eq!(*color, Color(0xffa500));
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn guide_line_has_one_segment() {
    let mut rec = CommandRecorder::new();
    rec.create_guide_line(DVec2::new(1.0, 1.0), DVec2::new(2.0, 1.0), Color(0x00ff00));
    assert_eq!(
        rec.drain(),
        vec![SceneCommand::CreateLines {
            id: MeshId(0),
            kind: MeshKind::GuideLine,
            points: vec![1.0, 1.0, 0.0, 2.0, 1.0, 0.0],
            color: Color(0x00ff00),
        }]
    );
    assert!(rec.pending.is_empty());
}

#[test]
fn add_is_idempotent() {
    let mut rec = CommandRecorder::new();
    let id = rec.create_outline_mesh(&square(), Color(0));
    rec.drain();
    rec.add_to_scene(id);
    rec.add_to_scene(id);
    assert_eq!(rec.drain(), vec![SceneCommand::Add { id }]);
    assert_eq!(rec.scene_len(), 1);
}

#[test]
fn remove_releases_once() {
    let mut rec = CommandRecorder::new();
    let id = rec.create_outline_mesh(&square(), Color(0));
    rec.add_to_scene(id);
    rec.remove_from_scene(id);
    rec.remove_from_scene(id);
    assert_eq!(rec.released_count(), 1);
    assert_eq!(rec.live_count(), 0);
    assert!(!rec.is_in_scene(id));
    assert_eq!(
        rec.pending.iter().filter(|c| matches!(c, SceneCommand::Remove { .. })).count(),
        1
    );
}

#[test]
fn released_ids_are_not_reused_or_moved() {
    let mut rec = CommandRecorder::new();
    let id = rec.create_outline_mesh(&square(), Color(0));
    rec.remove_from_scene(id);
    rec.drain();

    rec.set_position(id, DVec2::ONE);
    rec.add_to_scene(id);
    assert!(rec.pending.is_empty());

    let next = rec.create_outline_mesh(&square(), Color(0));
    assert_ne!(next, id);
}

#[test]
fn render_frame_counts_frames() {
    let mut rec = CommandRecorder::new();
    rec.render_frame();
    rec.render_frame();
    assert_eq!(rec.frame_count(), 2);
    assert!(rec.pending.is_empty());
}
