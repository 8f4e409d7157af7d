//! # Shape Editor
//!
//! Interaction core of the polygon stamp editor: the user clicks out the
//! vertices of an outline, completes it into a filled polygon, then stamps
//! copies of it around the canvas by dragging and clicking.
//!
//! ## Architecture
//!
//! ```text
//! pointer / button events → Editor (state machine) → SceneRenderer → host scene
//! ```
//!
//! The editor owns all of its state and never touches a display. Scene
//! changes go through the [`SceneRenderer`] trait; [`CommandRecorder`] is the
//! implementation used by the WASM host (and by tests), which queues
//! [`SceneCommand`]s for the browser to apply once per animation frame.
//!
//! ## Usage
//!
//! ```rust
//! use shape_editor::{
//!     CanvasRect, CommandRecorder, Editor, EditorState, PointerEvent, Projection, Viewport,
//! };
//! use config::constants::EditorConfig;
//!
//! let config = EditorConfig::default();
//! let canvas = CanvasRect::new(0.0, 0.0, 100.0, 100.0);
//! let viewport = Viewport::for_config(canvas, &config, Projection::LinearRemap).unwrap();
//! let mut editor = Editor::new(CommandRecorder::new(), viewport, config);
//!
//! for (x, y) in [(60.0, 40.0), (70.0, 40.0), (70.0, 30.0)] {
//!     editor.handle_click(PointerEvent::canvas(x, y));
//! }
//! editor.complete();
//! assert_eq!(editor.state(), EditorState::Completed);
//! ```

pub mod backdrop;
pub mod draft;
pub mod editor;
pub mod input;
pub mod polygon;
pub mod recorder;
pub mod renderer;
pub mod viewport;

pub use backdrop::Backdrop;
pub use draft::DraftPath;
pub use editor::{Editor, EditorState, EditorStatus, IgnoreReason, Outcome};
pub use input::{PointerEvent, PointerTarget};
pub use polygon::{PlacedCopy, Polygon, PreparedShape};
pub use recorder::CommandRecorder;
pub use renderer::SceneRenderer;
pub use viewport::{CanvasRect, GroundPlane, OrthoCamera, Projection, Viewport, ViewportError};

pub use scene_types::{Color, MeshId, MeshKind, SceneCommand};

/// A vertex in world-plane coordinates.
pub type Point2D = glam::DVec2;
