//! WASM-facing entry points for the polygon stamp editor.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The page forwards DOM events to a [`PolygonEditor`],
//! then drains the queued [`SceneCommand`]s once per animation frame and
//! applies them to its three.js scene. Native tests use the `*_internal`
//! helpers to avoid depending on a JS host.
//!
//! ```
//! use shape_editor_wasm::PolygonEditor;
//!
//! let mut editor = PolygonEditor::new_internal(0.0, 0.0, 100.0, 100.0, false).unwrap();
//! for (x, y) in [(60.0, 40.0), (70.0, 40.0), (70.0, 30.0)] {
//!     editor.handle_click(x, y, false);
//! }
//! assert!(editor.complete());
//! assert_eq!(editor.state(), "completed");
//! ```

use config::constants::{ConfigError, EditorConfig, CAMERA_DISTANCE, CAMERA_FAR, CAMERA_NEAR};
use log::{debug, info};
use scene_types::{Color, SceneCommand};
use shape_editor::{
    Backdrop, CanvasRect, CommandRecorder, Editor, Outcome, PointerEvent, Projection, Viewport,
    ViewportError,
};
use thiserror::Error;
use wasm_bindgen::prelude::*;

mod commands;
mod console_log;
mod status;

pub use commands::CommandBatch;
pub use status::EditorSnapshot;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "shape-editor-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Routes editor logs to the browser console at `level`
/// (`"off"`, `"error"`, `"warn"`, `"info"`, `"debug"` or `"trace"`).
///
/// # Errors
/// Returns a JavaScript error for an unknown level name.
#[wasm_bindgen]
pub fn init_logging(level: &str) -> Result<(), JsValue> {
    let filter = console_log::parse_level(level)
        .ok_or_else(|| JsValue::from_str(&format!("unknown log level '{level}'")))?;
    // A second install only changes the level
    if console_log::install(filter).is_ok() {
        info!("console logging enabled at {filter}");
    }
    Ok(())
}

/// Orthographic frustum the host camera must use so that screen mapping
/// matches what is drawn: `[left, right, top, bottom, near, far, z]`.
#[wasm_bindgen]
pub fn camera_frustum() -> Vec<f64> {
    let half = EditorConfig::default().world_half_extent;
    vec![-half, half, half, -half, CAMERA_NEAR, CAMERA_FAR, CAMERA_DISTANCE]
}

/// Everything that can go wrong while building an editor from host input.
#[derive(Debug, Error)]
pub enum HostError {
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid color '{0}', expected #rrggbb")]
    Color(String),
}

impl From<HostError> for JsValue {
    fn from(err: HostError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn parse_color(text: &str) -> Result<u32, HostError> {
    Color::from_hex(text)
        .map(|color| color.0)
        .ok_or_else(|| HostError::Color(text.to_string()))
}

/// One editor bound to one canvas.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const rect = canvas.getBoundingClientRect();
/// // const editor = new PolygonEditor(rect.left, rect.top, rect.width, rect.height, true);
/// // editor.install_backdrop();
/// // canvas.addEventListener("click", (e) => editor.handle_click(e.clientX, e.clientY, false));
/// // completeButton.addEventListener("click", (e) => { e.stopPropagation(); editor.complete(); });
/// ```
#[wasm_bindgen]
pub struct PolygonEditor {
    editor: Editor<CommandRecorder>,
    backdrop: Option<Backdrop>,
}

#[wasm_bindgen]
impl PolygonEditor {
    /// Creates an editor for a canvas at `(left, top)` with the given size.
    /// `raycast` picks ground-plane ray casting over the linear remap.
    ///
    /// # Errors
    /// Returns a JavaScript error when the canvas has no area.
    #[wasm_bindgen(constructor)]
    pub fn new(
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        raycast: bool,
    ) -> Result<PolygonEditor, JsValue> {
        Ok(Self::new_internal(left, top, width, height, raycast)?)
    }

    /// Like the constructor, with `#rrggbb` fill and guide colors.
    ///
    /// # Errors
    /// Returns a JavaScript error for an empty canvas or a malformed color.
    pub fn with_colors(
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        raycast: bool,
        polygon_color: &str,
        guide_color: &str,
    ) -> Result<PolygonEditor, JsValue> {
        let defaults = EditorConfig::default();
        let config = EditorConfig::new(
            defaults.world_half_extent,
            defaults.tolerance,
            parse_color(polygon_color)?,
            parse_color(guide_color)?,
        )
        .map_err(HostError::from)?;
        Ok(Self::build(
            CanvasRect::new(left, top, width, height),
            config,
            raycast,
        )?)
    }

    /// Adds the ground plane and grid. Idempotent.
    pub fn install_backdrop(&mut self) {
        if self.backdrop.is_none() {
            let config = *self.editor.config();
            self.backdrop = Some(Backdrop::install(self.editor.renderer_mut(), &config));
        }
    }

    /// Call after the canvas moved or was resized.
    ///
    /// # Errors
    /// Returns a JavaScript error when the new rect has no area; the old
    /// rect stays in effect.
    pub fn set_canvas(&mut self, left: f64, top: f64, width: f64, height: f64) -> Result<(), JsValue> {
        self.editor
            .viewport_mut()
            .set_canvas(CanvasRect::new(left, top, width, height))
            .map_err(|err| JsValue::from(HostError::from(err)))
    }

    /// Returns true when the click changed the editor.
    pub fn handle_click(&mut self, x: f64, y: f64, on_control: bool) -> bool {
        self.editor.handle_click(pointer(x, y, on_control)).is_applied()
    }

    /// Returns true when a copy was dragged.
    pub fn handle_pointer_move(&mut self, x: f64, y: f64, on_control: bool) -> bool {
        self.editor
            .handle_pointer_move(pointer(x, y, on_control))
            .is_applied()
    }

    pub fn complete(&mut self) -> bool {
        report("complete", self.editor.complete())
    }

    pub fn copy(&mut self) -> bool {
        report("copy", self.editor.copy())
    }

    pub fn reset(&mut self) -> bool {
        report("reset", self.editor.reset())
    }

    /// `"drafting"`, `"completed"` or `"dragging"`.
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> String {
        self.editor.state().to_string()
    }

    pub fn status(&self) -> EditorSnapshot {
        EditorSnapshot::new(self.editor.status(), self.editor.renderer().live_count())
    }

    /// Takes every scene command queued since the previous call.
    pub fn take_commands(&mut self) -> CommandBatch {
        CommandBatch::new(self.take_commands_internal())
    }

    /// Marks a frame as rendered. The host calls this from its animation
    /// loop after applying [`take_commands`](Self::take_commands).
    pub fn frame_rendered(&mut self) {
        use shape_editor::SceneRenderer;
        self.editor.renderer_mut().render_frame();
    }
}

impl PolygonEditor {
    /// Host-only constructor exposing Rust error types directly.
    pub fn new_internal(
        left: f64,
        top: f64,
        width: f64,
        height: f64,
        raycast: bool,
    ) -> Result<Self, HostError> {
        Self::build(
            CanvasRect::new(left, top, width, height),
            EditorConfig::default(),
            raycast,
        )
    }

    fn build(canvas: CanvasRect, config: EditorConfig, raycast: bool) -> Result<Self, HostError> {
        let projection = if raycast {
            Projection::GroundPlaneRay
        } else {
            Projection::LinearRemap
        };
        let viewport = Viewport::for_config(canvas, &config, projection)?;
        Ok(Self {
            editor: Editor::new(CommandRecorder::new(), viewport, config),
            backdrop: None,
        })
    }

    pub fn take_commands_internal(&mut self) -> Vec<SceneCommand> {
        self.editor.renderer_mut().drain()
    }

    pub fn editor(&self) -> &Editor<CommandRecorder> {
        &self.editor
    }
}

fn pointer(x: f64, y: f64, on_control: bool) -> PointerEvent {
    if on_control {
        PointerEvent::control(x, y)
    } else {
        PointerEvent::canvas(x, y)
    }
}

fn report(command: &str, outcome: Outcome) -> bool {
    if let Outcome::Ignored(reason) = outcome {
        debug!("{command} ignored: {reason:?}");
    }
    outcome.is_applied()
}
