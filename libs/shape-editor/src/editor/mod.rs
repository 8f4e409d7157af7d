//! # Interaction State Machine
//!
//! ```text
//!            click (canvas)          copy                 move
//!           ┌──────────────┐   ┌──────────────┐    ┌──────────────┐
//!           ▼              │   │              ▼    ▼              │
//!       Drafting ──complete──▶ Completed ◀──click── Dragging ─────┘
//!           ▲                      │                   │
//!           └──────── reset ───────┴───────────────────┘
//! ```
//!
//! The state is never stored; it is read off the entities the editor holds,
//! so it cannot disagree with them:
//!
//! - `Dragging` iff a moving copy exists
//! - `Completed` iff a polygon exists and nothing is being dragged
//! - `Drafting` otherwise
//!
//! Invalid commands are ignored and reported through [`Outcome`]; nothing
//! here fails.

use std::fmt;

use config::constants::{EditorConfig, MIN_POLYGON_VERTICES};
use log::{debug, trace, warn};
use scene_types::Color;

use crate::draft::DraftPath;
use crate::input::PointerEvent;
use crate::polygon::{PlacedCopy, Polygon, PreparedShape};
use crate::renderer::SceneRenderer;
use crate::viewport::Viewport;
use crate::Point2D;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    Drafting,
    Completed,
    Dragging,
}

impl EditorState {
    pub fn as_str(self) -> &'static str {
        match self {
            EditorState::Drafting => "drafting",
            EditorState::Completed => "completed",
            EditorState::Dragging => "dragging",
        }
    }
}

impl fmt::Display for EditorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why a command left the editor untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// The pointer event came from a UI control.
    ControlTarget,
    /// Canvas clicks do nothing once a polygon is completed.
    AlreadyCompleted,
    /// Completion needs more draft vertices.
    TooFewVertices { have: usize },
    /// Copy needs a completed polygon and no copy in flight.
    NotCompleted,
    /// Pointer moved while nothing was being dragged.
    NotDragging,
    /// The outline could not be triangulated.
    RejectedOutline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command took effect; carries the resulting state.
    Applied(EditorState),
    Ignored(IgnoreReason),
}

impl Outcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied(_))
    }
}

/// Counts a host can show without borrowing the editor's entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorStatus {
    pub state: EditorState,
    pub draft_len: usize,
    pub placed_count: usize,
    pub has_polygon: bool,
}

pub struct Editor<R: SceneRenderer> {
    renderer: R,
    viewport: Viewport,
    config: EditorConfig,
    draft: DraftPath,
    polygon: Option<Polygon>,
    placed: Vec<PlacedCopy>,
    moving: Option<Polygon>,
    last_pointer: Option<Point2D>,
}

impl<R: SceneRenderer> Editor<R> {
    /// Empty editor in the `Drafting` state.
    pub fn new(renderer: R, viewport: Viewport, config: EditorConfig) -> Self {
        Self {
            renderer,
            viewport,
            config,
            draft: DraftPath::new(),
            polygon: None,
            placed: Vec::new(),
            moving: None,
            last_pointer: None,
        }
    }

    pub fn state(&self) -> EditorState {
        match (&self.moving, &self.polygon) {
            (Some(_), _) => EditorState::Dragging,
            (None, Some(_)) => EditorState::Completed,
            (None, None) => EditorState::Drafting,
        }
    }

    pub fn status(&self) -> EditorStatus {
        EditorStatus {
            state: self.state(),
            draft_len: self.draft.len(),
            placed_count: self.placed.len(),
            has_polygon: self.polygon.is_some(),
        }
    }

    pub fn draft(&self) -> &[Point2D] {
        self.draft.vertices()
    }

    pub fn guide_edge_count(&self) -> usize {
        self.draft.guide_count()
    }

    pub fn polygon(&self) -> Option<&Polygon> {
        self.polygon.as_ref()
    }

    pub fn placed_copies(&self) -> &[PlacedCopy] {
        &self.placed
    }

    pub fn moving_copy(&self) -> Option<&Polygon> {
        self.moving.as_ref()
    }

    /// World position of the most recent canvas pointer event.
    pub fn last_pointer(&self) -> Option<Point2D> {
        self.last_pointer
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    fn polygon_color(&self) -> Color {
        Color::rgb(self.config.polygon_color)
    }

    fn guide_color(&self) -> Color {
        Color::rgb(self.config.guide_color)
    }

    fn track_pointer(&mut self, event: &PointerEvent) -> Point2D {
        let world = self.viewport.screen_to_world(event.position);
        self.last_pointer = Some(world);
        world
    }

    /// Canvas click: confirms a drag in progress, otherwise adds a draft vertex.
    pub fn handle_click(&mut self, event: PointerEvent) -> Outcome {
        if event.is_on_control() {
            return Outcome::Ignored(IgnoreReason::ControlTarget);
        }
        let world = self.track_pointer(&event);

        // Confirming a drag takes priority over drafting
        if let Some(copy) = self.moving.take() {
            debug!("placed copy {} at {}", copy.mesh_id(), copy.center());
            self.placed.push(PlacedCopy::new(copy));
            return Outcome::Applied(self.state());
        }

        match self.state() {
            EditorState::Drafting => {
                let color = self.guide_color();
                self.draft.push(&mut self.renderer, world, color);
                debug!("draft vertex {} at {world}", self.draft.len());
                Outcome::Applied(EditorState::Drafting)
            }
            _ => Outcome::Ignored(IgnoreReason::AlreadyCompleted),
        }
    }

    /// Pointer motion: remembers the position and drags the moving copy.
    pub fn handle_pointer_move(&mut self, event: PointerEvent) -> Outcome {
        if event.is_on_control() {
            return Outcome::Ignored(IgnoreReason::ControlTarget);
        }
        let world = self.track_pointer(&event);

        match self.moving.as_mut() {
            Some(copy) => {
                copy.move_center_to(&mut self.renderer, world);
                trace!("dragging {} to {world}", copy.mesh_id());
                Outcome::Applied(EditorState::Dragging)
            }
            None => Outcome::Ignored(IgnoreReason::NotDragging),
        }
    }

    /// Freezes the draft into the polygon, replacing any previous one.
    pub fn complete(&mut self) -> Outcome {
        let have = self.draft.len();
        if have < MIN_POLYGON_VERTICES {
            debug!("complete ignored: {have} draft vertices");
            return Outcome::Ignored(IgnoreReason::TooFewVertices { have });
        }

        let shape = match PreparedShape::new(self.draft.vertices().to_vec()) {
            Ok(shape) => shape,
            Err(err) => {
                warn!("complete ignored: {err}");
                return Outcome::Ignored(IgnoreReason::RejectedOutline);
            }
        };

        if let Some(previous) = self.polygon.take() {
            debug!("replacing polygon {}", previous.mesh_id());
            previous.release(&mut self.renderer);
        }
        let color = self.polygon_color();
        let polygon = Polygon::upload(&mut self.renderer, shape, color);
        debug!("completed polygon {} with {have} vertices", polygon.mesh_id());
        self.polygon = Some(polygon);
        self.draft.clear(&mut self.renderer);

        Outcome::Applied(EditorState::Completed)
    }

    /// Starts dragging a fresh copy of the completed polygon, centered on the
    /// last pointer position (the world origin if the pointer was never seen).
    pub fn copy(&mut self) -> Outcome {
        let Some(polygon) = self.polygon.as_ref().filter(|_| self.moving.is_none()) else {
            return Outcome::Ignored(IgnoreReason::NotCompleted);
        };

        let mut copy = polygon.duplicate(&mut self.renderer);
        let anchor = self.last_pointer.unwrap_or(Point2D::ZERO);
        copy.move_center_to(&mut self.renderer, anchor);
        debug!("copy {} picked up at {anchor}", copy.mesh_id());
        self.moving = Some(copy);

        Outcome::Applied(EditorState::Dragging)
    }

    /// Disposes everything the editor created and returns to `Drafting`.
    pub fn reset(&mut self) -> Outcome {
        if let Some(polygon) = self.polygon.take() {
            polygon.release(&mut self.renderer);
        }
        for copy in self.placed.drain(..) {
            copy.release(&mut self.renderer);
        }
        if let Some(copy) = self.moving.take() {
            copy.release(&mut self.renderer);
        }
        self.draft.clear(&mut self.renderer);
        debug!("reset");

        Outcome::Applied(EditorState::Drafting)
    }
}

impl<R: SceneRenderer> fmt::Debug for Editor<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Editor")
            .field("state", &self.state())
            .field("draft", &self.draft)
            .field("polygon", &self.polygon)
            .field("placed", &self.placed.len())
            .field("moving", &self.moving)
            .field("last_pointer", &self.last_pointer)
            .finish()
    }
}
