//! # Screen to World Mapping
//!
//! Converts client pixel coordinates into points on the ground plane seen by
//! an orthographic camera looking down -Z.
//!
//! Two projections are available. They agree everywhere on the ground plane;
//! they only differ for pointers outside it, where the ray cast misses and
//! falls back to the world origin. A viewport uses one projection for every
//! event, so drafted vertices and dragged copies share a coordinate system.

use config::constants::{
    EditorConfig, CAMERA_DISTANCE, CAMERA_FAR, CAMERA_NEAR, EPSILON, GROUND_PLANE_SIZE,
    GROUND_PLANE_Z,
};
use glam::{DVec2, DVec3};
use thiserror::Error;

use crate::Point2D;

/// Errors raised when a viewport cannot map coordinates.
#[derive(Debug, Error, PartialEq)]
pub enum ViewportError {
    #[error("canvas must have a positive size, got {width}x{height}")]
    EmptyCanvas { width: f64, height: f64 },

    #[error("camera frustum is degenerate: {0}")]
    DegenerateCamera(String),
}

/// Client-space rectangle of the canvas element (`getBoundingClientRect`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl CanvasRect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    fn validate(&self) -> Result<(), ViewportError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if ok(self.width) && ok(self.height) && self.left.is_finite() && self.top.is_finite() {
            Ok(())
        } else {
            Err(ViewportError::EmptyCanvas {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Orthographic camera placed above the ground plane, looking down -Z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthoCamera {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub near: f64,
    pub far: f64,
    /// Camera z position.
    pub elevation: f64,
}

impl OrthoCamera {
    /// Square frustum `[-h, h]` on both axes.
    pub fn from_half_extent(half_extent: f64) -> Self {
        Self {
            left: -half_extent,
            right: half_extent,
            top: half_extent,
            bottom: -half_extent,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            elevation: CAMERA_DISTANCE,
        }
    }

    fn validate(&self, tolerance: f64) -> Result<(), ViewportError> {
        if (self.right - self.left).abs() < tolerance || (self.top - self.bottom).abs() < tolerance {
            return Err(ViewportError::DegenerateCamera(format!(
                "extent {}..{} x {}..{}",
                self.left, self.right, self.bottom, self.top
            )));
        }
        if !(self.near >= 0.0 && self.far > self.near) {
            return Err(ViewportError::DegenerateCamera(format!(
                "clip planes near={} far={}",
                self.near, self.far
            )));
        }
        Ok(())
    }

    /// World x/y under a normalized device coordinate.
    fn unproject(&self, ndc: DVec2) -> DVec2 {
        let t = (ndc + DVec2::ONE) * 0.5;
        DVec2::new(
            self.left + (self.right - self.left) * t.x,
            self.bottom + (self.top - self.bottom) * t.y,
        )
    }
}

/// Bounded ground plane rays are cast against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundPlane {
    pub z: f64,
    pub half_size: f64,
}

impl Default for GroundPlane {
    fn default() -> Self {
        Self {
            z: GROUND_PLANE_Z,
            half_size: GROUND_PLANE_SIZE / 2.0,
        }
    }
}

impl GroundPlane {
    /// Plane sized to cover everything the configured camera can see.
    pub fn for_config(config: &EditorConfig) -> Self {
        Self {
            z: GROUND_PLANE_Z,
            half_size: config.ground_half_size(),
        }
    }

    /// Hits within `tolerance` of the edge still count.
    fn intersect(&self, origin: DVec3, direction: DVec3, tolerance: f64) -> Option<DVec2> {
        if direction.z.abs() < tolerance {
            return None;
        }
        let t = (self.z - origin.z) / direction.z;
        if t < -tolerance {
            return None;
        }
        let hit = (origin + direction * t).truncate();
        let limit = self.half_size + tolerance;
        (hit.x.abs() <= limit && hit.y.abs() <= limit).then_some(hit)
    }
}

/// Strategy for turning a pointer position into a world point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Projection {
    /// Linear remap of the canvas onto the camera frustum.
    #[default]
    LinearRemap,
    /// Ray from the camera through the pointer, intersected with the ground
    /// plane. Misses map to the world origin.
    GroundPlaneRay,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    canvas: CanvasRect,
    camera: OrthoCamera,
    plane: GroundPlane,
    projection: Projection,
    tolerance: f64,
}

impl Viewport {
    pub fn new(
        canvas: CanvasRect,
        camera: OrthoCamera,
        projection: Projection,
    ) -> Result<Self, ViewportError> {
        Self::with_tolerance(canvas, camera, projection, EPSILON)
    }

    fn with_tolerance(
        canvas: CanvasRect,
        camera: OrthoCamera,
        projection: Projection,
        tolerance: f64,
    ) -> Result<Self, ViewportError> {
        canvas.validate()?;
        camera.validate(tolerance)?;
        Ok(Self {
            canvas,
            camera,
            plane: GroundPlane::default(),
            projection,
            tolerance,
        })
    }

    /// Viewport whose camera frames the configured world extent, over a
    /// ground plane large enough to catch every ray inside it.
    pub fn for_config(
        canvas: CanvasRect,
        config: &EditorConfig,
        projection: Projection,
    ) -> Result<Self, ViewportError> {
        let viewport = Self::with_tolerance(
            canvas,
            OrthoCamera::from_half_extent(config.world_half_extent),
            projection,
            config.tolerance,
        )?;
        Ok(viewport.with_plane(GroundPlane::for_config(config)))
    }

    pub fn with_plane(mut self, plane: GroundPlane) -> Self {
        self.plane = plane;
        self
    }

    pub fn canvas(&self) -> CanvasRect {
        self.canvas
    }

    pub fn camera(&self) -> OrthoCamera {
        self.camera
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    pub fn plane(&self) -> GroundPlane {
        self.plane
    }

    /// Updates the canvas after the host resized or scrolled it.
    pub fn set_canvas(&mut self, canvas: CanvasRect) -> Result<(), ViewportError> {
        canvas.validate()?;
        self.canvas = canvas;
        Ok(())
    }

    /// Normalized device coordinates in `[-1, 1]`, y up.
    pub fn normalized(&self, screen: DVec2) -> DVec2 {
        let c = &self.canvas;
        DVec2::new(
            (screen.x - c.left) / c.width * 2.0 - 1.0,
            -((screen.y - c.top) / c.height * 2.0 - 1.0),
        )
    }

    pub fn screen_to_world(&self, screen: DVec2) -> Point2D {
        let ndc = self.normalized(screen);
        match self.projection {
            Projection::LinearRemap => self.camera.unproject(ndc),
            Projection::GroundPlaneRay => self.raycast(ndc).unwrap_or(DVec2::ZERO),
        }
    }

    /// Casts from the near plane along the view axis.
    pub fn raycast(&self, ndc: DVec2) -> Option<Point2D> {
        let origin = self
            .camera
            .unproject(ndc)
            .extend(self.camera.elevation - self.camera.near);
        self.plane.intersect(origin, DVec3::NEG_Z, self.tolerance)
    }
}
