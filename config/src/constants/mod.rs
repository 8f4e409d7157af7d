//! Centralized configuration values shared across the polygon stamp editor.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons of world coordinates.
///
/// # Examples
/// ```
/// use config::constants::EPSILON;
/// assert!(EPSILON < 1.0e-6);
/// ```
pub const EPSILON: f64 = 1.0e-9;

/// Twice-area threshold below which a triangle is treated as degenerate
/// during outline triangulation. Finer than [`EPSILON`] since it bounds an
/// area rather than a length.
///
/// # Examples
/// ```
/// use config::constants::{AREA_EPSILON, EPSILON};
/// assert!(AREA_EPSILON < EPSILON);
/// ```
pub const AREA_EPSILON: f64 = 1.0e-12;

// =============================================================================
// WORLD AND CAMERA CONSTANTS
// =============================================================================

/// Half of the visible world extent on each axis.
///
/// The orthographic camera frustum spans `[-WORLD_HALF_EXTENT, WORLD_HALF_EXTENT]`
/// horizontally and vertically.
///
/// # Examples
/// ```
/// use config::constants::WORLD_HALF_EXTENT;
/// assert_eq!(WORLD_HALF_EXTENT * 2.0, 10.0);
/// ```
pub const WORLD_HALF_EXTENT: f64 = 5.0;

/// Near clipping plane distance of the orthographic camera.
pub const CAMERA_NEAR: f64 = 0.1;

/// Far clipping plane distance of the orthographic camera.
pub const CAMERA_FAR: f64 = 1000.0;

/// Height of the camera above the ground plane (camera looks down -Z).
///
/// # Examples
/// ```
/// use config::constants::{CAMERA_DISTANCE, CAMERA_NEAR, CAMERA_FAR};
/// assert!(CAMERA_DISTANCE > CAMERA_NEAR && CAMERA_DISTANCE < CAMERA_FAR);
/// ```
pub const CAMERA_DISTANCE: f64 = 10.0;

/// Z coordinate of the ground plane that pointer rays are cast against.
pub const GROUND_PLANE_Z: f64 = 0.0;

/// Edge length of the square ground plane placed under the drawing.
pub const GROUND_PLANE_SIZE: f64 = 10.0;

/// Number of cells per side of the grid drawn over the ground plane.
pub const GRID_DIVISIONS: u32 = 10;

// =============================================================================
// INTERACTION CONSTANTS
// =============================================================================

/// Minimum number of draft vertices required to complete a polygon.
///
/// # Examples
/// ```
/// use config::constants::MIN_POLYGON_VERTICES;
///
/// let draft = [(1.0, 1.0), (2.0, 1.0)];
/// assert!(draft.len() < MIN_POLYGON_VERTICES);
/// ```
pub const MIN_POLYGON_VERTICES: usize = 3;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Fill color of completed polygons and their copies (orange).
pub const POLYGON_COLOR: u32 = 0xffa500;

/// Color of the guide edges drawn between draft vertices (green).
pub const GUIDE_LINE_COLOR: u32 = 0x00ff00;

/// Color of the ground plane (white).
pub const PLANE_COLOR: u32 = 0xffffff;

/// Color of the grid lines (black).
pub const GRID_COLOR: u32 = 0x000000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}

// =============================================================================
// EDITOR CONFIGURATION
// =============================================================================

/// Immutable snapshot of the settings an editor instance is built with.
///
/// # Examples
/// ```
/// use config::constants::EditorConfig;
/// let config = EditorConfig::default();
/// assert!(config.world_half_extent > 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Half extent of the visible world square.
    pub world_half_extent: f64,
    /// Slack, in world units, for ray/plane hits and frustum checks.
    pub tolerance: f64,
    /// Fill color for completed polygons, as `0xRRGGBB`.
    pub polygon_color: u32,
    /// Color for draft guide edges, as `0xRRGGBB`.
    pub guide_color: u32,
}

impl EditorConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// extent, tolerance and colors.
    ///
    /// # Examples
    /// ```
    /// use config::constants::EditorConfig;
    /// let cfg = EditorConfig::new(8.0, 1.0e-6, 0xff0000, 0x00ff00).expect("valid config");
    /// assert_eq!(cfg.world_half_extent, 8.0);
    /// ```
    pub fn new(
        world_half_extent: f64,
        tolerance: f64,
        polygon_color: u32,
        guide_color: u32,
    ) -> Result<Self, ConfigError> {
        if !(world_half_extent.is_finite() && world_half_extent > 0.0) {
            return Err(ConfigError::InvalidExtent(world_half_extent));
        }
        if !(tolerance.is_finite() && tolerance > 0.0) {
            return Err(ConfigError::InvalidTolerance(tolerance));
        }
        for color in [polygon_color, guide_color] {
            if color > 0xff_ffff {
                return Err(ConfigError::InvalidColor(color));
            }
        }
        Ok(Self {
            world_half_extent,
            tolerance,
            polygon_color,
            guide_color,
        })
    }

    /// Half edge of the ground plane: never smaller than the visible world,
    /// so every on-screen pointer lands on it.
    ///
    /// # Examples
    /// ```
    /// use config::constants::{EditorConfig, GROUND_PLANE_SIZE};
    /// assert_eq!(EditorConfig::default().ground_half_size(), GROUND_PLANE_SIZE / 2.0);
    ///
    /// let wide = EditorConfig::new(8.0, 1.0e-9, 0xffa500, 0x00ff00).unwrap();
    /// assert_eq!(wide.ground_half_size(), 8.0);
    /// ```
    pub fn ground_half_size(&self) -> f64 {
        self.world_half_extent.max(GROUND_PLANE_SIZE / 2.0)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            world_half_extent: WORLD_HALF_EXTENT,
            tolerance: EPSILON,
            polygon_color: POLYGON_COLOR,
            guide_color: GUIDE_LINE_COLOR,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the world extent is zero, negative or not finite.
    InvalidExtent(f64),
    /// Raised when tolerance is zero, negative or not finite.
    InvalidTolerance(f64),
    /// Raised when a color does not fit in 24 bits.
    InvalidColor(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidExtent(value) => {
                write!(f, "world_half_extent must be positive and finite: {value}")
            }
            ConfigError::InvalidTolerance(value) => {
                write!(f, "tolerance must be positive and finite: {value}")
            }
            ConfigError::InvalidColor(value) => {
                write!(f, "color must be a 24-bit RGB value: {value:#x}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
