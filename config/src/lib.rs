//! # Config Crate
//!
//! Centralized configuration constants for the polygon stamp editor.
//! World extents, camera frustum, colors and interaction thresholds are
//! defined here so the mesh, editor and WASM crates agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{WORLD_HALF_EXTENT, MIN_POLYGON_VERTICES, approx_equal};
//!
//! // The visible world spans [-WORLD_HALF_EXTENT, WORLD_HALF_EXTENT] on both axes
//! let width = WORLD_HALF_EXTENT * 2.0;
//! assert!(approx_equal(width, 10.0));
//!
//! // A polygon needs at least three vertices
//! let draft_len = 2;
//! assert!(draft_len < MIN_POLYGON_VERTICES);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Scene Compatible**: Defaults match the three.js host scene

pub mod constants;
