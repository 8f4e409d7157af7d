//! # Shape Mesh
//!
//! Browser-safe mesh generation for the polygon stamp editor.
//! Converts flat 2D outlines into triangle meshes and line buffers that the
//! three.js host uploads as `BufferGeometry`.
//!
//! ## Architecture
//!
//! ```text
//! Outline (DVec2 loop) → triangulate (ear clipping) → Mesh → f32/u32 buffers
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec2;
//! use shape_mesh::{outline_mesh, Outline};
//!
//! let square = Outline::new(vec![
//!     DVec2::new(0.0, 0.0),
//!     DVec2::new(1.0, 0.0),
//!     DVec2::new(1.0, 1.0),
//!     DVec2::new(0.0, 1.0),
//! ]);
//! let mesh = outline_mesh(&square).unwrap();
//! assert_eq!(mesh.vertex_count(), 4);
//! assert_eq!(mesh.triangle_count(), 2);
//! ```

pub mod error;
pub mod lines;
pub mod mesh;
pub mod outline;
pub mod triangulate;

pub use error::MeshError;
pub use lines::{grid_lines, plane_mesh, segment_points};
pub use mesh::Mesh;
pub use outline::{Bounds2, Outline};
pub use triangulate::outline_mesh;
