//! # Mesh Errors
//!
//! Error types for outline mesh generation.

use thiserror::Error;

/// Errors that can occur while turning an outline into a mesh.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    /// Too few vertices, or vertices that do not enclose an area
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    /// Coordinates that cannot be uploaded to the GPU
    #[error("Non-finite coordinate at vertex {index}")]
    NonFinite { index: usize },
}

impl MeshError {
    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MeshError::degenerate("outline needs 3 vertices, got 2");
        assert!(err.to_string().contains("Degenerate"));
        assert!(err.to_string().contains("got 2"));

        let err = MeshError::NonFinite { index: 4 };
        assert_eq!(err.to_string(), "Non-finite coordinate at vertex 4");
    }
}
