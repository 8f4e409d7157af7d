use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeshId(pub u32);

impl fmt::Display for MeshId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mesh#{}", self.0)
    }
}

/// 24-bit RGB color, `0xRRGGBB`, the same packing three.js accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const fn rgb(hex: u32) -> Self {
        Self(hex & 0xff_ffff)
    }

    /// Parses `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(Self)
    }

    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeshKind {
    Outline,
    GuideLine,
    Plane,
    Grid,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum SceneCommand {
    /// Triangle mesh, `vertices` as `[x, y, z, ...]`.
    CreateMesh {
        id: MeshId,
        kind: MeshKind,
        vertices: Vec<f32>,
        indices: Vec<u32>,
        color: Color,
    },
    /// Line segments, `points` as consecutive `[x, y, z]` pairs.
    CreateLines {
        id: MeshId,
        kind: MeshKind,
        points: Vec<f32>,
        color: Color,
    },
    Add {
        id: MeshId,
    },
    SetPosition {
        id: MeshId,
        x: f64,
        y: f64,
    },
    /// Removes the object from the scene and disposes geometry and material.
    Remove {
        id: MeshId,
    },
}

impl SceneCommand {
    pub fn id(&self) -> MeshId {
        match self {
            SceneCommand::CreateMesh { id, .. }
            | SceneCommand::CreateLines { id, .. }
            | SceneCommand::Add { id }
            | SceneCommand::SetPosition { id, .. }
            | SceneCommand::Remove { id } => *id,
        }
    }
}
