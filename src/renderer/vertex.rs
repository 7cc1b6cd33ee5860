//! Vertex types for 2D line rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct LineVertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl LineVertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes for uploading a vertex list to a GPU buffer
pub fn as_bytes(vertices: &[LineVertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Colors for game elements
pub mod colors {
    pub const SHIP: [f32; 4] = [0.0, 1.0, 0.0, 1.0];
    /// Ship colour on the "off" beat of the crash blink
    pub const SHIP_BLINK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
    pub const BULLET: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const ASTEROID: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
    pub const TEXT: [f32; 4] = [200.0 / 255.0, 200.0 / 255.0, 200.0 / 255.0, 1.0];
}
