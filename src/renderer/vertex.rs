//! Vertex types for 3D rendering

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

/// Lit vertex: world position, surface normal and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(position: Vec3, normal: Vec3, color: [f32; 4]) -> Self {
        Self {
            position: position.to_array(),
            normal: normal.to_array(),
            color,
        }
    }

    pub fn position(&self) -> Vec3 {
        Vec3::from_array(self.position)
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        const ATTRIBUTES: [wgpu::VertexAttribute; 3] = [
            wgpu::VertexAttribute {
                offset: 0,
                shader_location: 0,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 3]>() as wgpu::BufferAddress,
                shader_location: 1,
                format: wgpu::VertexFormat::Float32x3,
            },
            wgpu::VertexAttribute {
                offset: std::mem::size_of::<[f32; 6]>() as wgpu::BufferAddress,
                shader_location: 2,
                format: wgpu::VertexFormat::Float32x4,
            },
        ];
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &ATTRIBUTES,
        }
    }
}

/// Colors for scene elements (linear RGB)
pub mod colors {
    pub const FLOOR: [f32; 4] = [0.84, 0.86, 0.75, 1.0];
    pub const CEILING: [f32; 4] = [0.84, 0.86, 0.75, 1.0];
    pub const WALL: [f32; 4] = [0.55, 0.42, 0.32, 1.0];
    pub const TABLE: [f32; 4] = [0.33, 0.12, 0.06, 1.0];
    pub const PLAYFIELD: [f32; 4] = [0.0, 0.16, 0.0, 1.0];
    pub const PILLAR: [f32; 4] = [0.28, 0.32, 0.63, 1.0];
    pub const BALL: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const PADDLE: [f32; 4] = [1.0, 0.87, 0.97, 1.0];
    /// Paddle after the ball has bounced off it
    pub const PADDLE_ACTIVE: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
    pub const SHADOW: [f32; 4] = [0.0, 0.0, 0.0, 0.45];
    pub const LIGHT_HELPER: [f32; 4] = [1.0, 1.0, 0.6, 1.0];
    pub const BACKGROUND: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
}
