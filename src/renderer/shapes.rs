//! Shape generation for 3D primitives
//!
//! Everything is emitted as a flat triangle list with per-face normals, so
//! a whole scene can go into one vertex buffer.

use glam::{Vec2, Vec3};
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Two triangles for the quad a-b-c-d (counter-clockwise seen from `normal`)
fn push_quad(vertices: &mut Vec<Vertex>, corners: [Vec3; 4], normal: Vec3, color: [f32; 4]) {
    let [a, b, c, d] = corners;
    for p in [a, b, c, a, c, d] {
        vertices.push(Vertex::new(p, normal, color));
    }
}

/// Axis-aligned box
pub fn cuboid(center: Vec3, size: Vec3, color: [f32; 4]) -> Vec<Vertex> {
    let h = size * 0.5;
    let mut vertices = Vec::with_capacity(36);

    // (normal, in-face u axis, in-face v axis) with u × v = normal
    let faces = [
        (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (Vec3::NEG_X, Vec3::Z, Vec3::Y),
        (Vec3::Y, Vec3::X, Vec3::NEG_Z),
        (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Vec3::Z, Vec3::X, Vec3::Y),
        (Vec3::NEG_Z, Vec3::NEG_X, Vec3::Y),
    ];

    for (normal, u, v) in faces {
        let face_center = center + normal * h;
        let du = u * h;
        let dv = v * h;
        push_quad(
            &mut vertices,
            [
                face_center - du - dv,
                face_center + du - dv,
                face_center + du + dv,
                face_center - du + dv,
            ],
            normal,
            color,
        );
    }

    vertices
}

/// Horizontal rectangle, facing up (or down when `up` is false)
pub fn quad_xz(center: Vec3, size: Vec2, up: bool, color: [f32; 4]) -> Vec<Vertex> {
    let hx = Vec3::X * size.x * 0.5;
    let hz = Vec3::Z * size.y * 0.5;
    let mut vertices = Vec::with_capacity(6);
    if up {
        push_quad(
            &mut vertices,
            [center - hx + hz, center + hx + hz, center + hx - hz, center - hx - hz],
            Vec3::Y,
            color,
        );
    } else {
        push_quad(
            &mut vertices,
            [center - hx - hz, center + hx - hz, center + hx + hz, center - hx + hz],
            Vec3::NEG_Y,
            color,
        );
    }
    vertices
}

/// Flat upward-facing disc, used for the ball's blob shadow
pub fn disc_xz(center: Vec3, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let p1 = center + Vec3::new(theta1.cos(), 0.0, -theta1.sin()) * radius;
        let p2 = center + Vec3::new(theta2.cos(), 0.0, -theta2.sin()) * radius;
        vertices.push(Vertex::new(center, Vec3::Y, color));
        vertices.push(Vertex::new(p1, Vec3::Y, color));
        vertices.push(Vertex::new(p2, Vec3::Y, color));
    }

    vertices
}

/// UV sphere with smooth normals
pub fn sphere(center: Vec3, radius: f32, color: [f32; 4], segments: u32, rings: u32) -> Vec<Vertex> {
    let point = |ring: u32, segment: u32| -> Vec3 {
        let phi = PI * ring as f32 / rings as f32;
        let theta = 2.0 * PI * segment as f32 / segments as f32;
        Vec3::new(phi.sin() * theta.cos(), phi.cos(), -phi.sin() * theta.sin())
    };

    let mut vertices = Vec::with_capacity((segments * rings * 6) as usize);
    for ring in 0..rings {
        for segment in 0..segments {
            let a = point(ring, segment);
            let b = point(ring + 1, segment);
            let c = point(ring + 1, segment + 1);
            let d = point(ring, segment + 1);
            for n in [a, b, c, a, c, d] {
                vertices.push(Vertex::new(center + n * radius, n, color));
            }
        }
    }

    vertices
}
