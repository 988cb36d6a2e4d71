//! Scene assembly: what to draw, as vertex lists
//!
//! The room never changes, so its geometry is built once. The ball, paddles
//! and optional helpers are rebuilt from each frame's snapshot.

use glam::{Vec2, Vec3};

use super::shapes::{cuboid, disc_xz, quad_xz, sphere};
use super::vertex::{Vertex, colors};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::{FrameSnapshot, ObstacleKind, Room};

/// Lifts coplanar surfaces apart to avoid z-fighting
const SURFACE_OFFSET: f32 = 0.01;

fn obstacle_color(kind: ObstacleKind) -> [f32; 4] {
    match kind {
        ObstacleKind::Wall => colors::WALL,
        ObstacleKind::Table => colors::TABLE,
        ObstacleKind::Pillar => colors::PILLAR,
    }
}

/// Floor, ceiling, playfield and every obstacle in the room
pub fn static_scene(room: &Room) -> Vec<Vertex> {
    let span = Vec2::splat(ROOM_HALF_SIZE * 2.0);
    let mut vertices = Vec::new();

    vertices.extend(quad_xz(Vec3::Y * FLOOR_Y, span, true, colors::FLOOR));
    vertices.extend(quad_xz(Vec3::Y * CEILING_Y, span, false, colors::CEILING));

    for obstacle in room.obstacles() {
        let bounds = &obstacle.bounds;
        vertices.extend(cuboid(bounds.center(), bounds.size(), obstacle_color(obstacle.kind)));
    }

    let (width, length) = PLAYFIELD_SIZE;
    vertices.extend(quad_xz(
        Vec3::ZERO,
        Vec2::new(width, length),
        true,
        colors::PLAYFIELD,
    ));

    vertices
}

/// Ball, paddles, blob shadow and light markers for one frame
pub fn dynamic_scene(snapshot: &FrameSnapshot, settings: &Settings) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    if settings.shadows {
        let below = Vec3::new(snapshot.ball.x, SURFACE_OFFSET, snapshot.ball.z);
        vertices.extend(disc_xz(below, BALL_RADIUS * 0.9, colors::SHADOW, 20));
    }

    vertices.extend(sphere(snapshot.ball, BALL_RADIUS, colors::BALL, 16, 12));

    let paddle_color = |active: bool| {
        if active {
            colors::PADDLE_ACTIVE
        } else {
            colors::PADDLE
        }
    };
    vertices.extend(cuboid(
        snapshot.player_paddle,
        PADDLE_SIZE,
        paddle_color(snapshot.player_paddle_active),
    ));
    vertices.extend(cuboid(
        snapshot.cpu_paddle,
        PADDLE_SIZE,
        paddle_color(snapshot.cpu_paddle_active),
    ));

    if settings.light_helpers {
        for position in [SPOT_LIGHT_POS, DIRECTIONAL_LIGHT_POS] {
            vertices.extend(cuboid(position, Vec3::splat(0.6), colors::LIGHT_HELPER));
        }
    }

    vertices
}
