use bevy::prelude::*;

// ── Marker components ───────────────────────────────────────────────

/// The single entity driven by keyboard input.
#[derive(Component)]
pub struct PlayerControlled;

/// Statically placed world content, drawn by every world camera.
#[derive(Component)]
pub struct Decoration;

// ── Simulation state ────────────────────────────────────────────────

/// Position of a visual in simulation space (y grows downward).
#[derive(Component, Debug, Clone, Copy, Default, PartialEq)]
pub struct Position(pub Vec2);

/// Distance per second. Present only while the entity is moving.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

/// Delta-time consumed by the logic stages this frame, in seconds.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameDelta(pub f32);

/// Simulation space is y-down, Bevy world space is y-up.
pub fn to_world(pos: Vec2) -> Vec2 {
    Vec2::new(pos.x, -pos.y)
}
