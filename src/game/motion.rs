use bevy::prelude::*;

use super::components::*;
use super::intent::{MoveDirection, MoveIntent};
use crate::config::tuning::Tuning;

/// Map an intent to a velocity. Opposing directions cancel exactly;
/// `None` means the entity is stationary.
pub fn resolve_velocity(intent: MoveIntent, speed: f32) -> Option<Vec2> {
    let mut velocity = Vec2::ZERO;
    if intent.contains(MoveDirection::Up) {
        velocity.y -= speed;
    }
    if intent.contains(MoveDirection::Left) {
        velocity.x -= speed;
    }
    if intent.contains(MoveDirection::Down) {
        velocity.y += speed;
    }
    if intent.contains(MoveDirection::Right) {
        velocity.x += speed;
    }

    if velocity.x == 0.0 && velocity.y == 0.0 {
        None
    } else {
        Some(velocity)
    }
}

/// Resolve stage: intent → velocity for every entity carrying an intent.
pub fn resolve_velocities(
    mut commands: Commands,
    tuning: Res<Tuning>,
    query: Query<(Entity, &MoveIntent)>,
) {
    for (entity, intent) in &query {
        match resolve_velocity(*intent, tuning.move_speed) {
            Some(v) => {
                commands.entity(entity).insert(Velocity(v));
            }
            None => {
                commands.entity(entity).remove::<Velocity>();
            }
        }
    }
}

/// Integrate stage: raw Euler step, position += velocity * dt.
pub fn integrate_motion(delta: Res<FrameDelta>, mut query: Query<(&Velocity, &mut Position)>) {
    let dt = delta.0;
    for (vel, mut pos) in &mut query {
        pos.0.x += vel.0.x * dt;
        pos.0.y += vel.0.y * dt;
        trace!("moved to ({:.2}, {:.2})", pos.0.x, pos.0.y);
    }
}

/// Cleanup stage: drop every transient intent and velocity.
pub fn cleanup_transient(
    mut commands: Commands,
    query: Query<Entity, Or<(With<MoveIntent>, With<Velocity>)>>,
) {
    for entity in &query {
        commands.entity(entity).remove::<(MoveIntent, Velocity)>();
    }
}
