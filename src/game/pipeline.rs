//! Headless frame pipeline: the owned world plus the frame schedule,
//! driven with an explicit delta-time and key state instead of a window.

use bevy::ecs::schedule::ExecutorKind;
use bevy::prelude::*;

use super::components::{FrameDelta, PlayerControlled, Position};
use super::viewport::{CameraFrame, Viewports};
use crate::config::tuning::Tuning;
use crate::plugins::game_plugin::configure_frame_schedule;

pub struct FramePipeline {
    world: World,
    schedule: Schedule,
    player: Entity,
}

impl FramePipeline {
    /// World with a single controlled entity at the origin.
    pub fn new(tuning: Tuning) -> Self {
        Self::with_player_at(tuning, Vec2::ZERO)
    }

    pub fn with_player_at(tuning: Tuning, position: Vec2) -> Self {
        let mut world = World::new();
        world.init_resource::<ButtonInput<KeyCode>>();
        world.init_resource::<FrameDelta>();
        world.insert_resource(Viewports::from_tuning(&tuning));
        world.insert_resource(tuning);

        let player = world.spawn((PlayerControlled, Position(position))).id();

        let mut schedule = Schedule::default();
        schedule.set_executor_kind(ExecutorKind::SingleThreaded);
        configure_frame_schedule(&mut schedule);

        Self {
            world,
            schedule,
            player,
        }
    }

    pub fn player(&self) -> Entity {
        self.player
    }

    pub fn player_position(&self) -> Vec2 {
        self.world
            .get::<Position>(self.player)
            .map(|p| p.0)
            .unwrap_or_default()
    }

    pub fn press(&mut self, key: KeyCode) {
        self.world.resource_mut::<ButtonInput<KeyCode>>().press(key);
    }

    pub fn release(&mut self, key: KeyCode) {
        self.world.resource_mut::<ButtonInput<KeyCode>>().release(key);
    }

    /// Run one frame: input, logic, cleanup and camera recentering, with `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        self.world.resource_mut::<FrameDelta>().0 = dt;
        self.schedule.run(&mut self.world);
        self.world.resource_mut::<ButtonInput<KeyCode>>().clear();
    }

    /// Surface resized to `width` × `height` pixels.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.world.resource_mut::<Viewports>().resize(width, height);
    }

    pub fn primary_camera(&self) -> CameraFrame {
        self.world.resource::<Viewports>().primary
    }

    pub fn overview_camera(&self) -> CameraFrame {
        self.world.resource::<Viewports>().overview
    }

    pub fn world(&self) -> &World {
        &self.world
    }
}
