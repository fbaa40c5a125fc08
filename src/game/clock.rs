use bevy::prelude::*;

use super::components::FrameDelta;
use crate::config::tuning::Tuning;

/// Frame delta policy on top of Bevy's real-time clock. Each measured
/// interval is handed to the logic stages exactly once.
#[derive(Resource, Debug, Clone, Default)]
pub struct FrameClock {
    delta: f32,
    max_delta: Option<f32>,
}

impl FrameClock {
    /// Clamp intervals above `max` seconds. `None` passes them through.
    pub fn with_max_delta(mut self, max: Option<f32>) -> Self {
        self.set_max_delta(max);
        self
    }

    pub fn set_max_delta(&mut self, max: Option<f32>) {
        self.max_delta = max;
    }

    /// Accept one measured interval, apply the clamp policy and store it.
    pub fn advance(&mut self, measured: f32) -> f32 {
        let raw = measured.max(0.0);
        self.delta = match self.max_delta {
            Some(max) if raw > max => {
                debug!("frame delta {raw:.3}s clamped to {max:.3}s");
                max
            }
            _ => raw,
        };
        self.delta
    }

    pub fn delta(&self) -> f32 {
        self.delta
    }

    /// Frames per second implied by the last delta, if any time passed.
    pub fn fps(&self) -> Option<f32> {
        (self.delta > 0.0).then(|| 1.0 / self.delta)
    }
}

impl FromWorld for FrameClock {
    fn from_world(world: &mut World) -> Self {
        let max = world.get_resource::<Tuning>().and_then(|t| t.max_frame_delta);
        Self::default().with_max_delta(max)
    }
}

/// Clock stage: take the real frame interval measured by `TimePlugin`
/// and publish it for the logic stages.
pub fn advance_frame_clock(
    time: Res<Time<Real>>,
    mut clock: ResMut<FrameClock>,
    mut delta: ResMut<FrameDelta>,
) {
    delta.0 = clock.advance(time.delta_secs());
}
