use bevy::prelude::*;

use crate::config::tuning::Tuning;
use crate::game::{
    clock::{self, FrameClock},
    components::FrameDelta,
    input, motion,
    viewport::{self, Viewports},
};

// ── SystemSets (strict per-frame ordering) ──────────────────────────

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    Clock,
    Input,
    Resolve,
    Integrate,
    Cleanup,
    Recenter,
    Render,
}

/// Declare the frame stages and the logic systems in one place.
/// Shared by the windowed app and the headless pipeline.
pub fn configure_frame_schedule(schedule: &mut Schedule) {
    schedule.configure_sets(
        (
            FrameSet::Clock,
            FrameSet::Input,
            FrameSet::Resolve,
            FrameSet::Integrate,
            FrameSet::Cleanup,
            FrameSet::Recenter,
            FrameSet::Render,
        )
            .chain(),
    );

    schedule.add_systems(input::sample_player_intent.in_set(FrameSet::Input));
    schedule.add_systems(motion::resolve_velocities.in_set(FrameSet::Resolve));
    schedule.add_systems(motion::integrate_motion.in_set(FrameSet::Integrate));
    schedule.add_systems(motion::cleanup_transient.in_set(FrameSet::Cleanup));
    schedule.add_systems(viewport::recenter_viewports.in_set(FrameSet::Recenter));
}

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FrameDelta>();
        app.init_resource::<FrameClock>();
        app.init_resource::<Viewports>();

        app.edit_schedule(Update, configure_frame_schedule);

        app.add_systems(
            Update,
            clock::advance_frame_clock.in_set(FrameSet::Clock),
        );

        // ── Always-on ───────────────────────────────────────────────────
        app.add_systems(Update, (input::exit_on_close_keys, tuning_reload_input));
    }
}

// ── Always-on ───────────────────────────────────────────────────────

/// Reload tuning with F5.
fn tuning_reload_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut tuning: ResMut<Tuning>,
    mut clock: ResMut<FrameClock>,
) {
    if keyboard.just_pressed(KeyCode::F5) {
        tuning.reload();
        clock.set_max_delta(tuning.max_frame_delta);
    }
}
