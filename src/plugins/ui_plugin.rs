use bevy::prelude::*;

use super::game_plugin::FrameSet;
use crate::config::tuning::Tuning;
use crate::game::clock::FrameClock;

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_ui);
        app.add_systems(Update, update_fps_display.in_set(FrameSet::Render));
    }
}

#[derive(Component)]
struct FpsText;

fn setup_ui(mut commands: Commands, tuning: Res<Tuning>) {
    commands.spawn((
        FpsText,
        Text::new(""),
        TextFont {
            font_size: tuning.overlay_font_size,
            ..default()
        },
        TextColor(Color::WHITE),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(0.0),
            top: Val::Px(0.0),
            ..default()
        },
    ));
}

pub fn fps_label(clock: &FrameClock) -> String {
    match clock.fps() {
        Some(fps) => format!("{fps:.0} FPS"),
        None => "-- FPS".into(),
    }
}

fn update_fps_display(clock: Res<FrameClock>, mut text_query: Query<&mut Text, With<FpsText>>) {
    for mut text in &mut text_query {
        **text = fps_label(&clock);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_rounds_to_whole_frames() {
        let mut clock = FrameClock::default();
        clock.advance(0.02);
        assert_eq!(fps_label(&clock), "50 FPS");
    }

    #[test]
    fn label_without_elapsed_time() {
        let clock = FrameClock::default();
        assert_eq!(fps_label(&clock), "-- FPS");
    }
}
