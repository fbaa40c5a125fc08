use bevy::prelude::*;

use super::components::PlayerControlled;
use super::intent::{MoveDirection, MoveIntent};

/// Movement key per direction.
pub const MOVE_BINDINGS: [(MoveDirection, KeyCode); 4] = [
    (MoveDirection::Up, KeyCode::KeyW),
    (MoveDirection::Left, KeyCode::KeyA),
    (MoveDirection::Down, KeyCode::KeyS),
    (MoveDirection::Right, KeyCode::KeyD),
];

/// Keys that close the application.
pub const EXIT_KEYS: [KeyCode; 2] = [KeyCode::Backspace, KeyCode::Delete];

/// Update `intent` from the held-key state: held directions are added,
/// released ones removed, others left alone.
pub fn sample_intent(keyboard: &ButtonInput<KeyCode>, intent: &mut MoveIntent) {
    for (dir, key) in MOVE_BINDINGS {
        intent.set(dir, keyboard.pressed(key));
    }
}

/// Input stage: write the controlled entity's intent for this frame.
pub fn sample_player_intent(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut query: Query<(Entity, Option<&mut MoveIntent>), With<PlayerControlled>>,
) {
    for (entity, intent) in &mut query {
        match intent {
            Some(mut intent) => sample_intent(&keyboard, &mut intent),
            None => {
                let mut intent = MoveIntent::empty();
                sample_intent(&keyboard, &mut intent);
                commands.entity(entity).insert(intent);
            }
        }
    }
}

/// Close on Backspace / Delete.
pub fn exit_on_close_keys(keyboard: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard.any_just_pressed(EXIT_KEYS) {
        info!("Exit key pressed, closing");
        exit.write(AppExit::Success);
    }
}
