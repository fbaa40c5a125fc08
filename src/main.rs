use bevy::prelude::*;

use dual_view::config::tuning::Tuning;
use dual_view::plugins::{game_plugin::GamePlugin, ui_plugin::UiPlugin, view_plugin::ViewPlugin};

fn main() {
    let tuning = Tuning::load_or_default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: tuning.window_title.clone(),
                resolution: (tuning.window_width, tuning.window_height).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(tuning)
        .add_plugins(GamePlugin)
        .add_plugins(ViewPlugin)
        .add_plugins(UiPlugin)
        .run();
}
