pub mod game_plugin;
pub mod ui_plugin;
pub mod view_plugin;
