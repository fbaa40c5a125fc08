use bevy::camera::visibility::RenderLayers;
use bevy::camera::{ClearColorConfig, ScalingMode, Viewport};
use bevy::prelude::*;
use bevy::ui::IsDefaultUiCamera;
use bevy::window::{PrimaryWindow, WindowResized};

use super::game_plugin::FrameSet;
use crate::config::tuning::Tuning;
use crate::game::{
    components::*,
    viewport::{CameraFrame, Viewports},
};

/// Layer reserved for the surface-space overlay; world content stays on layer 0.
pub const OVERLAY_LAYER: usize = 1;

#[derive(Component)]
pub struct PrimaryCamera;

#[derive(Component)]
pub struct OverviewCamera;

/// Identity frame in surface pixels, independent of both world cameras.
#[derive(Component)]
pub struct OverlayCamera;

pub struct ViewPlugin;

impl Plugin for ViewPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (setup_cameras, setup_world));

        // Resize notifications are consumed with input, before logic.
        app.add_systems(Update, apply_surface_resize.in_set(FrameSet::Input));

        app.add_systems(
            Update,
            (sync_visual_transforms, apply_camera_frames)
                .chain()
                .in_set(FrameSet::Render),
        );
    }
}

// ── Startup ─────────────────────────────────────────────────────────

fn setup_cameras(mut commands: Commands, viewports: Res<Viewports>) {
    commands.spawn((
        PrimaryCamera,
        Camera2d,
        Camera {
            order: 0,
            ..default()
        },
        world_projection(&viewports.primary),
        Transform::from_translation(to_world(viewports.primary.center).extend(0.0)),
    ));

    // Overview composites over the primary image: no clear.
    commands.spawn((
        OverviewCamera,
        Camera2d,
        Camera {
            order: 1,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        world_projection(&viewports.overview),
        Transform::from_translation(to_world(viewports.overview.center).extend(0.0)),
    ));

    commands.spawn((
        OverlayCamera,
        Camera2d,
        Camera {
            order: 2,
            clear_color: ClearColorConfig::None,
            ..default()
        },
        IsDefaultUiCamera,
        RenderLayers::layer(OVERLAY_LAYER),
    ));
}

fn setup_world(
    mut commands: Commands,
    tuning: Res<Tuning>,
    asset_server: Res<AssetServer>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let center = tuning.decoration_center();
    commands.spawn((
        Decoration,
        Position(center),
        Mesh2d(meshes.add(Circle::new(tuning.decoration_radius))),
        MeshMaterial2d(materials.add(Color::srgb(0.0, 1.0, 0.0))),
        Transform::from_translation(to_world(center).extend(-1.0)),
    ));

    commands.spawn((
        PlayerControlled,
        Position(Vec2::ZERO),
        Sprite {
            image: asset_server.load(tuning.sprite_path.clone()),
            rect: Some(tuning.sprite_tile_rect()),
            ..default()
        },
        Transform::default(),
    ));

    info!("World ready: decoration at {center}, player at origin");
}

fn world_projection(frame: &CameraFrame) -> Projection {
    Projection::Orthographic(OrthographicProjection {
        scaling_mode: ScalingMode::Fixed {
            width: frame.size.x,
            height: frame.size.y,
        },
        ..OrthographicProjection::default_2d()
    })
}

// ── Per-frame ───────────────────────────────────────────────────────

/// Reset camera world rectangles when the surface changes size.
fn apply_surface_resize(
    mut resized: MessageReader<WindowResized>,
    mut viewports: ResMut<Viewports>,
) {
    let Some(last) = resized.read().last() else { return; };
    info!("Surface resized to {}x{}", last.width, last.height);
    viewports.resize(last.width, last.height);
}

/// Mirror simulation positions into render transforms.
fn sync_visual_transforms(mut query: Query<(&Position, &mut Transform), Changed<Position>>) {
    for (pos, mut transform) in &mut query {
        let world = to_world(pos.0);
        transform.translation.x = world.x;
        transform.translation.y = world.y;
    }
}

/// Push the current camera frames into the Bevy cameras.
fn apply_camera_frames(
    viewports: Res<Viewports>,
    window: Query<&Window, With<PrimaryWindow>>,
    mut primary: Query<
        (&mut Camera, &mut Projection, &mut Transform),
        (With<PrimaryCamera>, Without<OverviewCamera>),
    >,
    mut overview: Query<
        (&mut Camera, &mut Projection, &mut Transform),
        (With<OverviewCamera>, Without<PrimaryCamera>),
    >,
) {
    let Some(window) = window.iter().next() else { return; };
    let surface = window.physical_size();

    for (camera, projection, transform) in &mut primary {
        apply_frame(&viewports.primary, surface, camera, projection, transform);
    }
    for (camera, projection, transform) in &mut overview {
        apply_frame(&viewports.overview, surface, camera, projection, transform);
    }
}

fn apply_frame(
    frame: &CameraFrame,
    surface: UVec2,
    mut camera: Mut<Camera>,
    mut projection: Mut<Projection>,
    mut transform: Mut<Transform>,
) {
    let (physical_position, physical_size) = frame.physical_viewport(surface);
    camera.viewport = Some(Viewport {
        physical_position,
        physical_size,
        ..default()
    });

    if let Projection::Orthographic(ortho) = projection.as_mut() {
        ortho.scaling_mode = ScalingMode::Fixed {
            width: frame.size.x,
            height: frame.size.y,
        };
    }

    let center = to_world(frame.center);
    transform.translation.x = center.x;
    transform.translation.y = center.y;
}
