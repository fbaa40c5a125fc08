use bevy::prelude::*;

use super::components::{PlayerControlled, Position};
use crate::config::tuning::Tuning;

/// A camera: the world rectangle it shows and where on the surface it is drawn.
///
/// The world rectangle is kept as center + size so recentering never
/// disturbs the extent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub center: Vec2,
    pub size: Vec2,
    /// Normalized surface rectangle, origin top-left.
    pub viewport: Rect,
}

impl CameraFrame {
    /// Camera showing `world` (simulation space) inside `viewport`.
    pub fn new(world: Rect, viewport: Rect) -> Self {
        Self {
            center: (world.min + world.max) * 0.5,
            size: world.size(),
            viewport,
        }
    }

    pub fn world_rect(&self) -> Rect {
        let half = self.size * 0.5;
        Rect {
            min: self.center - half,
            max: self.center + half,
        }
    }

    /// Replace the world rectangle, keeping the viewport.
    pub fn reset(&mut self, world: Rect) {
        self.center = (world.min + world.max) * 0.5;
        self.size = world.size();
    }

    pub fn recenter(&mut self, center: Vec2) {
        self.center = center;
    }

    /// Viewport in physical pixels for a surface of `surface` pixels:
    /// (top-left position, size). The size is at least one pixel.
    pub fn physical_viewport(&self, surface: UVec2) -> (UVec2, UVec2) {
        let surface = surface.as_vec2();
        let position = (self.viewport.min * surface).floor();
        let size = (self.viewport.size() * surface).floor().max(Vec2::ONE);
        (position.as_uvec2(), size.as_uvec2())
    }
}

/// The two world cameras: full-surface primary and the corner overview.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct Viewports {
    pub primary: CameraFrame,
    pub overview: CameraFrame,
    overview_divisor: f32,
}

impl Viewports {
    pub fn new(primary: CameraFrame, overview: CameraFrame, overview_divisor: f32) -> Self {
        Self {
            primary,
            overview,
            overview_divisor,
        }
    }

    pub fn from_tuning(tuning: &Tuning) -> Self {
        let [pw, ph] = tuning.primary_extent;
        let [ow, oh] = tuning.overview_extent;
        Self::new(
            CameraFrame::new(Rect::new(0.0, 0.0, pw, ph), Rect::new(0.0, 0.0, 1.0, 1.0)),
            CameraFrame::new(Rect::new(0.0, 0.0, ow, oh), tuning.overview_viewport_rect()),
            tuning.overview_resize_divisor,
        )
    }

    /// Center both cameras on `position`.
    pub fn recenter(&mut self, position: Vec2) {
        self.primary.recenter(position);
        self.overview.recenter(position);
    }

    /// Surface resized: primary shows it 1:1, overview a fixed fraction of it.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.primary.reset(Rect::new(0.0, 0.0, width, height));
        self.overview.reset(Rect::new(
            0.0,
            0.0,
            width / self.overview_divisor,
            height / self.overview_divisor,
        ));
    }
}

impl FromWorld for Viewports {
    fn from_world(world: &mut World) -> Self {
        let tuning = world.get_resource::<Tuning>().cloned().unwrap_or_default();
        Self::from_tuning(&tuning)
    }
}

/// Recenter stage: follow the controlled entity's post-integration position.
pub fn recenter_viewports(
    mut viewports: ResMut<Viewports>,
    player: Query<&Position, With<PlayerControlled>>,
) {
    let Some(pos) = player.iter().next() else { return; };
    viewports.recenter(pos.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn viewports() -> Viewports {
        Viewports::from_tuning(&Tuning::default())
    }

    #[test]
    fn initial_frames_follow_tuning() {
        let v = viewports();
        assert_eq!(v.primary.world_rect(), Rect::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(v.primary.viewport, Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(v.overview.world_rect(), Rect::new(0.0, 0.0, 1200.0, 900.0));
        assert_eq!(v.overview.viewport, Rect::new(0.75, 0.0, 1.0, 0.25));
    }

    #[test]
    fn recenter_moves_center_only() {
        let mut v = viewports();
        let before = v.clone();
        v.recenter(Vec2::new(10.0, -20.0));

        for (after, before) in [(v.primary, before.primary), (v.overview, before.overview)] {
            assert_eq!(after.center, Vec2::new(10.0, -20.0));
            assert_eq!(after.size, before.size);
            assert_eq!(after.viewport, before.viewport);
        }
    }

    #[test]
    fn resize_resets_world_rects_and_keeps_viewports() {
        let mut v = viewports();
        v.recenter(Vec2::new(55.0, 66.0));
        v.resize(1024.0, 768.0);

        assert_eq!(v.primary.world_rect(), Rect::new(0.0, 0.0, 1024.0, 768.0));
        assert_eq!(v.overview.world_rect(), Rect::new(0.0, 0.0, 256.0, 192.0));
        assert_eq!(v.primary.viewport, Rect::new(0.0, 0.0, 1.0, 1.0));
        assert_eq!(v.overview.viewport, Rect::new(0.75, 0.0, 1.0, 0.25));
    }

    #[test]
    fn physical_viewport_scales_to_surface() {
        let v = viewports();
        let surface = UVec2::new(800, 600);
        assert_eq!(v.primary.physical_viewport(surface), (UVec2::ZERO, surface));
        assert_eq!(
            v.overview.physical_viewport(surface),
            (UVec2::new(600, 0), UVec2::new(200, 150))
        );
    }

    #[test]
    fn physical_viewport_never_collapses() {
        let v = viewports();
        let (_, size) = v.overview.physical_viewport(UVec2::new(2, 2));
        assert_eq!(size, UVec2::ONE);
    }
}
