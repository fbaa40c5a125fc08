use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Speed applied per held direction, in distance units per second.
pub const DEFAULT_MOVE_SPEED: f32 = 100.0;

#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse tuning file: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("failed to serialize tuning: {0}")]
    Serialize(#[from] ron::Error),
}

/// All tunable parameters, loaded from tuning.ron.
#[derive(Debug, Clone, PartialEq, Resource, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub move_speed: f32,
    pub window_title: String,
    pub window_width: u32,
    pub window_height: u32,
    /// Initial world extent of the primary camera (width, height).
    pub primary_extent: [f32; 2],
    /// Initial world extent of the overview camera (width, height).
    pub overview_extent: [f32; 2],
    /// Overview inset on the surface, normalized (x, y, width, height).
    pub overview_viewport: [f32; 4],
    /// On resize the overview world extent becomes surface size / divisor.
    pub overview_resize_divisor: f32,
    /// Upper bound for a frame's delta-time in seconds. `None` passes it through.
    pub max_frame_delta: Option<f32>,
    pub sprite_path: String,
    /// Tile inside the sprite sheet (x, y, width, height) in pixels.
    pub sprite_tile: [f32; 4],
    /// Top-left corner of the decoration's bounding box.
    pub decoration_origin: [f32; 2],
    pub decoration_radius: f32,
    pub overlay_font_size: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            window_title: "TestGame".into(),
            window_width: 800,
            window_height: 600,
            primary_extent: [800.0, 600.0],
            overview_extent: [1200.0, 900.0],
            overview_viewport: [0.75, 0.0, 0.25, 0.25],
            overview_resize_divisor: 4.0,
            max_frame_delta: None,
            sprite_path: "textures/colored.png".into(),
            sprite_tile: [4.0 * 17.0, 2.0 * 17.0, 16.0, 16.0],
            decoration_origin: [300.0, 200.0],
            decoration_radius: 100.0,
            overlay_font_size: 12.0,
        }
    }
}

impl Tuning {
    /// Get the data directory for tuning files.
    pub fn data_dir() -> PathBuf {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        base.join("dual_view")
    }

    /// Path to the tuning file.
    pub fn file_path() -> PathBuf {
        Self::data_dir().join("tuning.ron")
    }

    /// Read and parse a tuning file. Missing fields fall back to defaults.
    pub fn load(path: &Path) -> Result<Self, TuningError> {
        let contents = std::fs::read_to_string(path).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(ron::from_str(&contents)?)
    }

    /// Write this tuning to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), TuningError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| TuningError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let pretty = ron::ser::PrettyConfig::default();
        let s = ron::ser::to_string_pretty(self, pretty)?;
        std::fs::write(path, s).map_err(|source| TuningError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from file, or create default if not found.
    pub fn load_or_default() -> Self {
        Self::load_or_default_from(&Self::file_path())
    }

    pub fn load_or_default_from(path: &Path) -> Self {
        if path.exists() {
            match Self::load(path) {
                Ok(tuning) => return tuning,
                Err(e) => warn!("{e}, using defaults"),
            }
        }
        let tuning = Self::default();
        tuning.save(path);
        tuning
    }

    /// Save to `path`, logging instead of failing.
    pub fn save(&self, path: &Path) {
        if let Err(e) = self.save_to(path) {
            warn!("Failed to write tuning: {e}");
        }
    }

    /// Reload from file (called by key press).
    pub fn reload(&mut self) {
        *self = Self::load_or_default();
        info!("Tuning reloaded");
    }

    pub fn overview_viewport_rect(&self) -> Rect {
        let [x, y, w, h] = self.overview_viewport;
        Rect::new(x, y, x + w, y + h)
    }

    pub fn sprite_tile_rect(&self) -> Rect {
        let [x, y, w, h] = self.sprite_tile;
        Rect::new(x, y, x + w, y + h)
    }

    /// Center of the decoration circle in simulation space.
    pub fn decoration_center(&self) -> Vec2 {
        Vec2::from(self.decoration_origin) + Vec2::splat(self.decoration_radius)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let tuning: Tuning = ron::from_str("(move_speed: 250.0)").unwrap();
        assert_eq!(tuning.move_speed, 250.0);
        assert_eq!(tuning.overview_resize_divisor, 4.0);
        assert_eq!(tuning.max_frame_delta, None);
    }

    #[test]
    fn save_then_load_restores_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tuning.ron");

        let tuning = Tuning {
            move_speed: 42.0,
            max_frame_delta: Some(0.25),
            ..Tuning::default()
        };
        tuning.save_to(&path).unwrap();

        assert_eq!(Tuning::load(&path).unwrap(), tuning);
    }

    #[test]
    fn unparsable_file_is_replaced_by_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tuning.ron");
        std::fs::write(&path, "not ron at all {").unwrap();

        assert!(matches!(Tuning::load(&path), Err(TuningError::Parse(_))));
        assert_eq!(Tuning::load_or_default_from(&path), Tuning::default());
        assert_eq!(Tuning::load(&path).unwrap(), Tuning::default());
    }

    #[test]
    fn missing_file_reports_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Tuning::load(&dir.path().join("absent.ron")).unwrap_err();
        assert!(matches!(err, TuningError::Io { .. }));
    }

    #[test]
    fn decoration_center_is_offset_by_radius() {
        let tuning = Tuning::default();
        assert_eq!(tuning.decoration_center(), Vec2::new(400.0, 300.0));
        assert_eq!(tuning.overview_viewport_rect(), Rect::new(0.75, 0.0, 1.0, 0.25));
    }
}
