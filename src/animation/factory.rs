//! Builds [`Graphics`] units from a sprite directory and playback options.

use std::path::PathBuf;

use super::Graphics;
use crate::schema::{AnimationConfig, CellSize, ConfigError, GraphicsConfig};

/// Constructor for state animations with resolved defaults.
pub struct GraphicsFactory;

impl GraphicsFactory {
    /// Create the animation for `state_name` from the frames in `sprites_dir`.
    ///
    /// A missing `cfg` behaves like an empty one: `loop = true`, `fps = 6.0`.
    /// Every argument is passed through to the result unchanged.
    pub fn create(
        sprites_dir: impl Into<PathBuf>,
        cfg: Option<&GraphicsConfig>,
        cell_size: CellSize,
        state_name: impl Into<String>,
    ) -> Result<Graphics, ConfigError> {
        let config = AnimationConfig {
            sprites_dir: sprites_dir.into(),
            graphics: cfg.copied().unwrap_or_default(),
            cell_size,
            state_name: state_name.into(),
        };
        log::debug!(
            "Creating '{}' animation from {} (loop={}, fps={})",
            config.state_name,
            config.sprites_dir.display(),
            config.graphics.looping,
            config.graphics.fps
        );
        Graphics::load(config)
    }

    /// Like [`GraphicsFactory::create`], with the options given as a raw JSON
    /// mapping such as `{"loop": false, "fps": 12.0}`.
    pub fn create_from_json(
        sprites_dir: impl Into<PathBuf>,
        cfg: Option<&serde_json::Value>,
        cell_size: CellSize,
        state_name: impl Into<String>,
    ) -> Result<Graphics, ConfigError> {
        let graphics = cfg
            .map(|value| serde_json::from_value::<GraphicsConfig>(value.clone()))
            .transpose()?;
        Self::create(sprites_dir, graphics.as_ref(), cell_size, state_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use serde_json::json;
    use std::path::Path;
    use tempfile::tempdir;

    #[test]
    fn test_create_defaults() {
        let g = GraphicsFactory::create("/mock/sprites", None, CellSize::default(), "").unwrap();
        assert!(g.looping());
        assert_eq!(g.fps(), 6.0);
        assert_eq!(g.cell_size(), CellSize::new(64, 64));
        assert_eq!(g.state_name(), "");
        assert_eq!(g.frame_count(), 0);
    }

    #[test]
    fn test_create_overrides() {
        let cfg = GraphicsConfig {
            looping: false,
            fps: 12.0,
        };
        let g = GraphicsFactory::create("/mock/sprites", Some(&cfg), CellSize::new(100, 75), "move")
            .unwrap();
        assert!(!g.looping());
        assert_eq!(g.fps(), 12.0);
        assert_eq!(g.cell_size(), CellSize::new(100, 75));
        assert_eq!(g.state_name(), "move");
    }

    #[test]
    fn test_create_passes_path_through() {
        for path in ["/absolute/path/sprites", "relative/path/sprites", "./current/sprites", "../parent/sprites"] {
            let g = GraphicsFactory::create(path, None, CellSize::default(), "idle").unwrap();
            assert_eq!(g.sprites_dir(), Path::new(path));
        }
    }

    #[test]
    fn test_create_from_json() {
        let cfg = json!({"loop": false, "fps": 12.0, "unused_param": "ignored"});
        let g = GraphicsFactory::create_from_json("s", Some(&cfg), CellSize::default(), "jump")
            .unwrap();
        assert!(!g.looping());
        assert_eq!(g.fps(), 12.0);

        let g = GraphicsFactory::create_from_json("s", Some(&json!({})), CellSize::default(), "")
            .unwrap();
        assert!(g.looping());
        assert_eq!(g.fps(), 6.0);

        let g = GraphicsFactory::create_from_json("s", None, CellSize::default(), "").unwrap();
        assert!(g.looping());
        assert_eq!(g.fps(), 6.0);
    }

    #[test]
    fn test_create_rejects_bad_values() {
        let cfg = GraphicsConfig {
            looping: true,
            fps: -1.0,
        };
        assert!(matches!(
            GraphicsFactory::create("s", Some(&cfg), CellSize::default(), ""),
            Err(ConfigError::InvalidFps(_))
        ));
        assert!(matches!(
            GraphicsFactory::create("s", None, CellSize::new(64, 0), ""),
            Err(ConfigError::InvalidCellSize { .. })
        ));
        assert!(matches!(
            GraphicsFactory::create_from_json("s", Some(&json!({"fps": "fast"})), CellSize::default(), ""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_create_loads_frames() {
        let dir = tempdir().unwrap();
        for i in 0..4 {
            RgbaImage::from_pixel(8, 8, Rgba([i, i, i, 255]))
                .save(dir.path().join(format!("{i}.png")))
                .unwrap();
        }

        let mut g = GraphicsFactory::create(dir.path(), None, CellSize::new(8, 8), "idle").unwrap();
        assert_eq!(g.frame_count(), 4);

        g.reset(0);
        g.update(2 * g.frame_duration_ms());
        assert_eq!(g.current_img().get(0, 0, 0), Some(2));
    }
}
