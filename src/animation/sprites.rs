//! Sprite directory enumeration.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::raster::PixelBuffer;
use crate::schema::CellSize;

/// File extensions recognised as frames (compared case-insensitively).
pub const SPRITE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

fn is_sprite(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SPRITE_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s)))
}

/// Frame files in `dir`, sorted by file name.
pub fn sprite_paths(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_sprite(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Load every frame in `dir`, each scaled to `cell_size`.
///
/// An unreadable directory yields no frames; an unreadable frame yields a
/// blank one, so frame numbering always matches the files on disk.
pub fn load_frames(dir: &Path, cell_size: CellSize) -> Vec<PixelBuffer> {
    let paths = match sprite_paths(dir) {
        Ok(paths) => paths,
        Err(e) => {
            log::warn!("No sprites loaded from {}: {}", dir.display(), e);
            return Vec::new();
        }
    };
    let frames: Vec<PixelBuffer> = paths
        .iter()
        .map(|path| PixelBuffer::read_scaled(path, cell_size.as_size()))
        .collect();
    log::debug!("Loaded {} frames from {}", frames.len(), dir.display());
    frames
}
