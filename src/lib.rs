//! Chess Canvas - Chessboard rendering surface with sprite animation.
//!
//! This crate pairs a logical cell grid with a pixel image that can be
//! snapshotted and restored, and animates pieces through named states
//! using per-state sprite sequences.
//!
//! # Architecture
//!
//! - `raster`: Owned pixel buffers (load with fallback, copy, paste, tint)
//! - `board`: Cell geometry plus a live image and its construction snapshot
//! - `schema`: Configuration types (board geometry, playback options)
//! - `animation`: Sprite loading and frame selection over game time
//!
//! # Example
//!
//! ```rust,no_run
//! use chess_canvas::{
//!     animation::GraphicsFactory,
//!     board::Board,
//!     schema::{BoardConfig, GraphicsConfig},
//! };
//!
//! let config = BoardConfig::default();
//! let mut board = Board::open("board.png", &config)?;
//!
//! let cfg = GraphicsConfig { looping: true, fps: 6.0 };
//! let mut idle = GraphicsFactory::create(
//!     "pieces/QW/states/idle/sprites",
//!     Some(&cfg),
//!     config.cell_size(),
//!     "idle",
//! )?;
//!
//! idle.reset(0);
//! idle.update(500);
//! board.draw_sprite(&idle.current_img(), (0, 3));
//!
//! // Erase everything drawn since the board was loaded.
//! board.reset();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod animation;
pub mod board;
pub mod raster;
pub mod schema;

// Re-export commonly used types
pub use animation::{Graphics, GraphicsFactory, PieceGraphics};
pub use board::{Board, BoardError};
pub use raster::{PixelBuffer, RasterError};
pub use schema::{AnimationConfig, BoardConfig, CellSize, ConfigError, GraphicsConfig};
