//! Sprite animation for piece states.
//!
//! Each game-state of a piece ("idle", "move", "jump", ...) owns a directory
//! of frame images. [`GraphicsFactory`] turns such a directory plus its
//! playback options into a [`Graphics`] unit; the render loop then drives
//! it with game time:
//!
//! ```text
//! sprites dir + GraphicsConfig --GraphicsFactory::create--> Graphics
//! Graphics::reset(t0) ; Graphics::update(now) ; Graphics::current_img()
//! ```
//!
//! Frame `n` is shown from `t0 + n * frame_duration_ms`, where
//! `frame_duration_ms = max(1, trunc(1000 / fps))`. Looping animations wrap
//! to the first frame; the others hold their last frame.

mod factory;
mod graphics;
mod library;
mod sprites;

pub use factory::GraphicsFactory;
pub use graphics::Graphics;
pub use library::{IDLE_STATE, PieceGraphics};
pub use sprites::{SPRITE_EXTENSIONS, load_frames, sprite_paths};
