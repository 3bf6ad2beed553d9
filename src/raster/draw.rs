//! Compositing helpers: pasting one buffer onto another and tinting.

use super::PixelBuffer;

impl PixelBuffer {
    /// Copy this buffer onto `target` with its top-left corner at (x, y).
    ///
    /// The pasted region is clipped to the target on all sides. Nothing is
    /// drawn when either buffer is absent, the region falls entirely outside
    /// the target, or the channel counts differ.
    pub fn draw_on(&self, target: &mut PixelBuffer, x: i64, y: i64) {
        if self.channels() != target.channels() {
            if !self.is_absent() && !target.is_absent() {
                log::debug!(
                    "Skipping draw: {} channel source onto {} channel target",
                    self.channels(),
                    target.channels()
                );
            }
            return;
        }

        let channels = self.channels();
        let (src_w, src_h) = (self.width() as i64, self.height() as i64);
        let (dst_w, dst_h) = (target.width() as i64, target.height() as i64);

        if x >= dst_w || y >= dst_h || x + src_w <= 0 || y + src_h <= 0 {
            return;
        }

        let src_x1 = (-x).max(0);
        let src_y1 = (-y).max(0);
        let src_x2 = src_w.min(dst_w - x);
        let src_y2 = src_h.min(dst_h - y);
        if src_x2 <= src_x1 || src_y2 <= src_y1 {
            return;
        }

        let dst_x1 = x.max(0);
        let dst_y1 = y.max(0);

        let (Some(src), Some(dst)) = (self.pixels(), target.pixels_mut()) else {
            return;
        };

        let row_len = (src_x2 - src_x1) as usize * channels;
        for row in src_y1..src_y2 {
            let src_start = (row * src_w + src_x1) as usize * channels;
            let dst_row = dst_y1 + (row - src_y1);
            let dst_start = (dst_row * dst_w + dst_x1) as usize * channels;
            dst[dst_start..dst_start + row_len]
                .copy_from_slice(&src[src_start..src_start + row_len]);
        }
    }

    /// Blue-tinted copy used to mark resting pieces.
    ///
    /// `intensity` is clamped to [0, 1]; zero returns an unchanged copy.
    /// Buffers with fewer than three channels are returned unchanged.
    pub fn tinted(&self, intensity: f32) -> PixelBuffer {
        let intensity = intensity.clamp(0.0, 1.0);
        let mut tinted = self.copy();
        let channels = tinted.channels();
        if intensity == 0.0 || channels < 3 {
            return tinted;
        }

        let warm_scale = 1.0 - 0.7 * intensity;
        let blue_scale = 1.0 + 0.8 * intensity;
        let blue_offset = 80.0 * intensity;

        if let Some(pixels) = tinted.pixels_mut() {
            for px in pixels.chunks_exact_mut(channels) {
                px[0] = (px[0] as f32 * warm_scale) as u8;
                px[1] = (px[1] as f32 * warm_scale) as u8;
                px[2] = (px[2] as f32 * blue_scale + blue_offset).min(255.0) as u8;
            }
        }
        tinted
    }
}
