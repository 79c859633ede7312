//! The drawing surface contract and a headless implementation.

use crate::core::geo::PixelPoint;
use image::RgbaImage;

/// A raster surface that can draw a decoded image at an integer pixel
/// offset. This is the only drawing primitive the engine uses; hosts wrap
/// their actual canvas (DOM, framebuffer, GPU texture upload) behind it.
pub trait Canvas {
    fn draw_image(&mut self, image: &RgbaImage, pos: PixelPoint);
}

/// In-memory canvas backed by an RGBA buffer, for headless rendering and
/// tests. Blits are clipped at the surface edges.
pub struct PixelCanvas {
    buffer: RgbaImage,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            buffer: RgbaImage::new(width, height),
        }
    }

    /// The assembled surface
    pub fn image(&self) -> &RgbaImage {
        &self.buffer
    }
}

impl Canvas for PixelCanvas {
    fn draw_image(&mut self, image: &RgbaImage, pos: PixelPoint) {
        let (w, h) = (self.buffer.width() as i64, self.buffer.height() as i64);
        for (sx, sy, pixel) in image.enumerate_pixels() {
            let dx = pos.x as i64 + sx as i64;
            let dy = pos.y as i64 + sy as i64;
            if dx >= 0 && dy >= 0 && dx < w && dy < h {
                self.buffer.put_pixel(dx as u32, dy as u32, *pixel);
            }
        }
    }
}
