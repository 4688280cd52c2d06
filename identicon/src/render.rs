use crate::color::Color;
use crate::error::IdenticonError;
use crate::pixel_map::PixelMap;
use crate::CANVAS_SIZE;

/// One RGBA pixel.
pub type Rgba = [u8; 4];

/// Color of every pixel no rectangle touches: fully transparent.
pub const BACKGROUND: Rgba = [0, 0, 0, 0];

/// A rasterized identicon canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedIdenticon {
    /// Canvas width and height in pixels.
    pub size: u32,
    /// Pixel values in row-major order.
    pub pixels: Vec<Rgba>,
}

impl RenderedIdenticon {
    /// Get the pixel at position (x, y).
    pub fn pixel(&self, x: u32, y: u32) -> Rgba {
        self.pixels[(y * self.size + x) as usize]
    }

    /// Flatten to RGBA bytes (4 bytes per pixel).
    pub fn to_rgba(&self) -> Vec<u8> {
        self.pixels.iter().flatten().copied().collect()
    }

    /// Encode as an 8-bit RGBA PNG.
    ///
    /// The encoder writes no time or text chunks, so equal canvases always
    /// encode to equal bytes.
    pub fn encode_png(&self) -> Result<Vec<u8>, IdenticonError> {
        let mut out = Vec::new();

        let mut encoder = png::Encoder::new(&mut out, self.size, self.size);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&self.to_rgba())?;
        writer.finish()?;

        log::trace!("encoded {}x{} PNG, {} bytes", self.size, self.size, out.len());
        Ok(out)
    }
}

/// Paint every rectangle of `pixel_map` in `color` on a blank canvas.
///
/// Rectangles are filled from top-left to bottom-right inclusive of both
/// corners, clipped to the canvas. The inclusive far edge spills one pixel
/// into the neighbouring cell, which is the same color whenever that cell
/// is painted too.
pub fn render(color: Color, pixel_map: &PixelMap) -> RenderedIdenticon {
    let size = CANVAS_SIZE;
    let mut pixels = vec![BACKGROUND; (size * size) as usize];
    let fill = color.to_rgba();

    for rect in pixel_map.iter() {
        let x_end = rect.bottom_right.x.min(size - 1);
        let y_end = rect.bottom_right.y.min(size - 1);
        for y in rect.top_left.y..=y_end {
            let row = (y * size) as usize;
            pixels[row + rect.top_left.x as usize..=row + x_end as usize].fill(fill);
        }
    }

    RenderedIdenticon { size, pixels }
}
