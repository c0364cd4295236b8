//! RGBA pixel buffers.

use std::{fs::File, io::BufWriter, path::Path};
use rgb::{ComponentBytes, RGBA8};
use tracing::info;
use crate::{font, Result};

/// A rectangle of RGBA pixels stored row by row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<RGBA8>, // Invariant: len = width * height
}

impl Canvas {
    /// Return a `width` × `height` canvas filled with `fill`.
    pub fn new(width: u32, height: u32, fill: RGBA8) -> Self {
        Canvas { width, height,
                 pixels: vec![fill; width as usize * height as usize] }
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn pixels(&self) -> &[RGBA8] { &self.pixels }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// The pixel at column `x` and row `y`, if inside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<RGBA8> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    /// Set the pixel (`x`, `y`).  Pixels outside the canvas are ignored.
    pub fn put_pixel(&mut self, x: u32, y: u32, c: RGBA8) {
        if let Some(i) = self.offset(x, y) {
            self.pixels[i] = c;
        }
    }

    /// Paint the whole column `x` with `c`.
    pub fn fill_column(&mut self, x: u32, c: RGBA8) {
        if x >= self.width { return }
        let w = self.width as usize;
        for px in self.pixels.iter_mut().skip(x as usize).step_by(w) {
            *px = c;
        }
    }

    /// Copy `src` with its top left corner at (`x`, `y`), clipping
    /// whatever falls outside `self`.
    pub fn blit(&mut self, src: &Canvas, x: u32, y: u32) {
        if x >= self.width || y >= self.height { return }
        let w = src.width.min(self.width - x) as usize;
        let h = src.height.min(self.height - y);
        for row in 0 .. h {
            let s = row as usize * src.width as usize;
            let d = (y + row) as usize * self.width as usize + x as usize;
            self.pixels[d .. d + w].copy_from_slice(&src.pixels[s .. s + w]);
        }
    }

    /// Write `text` with its top left corner at (`x`, `y`), each font
    /// pixel being a `scale` × `scale` square.
    pub fn draw_text(&mut self, text: &str, x: u32, y: u32, c: RGBA8,
                     scale: u32) {
        let scale = scale.max(1);
        let advance = font::ADVANCE as u32 * scale;
        let mut x0 = x;
        for ch in text.chars() {
            let g = font::glyph(ch);
            for gy in 0 .. font::HEIGHT {
                for gx in 0 .. font::WIDTH {
                    if !font::is_set(&g, gx, gy) { continue }
                    let px = x0.saturating_add(gx as u32 * scale);
                    let py = y.saturating_add(gy as u32 * scale);
                    for dy in 0 .. scale {
                        for dx in 0 .. scale {
                            self.put_pixel(px.saturating_add(dx),
                                           py.saturating_add(dy), c);
                        }
                    }
                }
            }
            x0 = x0.saturating_add(advance);
            if x0 >= self.width { break }
        }
    }

    /// Encode the canvas as an 8 bit RGBA PNG file.
    pub fn write_png(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let fh = BufWriter::new(File::create(path)?);
        let mut encoder = png::Encoder::new(fh, self.width, self.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(self.pixels.as_bytes())?;
        writer.finish()?;
        info!(path = %path.display(), width = self.width,
              height = self.height, "wrote PNG");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: RGBA8 = RGBA8::new(0, 0, 0, 255);
    const WHITE: RGBA8 = RGBA8::new(255, 255, 255, 255);

    #[test]
    fn columns_and_pixels() {
        let mut c = Canvas::new(4, 3, BLACK);
        c.fill_column(2, WHITE);
        for y in 0 .. 3 {
            assert_eq!(c.pixel(2, y), Some(WHITE));
            assert_eq!(c.pixel(1, y), Some(BLACK));
        }
        assert_eq!(c.pixel(4, 0), None);
        c.put_pixel(10, 10, WHITE); // ignored
        c.fill_column(7, WHITE); // ignored
        assert_eq!(c.pixels().iter().filter(|&&p| p == WHITE).count(), 3);
    }

    #[test]
    fn blit_clips() {
        let mut dst = Canvas::new(5, 5, BLACK);
        let src = Canvas::new(3, 3, WHITE);
        dst.blit(&src, 3, 3);
        assert_eq!(dst.pixel(3, 3), Some(WHITE));
        assert_eq!(dst.pixel(4, 4), Some(WHITE));
        assert_eq!(dst.pixel(2, 2), Some(BLACK));
        assert_eq!(dst.pixels().iter().filter(|&&p| p == WHITE).count(), 4);
        dst.blit(&src, 5, 0); // fully outside
        assert_eq!(dst.pixels().iter().filter(|&&p| p == WHITE).count(), 4);
    }

    #[test]
    fn text_is_drawn_and_clipped() {
        let mut c = Canvas::new(40, 20, BLACK);
        c.draw_text("L", 1, 1, WHITE, 2);
        // Vertical bar of the L, then its foot.
        assert_eq!(c.pixel(1, 1), Some(WHITE));
        assert_eq!(c.pixel(2, 14), Some(WHITE));
        assert_eq!(c.pixel(10, 14), Some(WHITE));
        assert_eq!(c.pixel(3, 1), Some(BLACK));
        let mut small = Canvas::new(3, 3, BLACK);
        small.draw_text("RGB", 0, 0, WHITE, 1);
        assert_eq!(small.pixel(0, 0), Some(WHITE));
    }

    #[test]
    fn png_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.png");
        let mut c = Canvas::new(7, 2, BLACK);
        c.put_pixel(6, 1, RGBA8::new(1, 2, 3, 4));
        c.write_png(&path).unwrap();
        let decoder = png::Decoder::new(std::io::BufReader::new(
            File::open(&path).unwrap()));
        let reader = decoder.read_info().unwrap();
        let info = reader.info();
        assert_eq!((info.width, info.height), (7, 2));
        assert_eq!(info.color_type, png::ColorType::Rgba);
    }
}
