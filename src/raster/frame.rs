use crate::definition::*;
use crate::geometry::*;

///
/// A rasterized pixel buffer: straight-alpha RGBA, 8 bits per channel, exactly
/// the gradient's size rounded to the pixel grid
///
/// Frames compare by value so that determinism can be checked directly.
///
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct RasterFrame {
    width:  usize,
    height: usize,
    pixels: Vec<[u8; 4]>,
}

impl RasterFrame {
    ///
    /// Creates a transparent frame of the given pixel dimensions
    ///
    pub (crate) fn new(width: usize, height: usize) -> RasterFrame {
        RasterFrame {
            width:  width,
            height: height,
            pixels: vec![[0, 0, 0, 0]; width * height],
        }
    }

    pub fn width(&self) -> usize    { self.width }
    pub fn height(&self) -> usize   { self.height }

    ///
    /// The pixels of this frame in row-major order
    ///
    pub fn pixels(&self) -> &[[u8; 4]] {
        &self.pixels
    }

    ///
    /// The pixel at a coordinate (0,0 is the top-left corner)
    ///
    #[inline]
    pub fn pixel_at(&self, x: usize, y: usize) -> [u8; 4] {
        self.pixels[y * self.width + x]
    }

    #[inline]
    pub (crate) fn set_pixel(&mut self, x: usize, y: usize, pixel: [u8; 4]) {
        self.pixels[y * self.width + x] = pixel;
    }

    ///
    /// Fills a rectangle with a flat colour, clipped to the frame
    ///
    pub (crate) fn fill_rect(&mut self, rect: PixelRect, pixel: [u8; 4]) {
        let x1 = (rect.x as usize).min(self.width);
        let y1 = (rect.y as usize).min(self.height);
        let x2 = ((rect.x + rect.width) as usize).min(self.width);
        let y2 = ((rect.y + rect.height) as usize).min(self.height);

        for y in y1..y2 {
            for x in x1..x2 {
                self.pixels[y * self.width + x] = pixel;
            }
        }
    }

    ///
    /// The frame's pixels as a flat byte buffer (R, G, B, A per pixel)
    ///
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 4);

        for pixel in self.pixels.iter() {
            bytes.extend_from_slice(pixel);
        }

        bytes
    }
}

///
/// The result of rasterizing a gradient definition: an immutable paintable
/// artifact plus the fingerprint it was computed from
///
/// Consumers receive copies; a result stored in the cache is never mutated.
///
#[derive(Clone, PartialEq, Debug)]
pub struct RasterResult {
    fingerprint: GradientFingerprint,
    frame:       RasterFrame,
}

impl RasterResult {
    pub (crate) fn new(fingerprint: GradientFingerprint, frame: RasterFrame) -> RasterResult {
        RasterResult { fingerprint, frame }
    }

    ///
    /// The fingerprint of the definition this result was rasterized from
    ///
    pub fn fingerprint(&self) -> &GradientFingerprint {
        &self.fingerprint
    }

    ///
    /// The rasterized pixel buffer
    ///
    pub fn frame(&self) -> &RasterFrame {
        &self.frame
    }
}
