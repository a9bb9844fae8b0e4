///
/// A point in a gradient's own coordinate space (not device pixels)
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct GradientPoint(pub f32, pub f32);

///
/// The width and height of a gradient's rendering target
///
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct GradientSize(pub f32, pub f32);

///
/// A rectangle on the pixel grid, used for the flat strips drawn by the border rasterizer
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct PixelRect {
    pub x:      u32,
    pub y:      u32,
    pub width:  u32,
    pub height: u32,
}

impl GradientSize {
    ///
    /// True if this size can be rasterized. A non-renderable size is the expected
    /// 'not yet ready' state during setup rather than an error.
    ///
    #[inline]
    pub fn is_renderable(&self) -> bool {
        self.0 > 0.0 && self.1 > 0.0
    }

    ///
    /// Width rounded to the target's pixel grid
    ///
    #[inline]
    pub fn pixel_width(&self) -> usize {
        self.0.max(0.0).round() as usize
    }

    ///
    /// Height rounded to the target's pixel grid
    ///
    #[inline]
    pub fn pixel_height(&self) -> usize {
        self.1.max(0.0).round() as usize
    }

    ///
    /// The geometric centre of this size (the end centre of radial gradients)
    ///
    #[inline]
    pub fn center(&self) -> GradientPoint {
        GradientPoint(self.0 / 2.0, self.1 / 2.0)
    }
}
