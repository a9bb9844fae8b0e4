mod frame;
mod rasterizer;

#[cfg(feature = "render_png")]
mod png_render;

pub use self::frame::*;
pub use self::rasterizer::*;
