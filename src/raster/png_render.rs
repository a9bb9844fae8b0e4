use super::frame::*;

use std::io::{Write, BufWriter};

impl RasterFrame {
    ///
    /// Writes this frame to a stream as an RGBA PNG image
    ///
    pub fn to_png<TStream: Write>(&self, target: TStream) {
        let target      = BufWriter::new(target);
        let mut encoder = png::Encoder::new(target, self.width() as u32, self.height() as u32);

        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&self.to_rgba_bytes()).unwrap();
    }
}
