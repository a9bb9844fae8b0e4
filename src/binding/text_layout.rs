use super::host::*;

use crate::geometry::*;

///
/// Measures the intrinsic size of a host's text content
///
/// This is the seam where a toolkit plugs its real text shaping in: the text
/// variant asks its measurer for the content size on every text or font
/// change, passing the container's content width when the host lays text out
/// over multiple lines.
///
pub trait TextMeasurer: Send {
    fn measure(&self, text: &str, font: &FontSpec, wrap_width: Option<f32>) -> GradientSize;
}

///
/// Fixed-advance text measurer used when no toolkit shaper is registered
///
/// Every character advances by the same fraction of the em size, which keeps
/// measurement deterministic: a shorter text always measures strictly
/// narrower, which is all the binding needs to track content changes.
///
pub struct EmSquareMeasurer {
    /// Horizontal advance per character, as a fraction of the em size
    pub advance_per_em: f32,

    /// Line height, as a fraction of the em size
    pub line_height_per_em: f32,
}

impl Default for EmSquareMeasurer {
    fn default() -> EmSquareMeasurer {
        EmSquareMeasurer {
            advance_per_em:     0.5,
            line_height_per_em: 1.2,
        }
    }
}

impl TextMeasurer for EmSquareMeasurer {
    fn measure(&self, text: &str, font: &FontSpec, wrap_width: Option<f32>) -> GradientSize {
        let num_chars = text.chars().count();
        if num_chars == 0 {
            return GradientSize(0.0, 0.0);
        }

        let advance     = font.em_size * self.advance_per_em;
        let line_height = font.em_size * self.line_height_per_em;

        match wrap_width {
            None => {
                GradientSize((num_chars as f32) * advance, line_height)
            }

            Some(wrap_width) => {
                let chars_per_line  = ((wrap_width / advance).floor() as usize).max(1);
                let num_lines       = (num_chars + chars_per_line - 1) / chars_per_line;
                let widest_line     = num_chars.min(chars_per_line);

                GradientSize((widest_line as f32) * advance, (num_lines as f32) * line_height)
            }
        }
    }
}
