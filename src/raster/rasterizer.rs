use super::frame::*;

use crate::color::*;
use crate::definition::*;
use crate::geometry::*;
use crate::ramp::*;

use smallvec::*;

///
/// Rasterizes a gradient definition using the supplied effective palette
///
/// Returns `None` when the definition is not ready to render (a size that is
/// not positive in both dimensions, or no colours): this is the expected state
/// during setup, not an error. The definition is never mutated, and
/// rasterizing the same definition twice produces bit-identical frames.
///
pub fn rasterize(definition: &GradientDefinition, effective_colors: &[Color]) -> Option<RasterResult> {
    if !definition.size().is_renderable() || effective_colors.is_empty() {
        return None;
    }

    let fingerprint = definition.fingerprint(effective_colors, None);
    let frame       = rasterize_frame(definition, effective_colors);

    Some(RasterResult::new(fingerprint, frame))
}

///
/// Rasterizes a border for a gradient definition
///
/// With per-edge colours set this draws four flat strips of the stroke width
/// (falling back to a one pixel hairline when the host reports no outline
/// width); otherwise the shared gradient is rasterized as for a fill. The
/// border parameters take part in the result's fingerprint either way.
///
pub fn rasterize_border(definition: &GradientDefinition, border: &BorderPaint, effective_colors: &[Color]) -> Option<RasterResult> {
    if !definition.size().is_renderable() {
        return None;
    }

    let fingerprint = definition.fingerprint(effective_colors, Some(border));

    if let Some(edge_colors) = &border.edge_colors {
        let frame = rasterize_edges(definition.size(), edge_colors, border.stroke_width);
        Some(RasterResult::new(fingerprint, frame))
    } else {
        if effective_colors.is_empty() {
            return None;
        }

        let frame = rasterize_frame(definition, effective_colors);
        Some(RasterResult::new(fingerprint, frame))
    }
}

///
/// Computes the four strip rectangles for a separate-colour border: top, right,
/// bottom and left, with the side strips inset by the top and bottom strips
///
pub fn border_strips(size: GradientSize, stroke_width: f32) -> SmallVec<[PixelRect; 4]> {
    // Zero outline width renders as a hairline
    let stroke  = if stroke_width <= 0.0 { 1.0 } else { stroke_width };
    let stroke  = stroke.round().max(1.0) as u32;

    let width   = size.pixel_width() as u32;
    let height  = size.pixel_height() as u32;
    let inset   = height.saturating_sub(stroke * 2);

    smallvec![
        PixelRect { x: 0,                               y: 0,                               width: width,   height: stroke },
        PixelRect { x: width.saturating_sub(stroke),    y: stroke.min(height),              width: stroke,  height: inset },
        PixelRect { x: 0,                               y: height.saturating_sub(stroke),   width: width,   height: stroke },
        PixelRect { x: 0,                               y: stroke.min(height),              width: stroke,  height: inset },
    ]
}

///
/// Interpolates a gradient definition into a new frame
///
fn rasterize_frame(definition: &GradientDefinition, effective_colors: &[Color]) -> RasterFrame {
    let width           = definition.size().pixel_width();
    let height          = definition.size().pixel_height();
    let ramp            = color_ramp(effective_colors, definition.locations());
    let draw_options    = definition.draw_options();

    let mut frame       = RasterFrame::new(width, height);

    match definition.mode() {
        GradientMode::Linear => {
            let GradientPoint(start_x, start_y) = definition.start();
            let GradientPoint(end_x, end_y)     = definition.end();

            let axis_x  = end_x - start_x;
            let axis_y  = end_y - start_y;
            let len_sq  = axis_x*axis_x + axis_y*axis_y;

            for y in 0..height {
                for x in 0..width {
                    // Project the pixel centre onto the start-end axis
                    let pos = if len_sq > 0.0 {
                        (((x as f32) + 0.5 - start_x) * axis_x + ((y as f32) + 0.5 - start_y) * axis_y) / len_sq
                    } else {
                        0.0
                    };

                    if let Some(entry) = sample_ramp(&ramp, pos, draw_options) {
                        frame.set_pixel(x, y, components_to_bytes(entry));
                    }
                }
            }
        }

        GradientMode::Radial => {
            let start   = definition.start();
            let center  = definition.size().center();
            let radius  = (definition.size().0).min(definition.size().1) / 2.0;

            for y in 0..height {
                for x in 0..width {
                    let point = GradientPoint((x as f32) + 0.5, (y as f32) + 0.5);

                    if let Some(pos) = radial_position(point, start, center, radius) {
                        if let Some(entry) = sample_ramp(&ramp, pos, draw_options) {
                            frame.set_pixel(x, y, components_to_bytes(entry));
                        }
                    }
                }
            }
        }
    }

    frame
}

///
/// Solves for the position of a point within a radial gradient: the largest t
/// where the point lies on the circle whose centre moves from `start` to
/// `center` and whose radius grows from 0 to `radius`
///
/// Returns `None` for points no circle of the family passes through.
///
fn radial_position(point: GradientPoint, start: GradientPoint, center: GradientPoint, radius: f32) -> Option<f32> {
    let offset_x    = point.0 - start.0;
    let offset_y    = point.1 - start.1;
    let drift_x     = center.0 - start.0;
    let drift_y     = center.1 - start.1;

    // |q - t*v|^2 = (t*r)^2 expands to a quadratic in t
    let a           = drift_x*drift_x + drift_y*drift_y - radius*radius;
    let b           = -2.0 * (offset_x*drift_x + offset_y*drift_y);
    let c           = offset_x*offset_x + offset_y*offset_y;

    if a.abs() < 1e-6 {
        // Degenerate quadratic: at most one circle passes through the point
        if b.abs() < 1e-6 {
            if c < 1e-6 { Some(0.0) } else { None }
        } else {
            Some(-c / b)
        }
    } else {
        let discriminant = b*b - 4.0*a*c;
        if discriminant < 0.0 {
            return None;
        }

        let root    = discriminant.sqrt();
        let t1      = (-b + root) / (2.0 * a);
        let t2      = (-b - root) / (2.0 * a);

        Some(t1.max(t2))
    }
}

///
/// Fills the four border strips with their edge colours
///
fn rasterize_edges(size: GradientSize, edge_colors: &EdgeColors, stroke_width: f32) -> RasterFrame {
    let strips  = border_strips(size, stroke_width);
    let colors  = [edge_colors.top, edge_colors.right, edge_colors.bottom, edge_colors.left];

    let mut frame = RasterFrame::new(size.pixel_width(), size.pixel_height());

    for (strip, color) in strips.iter().zip(colors.iter()) {
        frame.fill_rect(*strip, components_to_bytes(quad(color.to_rgba_components())));
    }

    frame
}

///
/// Converts a f32 component between 0 and 1 to a byte
///
#[inline]
fn component_to_byte(component: f32) -> u8 {
    if component < 0.0 {
        0
    } else if component > 1.0 {
        255
    } else {
        (component * 255.0) as u8
    }
}

///
/// Converts a straight-alpha RGBA quad to bytes
///
#[inline]
fn components_to_bytes(components: [f32; 4]) -> [u8; 4] {
    [
        component_to_byte(components[0]),
        component_to_byte(components[1]),
        component_to_byte(components[2]),
        component_to_byte(components[3]),
    ]
}

#[inline]
fn quad((r, g, b, a): (f32, f32, f32, f32)) -> [f32; 4] {
    [r, g, b, a]
}
