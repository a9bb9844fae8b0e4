use crate::color::*;
use crate::definition::*;

use itertools::*;

use std::cmp::Ordering;

/// Number of entries in the interpolation table built for a gradient
pub const RAMP_SIZE: usize = 1024;

///
/// Builds the interpolation table for a palette: `RAMP_SIZE` straight-alpha
/// RGBA entries covering positions 0-1
///
/// When no locations are supplied the colours are spaced evenly across 0-1.
/// Stops are sorted by position; positions before the first stop take the
/// first colour and positions after the last stop take the last colour. A
/// single colour produces a flat table, and an empty palette a transparent one.
///
pub fn color_ramp(colors: &[Color], locations: Option<&[f32]>) -> Vec<[f32; 4]> {
    // Pair every colour with its stop position, evenly spaced when no locations are given
    let mut stops = colors.iter()
        .enumerate()
        .map(|(idx, color)| {
            let position = match locations {
                Some(locations) => locations[idx],
                None            => if colors.len() <= 1 { 0.0 } else { (idx as f32) / ((colors.len() - 1) as f32) },
            };

            (position, color.to_rgba_components())
        })
        .collect::<Vec<_>>();

    stops.sort_by(|(pos_a, _), (pos_b, _)| pos_a.partial_cmp(pos_b).unwrap_or(Ordering::Equal));

    if stops.is_empty() {
        return vec![[0.0, 0.0, 0.0, 0.0]; RAMP_SIZE];
    }

    let mut ramp = vec![[0.0, 0.0, 0.0, 0.0]; RAMP_SIZE];

    for (idx, entry) in ramp.iter_mut().enumerate() {
        let pos = (idx as f32) / ((RAMP_SIZE - 1) as f32);
        *entry  = sample_stops(&stops, pos);
    }

    ramp
}

///
/// Samples the interpolation table at a position along the gradient axis
///
/// Positions outside 0-1 extend the nearest endpoint colour flat when the
/// matching draw option flag is set, and produce no sample (transparent)
/// otherwise.
///
#[inline]
pub fn sample_ramp(ramp: &[[f32; 4]], pos: f32, draw_options: GradientDrawOptions) -> Option<[f32; 4]> {
    if pos < 0.0 {
        if draw_options.extend_before_start { Some(ramp[0]) } else { None }
    } else if pos > 1.0 {
        if draw_options.extend_after_end { Some(ramp[ramp.len()-1]) } else { None }
    } else {
        let idx = (pos * ((ramp.len() - 1) as f32)).round() as usize;
        Some(ramp[idx.min(ramp.len()-1)])
    }
}

///
/// Interpolates the colour at a position from a sorted list of stops
///
fn sample_stops(stops: &[(f32, (f32, f32, f32, f32))], pos: f32) -> [f32; 4] {
    let (first_pos, first_color)    = stops[0];
    let (last_pos, last_color)      = stops[stops.len()-1];

    if pos <= first_pos {
        return components(first_color);
    }
    if pos >= last_pos {
        return components(last_color);
    }

    for ((start_pos, (r1, g1, b1, a1)), (end_pos, (r2, g2, b2, a2))) in stops.iter().tuple_windows() {
        if pos >= *start_pos && pos <= *end_pos && end_pos > start_pos {
            let ratio = (pos - start_pos) / (end_pos - start_pos);

            return [
                (r2-r1)*ratio + r1,
                (g2-g1)*ratio + g1,
                (b2-b1)*ratio + b1,
                (a2-a1)*ratio + a1,
            ];
        }
    }

    components(last_color)
}

#[inline]
fn components((r, g, b, a): (f32, f32, f32, f32)) -> [f32; 4] {
    [r, g, b, a]
}
