use hsluv::*;

///
/// Representation of a colour
///
/// `Rgba` is the canonical device colour space used for gradient interpolation and
/// cache fingerprinting. The other variants are converted through their RGB
/// representation on demand: `Hsluv` components are hue 0-360, saturation and
/// lightness 0-100, and `Hsb` components are hue 0-360 with saturation and
/// brightness 0-1. Alpha is always 0-1.
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Color {
    Rgba(f32, f32, f32, f32),
    Hsluv(f32, f32, f32, f32),
    Hsb(f32, f32, f32, f32),
}

impl Default for Color {
    fn default() -> Color {
        Color::Rgba(0.0, 0.0, 0.0, 1.0)
    }
}

impl Color {
    ///
    /// Returns this colour as RGBA components in the canonical device colour space
    ///
    /// Colours that are already RGB copy their components directly; the cylindrical
    /// spaces convert. Conversion is total and deterministic, so equal colours
    /// always produce equal components (this is relied upon for fingerprinting).
    ///
    pub fn to_rgba_components(&self) -> (f32, f32, f32, f32) {
        match self {
            Color::Rgba(r, g, b, a)     => (*r, *g, *b, *a),

            Color::Hsluv(h, s, l, a)    => {
                let (r, g, b) = hsluv_to_rgb((*h as f64, *s as f64, *l as f64));
                (r as f32, g as f32, b as f32, *a)
            }

            Color::Hsb(h, s, b, a)      => {
                let (r, g, b) = hsb_to_rgb(*h, *s, *b);
                (r, g, b, *a)
            }
        }
    }

    ///
    /// Returns this colour as hue, saturation, brightness and alpha components
    ///
    pub fn to_hsb_components(&self) -> (f32, f32, f32, f32) {
        match self {
            Color::Hsb(h, s, b, a)  => (*h, *s, *b, *a),

            _                       => {
                let (r, g, b, a)    = self.to_rgba_components();
                let (h, s, v)       = rgb_to_hsb(r, g, b);
                (h, s, v, a)
            }
        }
    }

    ///
    /// The alpha component of this colour
    ///
    #[inline]
    pub fn alpha_component(&self) -> f32 {
        match self {
            Color::Rgba(_, _, _, a)     => *a,
            Color::Hsluv(_, _, _, a)    => *a,
            Color::Hsb(_, _, _, a)      => *a,
        }
    }

    ///
    /// Returns this colour with the alpha component replaced
    ///
    pub fn with_alpha(&self, new_alpha: f32) -> Color {
        match self {
            Color::Rgba(r, g, b, _)     => Color::Rgba(*r, *g, *b, new_alpha),
            Color::Hsluv(h, s, l, _)    => Color::Hsluv(*h, *s, *l, new_alpha),
            Color::Hsb(h, s, b, _)      => Color::Hsb(*h, *s, *b, new_alpha),
        }
    }

    ///
    /// Returns the dimmed counterpart of this colour: the hue and brightness are
    /// kept, the saturation is set to 0 and the alpha is preserved
    ///
    /// With zero saturation the hue no longer contributes, so the result is
    /// returned as the equivalent grey in the canonical space. Dimming an already
    /// dimmed colour produces an identical value.
    ///
    pub fn dimmed(&self) -> Color {
        let (_, _, brightness, alpha) = self.to_hsb_components();

        Color::Rgba(brightness, brightness, brightness, alpha)
    }
}

///
/// Resolves the colour set to use when the host is in the dimmed presentation state
///
/// An explicitly supplied dimmed set always wins. Otherwise the base colours are
/// desaturated when `automatically` is set, or returned unchanged when it is not.
///
pub fn dim_colors(colors: &[Color], explicit_dimmed: Option<&[Color]>, automatically: bool) -> Vec<Color> {
    if let Some(explicit_dimmed) = explicit_dimmed {
        explicit_dimmed.to_vec()
    } else if automatically {
        colors.iter()
            .map(|color| color.dimmed())
            .collect()
    } else {
        colors.to_vec()
    }
}

///
/// Converts hue (0-360), saturation and brightness (0-1) to RGB components
///
fn hsb_to_rgb(h: f32, s: f32, b: f32) -> (f32, f32, f32) {
    let h = ((h % 360.0) + 360.0) % 360.0;
    let s = s.max(0.0).min(1.0);
    let v = b.max(0.0).min(1.0);

    let c = v * s;
    let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = v - c;

    let (r, g, b) = match (h / 60.0) as u32 {
        0           => (c, x, 0.0),
        1           => (x, c, 0.0),
        2           => (0.0, c, x),
        3           => (0.0, x, c),
        4           => (x, 0.0, c),
        _           => (c, 0.0, x),
    };

    (r + m, g + m, b + m)
}

///
/// Converts RGB components (0-1) to hue (0-360), saturation and brightness (0-1)
///
fn rgb_to_hsb(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let max     = r.max(g).max(b);
    let min     = r.min(g).min(b);
    let delta   = max - min;

    let hue = if delta <= 0.0 {
        0.0
    } else if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    let hue = ((hue % 360.0) + 360.0) % 360.0;

    let saturation = if max <= 0.0 { 0.0 } else { delta / max };

    (hue, saturation, max)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn rgba_components_copy_directly() {
        let (r, g, b, a) = Color::Rgba(0.1, 0.2, 0.3, 0.4).to_rgba_components();

        assert!(r == 0.1 && g == 0.2 && b == 0.3 && a == 0.4);
    }

    #[test]
    fn hsb_red_round_trip() {
        let (r, g, b, a) = Color::Hsb(0.0, 1.0, 1.0, 1.0).to_rgba_components();

        assert!((r-1.0).abs() < 0.001, "r={:?}", r);
        assert!(g.abs() < 0.001, "g={:?}", g);
        assert!(b.abs() < 0.001, "b={:?}", b);
        assert!((a-1.0).abs() < 0.001, "a={:?}", a);
    }

    #[test]
    fn hsb_green_round_trip() {
        let (h, s, v, _) = Color::Rgba(0.0, 1.0, 0.0, 1.0).to_hsb_components();

        assert!((h-120.0).abs() < 0.1, "h={:?}", h);
        assert!((s-1.0).abs() < 0.001, "s={:?}", s);
        assert!((v-1.0).abs() < 0.001, "v={:?}", v);
    }

    #[test]
    fn hsluv_white_converts_to_rgb() {
        let (r, g, b, a) = Color::Hsluv(0.0, 0.0, 100.0, 1.0).to_rgba_components();

        assert!((r-1.0).abs() < 0.001, "r={:?}", r);
        assert!((g-1.0).abs() < 0.001, "g={:?}", g);
        assert!((b-1.0).abs() < 0.001, "b={:?}", b);
        assert!((a-1.0).abs() < 0.001, "a={:?}", a);
    }

    #[test]
    fn dimmed_red_is_full_brightness_grey() {
        let dimmed = Color::Rgba(1.0, 0.0, 0.0, 1.0).dimmed();

        assert!(dimmed == Color::Rgba(1.0, 1.0, 1.0, 1.0), "{:?}", dimmed);
    }

    #[test]
    fn dimmed_preserves_alpha() {
        let dimmed = Color::Rgba(0.0, 0.5, 0.0, 0.25).dimmed();

        assert!((dimmed.alpha_component()-0.25).abs() < 0.001, "{:?}", dimmed);
    }

    #[test]
    fn dimming_is_idempotent() {
        let once    = Color::Rgba(0.2, 0.7, 0.4, 0.8).dimmed();
        let twice   = once.dimmed();

        assert!(once == twice, "{:?} != {:?}", once, twice);
    }

    #[test]
    fn explicit_dimmed_set_wins() {
        let base        = vec![Color::Rgba(1.0, 0.0, 0.0, 1.0)];
        let explicit    = vec![Color::Rgba(0.5, 0.5, 0.5, 1.0)];

        let dimmed = dim_colors(&base, Some(&explicit), true);

        assert!(dimmed == explicit);
    }

    #[test]
    fn no_dimming_without_automatic_flag() {
        let base    = vec![Color::Rgba(1.0, 0.0, 0.0, 1.0)];
        let dimmed  = dim_colors(&base, None, false);

        assert!(dimmed == base);
    }
}
