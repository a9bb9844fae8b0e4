use super::host::*;
use super::text_layout::*;

use crate::definition::*;
use crate::geometry::*;
use crate::raster::*;

///
/// Strategy describing what a binding measures on its host and which paint
/// property it writes
///
/// Every variant differs only in those two respects, so a binding is one
/// `GradientDefinition` plus one of these rather than a hierarchy of
/// definition subtypes.
///
pub enum BindingVariant {
    /// Applies the gradient as the host's background fill, tracking the frame size
    Fill,

    /// Applies the gradient as the host's outline stroke, tracking the frame size
    ///
    /// With `use_separate_colors` set and edge colours present, each of the
    /// four edges is drawn as an independent flat strip of the host's outline
    /// width instead of a shared gradient.
    Border {
        use_separate_colors: bool,
        edge_colors:         Option<EdgeColors>,
    },

    /// Applies the gradient as the host's text fill, tracking the
    /// content-measured size rather than the frame
    Text {
        measurer: Box<dyn TextMeasurer>,
    },

    /// Applies the gradient as the host's pre-rendered track image, tracking
    /// either the full frame or the frame scaled by the progress fraction
    Progress {
        fixed_width: bool,
    },
}

impl BindingVariant {
    ///
    /// A text variant using the default fixed-advance measurer
    ///
    pub fn text() -> BindingVariant {
        BindingVariant::Text {
            measurer: Box::new(EmSquareMeasurer::default()),
        }
    }

    ///
    /// The size this variant's gradient should render at, derived from the
    /// host's current metrics
    ///
    pub fn measure(&self, metrics: &HostMetrics) -> GradientSize {
        match self {
            BindingVariant::Fill            |
            BindingVariant::Border { .. }   => metrics.frame,

            BindingVariant::Text { measurer } => {
                match &metrics.text {
                    Some((text, font))  => measurer.measure(text, font, metrics.content_width),
                    None                => GradientSize(0.0, 0.0),
                }
            }

            BindingVariant::Progress { fixed_width } => {
                if *fixed_width {
                    metrics.frame
                } else {
                    let fraction = metrics.progress.max(0.0).min(1.0);
                    GradientSize(metrics.frame.0 * fraction, metrics.frame.1)
                }
            }
        }
    }

    ///
    /// The border parameters to rasterize with, for the border variant
    ///
    pub (crate) fn border_paint(&self, metrics: &HostMetrics) -> Option<BorderPaint> {
        match self {
            BindingVariant::Border { use_separate_colors, edge_colors } => {
                Some(BorderPaint {
                    edge_colors:    if *use_separate_colors { *edge_colors } else { None },
                    stroke_width:   metrics.outline_width,
                })
            }

            _ => None,
        }
    }

    ///
    /// Wraps a rasterized result in the paint effect this variant writes
    ///
    pub fn paint(&self, result: RasterResult) -> HostPaint {
        match self {
            BindingVariant::Fill            => HostPaint::Fill(result),
            BindingVariant::Border { .. }   => HostPaint::Stroke(result),
            BindingVariant::Text { .. }     => HostPaint::TextFill(result),
            BindingVariant::Progress { .. } => HostPaint::TrackImage(result),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn fill_tracks_the_frame() {
        let metrics = HostMetrics::with_frame(GradientSize(120.0, 40.0));

        assert!(BindingVariant::Fill.measure(&metrics) == GradientSize(120.0, 40.0));
    }

    #[test]
    fn proportional_progress_scales_the_width() {
        let mut metrics     = HostMetrics::with_frame(GradientSize(200.0, 8.0));
        metrics.progress    = 0.25;

        let proportional    = BindingVariant::Progress { fixed_width: false };
        let fixed           = BindingVariant::Progress { fixed_width: true };

        assert!(proportional.measure(&metrics) == GradientSize(50.0, 8.0));
        assert!(fixed.measure(&metrics) == GradientSize(200.0, 8.0));
    }

    #[test]
    fn text_measures_content_not_frame() {
        let mut metrics = HostMetrics::with_frame(GradientSize(300.0, 100.0));
        metrics.text    = Some(("Hello world".to_string(), FontSpec::with_size(10.0)));

        let size = BindingVariant::text().measure(&metrics);

        assert!(size == GradientSize(55.0, 12.0), "{:?}", size);
    }

    #[test]
    fn text_without_content_is_not_ready() {
        let metrics = HostMetrics::with_frame(GradientSize(300.0, 100.0));

        assert!(BindingVariant::text().measure(&metrics) == GradientSize(0.0, 0.0));
    }
}
