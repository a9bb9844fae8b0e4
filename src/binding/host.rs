use crate::geometry::*;
use crate::raster::*;

///
/// Non-owning identifier for a host element
///
/// The binding never holds a reference to the host itself: the toolkit glue
/// supplies an identifier at attach time and calls `detach` when the host
/// goes away.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct HostId(pub u64);

///
/// The font a host element is rendering its content with, as far as the
/// gradient core needs to know it for measurement
///
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FontSpec {
    pub family:     String,
    pub em_size:    f32,
}

impl FontSpec {
    ///
    /// A font specification with just a size (the default measurer only uses the size)
    ///
    pub fn with_size(em_size: f32) -> FontSpec {
        FontSpec {
            family:     String::new(),
            em_size:    em_size,
        }
    }
}

///
/// Change notifications a host element sends to its binding
///
/// These arrive on the host UI's single event-processing thread; the binding
/// recomputes synchronously and the latest notification's paint wins.
///
#[derive(Clone, PartialEq, Debug)]
pub enum HostEvent {
    /// The host's frame changed size
    Resized(GradientSize),

    /// The host's text or font changed (text variant)
    ContentChanged(String, FontSpec),

    /// The host's progress fraction changed (progress variant)
    ProgressChanged(f32),

    /// The host's outline width changed (border variant)
    OutlineWidthChanged(f32),

    /// The host entered or left the dimmed presentation state
    DimStateChanged(bool),
}

///
/// Paint effects a binding produces for its host
///
#[derive(Clone, PartialEq, Debug)]
pub enum HostPaint {
    /// Apply as the host's background fill
    Fill(RasterResult),

    /// Apply as the host's outline stroke
    Stroke(RasterResult),

    /// Apply as the host's text fill colour
    TextFill(RasterResult),

    /// Apply as the host's pre-rendered progress track image
    TrackImage(RasterResult),
}

impl HostPaint {
    ///
    /// The rasterized result carried by this paint
    ///
    pub fn result(&self) -> &RasterResult {
        match self {
            HostPaint::Fill(result)         => result,
            HostPaint::Stroke(result)       => result,
            HostPaint::TextFill(result)     => result,
            HostPaint::TrackImage(result)   => result,
        }
    }
}

///
/// Snapshot of the host state a binding tracks between notifications
///
#[derive(Clone, PartialEq, Debug)]
pub struct HostMetrics {
    /// The host's frame size
    pub frame: GradientSize,

    /// The host's outline width (0 when the host reports none)
    pub outline_width: f32,

    /// The host's progress fraction, 0-1
    pub progress: f32,

    /// The host's current text and font, for content-measured variants
    pub text: Option<(String, FontSpec)>,

    /// Width text wraps at for multi-line containers (single-line when absent)
    pub content_width: Option<f32>,

    /// Whether the host is in the dimmed presentation state
    pub is_dimmed: bool,
}

impl Default for HostMetrics {
    fn default() -> HostMetrics {
        HostMetrics {
            frame:          GradientSize(0.0, 0.0),
            outline_width:  0.0,
            progress:       0.0,
            text:           None,
            content_width:  None,
            is_dimmed:      false,
        }
    }
}

impl HostMetrics {
    ///
    /// Metrics for a host with a frame size and defaults for everything else
    ///
    pub fn with_frame(frame: GradientSize) -> HostMetrics {
        HostMetrics {
            frame:  frame,
            ..HostMetrics::default()
        }
    }
}
