use crate::color::*;
use crate::direction::*;
use crate::error::*;
use crate::geometry::*;

///
/// How the colour ramp is swept across the rendering target
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum GradientMode {
    /// Interpolate along the segment from the start point to the end point
    Linear,

    /// Interpolate from the start point (radius 0) out to the centre of the target (radius half the shorter side)
    Radial,
}

///
/// Flags controlling how colours extend beyond the gradient's endpoints
///
/// When a flag is clear, samples on that side of the gradient are left
/// transparent; when it is set the nearest endpoint colour extends flat.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct GradientDrawOptions {
    pub extend_before_start: bool,
    pub extend_after_end:    bool,
}

///
/// Per-edge flat colours used by the border variant's separate-colour mode
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct EdgeColors {
    pub top:    Color,
    pub right:  Color,
    pub bottom: Color,
    pub left:   Color,
}

///
/// Parameters for rasterizing a border: optional per-edge colours and the
/// host's outline width (0 selects a one-pixel hairline at raster time)
///
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct BorderPaint {
    pub edge_colors:    Option<EdgeColors>,
    pub stroke_width:   f32,
}

///
/// Describes a gradient: its palette, stop positions, geometry and drawing mode
///
/// The start and end points are in the gradient's own coordinate space and are
/// only meaningful relative to the size. Setting a direction makes it the
/// authority over the start and end points: they are rederived whenever the
/// size changes. Setting the start or end point explicitly clears the
/// direction again, so exactly one authority exists at a time.
///
/// Mutations advance the `revision` counter exactly once per externally
/// visible change: the derived start/end writes triggered by a size or
/// direction change are suppressed so observers recompute a single time.
///
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GradientDefinition {
    /// The base palette, in stop order
    colors: Vec<Color>,

    /// Colours used in the dimmed presentation state (derived from `colors` when absent)
    dimmed_colors: Option<Vec<Color>>,

    /// Stop positions parallel to `colors` (evenly spaced across 0-1 when absent)
    locations: Option<Vec<f32>>,

    /// Linear or radial interpolation
    mode: GradientMode,

    /// When present, the authority that derives `start` and `end` from `size`
    direction: Option<GradientDirection>,

    /// Where interpolation begins
    start: GradientPoint,

    /// Where interpolation ends (ignored by radial gradients, which end at the centre of `size`)
    end: GradientPoint,

    /// The size of the rendering target
    size: GradientSize,

    /// Edge extrapolation flags
    draw_options: GradientDrawOptions,

    /// Whether a dimmed palette is synthesized when none was supplied
    automatically_dims: bool,

    /// Counts externally visible changes (not part of the definition's value)
    #[serde(skip)]
    revision: u64,

    /// Set while derived start/end writes are in progress
    #[serde(skip)]
    suppress_revision: bool,
}

impl Default for GradientDefinition {
    fn default() -> GradientDefinition {
        GradientDefinition {
            colors:             vec![],
            dimmed_colors:      None,
            locations:          None,
            mode:               GradientMode::Linear,
            direction:          None,
            start:              GradientPoint(0.0, 0.0),
            end:                GradientPoint(0.0, 0.0),
            size:               GradientSize(0.0, 0.0),
            draw_options:       GradientDrawOptions::default(),
            automatically_dims: true,
            revision:           0,
            suppress_revision:  false,
        }
    }
}

impl GradientDefinition {
    ///
    /// Creates an empty gradient definition
    ///
    pub fn new() -> GradientDefinition {
        GradientDefinition::default()
    }

    ///
    /// Creates a definition with a direction and a size (the start and end points are derived)
    ///
    pub fn with_direction(direction: GradientDirection, size: GradientSize) -> GradientDefinition {
        let mut definition  = GradientDefinition::new();
        definition.size     = size;
        definition.set_direction(Some(direction));

        definition
    }

    ///
    /// Creates a two-colour definition with a direction and a size
    ///
    pub fn between(begin: Color, end: Color, size: GradientSize, direction: GradientDirection) -> GradientDefinition {
        let mut definition  = GradientDefinition::with_direction(direction, size);
        definition.colors   = vec![begin, end];
        definition.changed();

        definition
    }

    pub fn colors(&self) -> &[Color]                        { &self.colors }
    pub fn dimmed_colors(&self) -> Option<&[Color]>         { self.dimmed_colors.as_deref() }
    pub fn locations(&self) -> Option<&[f32]>               { self.locations.as_deref() }
    pub fn mode(&self) -> GradientMode                      { self.mode }
    pub fn direction(&self) -> Option<GradientDirection>    { self.direction }
    pub fn start(&self) -> GradientPoint                    { self.start }
    pub fn end(&self) -> GradientPoint                      { self.end }
    pub fn size(&self) -> GradientSize                      { self.size }
    pub fn draw_options(&self) -> GradientDrawOptions       { self.draw_options }
    pub fn automatically_dims(&self) -> bool                { self.automatically_dims }

    ///
    /// The number of externally visible changes made to this definition
    ///
    /// A size change on a definition with a direction set rewrites the start
    /// and end points as a side effect but still advances the revision by one.
    ///
    pub fn revision(&self) -> u64 { self.revision }

    ///
    /// Replaces the base palette. Fails if a location or dimmed sequence is
    /// present with a different length.
    ///
    pub fn set_colors(&mut self, colors: Vec<Color>) -> Result<(), GradientError> {
        if let Some(locations) = &self.locations {
            if locations.len() != colors.len() {
                return Err(GradientError::MismatchedLocations(colors.len(), locations.len()));
            }
        }

        if let Some(dimmed_colors) = &self.dimmed_colors {
            if dimmed_colors.len() != colors.len() {
                return Err(GradientError::MismatchedDimmedColors(colors.len(), dimmed_colors.len()));
            }
        }

        self.colors = colors;
        self.changed();
        Ok(())
    }

    ///
    /// Sets or clears the stop positions. Fails if the sequence does not have
    /// one entry per colour.
    ///
    pub fn set_locations(&mut self, locations: Option<Vec<f32>>) -> Result<(), GradientError> {
        if let Some(locations) = &locations {
            if locations.len() != self.colors.len() {
                return Err(GradientError::MismatchedLocations(self.colors.len(), locations.len()));
            }
        }

        self.locations = locations;
        self.changed();
        Ok(())
    }

    ///
    /// Sets or clears the explicit dimmed palette. Fails if the sequence does
    /// not have one entry per base colour.
    ///
    pub fn set_dimmed_colors(&mut self, dimmed_colors: Option<Vec<Color>>) -> Result<(), GradientError> {
        if let Some(dimmed_colors) = &dimmed_colors {
            if dimmed_colors.len() != self.colors.len() {
                return Err(GradientError::MismatchedDimmedColors(self.colors.len(), dimmed_colors.len()));
            }
        }

        self.dimmed_colors = dimmed_colors;
        self.changed();
        Ok(())
    }

    pub fn set_mode(&mut self, mode: GradientMode) {
        self.mode = mode;
        self.changed();
    }

    pub fn set_draw_options(&mut self, draw_options: GradientDrawOptions) {
        self.draw_options = draw_options;
        self.changed();
    }

    pub fn set_automatically_dims(&mut self, automatically_dims: bool) {
        self.automatically_dims = automatically_dims;
        self.changed();
    }

    ///
    /// Sets the start point explicitly, making the start/end pair the authority
    /// (any direction is cleared)
    ///
    pub fn set_start(&mut self, start: GradientPoint) {
        self.direction  = None;
        self.start      = start;
        self.changed();
    }

    ///
    /// Sets the end point explicitly, making the start/end pair the authority
    /// (any direction is cleared)
    ///
    pub fn set_end(&mut self, end: GradientPoint) {
        self.direction  = None;
        self.end        = end;
        self.changed();
    }

    ///
    /// Sets or clears the direction. A direction rederives the start and end
    /// points immediately and again on every future size change.
    ///
    pub fn set_direction(&mut self, direction: Option<GradientDirection>) {
        self.direction = direction;

        if let Some(direction) = direction {
            self.apply_direction(direction);
        }

        self.changed();
    }

    ///
    /// Sets the size of the rendering target, rederiving the start and end
    /// points when a direction is in effect
    ///
    pub fn set_size(&mut self, size: GradientSize) {
        self.size = size;

        if let Some(direction) = self.direction {
            self.apply_direction(direction);
        }

        self.changed();
    }

    ///
    /// Resolves the palette for the given presentation state
    ///
    pub fn effective_colors(&self, is_dimmed: bool) -> Vec<Color> {
        if is_dimmed {
            dim_colors(&self.colors, self.dimmed_colors.as_deref(), self.automatically_dims)
        } else {
            self.colors.clone()
        }
    }

    ///
    /// Computes the cache fingerprint for this definition
    ///
    /// The fingerprint covers every field of the equality contract plus the
    /// effective palette (which folds the dimmed state in) and, for border
    /// variants, the per-edge colours and stroke width. Two definitions with
    /// equal fingerprints rasterize identically and are interchangeable.
    ///
    pub fn fingerprint(&self, effective_colors: &[Color], border: Option<&BorderPaint>) -> GradientFingerprint {
        GradientFingerprint {
            mode:               self.mode,
            start:              point_bits(self.start),
            end:                point_bits(self.end),
            size:               (self.size.0.to_bits(), self.size.1.to_bits()),
            automatically_dims: self.automatically_dims,
            draw_options:       (self.draw_options.extend_before_start, self.draw_options.extend_after_end),
            colors:             self.colors.iter().map(color_bits).collect(),
            dimmed_colors:      self.dimmed_colors.as_ref().map(|colors| colors.iter().map(color_bits).collect()),
            locations:          self.locations.as_ref().map(|locations| locations.iter().map(|pos| pos.to_bits()).collect()),
            effective_colors:   effective_colors.iter().map(color_bits).collect(),
            border:             border.map(|border| BorderFingerprint {
                edge_colors:    border.edge_colors.map(|edges| [color_bits(&edges.top), color_bits(&edges.right), color_bits(&edges.bottom), color_bits(&edges.left)]),
                stroke_width:   border.stroke_width.to_bits(),
            }),
        }
    }

    ///
    /// Rewrites the start and end points from a direction without advancing the
    /// revision more than once for the enclosing mutation
    ///
    fn apply_direction(&mut self, direction: GradientDirection) {
        let (start, end)        = direction.to_start_end(self.size);

        self.suppress_revision  = true;
        self.start              = start;
        self.changed();
        self.end                = end;
        self.changed();
        self.suppress_revision  = false;
    }

    #[inline]
    fn changed(&mut self) {
        if !self.suppress_revision {
            self.revision += 1;
        }
    }
}

/// Value equality over the semantic fields (the revision counter and the
/// suppression guard are bookkeeping, not part of the definition's value)
impl PartialEq for GradientDefinition {
    fn eq(&self, other: &GradientDefinition) -> bool {
        self.mode == other.mode
            && self.colors == other.colors
            && self.locations == other.locations
            && self.start == other.start
            && self.end == other.end
            && self.dimmed_colors == other.dimmed_colors
            && self.automatically_dims == other.automatically_dims
            && self.size == other.size
            && self.draw_options == other.draw_options
    }
}

///
/// Value fingerprint identifying a rasterized gradient in the cache
///
/// Floating point fields are captured as their bit patterns so that equal
/// definitions always hash equally.
///
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct GradientFingerprint {
    mode:               GradientMode,
    start:              (u32, u32),
    end:                (u32, u32),
    size:               (u32, u32),
    automatically_dims: bool,
    draw_options:       (bool, bool),
    colors:             Vec<[u32; 4]>,
    dimmed_colors:      Option<Vec<[u32; 4]>>,
    locations:          Option<Vec<u32>>,
    effective_colors:   Vec<[u32; 4]>,
    border:             Option<BorderFingerprint>,
}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
struct BorderFingerprint {
    edge_colors:    Option<[[u32; 4]; 4]>,
    stroke_width:   u32,
}

#[inline]
fn point_bits(point: GradientPoint) -> (u32, u32) {
    (point.0.to_bits(), point.1.to_bits())
}

#[inline]
fn color_bits(color: &Color) -> [u32; 4] {
    let (r, g, b, a) = color.to_rgba_components();
    [r.to_bits(), g.to_bits(), b.to_bits(), a.to_bits()]
}
