//!
//! # flo_gradient
//!
//! `flo_gradient` computes, rasterizes and caches colour gradients for UI
//! elements, without depending on any particular UI toolkit.
//!
//! The central type is the `GradientDefinition`, which describes a gradient by
//! value: its palette, stop positions, geometry and drawing mode. Definitions
//! can be rasterized directly with `rasterize()`, but the usual route is
//! through a `GradientCache`, which keys rasterized frames by a value
//! fingerprint so that any number of equal definitions share one computation.
//!
//! On top of that sits the `GradientBinding`, which attaches a definition to a
//! host element via a `BindingVariant` describing what to measure and which
//! paint property to write: a background fill, an outline stroke (optionally
//! with separate flat colours per edge), a text fill sized from the content,
//! or a progress track image scaled by the progress fraction. The binding
//! reacts to `HostEvent` notifications, keeps the gradient's size in sync and
//! pushes freshly rasterized paints through a callback.
//!
//! Colours can be specified as RGBA, HSLuv or HSB, and every definition can
//! carry a dimmed palette for inactive presentation states (synthesized from
//! the brightness of the base palette when not supplied explicitly).
//!
//! # Features
//!
//! * `render_png` (default) - adds `RasterFrame::to_png()` for writing frames
//!   out as PNG data
//!
#![warn(bare_trait_objects)]

#[macro_use]
extern crate serde_derive;

extern crate desync;
extern crate hsluv;

mod color;
mod error;
mod geometry;
mod direction;
mod definition;
mod ramp;
mod raster;
mod cache;
mod binding;

pub use self::color::*;
pub use self::error::*;
pub use self::geometry::*;
pub use self::direction::*;
pub use self::definition::*;
pub use self::ramp::*;
pub use self::raster::*;
pub use self::cache::*;
pub use self::binding::*;
