use crate::geometry::*;

///
/// Preset directions for a gradient
///
/// When a direction is set on a definition it becomes the authority for the
/// start and end points: they are rederived from it whenever the size changes.
///
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum GradientDirection {
    /// From the centre of the top edge to the centre of the bottom edge
    TopToBottom,

    /// From the centre of the left edge to the centre of the right edge
    LeftToRight,

    /// From the top-left corner to the bottom-right corner
    DiagonalDownRight,

    /// From the bottom-left corner to the top-right corner
    DiagonalUpRight,
}

impl GradientDirection {
    ///
    /// Derives the start and end points for this direction within a target of the given size
    ///
    pub fn to_start_end(&self, size: GradientSize) -> (GradientPoint, GradientPoint) {
        let GradientSize(width, height) = size;

        match self {
            GradientDirection::TopToBottom          => (GradientPoint(width / 2.0, 0.0), GradientPoint(width / 2.0, height)),
            GradientDirection::LeftToRight          => (GradientPoint(0.0, height / 2.0), GradientPoint(width, height / 2.0)),
            GradientDirection::DiagonalDownRight    => (GradientPoint(0.0, 0.0), GradientPoint(width, height)),
            GradientDirection::DiagonalUpRight      => (GradientPoint(0.0, height), GradientPoint(width, 0.0)),
        }
    }
}
