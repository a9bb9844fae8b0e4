///
/// Errors reported when a gradient definition is mutated in a way that violates its contract
///
/// These are caller-contract violations surfaced at the point of mutation: the
/// parallel sequences on a definition must always have matching lengths.
/// Not-ready conditions (a zero size, no colours set) are never errors.
///
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GradientError {
    /// The location sequence does not have one entry per colour (colour count, location count)
    MismatchedLocations(usize, usize),

    /// The dimmed colour sequence does not have one entry per base colour (colour count, dimmed count)
    MismatchedDimmedColors(usize, usize),
}
