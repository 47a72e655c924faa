//! Float tolerance helpers shared by the discretization and the pontoon lookup.

use approx::relative_eq;

/// Relative tolerance used when comparing arc-length positions
pub const REL_TOL: f64 = 1e-9;

/// Largest number of girder nodes a single model may have
///
/// Every span and every pontoon needs a node, so span and pontoon counts are
/// bounded by this too. A kilometre-scale bridge meshed at centimetre elements
/// stays well below it.
pub const MAX_NODES: usize = 10_000_000;

/// Round `ratio` up to the next integer, unless it is already an integer
/// within tolerance.
///
/// `250.0 / 50.0` gives 5 even if float noise makes the quotient `5.000000000000001`.
pub fn ceil_unless_exact(ratio: f64) -> usize {
    let nearest = ratio.round();
    let count = if relative_eq!(ratio, nearest, epsilon = REL_TOL, max_relative = REL_TOL) {
        nearest
    } else {
        ratio.ceil()
    };
    count.max(0.0) as usize
}

/// [`ceil_unless_exact`], or `None` if `ratio` is not finite or the count
/// would reach [`MAX_NODES`]
pub fn bounded_count(ratio: f64) -> Option<usize> {
    if !ratio.is_finite() || ratio >= MAX_NODES as f64 {
        return None;
    }
    Some(ceil_unless_exact(ratio)).filter(|&count| count < MAX_NODES)
}

/// Approximate equality for positions along a bridge of total length `scale`.
///
/// The absolute floor scales with the bridge so that cumulative sums of many
/// sub-spans still match the position they were built from.
pub fn approx_eq(a: f64, b: f64, scale: f64) -> bool {
    relative_eq!(a, b, epsilon = REL_TOL * scale.abs().max(1.0), max_relative = REL_TOL)
}

/// True if `value` is zero relative to `scale`
pub fn is_negligible(value: f64, scale: f64) -> bool {
    approx_eq(value, 0.0, scale)
}
