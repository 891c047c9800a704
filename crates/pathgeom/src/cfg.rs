//! Tolerances shared by every path operation.
//!
//! - `EPSILON`: the one geometric tolerance (coincident points, zero-length
//!   curves, quadrant-boundary snapping).
//! - `PathCfg`: bundles `EPSILON` with the knobs of the numeric routines
//!   (arc-length quadrature, offset subdivision).
//!
//! Code cross-refs: `bezier::CubicBez::arclen`, `measure::LengthTable`, `offset::offset_with_cfg`

/// Geometric tolerance used for all point/length comparisons.
pub const EPSILON: f64 = 1e-5;

/// Path engine configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct PathCfg {
    /// Coincidence / degeneracy tolerance.
    pub eps: f64,
    /// Target accuracy of the cubic arc-length estimator.
    pub arclen_eps: f64,
    /// Maximum recursion depth of the arc-length estimator.
    pub max_arclen_depth: u32,
    /// Largest tangent turn (radians) a cubic piece may have before the offset
    /// construction subdivides it.
    pub offset_max_turn: f64,
}

impl Default for PathCfg {
    fn default() -> Self {
        Self {
            eps: EPSILON,
            arclen_eps: EPSILON,
            max_arclen_depth: 16,
            offset_max_turn: std::f64::consts::FRAC_PI_4,
        }
    }
}
