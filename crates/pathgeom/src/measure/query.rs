//! Point / normal / tangent-angle sampling by arc length or normalized parameter.

use nalgebra::Vector2;

use super::table::{CurveAt, LengthTable};
use crate::cfg::PathCfg;
use crate::error::PathError;
use crate::orient::orientation;
use crate::path::Path;

/// Total arc length of `path`.
pub fn path_length(path: &Path) -> f64 {
    LengthTable::new(path, &PathCfg::default()).total()
}

/// Curve and local parameter at arc length `len`.
pub fn find_curve_at_length(len: f64, path: &Path) -> Result<CurveAt, PathError> {
    LengthTable::new(path, &PathCfg::default()).find(len)
}

/// Point at arc length `len`.
pub fn position_at_length(len: f64, path: &Path) -> Result<Vector2<f64>, PathError> {
    let at = find_curve_at_length(len, path)?;
    Ok(at.curve.position(at.t))
}

/// Unit normal at arc length `len`.
///
/// The tangent is rotated +90° and flipped for clockwise (`+1`) paths, so on a
/// closed path the normal points away from the enclosed region.
pub fn normal_at_length(len: f64, path: &Path) -> Result<Vector2<f64>, PathError> {
    let at = find_curve_at_length(len, path)?;
    let mul = if orientation(path) == 1 { -1.0 } else { 1.0 };
    let d = at.curve.tangent(at.t);
    Ok(Vector2::new(-d.y, d.x) * mul)
}

/// Signed angle (radians) of the forward tangent at arc length `len`.
pub fn angle_at_length(len: f64, path: &Path) -> Result<f64, PathError> {
    let at = find_curve_at_length(len, path)?;
    let d = at.curve.tangent(at.t);
    Ok(d.y.atan2(d.x))
}

/// `position_at_length(t * path_length(path), path)`.
pub fn position_at(t: f64, path: &Path) -> Result<Vector2<f64>, PathError> {
    position_at_length(t * path_length(path), path)
}

/// `normal_at_length(t * path_length(path), path)`.
pub fn normal_at(t: f64, path: &Path) -> Result<Vector2<f64>, PathError> {
    normal_at_length(t * path_length(path), path)
}

/// `angle_at_length(t * path_length(path), path)`.
pub fn angle_at(t: f64, path: &Path) -> Result<f64, PathError> {
    angle_at_length(t * path_length(path), path)
}
