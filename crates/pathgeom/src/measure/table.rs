//! Cumulative arc-length table and length → (curve, t) lookup.

use crate::cfg::PathCfg;
use crate::error::PathError;
use crate::path::{Curve, Path};

/// A curve located by arc length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveAt {
    /// Index of the curve in the path (same as its segment index).
    pub index: usize,
    pub curve: Curve,
    /// Local parameter in `[0, 1]`.
    pub t: f64,
}

/// Curves of a path with the cumulative length through each curve's end.
///
/// Degenerate curves keep their entry (so indices match segment indices) but
/// are skipped by every search.
#[derive(Clone, Debug)]
pub struct LengthTable {
    pub curves: Vec<Curve>,
    pub cum: Vec<f64>,
    eps: f64,
}

impl LengthTable {
    pub fn new(path: &Path, cfg: &PathCfg) -> Self {
        let mut curves = Vec::with_capacity(path.len());
        let mut cum = Vec::with_capacity(path.len());
        let mut acc = 0.0;
        for curve in path.curves() {
            acc += curve.length(cfg);
            curves.push(curve);
            cum.push(acc);
        }
        Self {
            curves,
            cum,
            eps: cfg.eps,
        }
    }

    /// Total length (0 for an empty or Move-only path).
    #[inline]
    pub fn total(&self) -> f64 {
        self.cum.last().copied().unwrap_or(0.0)
    }

    /// Whether search visits curve `i`.
    #[inline]
    pub fn is_usable(&self, i: usize) -> bool {
        !self.curves[i].is_degenerate(self.eps)
    }

    /// Usable curves as `(index, start_len, end_len)`, in path order.
    ///
    /// Spans tile `[0, total]` without gaps: each one starts where the previous
    /// usable span ended, so the length of a skipped curve goes to the next one.
    pub fn spans(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        let mut from = 0.0;
        (0..self.curves.len())
            .filter(move |&i| self.is_usable(i))
            .map(move |i| {
                let span = (i, from, self.cum[i]);
                from = self.cum[i];
                span
            })
    }

    /// Index of the last usable curve.
    pub fn last_usable(&self) -> Option<usize> {
        (0..self.curves.len()).rev().find(|&i| self.is_usable(i))
    }

    /// First usable curve whose cumulative end reaches `len` (clamped to ≥ 0).
    ///
    /// Past the total length, the last usable curve is returned with `t = 1`.
    pub fn find(&self, len: f64) -> Result<CurveAt, PathError> {
        let len = len.max(0.0);
        for (index, start, end) in self.spans() {
            if len <= end {
                let span = end - start;
                let t = if span > 0.0 { (len - start) / span } else { 1.0 };
                return Ok(CurveAt {
                    index,
                    curve: self.curves[index],
                    t: t.clamp(0.0, 1.0),
                });
            }
        }
        let index = self.last_usable().ok_or(PathError::EmptyPath)?;
        Ok(CurveAt {
            index,
            curve: self.curves[index],
            t: 1.0,
        })
    }
}
