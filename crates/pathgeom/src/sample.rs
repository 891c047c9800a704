//! Random closed polygon paths (radial jitter + replay tokens).
//!
//! Purpose
//! - Provide a small, deterministic sampler of simple closed paths for
//!   property tests, benchmarks and the CLI `sample` command.
//!
//! Model
//! - Start from `n` equally spaced angles on [0, 2π), add bounded angular and
//!   radial jitter, and emit the points in increasing angle order. The result
//!   is star-shaped around `center`, hence simple, with orientation `+1`.
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::path::Path;

/// Vertex count distribution.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    Uniform { min: usize, max: usize },
}
impl VertexCount {
    fn sample<R: Rng>(&self, rng: &mut R) -> usize {
        match *self {
            VertexCount::Fixed(n) => n.max(3),
            VertexCount::Uniform { min, max } => {
                let lo = min.max(3);
                let hi = max.max(lo);
                rng.gen_range(lo..=hi)
            }
        }
    }
}

/// Radial-jitter sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct RadialCfg {
    pub vertex_count: VertexCount,
    /// Angular jitter as a fraction of the base spacing Δ=2π/n. Clamped to [0, 0.49].
    pub angle_jitter_frac: f64,
    /// Radial jitter (relative amplitude). Radii = `base_radius * (1 + u)`, with `u∈[-radial_jitter, radial_jitter]`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Vector2<f64>,
    /// Random global phase in [0, 2π)?
    pub random_phase: bool,
}
impl Default for RadialCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radial_jitter: 0.25,
            base_radius: 10.0,
            center: Vector2::zeros(),
            random_phase: true,
        }
    }
}

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}
impl ReplayToken {
    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Vertices of a random star-shaped polygon, in increasing angle order.
pub fn draw_polygon_points(cfg: RadialCfg, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = cfg.vertex_count.sample(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let rj = cfg.radial_jitter.clamp(0.0, 0.95);
    let r0 = cfg.base_radius.max(1e-9);
    let delta = std::f64::consts::TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * std::f64::consts::TAU
    } else {
        0.0
    };
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64) * delta + jitter;
            let u = (rng.gen::<f64>() * 2.0 - 1.0) * rj;
            let r = (1.0 + u) * r0;
            cfg.center + Vector2::new(th.cos(), th.sin()) * r
        })
        .collect()
}

/// Random closed polygon path `M p0 L p1 ... Z`.
pub fn draw_polygon_path(cfg: RadialCfg, tok: ReplayToken) -> Path {
    Path::polygon(&draw_polygon_points(cfg, tok))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orient::orientation;

    #[test]
    fn reproducible_draw() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Fixed(10),
            angle_jitter_frac: 0.2,
            radial_jitter: 0.1,
            ..RadialCfg::default()
        };
        let tok = ReplayToken { seed: 42, index: 7 };
        let p1 = draw_polygon_path(cfg, tok);
        let p2 = draw_polygon_path(cfg, tok);
        assert_eq!(p1, p2);
        assert_eq!(p1.len(), 11);
        let other = draw_polygon_path(cfg, ReplayToken { seed: 42, index: 8 });
        assert_ne!(p1, other);
    }

    #[test]
    fn radii_respect_jitter_bounds() {
        let cfg = RadialCfg {
            vertex_count: VertexCount::Uniform { min: 5, max: 9 },
            center: Vector2::new(3.0, -2.0),
            ..RadialCfg::default()
        };
        let pts = draw_polygon_points(cfg, ReplayToken { seed: 1, index: 123 });
        assert!((5..=9).contains(&pts.len()));
        for p in pts {
            let r = (p - cfg.center).norm();
            assert!(r >= 7.5 - 1e-9 && r <= 12.5 + 1e-9);
        }
    }

    #[test]
    fn samples_wind_positively() {
        for index in 0..16 {
            let p = draw_polygon_path(RadialCfg::default(), ReplayToken { seed: 9, index });
            assert_eq!(orientation(&p), 1);
        }
    }
}
