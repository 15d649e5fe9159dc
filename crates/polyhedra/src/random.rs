//! Seeded random polytopes in `R^d` (floating point).
//!
//! Purpose
//! - Reproducible inputs for property tests and benches. Every sample is a
//!   pure function of its params and a `u64` seed, so a failing case can be
//!   replayed from the seed alone.
//!
//! Families
//! - Centrally symmetric halfspaces: `±u_k · x <= r_k` for random unit `u_k`.
//!   Bounded with high probability once there are enough directions.
//! - Sphere point clouds: `count` points with random directions and radii.

use nalgebra::DVector;
use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use thiserror::Error;

use crate::coeff::{Coeff, CoeffKind, Vector};
use crate::elements::{HalfSpace, Point};
use crate::rep::{HRep, VRep};

#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeneratorError {
    #[error("invalid generator params: {reason}")]
    InvalidParams { reason: String },
}

impl GeneratorError {
    fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

/// Shared shape of both families.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomParams {
    pub dim: usize,
    /// Directions (halfspace pairs) or points.
    pub count: usize,
    pub radius_min: f64,
    pub radius_max: f64,
}

impl RandomParams {
    fn validate(&self) -> Result<(), GeneratorError> {
        if self.dim == 0 {
            return Err(GeneratorError::invalid("dim must be > 0"));
        }
        if self.count == 0 {
            return Err(GeneratorError::invalid("count must be > 0"));
        }
        if !(self.radius_min.is_finite() && self.radius_max.is_finite()) {
            return Err(GeneratorError::invalid("radius bounds must be finite"));
        }
        if self.radius_min <= 0.0 {
            return Err(GeneratorError::invalid("radius_min must be > 0"));
        }
        if self.radius_min > self.radius_max {
            return Err(GeneratorError::invalid("radius_min <= radius_max required"));
        }
        Ok(())
    }
}

/// `2 * count` halfspaces, symmetric about the origin.
pub fn symmetric_halfspaces(params: &RandomParams, seed: u64) -> Result<HRep, GeneratorError> {
    params.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let mut hs = Vec::with_capacity(params.count * 2);
    for _ in 0..params.count {
        let dir = sample_unit_vector(&mut rng, params.dim);
        let r = sample_radius(&mut rng, params.radius_min, params.radius_max);
        hs.push(HalfSpace::new(to_coeffs(&dir), r));
        hs.push(HalfSpace::new(to_coeffs(&-dir), r));
    }
    Ok(HRep::from_parts(params.dim, CoeffKind::Float, Vec::new(), hs))
}

/// `count` points at random directions and radii.
pub fn sphere_points(params: &RandomParams, seed: u64) -> Result<VRep, GeneratorError> {
    params.validate()?;
    let mut rng = StdRng::seed_from_u64(seed);
    let points = (0..params.count)
        .map(|_| {
            let dir = sample_unit_vector(&mut rng, params.dim);
            let r = sample_radius(&mut rng, params.radius_min, params.radius_max);
            Point(to_coeffs(&(dir * r)))
        })
        .collect();
    Ok(VRep::from_parts(params.dim, CoeffKind::Float, points, Vec::new(), Vec::new()))
}

/// Replay token for one sample of a [`SeededStream`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SeedReplay {
    pub seed: u64,
}

/// Stream of samples from one family; each draws a fresh seed from a master RNG.
pub struct SeededStream<T> {
    params: RandomParams,
    master_rng: StdRng,
    sample: fn(&RandomParams, u64) -> Result<T, GeneratorError>,
}

impl SeededStream<HRep> {
    pub fn halfspaces(params: RandomParams, seed: u64) -> Result<Self, GeneratorError> {
        Self::new(params, seed, symmetric_halfspaces)
    }
}

impl SeededStream<VRep> {
    pub fn points(params: RandomParams, seed: u64) -> Result<Self, GeneratorError> {
        Self::new(params, seed, sphere_points)
    }
}

impl<T> SeededStream<T> {
    fn new(
        params: RandomParams,
        seed: u64,
        sample: fn(&RandomParams, u64) -> Result<T, GeneratorError>,
    ) -> Result<Self, GeneratorError> {
        params.validate()?;
        Ok(Self {
            params,
            master_rng: StdRng::seed_from_u64(seed),
            sample,
        })
    }

    pub fn params(&self) -> &RandomParams {
        &self.params
    }

    pub fn generate_next(&mut self) -> Result<(T, SeedReplay), GeneratorError> {
        let seed = self.master_rng.next_u64();
        Ok(((self.sample)(&self.params, seed)?, SeedReplay { seed }))
    }

    pub fn regenerate(&self, replay: SeedReplay) -> Result<T, GeneratorError> {
        (self.sample)(&self.params, replay.seed)
    }
}

fn sample_unit_vector(rng: &mut StdRng, d: usize) -> DVector<f64> {
    loop {
        let v = DVector::<f64>::from_fn(d, |_, _| rng.gen_range(-1.0..=1.0));
        let norm = v.norm();
        if norm >= 1e-12 {
            return v / norm;
        }
    }
}

fn sample_radius(rng: &mut StdRng, min: f64, max: f64) -> f64 {
    if (max - min).abs() < f64::EPSILON {
        return min;
    }
    rng.gen_range(min..=max)
}

fn to_coeffs(v: &DVector<f64>) -> Vector {
    v.map(Coeff::Float)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(dim: usize, count: usize) -> RandomParams {
        RandomParams {
            dim,
            count,
            radius_min: 0.5,
            radius_max: 1.0,
        }
    }

    #[test]
    fn same_seed_same_sample() {
        let a = symmetric_halfspaces(&params(3, 6), 7).unwrap();
        let b = symmetric_halfspaces(&params(3, 6), 7).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.halfspaces().len(), 12);
        assert!(a.contains(&Vector::from_element(3, Coeff::Float(0.0))).unwrap());
        assert_ne!(a, symmetric_halfspaces(&params(3, 6), 8).unwrap());
    }

    #[test]
    fn points_respect_radius_bounds() {
        let v = sphere_points(&params(4, 10), 2025).unwrap();
        assert_eq!(v.points().len(), 10);
        for p in v.points() {
            let r = p.0.iter().map(|c| c.to_f64().powi(2)).sum::<f64>().sqrt();
            assert!((0.5 - 1e-12..=1.0 + 1e-12).contains(&r));
        }
    }

    #[test]
    fn stream_replays_from_token() {
        let mut gen = SeededStream::points(params(2, 5), 1234).unwrap();
        let (first, token) = gen.generate_next().unwrap();
        let (second, _) = gen.generate_next().unwrap();
        assert_ne!(first, second);
        assert_eq!(gen.regenerate(token).unwrap(), first);
        assert_eq!(gen.params().count, 5);
    }

    #[test]
    fn invalid_params_are_rejected() {
        assert!(symmetric_halfspaces(&params(0, 3), 1).is_err());
        assert!(sphere_points(&params(2, 0), 1).is_err());
        let bad = RandomParams {
            radius_min: 2.0,
            ..params(2, 3)
        };
        assert_eq!(
            SeededStream::halfspaces(bad, 1).err(),
            Some(GeneratorError::invalid("radius_min <= radius_max required"))
        );
    }
}
