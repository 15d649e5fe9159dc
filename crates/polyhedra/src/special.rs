//! Canonical polytope families in `R^d`, used in tests, benches and demos.
//!
//! Purpose
//! - Hypercubes, cross polytopes (ℓ1 balls) and standard simplices in both
//!   representations, so conversions and algebra can be checked against known
//!   answers.
//! - The coefficient kind follows the size argument: `hypercube_h(3, 1)` is
//!   `Int`, `hypercube_h(3, 0.5)` is `Float`.
//!
//! Facts
//! - Hypercube `[-a,a]^d`: `2d` facets, `2^d` vertices.
//! - Cross polytope `{‖x‖₁ <= r}`: `2^d` facets, `2d` vertices.
//! - Standard simplex `conv(0, e_1, ..., e_d)`: `d + 1` facets and vertices.

use crate::coeff::{Coeff, CoeffKind, Vector};
use crate::elements::{HalfSpace, Point};
use crate::rep::{HRep, VRep};

/// `scale · e_i` with zeros of `kind` elsewhere.
fn axis(d: usize, i: usize, scale: Coeff) -> Vector {
    let zero = Coeff::zero_of(scale.kind());
    Vector::from_fn(d, |j, _| if j == i { scale } else { zero })
}

/// Every sign pattern in `{-s, s}^d`, first coordinate varying slowest.
fn sign_patterns(d: usize, s: Coeff) -> Vec<Vector> {
    (0..1usize << d)
        .map(|mask| Vector::from_fn(d, |j, _| if mask >> (d - 1 - j) & 1 == 1 { s } else { -s }))
        .collect()
}

/// Hypercube `[-a,a]^d` as `2d` halfspaces `±x_i <= a`.
pub fn hypercube_h(d: usize, a: impl Into<Coeff>) -> HRep {
    let a = a.into();
    let one = Coeff::one_of(a.kind());
    let hs = (0..d)
        .flat_map(|i| [HalfSpace::new(axis(d, i, one), a), HalfSpace::new(axis(d, i, -one), a)])
        .collect();
    HRep::from_parts(d, a.kind(), Vec::new(), hs)
}

/// Hypercube `[-a,a]^d` as its `2^d` vertices.
pub fn hypercube_v(d: usize, a: impl Into<Coeff>) -> VRep {
    let a = a.into();
    let points = sign_patterns(d, a).into_iter().map(Point).collect();
    VRep::from_parts(d, a.kind(), points, Vec::new(), Vec::new())
}

/// Cross polytope `{x : |x_1| + ... + |x_d| <= r}` as `2^d` halfspaces.
pub fn cross_polytope_h(d: usize, r: impl Into<Coeff>) -> HRep {
    let r = r.into();
    let hs = sign_patterns(d, Coeff::one_of(r.kind()))
        .into_iter()
        .map(|n| HalfSpace::new(n, r))
        .collect();
    HRep::from_parts(d, r.kind(), Vec::new(), hs)
}

/// Cross polytope as its `2d` vertices `±r e_i`.
pub fn cross_polytope_v(d: usize, r: impl Into<Coeff>) -> VRep {
    let r = r.into();
    let points = (0..d)
        .flat_map(|i| [Point(axis(d, i, r)), Point(axis(d, i, -r))])
        .collect();
    VRep::from_parts(d, r.kind(), points, Vec::new(), Vec::new())
}

/// Standard simplex: `x_i >= 0` and `x_1 + ... + x_d <= 1`.
pub fn simplex_h(d: usize, kind: CoeffKind) -> HRep {
    let one = Coeff::one_of(kind);
    let mut hs: Vec<HalfSpace> = (0..d)
        .map(|i| HalfSpace::new(axis(d, i, -one), Coeff::zero_of(kind)))
        .collect();
    hs.push(HalfSpace::new(Vector::from_element(d, one), one));
    HRep::from_parts(d, kind, Vec::new(), hs)
}

/// Standard simplex: the origin and the unit vectors.
pub fn simplex_v(d: usize, kind: CoeffKind) -> VRep {
    let one = Coeff::one_of(kind);
    let points = std::iter::once(Point(Vector::from_element(d, Coeff::zero_of(kind))))
        .chain((0..d).map(|i| Point(axis(d, i, one))))
        .collect();
    VRep::from_parts(d, kind, points, Vec::new(), Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coeff::vector;
    use crate::polyhedron::{Converter, Enumeration};

    #[test]
    fn hypercube_sides_agree() {
        let h = hypercube_h(3, 1);
        let v = hypercube_v(3, 1);
        assert_eq!(h.len(), 6);
        assert_eq!(v.points().len(), 8);
        for p in v.points() {
            assert!(h.contains(&p.0).unwrap());
        }
        assert!(!h.contains(&vector([2, 0, 0])).unwrap());
        assert_eq!(v.points()[0].0, vector([-1, -1, -1]));
        assert_eq!(hypercube_h(2, 0.5).kind(), CoeffKind::Float);
    }

    #[test]
    fn cross_polytope_sides_agree() {
        let h = cross_polytope_h(3, Coeff::ratio(1, 2));
        let v = cross_polytope_v(3, Coeff::ratio(1, 2));
        assert_eq!((h.len(), v.points().len()), (8, 6));
        assert_eq!(h.kind(), CoeffKind::Rational);
        for p in v.points() {
            assert!(h.contains(&p.0).unwrap());
        }
        assert!(!h.contains(&vector([Coeff::ratio(1, 2), Coeff::ratio(1, 2), Coeff::Int(0)])).unwrap());
    }

    #[test]
    fn enumeration_recovers_known_counts() {
        let conv = Enumeration::default();
        let v = conv.to_vrep(&cross_polytope_h(3, 1.0)).unwrap();
        assert_eq!(v.points().len(), 6);
        let h = conv.to_hrep(&simplex_v(3, CoeffKind::Float)).unwrap();
        assert_eq!(h.len(), 4);
        let v = conv.to_vrep(&simplex_h(2, CoeffKind::Float)).unwrap();
        assert_eq!(v.points().len(), 3);
    }
}
