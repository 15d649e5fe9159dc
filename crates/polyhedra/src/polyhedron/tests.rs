use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::*;
use crate::algebra::{self, OperandKind};
use crate::coeff::{matrix, vector, Coeff};
use crate::elements::{HalfSpace, Point};
use crate::error::PolyError;

/// Delegates to `Enumeration` and counts calls per direction.
#[derive(Debug, Default)]
struct Counting {
    inner: Enumeration,
    to_h: AtomicUsize,
    to_v: AtomicUsize,
}

impl Converter for Counting {
    fn name(&self) -> &'static str {
        "counting"
    }
    fn to_hrep(&self, v: &VRep) -> std::result::Result<HRep, ConversionError> {
        self.to_h.fetch_add(1, Ordering::SeqCst);
        self.inner.to_hrep(v)
    }
    fn to_vrep(&self, h: &HRep) -> std::result::Result<VRep, ConversionError> {
        self.to_v.fetch_add(1, Ordering::SeqCst);
        self.inner.to_vrep(h)
    }
}

#[derive(Debug)]
struct Failing;

impl Converter for Failing {
    fn name(&self) -> &'static str {
        "failing"
    }
    fn to_hrep(&self, _: &VRep) -> std::result::Result<HRep, ConversionError> {
        Err(ConversionError::new("no facets today"))
    }
    fn to_vrep(&self, _: &HRep) -> std::result::Result<VRep, ConversionError> {
        Err(ConversionError::new("no vertices today"))
    }
}

fn square_h() -> HRep {
    HRep::from_halfspaces(
        2,
        vec![
            HalfSpace::new(vector([1.0, 0.0]), 1.0),
            HalfSpace::new(vector([-1.0, 0.0]), 0.0),
            HalfSpace::new(vector([0.0, 1.0]), 1.0),
            HalfSpace::new(vector([0.0, -1.0]), 0.0),
        ],
    )
    .unwrap()
}

fn square_v() -> VRep {
    let pts = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];
    VRep::from_points(2, pts.iter().map(|p| Point::new(vector(*p))).collect()).unwrap()
}

fn enumeration() -> Arc<dyn Converter> {
    Arc::new(Enumeration::default())
}

#[test]
fn lazy_side_is_computed_once() {
    let conv = Arc::new(Counting::default());
    let p = Polyhedron::from_hrep(square_h(), conv.clone());
    assert!(p.hrep_computed());
    assert!(!p.vrep_computed());

    let v = p.vrep().unwrap();
    assert_eq!(v.points().len(), 4);
    assert_eq!(v.kind(), CoeffKind::Float);
    p.vrep().unwrap();
    p.vrep().unwrap();
    assert_eq!(conv.to_v.load(Ordering::SeqCst), 1);
    assert_eq!(conv.to_h.load(Ordering::SeqCst), 0);
    assert!(p.vrep_computed());
}

#[test]
fn enumeration_square_round_trip() {
    let conv = Enumeration::default();
    let v = conv.to_vrep(&square_h()).unwrap();
    for corner in square_v().points() {
        assert!(v.points().iter().any(|q| (&q.0 - &corner.0).iter().all(|c| c.to_f64().abs() < 1e-9)));
    }
    let h = conv.to_hrep(&square_v()).unwrap();
    assert_eq!(h.halfspaces().len(), 4);
    for q in square_v().points() {
        assert!(h.contains(&q.0).unwrap());
    }
    assert!(!h.contains(&vector([1.5, 0.5])).unwrap());
}

#[test]
fn enumeration_rejects_what_it_cannot_handle() {
    let conv = Enumeration::default();
    let exact = HRep::from_halfspaces(1, vec![HalfSpace::new(vector([1]), 1)]).unwrap();
    assert!(conv.to_vrep(&exact).is_err());
    let open = HRep::from_halfspaces(2, vec![HalfSpace::new(vector([1.0, 0.0]), 1.0)]).unwrap();
    assert!(conv.to_vrep(&open).is_err());
    let segment = VRep::from_points(
        2,
        vec![Point::new(vector([0.0, 0.0])), Point::new(vector([1.0, 1.0]))],
    )
    .unwrap();
    assert!(conv.to_hrep(&segment).is_err());
}

#[test]
fn conversion_failure_propagates() {
    let p = Polyhedron::from_hrep(square_h(), Arc::new(Failing));
    let err = p.vrep().unwrap_err();
    assert_eq!(err, PolyError::Conversion(ConversionError::new("no vertices today")));
    assert!(!p.vrep_computed());
    assert!(p.convexhull(&Point::new(vector([2.0, 2.0]))).is_err());
    // the H side does not need the converter
    assert!(p.intersect(&HalfSpace::new(vector([1.0, 1.0]), 1.0)).is_ok());
}

#[test]
fn results_carry_the_polyhedron_converter() {
    let p = Polyhedron::from_hrep(square_h(), Arc::new(Counting::default()));
    let cut = HalfSpace::new(vector([1.0, 1.0]), 1.0);
    let q = p.intersect(&cut).unwrap();
    assert_eq!(q.converter().name(), "counting");
    assert_eq!(q.hrep().unwrap().len(), 5);

    let r = algebra::intersect(&square_h(), &p).unwrap();
    assert_eq!(r.kind(), OperandKind::Polyhedron);
    assert_eq!(r.as_polyhedron().unwrap().converter().name(), "counting");

    let e = Polyhedron::from_vrep(square_v(), enumeration());
    let s = algebra::minkowski_sum(&p, &e).unwrap().into_polyhedron().unwrap();
    assert_eq!(s.converter().name(), "counting");
    assert_eq!(s.vrep().unwrap().points().len(), 16);
}

#[test]
fn product_side_follows_cached_state() {
    // H-only first operand: H side, second operand converts to H.
    let p1 = Polyhedron::from_hrep(square_h(), enumeration());
    let p2 = Polyhedron::from_vrep(square_v(), enumeration());
    assert!(algebra::usehrep(&p1, &p2));
    let prod = p1.cartesian_product(&p2).unwrap();
    assert!(prod.hrep_computed() && !prod.vrep_computed());
    assert_eq!(prod.dim(), 4);
    assert!(p2.hrep_computed());

    // V-only first operand: V side.
    let p3 = Polyhedron::from_vrep(square_v(), enumeration());
    assert!(!algebra::usehrep(&p3, &p1));
    let prod = p3.cartesian_product(&p1).unwrap();
    assert!(prod.vrep_computed() && !prod.hrep_computed());
    assert_eq!(prod.vrep().unwrap().points().len(), 16);

    // Both sides cached: follow the second operand.
    let both = Polyhedron::from_hrep(square_h(), enumeration());
    both.vrep().unwrap();
    let h_only = Polyhedron::from_hrep(square_h(), enumeration());
    let v_only = Polyhedron::from_vrep(square_v(), enumeration());
    assert!(algebra::usehrep(&both, &h_only));
    assert!(!algebra::usehrep(&both, &v_only));
}

#[test]
fn in_place_commits_one_side() {
    let mut p = Polyhedron::from_hrep(square_h(), enumeration());
    p.vrep().unwrap();
    p.intersect_in_place(&HalfSpace::new(vector([1.0, 0.0]), 0.5)).unwrap();
    assert!(p.hrep_computed());
    assert!(!p.vrep_computed());
    assert_eq!(p.hrep().unwrap().len(), 5);
    assert_eq!(p.vrep().unwrap().points().len(), 4);

    p.convexhull_in_place(&Point::new(vector([2.0, 2.0]))).unwrap();
    assert!(p.vrep_computed());
    assert!(!p.hrep_computed());
    assert_eq!(p.vrep().unwrap().points().len(), 5);
}

#[test]
fn in_place_failure_leaves_state_alone() {
    let mut p = Polyhedron::from_hrep(square_h(), enumeration());
    p.vrep().unwrap();
    let wrong = HalfSpace::new(vector([1.0, 0.0, 0.0]), 1.0);
    let err = p.intersect_in_place(&wrong).unwrap_err();
    assert_eq!(err, PolyError::DimensionMismatch { expected: 2, found: 3 });
    assert!(p.hrep_computed() && p.vrep_computed());
    assert_eq!(p.hrep().unwrap(), &square_h());

    let exact = HalfSpace::new(vector([Coeff::ratio(1, 2), Coeff::Int(0)]), 1);
    assert!(matches!(
        p.intersect_in_place(&exact),
        Err(PolyError::TypeIncompatibility { .. })
    ));
    assert_eq!(p.hrep().unwrap().len(), 4);
}

#[test]
fn reset_replaces_one_slot() {
    let mut p = Polyhedron::from_vrep(square_v(), enumeration());
    let smaller = HRep::from_halfspaces(2, vec![HalfSpace::new(vector([1.0, 0.0]), 0.5)]).unwrap();
    p.reset_hrep(smaller.clone()).unwrap();
    // the V side is not recomputed or checked
    assert_eq!(p.hrep().unwrap(), &smaller);
    assert_eq!(p.vrep().unwrap(), &square_v());

    // Int constraints coerce to the existing Float kind.
    let ints = HRep::from_halfspaces(2, vec![HalfSpace::new(vector([0, 1]), 1)]).unwrap();
    p.reset_hrep(ints).unwrap();
    assert_eq!(p.hrep().unwrap().kind(), CoeffKind::Float);

    let rational = HRep::from_halfspaces(2, vec![HalfSpace::new(vector([1, 0]), Coeff::ratio(1, 3))]).unwrap();
    assert!(matches!(p.reset_hrep(rational), Err(PolyError::TypeIncompatibility { .. })));
    let wrong_dim = VRep::from_points(3, vec![Point::new(vector([0.0, 0.0, 0.0]))]).unwrap();
    assert!(matches!(p.reset_vrep(wrong_dim), Err(PolyError::DimensionMismatch { .. })));

    assert!(p.clear_vrep());
    assert!(!p.vrep_computed());
    assert!(!p.clear_hrep());
    assert!(p.hrep_computed());
}

#[test]
fn transforms_on_a_polyhedron() {
    let p = Polyhedron::from_hrep(square_h(), enumeration());
    let swap = matrix(2, 2, [0.0, 1.0, 1.0, 0.0]).unwrap();
    let t = p.transform_h(&swap).unwrap();
    assert_eq!(t.hrep().unwrap().halfspaces()[0], HalfSpace::new(vector([0.0, 1.0]), 1.0));
    assert_eq!(p.left_div(&swap).unwrap().hrep().unwrap(), t.hrep().unwrap());

    let scale = matrix(2, 2, [2.0, 0.0, 0.0, 2.0]).unwrap();
    let img = p.linear_image(&scale).unwrap();
    assert!(img.vrep().unwrap().points().iter().any(|q| q.0 == vector([2.0, 2.0])));
    assert!(p.linear_image(&matrix(1, 3, [1.0, 1.0, 1.0]).unwrap()).is_err());
}

#[test]
fn failed_checks_never_convert() {
    let conv = Arc::new(Counting::default());
    let mut v_only = Polyhedron::from_vrep(square_v(), conv.clone());
    let rational = HRep::from_halfspaces(2, vec![HalfSpace::new(vector([1, 0]), Coeff::ratio(1, 2))]).unwrap();
    assert_eq!(
        algebra::intersect(&v_only, &rational).unwrap_err(),
        PolyError::TypeIncompatibility {
            left: CoeffKind::Float,
            right: CoeffKind::Rational
        }
    );
    let space3 = HRep::from_halfspaces(3, vec![HalfSpace::new(vector([1.0, 0.0, 0.0]), 1.0)]).unwrap();
    assert_eq!(
        v_only.intersect_in_place(&space3).unwrap_err(),
        PolyError::DimensionMismatch { expected: 2, found: 3 }
    );
    assert!(v_only.intersect(&rational).is_err());
    let exact = Polyhedron::from_hrep(rational.clone(), conv.clone());
    assert!(v_only.cartesian_product(&exact).is_err());
    assert!(v_only.transform_h(&matrix(2, 3, [1.0; 6]).unwrap()).is_err());
    assert!(v_only.left_div(&matrix(3, 2, [1.0; 6]).unwrap()).is_err());
    assert_eq!(conv.to_h.load(Ordering::SeqCst), 0);
    assert!(!v_only.hrep_computed());

    let h_only = Polyhedron::from_hrep(square_h(), conv.clone());
    let origin3 = Point::new(vector([0.0, 0.0, 0.0]));
    assert!(h_only.convexhull(&origin3).is_err());
    assert!(h_only.minkowski_sum(&origin3).is_err());
    assert!(h_only.linear_image(&matrix(2, 3, [1.0; 6]).unwrap()).is_err());
    assert!(algebra::minkowski_sum(&h_only, &Point::new(vector([Coeff::ratio(1, 2), Coeff::Int(0)]))).is_err());
    assert_eq!(conv.to_v.load(Ordering::SeqCst), 0);
    assert!(!h_only.vrep_computed());
}

#[test]
fn free_product_reuses_the_cached_side() {
    let conv = Arc::new(Counting::default());
    let a = Polyhedron::from_vrep(square_v(), conv.clone());
    let b = Polyhedron::from_vrep(square_v(), conv.clone());
    let prod = algebra::cartesian_product(&a, &b).unwrap();
    assert!(prod.vrep_computed() && !prod.hrep_computed());
    assert_eq!(prod.dim(), 4);
    assert_eq!(prod.vrep().unwrap().points().len(), 16);

    let c = Polyhedron::from_hrep(square_h(), conv.clone());
    let d = Polyhedron::from_hrep(square_h(), conv.clone());
    let prod = algebra::cartesian_product(&c, &d).unwrap();
    assert!(prod.hrep_computed() && !prod.vrep_computed());
    assert_eq!(prod.hrep().unwrap().len(), 8);
    assert_eq!(conv.to_h.load(Ordering::SeqCst) + conv.to_v.load(Ordering::SeqCst), 0);
}
