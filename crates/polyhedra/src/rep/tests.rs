use super::*;
use crate::coeff::{vector, Coeff, CoeffKind};
use crate::elements::{HalfSpace, HyperPlane, Line, Point, Ray};
use crate::error::PolyError;

fn unit_square() -> HRep {
    HRep::from_halfspaces(
        2,
        vec![
            HalfSpace::new(vector([1, 0]), 1),
            HalfSpace::new(vector([-1, 0]), 0),
            HalfSpace::new(vector([0, 1]), 1),
            HalfSpace::new(vector([0, -1]), 0),
        ],
    )
    .unwrap()
}

#[test]
fn construction_promotes_to_one_kind() {
    let h = HRep::new(
        2,
        vec![HyperPlane::new(vector([1, 1]), Coeff::ratio(1, 2))],
        vec![HalfSpace::new(vector([1, 0]), 3)],
    )
    .unwrap();
    assert_eq!(h.kind(), CoeffKind::Rational);
    for e in h.halfspaces() {
        assert!(e.a.iter().all(|c| c.kind() == CoeffKind::Rational));
        assert_eq!(e.beta.kind(), CoeffKind::Rational);
    }
}

#[test]
fn construction_rejects_bad_dims_and_kinds() {
    let err = HRep::from_halfspaces(2, vec![HalfSpace::new(vector([1, 0, 0]), 1)]).unwrap_err();
    assert_eq!(err, PolyError::DimensionMismatch { expected: 2, found: 3 });
    let err = VRep::from_points(
        1,
        vec![Point::new(vector([Coeff::ratio(1, 3)])), Point::new(vector([0.5]))],
    )
    .unwrap_err();
    assert!(matches!(err, PolyError::TypeIncompatibility { .. }));
}

#[test]
fn membership_exact_and_float() {
    let sq = unit_square();
    assert!(sq.contains(&vector([1, 1])).unwrap());
    assert!(!sq.contains(&vector([Coeff::ratio(3, 2), Coeff::Int(0)])).unwrap());
    let sqf = sq.coerced(CoeffKind::Float).unwrap();
    assert_eq!(sqf.kind(), CoeffKind::Float);
    assert!(sqf.contains(&vector([1.0 + 1e-12, 0.5])).unwrap());
    assert!(sq.contains(&vector([1, 1, 1])).is_err());
}

#[test]
fn cone_detection() {
    let c = VRep::cone(2, vec![Line::new(vector([1, 0]))], vec![Ray::new(vector([0, 1]))]).unwrap();
    assert!(c.is_cone());
    let with_origin = VRep::new(2, vec![Point::new(vector([0, 0]))], Vec::new(), Vec::new()).unwrap();
    assert!(with_origin.is_cone());
    let p = VRep::from_points(2, vec![Point::new(vector([1, 0]))]).unwrap();
    assert!(!p.is_cone());
}

#[test]
fn universe_keeps_requested_kind() {
    let u = HRep::universe(3, CoeffKind::Float);
    assert!(u.is_empty());
    assert_eq!(u.kind(), CoeffKind::Float);
    assert!(u.contains(&vector([7, -2, 0])).unwrap());
}
