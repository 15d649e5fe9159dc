//! In-place operators. Only a polyhedron owns a mutable cache, so every other
//! target reports `UnsupportedMutation` naming its concrete kind.

use crate::elements::{HRepElement, HalfSpace, HyperPlane, Line, Point, Ray, VRepElement};
use crate::error::{PolyError, Result};
use crate::polyhedron::Polyhedron;
use crate::rep::{HRep, VRep};

use super::{Combined, HOperand, VOperand};

/// Something an in-place operator may be called on.
pub trait InPlaceTarget {
    /// Concrete kind, used in diagnostics.
    fn target_name(&self) -> &'static str;

    /// The mutable cache to update, if this target has one.
    fn as_polyhedron_mut(&mut self) -> Option<&mut Polyhedron> {
        None
    }
}

macro_rules! immutable_target {
    ($($ty:ty => $name:literal),* $(,)?) => {
        $(impl InPlaceTarget for $ty {
            fn target_name(&self) -> &'static str {
                $name
            }
        })*
    };
}

immutable_target!(
    HRep => "HRep",
    VRep => "VRep",
    HyperPlane => "HyperPlane",
    HalfSpace => "HalfSpace",
    HRepElement => "HRepElement",
    Point => "Point",
    Line => "Line",
    Ray => "Ray",
    VRepElement => "VRepElement",
);

impl InPlaceTarget for Polyhedron {
    fn target_name(&self) -> &'static str {
        "Polyhedron"
    }
    fn as_polyhedron_mut(&mut self) -> Option<&mut Polyhedron> {
        Some(self)
    }
}

impl<R> InPlaceTarget for Combined<R> {
    fn target_name(&self) -> &'static str {
        match self {
            Combined::Rep(_) => "Representation",
            Combined::Polyhedron(_) => "Polyhedron",
        }
    }
    fn as_polyhedron_mut(&mut self) -> Option<&mut Polyhedron> {
        match self {
            Combined::Rep(_) => None,
            Combined::Polyhedron(p) => Some(p),
        }
    }
}

fn polyhedron_of<T: InPlaceTarget + ?Sized>(target: &mut T) -> Result<&mut Polyhedron> {
    let kind = target.target_name();
    target
        .as_polyhedron_mut()
        .ok_or(PolyError::UnsupportedMutation { kind })
}

/// `target ∩= other`.
pub fn intersect_in_place<'b, T>(target: &mut T, other: impl Into<HOperand<'b>>) -> Result<()>
where
    T: InPlaceTarget + ?Sized,
{
    polyhedron_of(target)?.intersect_in_place(other)
}

/// `target = convexhull(target, other)`.
pub fn convexhull_in_place<'b, T>(target: &mut T, other: impl Into<VOperand<'b>>) -> Result<()>
where
    T: InPlaceTarget + ?Sized,
{
    polyhedron_of(target)?.convexhull_in_place(other)
}
