//! Algebra over representations: intersection, convex hull, Minkowski sum,
//! Cartesian product and linear transforms.
//!
//! Purpose
//! - Accept any mix of elements, bare representations and polyhedra for the
//!   same operator, normalize them to one representation kind, promote the
//!   coefficient kind, then run the structural combination.
//!
//! Normalization
//! - `HOperand` (HyperPlane | HalfSpace | HRep | Polyhedron) and `VOperand`
//!   (Point | Line | Ray | VRep | Polyhedron) are the only entry points; a bare
//!   element becomes a singleton representation, a polyhedron materializes the
//!   side the operation needs.
//!
//! Result kind
//! - `result_kind` is the single decision table: a polyhedron operand makes the
//!   result a polyhedron using that operand's converter (first operand wins);
//!   otherwise the result is a bare representation.
//!
//! Layout: `intersect` (H-side unions), `hull` (V-side unions and conification),
//! `minkowski`, `product`, `transform`, `inplace`, `ops` (std operator impls).

mod hull;
mod inplace;
mod intersect;
mod minkowski;
mod ops;
mod product;
mod transform;

use std::borrow::Cow;
use std::sync::Arc;

pub use hull::{convexhull_elements, vconvexhull};
pub use inplace::{convexhull_in_place, intersect_in_place, InPlaceTarget};
pub use intersect::{hintersect, intersect_elements};
pub use minkowski::vsum;
pub use product::{hproduct, usehrep, vproduct};
pub use transform::{div, left_div, mul};

use crate::coeff::CoeffKind;
use crate::elements::{HRepElement, HalfSpace, HyperPlane, Line, Point, Ray, VRepElement};
use crate::error::{check_dim, Result};
use crate::polyhedron::{Converter, Polyhedron};
use crate::rep::{HRep, VRep};

/// Structural kind of an operand, the key of the result-kind table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperandKind {
    Element,
    Representation,
    Polyhedron,
}

/// What a binary operation returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultKind {
    Representation,
    /// A polyhedron built with the first operand's converter.
    PolyhedronOfFirst,
    /// A polyhedron built with the second operand's converter.
    PolyhedronOfSecond,
}

/// Result-kind decision table, keyed by (first, second) operand kind.
pub fn result_kind(lhs: OperandKind, rhs: OperandKind) -> ResultKind {
    use OperandKind as K;
    match (lhs, rhs) {
        (K::Polyhedron, _) => ResultKind::PolyhedronOfFirst,
        (K::Element | K::Representation, K::Polyhedron) => ResultKind::PolyhedronOfSecond,
        (K::Element | K::Representation, K::Element | K::Representation) => {
            ResultKind::Representation
        }
    }
}

/// Output of a dispatching operation: a bare representation or a polyhedron.
#[derive(Clone, Debug)]
pub enum Combined<R> {
    Rep(R),
    Polyhedron(Polyhedron),
}

impl<R> Combined<R> {
    pub fn kind(&self) -> OperandKind {
        match self {
            Combined::Rep(_) => OperandKind::Representation,
            Combined::Polyhedron(_) => OperandKind::Polyhedron,
        }
    }
    pub fn into_rep(self) -> Option<R> {
        match self {
            Combined::Rep(r) => Some(r),
            Combined::Polyhedron(_) => None,
        }
    }
    pub fn into_polyhedron(self) -> Option<Polyhedron> {
        match self {
            Combined::Rep(_) => None,
            Combined::Polyhedron(p) => Some(p),
        }
    }
    pub fn as_polyhedron(&self) -> Option<&Polyhedron> {
        match self {
            Combined::Rep(_) => None,
            Combined::Polyhedron(p) => Some(p),
        }
    }
}

/// Dimension and kind checks; they read only cached metadata and never convert.
pub(crate) fn precheck(
    lhs: (usize, CoeffKind),
    rhs: (usize, CoeffKind),
    same_dim: bool,
) -> Result<CoeffKind> {
    if same_dim {
        check_dim(lhs.0, rhs.0)?;
    }
    lhs.1.promote(rhs.1)
}

fn pick_converter(
    kind: ResultKind,
    first: Option<Arc<dyn Converter>>,
    second: Option<Arc<dyn Converter>>,
) -> Option<Arc<dyn Converter>> {
    match kind {
        ResultKind::Representation => None,
        ResultKind::PolyhedronOfFirst => first,
        ResultKind::PolyhedronOfSecond => second,
    }
}

/// H-side operand.
#[derive(Clone, Copy, Debug)]
pub enum HOperand<'a> {
    HyperPlane(&'a HyperPlane),
    HalfSpace(&'a HalfSpace),
    Rep(&'a HRep),
    Polyhedron(&'a Polyhedron),
}

impl<'a> HOperand<'a> {
    pub fn kind(&self) -> OperandKind {
        match self {
            HOperand::HyperPlane(_) | HOperand::HalfSpace(_) => OperandKind::Element,
            HOperand::Rep(_) => OperandKind::Representation,
            HOperand::Polyhedron(_) => OperandKind::Polyhedron,
        }
    }

    pub fn dim(&self) -> usize {
        match self {
            HOperand::HyperPlane(h) => h.dim(),
            HOperand::HalfSpace(h) => h.dim(),
            HOperand::Rep(r) => r.dim(),
            HOperand::Polyhedron(p) => p.dim(),
        }
    }

    /// Dimension and coefficient kind, read without converting anything.
    pub fn shape(&self) -> Result<(usize, CoeffKind)> {
        let kind = match self {
            HOperand::HyperPlane(h) => h.kind()?,
            HOperand::HalfSpace(h) => h.kind()?,
            HOperand::Rep(r) => r.kind(),
            HOperand::Polyhedron(p) => p.kind(),
        };
        Ok((self.dim(), kind))
    }

    /// Normalize to an H-representation; a polyhedron computes its H side if needed.
    pub fn hrep(&self) -> Result<Cow<'a, HRep>> {
        match *self {
            HOperand::HyperPlane(h) => Ok(Cow::Owned(HRepElement::from(h.clone()).into_hrep()?)),
            HOperand::HalfSpace(h) => Ok(Cow::Owned(HRepElement::from(h.clone()).into_hrep()?)),
            HOperand::Rep(r) => Ok(Cow::Borrowed(r)),
            HOperand::Polyhedron(p) => Ok(Cow::Borrowed(p.hrep()?)),
        }
    }

    fn converter(&self) -> Option<Arc<dyn Converter>> {
        match self {
            HOperand::Polyhedron(p) => Some(p.converter()),
            _ => None,
        }
    }

    /// Wrap `rep` according to the result-kind table for `(self, rhs)`.
    fn finish(&self, rhs: &HOperand<'_>, rep: HRep) -> Combined<HRep> {
        let kind = result_kind(self.kind(), rhs.kind());
        match pick_converter(kind, self.converter(), rhs.converter()) {
            Some(c) => Combined::Polyhedron(Polyhedron::from_hrep(rep, c)),
            None => Combined::Rep(rep),
        }
    }

    fn to_combined(self) -> Result<Combined<HRep>> {
        Ok(match self {
            HOperand::Polyhedron(p) => Combined::Polyhedron(p.clone()),
            other => Combined::Rep(other.hrep()?.into_owned()),
        })
    }
}

impl<'a> From<&'a HyperPlane> for HOperand<'a> {
    fn from(h: &'a HyperPlane) -> Self {
        HOperand::HyperPlane(h)
    }
}
impl<'a> From<&'a HalfSpace> for HOperand<'a> {
    fn from(h: &'a HalfSpace) -> Self {
        HOperand::HalfSpace(h)
    }
}
impl<'a> From<&'a HRepElement> for HOperand<'a> {
    fn from(e: &'a HRepElement) -> Self {
        match e {
            HRepElement::HyperPlane(h) => HOperand::HyperPlane(h),
            HRepElement::HalfSpace(h) => HOperand::HalfSpace(h),
        }
    }
}
impl<'a> From<&'a HRep> for HOperand<'a> {
    fn from(r: &'a HRep) -> Self {
        HOperand::Rep(r)
    }
}
impl<'a> From<&'a Polyhedron> for HOperand<'a> {
    fn from(p: &'a Polyhedron) -> Self {
        HOperand::Polyhedron(p)
    }
}
impl<'a> From<&'a Combined<HRep>> for HOperand<'a> {
    fn from(c: &'a Combined<HRep>) -> Self {
        match c {
            Combined::Rep(r) => HOperand::Rep(r),
            Combined::Polyhedron(p) => HOperand::Polyhedron(p),
        }
    }
}

/// V-side operand.
#[derive(Clone, Copy, Debug)]
pub enum VOperand<'a> {
    Point(&'a Point),
    Line(&'a Line),
    Ray(&'a Ray),
    Rep(&'a VRep),
    Polyhedron(&'a Polyhedron),
}

impl<'a> VOperand<'a> {
    pub fn kind(&self) -> OperandKind {
        match self {
            VOperand::Point(_) | VOperand::Line(_) | VOperand::Ray(_) => OperandKind::Element,
            VOperand::Rep(_) => OperandKind::Representation,
            VOperand::Polyhedron(_) => OperandKind::Polyhedron,
        }
    }

    pub fn dim(&self) -> usize {
        match self {
            VOperand::Point(p) => p.dim(),
            VOperand::Line(l) => l.dim(),
            VOperand::Ray(r) => r.dim(),
            VOperand::Rep(r) => r.dim(),
            VOperand::Polyhedron(p) => p.dim(),
        }
    }

    /// Dimension and coefficient kind, read without converting anything.
    pub fn shape(&self) -> Result<(usize, CoeffKind)> {
        let kind = match self {
            VOperand::Point(p) => p.kind()?,
            VOperand::Line(l) => l.kind()?,
            VOperand::Ray(r) => r.kind()?,
            VOperand::Rep(r) => r.kind(),
            VOperand::Polyhedron(p) => p.kind(),
        };
        Ok((self.dim(), kind))
    }

    fn element(&self) -> Option<VRepElement> {
        match *self {
            VOperand::Point(p) => Some(VRepElement::Point(p.clone())),
            VOperand::Line(l) => Some(VRepElement::Line(l.clone())),
            VOperand::Ray(r) => Some(VRepElement::Ray(r.clone())),
            VOperand::Rep(_) | VOperand::Polyhedron(_) => None,
        }
    }

    /// Normalize to a V-representation; a polyhedron computes its V side if needed.
    pub fn vrep(&self) -> Result<Cow<'a, VRep>> {
        match *self {
            VOperand::Rep(r) => Ok(Cow::Borrowed(r)),
            VOperand::Polyhedron(p) => Ok(Cow::Borrowed(p.vrep()?)),
            VOperand::Point(p) => Ok(Cow::Owned(VRepElement::Point(p.clone()).into_vrep()?)),
            VOperand::Line(l) => Ok(Cow::Owned(VRepElement::Line(l.clone()).into_vrep()?)),
            VOperand::Ray(r) => Ok(Cow::Owned(VRepElement::Ray(r.clone()).into_vrep()?)),
        }
    }

    /// Cone-generator form; a polyhedron stays a polyhedron with the same converter.
    pub fn conify(&self) -> Result<Combined<VRep>> {
        if let Some(e) = self.element() {
            return Ok(Combined::Rep(e.conify().into_vrep()?));
        }
        let cone = hull::conify(&*self.vrep()?);
        Ok(match self.converter() {
            Some(c) => Combined::Polyhedron(Polyhedron::from_vrep(cone, c)),
            None => Combined::Rep(cone),
        })
    }

    fn converter(&self) -> Option<Arc<dyn Converter>> {
        match self {
            VOperand::Polyhedron(p) => Some(p.converter()),
            _ => None,
        }
    }

    fn finish(&self, rhs: &VOperand<'_>, rep: VRep) -> Combined<VRep> {
        let kind = result_kind(self.kind(), rhs.kind());
        match pick_converter(kind, self.converter(), rhs.converter()) {
            Some(c) => Combined::Polyhedron(Polyhedron::from_vrep(rep, c)),
            None => Combined::Rep(rep),
        }
    }

    fn to_combined(self) -> Result<Combined<VRep>> {
        Ok(match self {
            VOperand::Polyhedron(p) => Combined::Polyhedron(p.clone()),
            other => Combined::Rep(other.vrep()?.into_owned()),
        })
    }
}

impl<'a> From<&'a Point> for VOperand<'a> {
    fn from(p: &'a Point) -> Self {
        VOperand::Point(p)
    }
}
impl<'a> From<&'a Line> for VOperand<'a> {
    fn from(l: &'a Line) -> Self {
        VOperand::Line(l)
    }
}
impl<'a> From<&'a Ray> for VOperand<'a> {
    fn from(r: &'a Ray) -> Self {
        VOperand::Ray(r)
    }
}
impl<'a> From<&'a VRepElement> for VOperand<'a> {
    fn from(e: &'a VRepElement) -> Self {
        match e {
            VRepElement::Point(p) => VOperand::Point(p),
            VRepElement::Line(l) => VOperand::Line(l),
            VRepElement::Ray(r) => VOperand::Ray(r),
        }
    }
}
impl<'a> From<&'a VRep> for VOperand<'a> {
    fn from(r: &'a VRep) -> Self {
        VOperand::Rep(r)
    }
}
impl<'a> From<&'a Polyhedron> for VOperand<'a> {
    fn from(p: &'a Polyhedron) -> Self {
        VOperand::Polyhedron(p)
    }
}
impl<'a> From<&'a Combined<VRep>> for VOperand<'a> {
    fn from(c: &'a Combined<VRep>) -> Self {
        match c {
            Combined::Rep(r) => VOperand::Rep(r),
            Combined::Polyhedron(p) => VOperand::Polyhedron(p),
        }
    }
}

/// `lhs ∩ rhs`.
pub fn intersect<'a, 'b>(
    lhs: impl Into<HOperand<'a>>,
    rhs: impl Into<HOperand<'b>>,
) -> Result<Combined<HRep>> {
    let (lhs, rhs) = (lhs.into(), rhs.into());
    precheck(lhs.shape()?, rhs.shape()?, true)?;
    let (a, b) = (lhs.hrep()?, rhs.hrep()?);
    let rep = hintersect(&a, &b)?;
    Ok(lhs.finish(&rhs, rep))
}

/// `first ∩ rest[0] ∩ rest[1] ∩ ...`, folded left.
pub fn intersect_all<'a, I>(first: impl Into<HOperand<'a>>, rest: I) -> Result<Combined<HRep>>
where
    I: IntoIterator,
    I::Item: Into<HOperand<'a>>,
{
    let mut acc = first.into().to_combined()?;
    for op in rest {
        acc = intersect(&acc, op)?;
    }
    Ok(acc)
}

/// Convex hull of `lhs` and `rhs`.
pub fn convexhull<'a, 'b>(
    lhs: impl Into<VOperand<'a>>,
    rhs: impl Into<VOperand<'b>>,
) -> Result<Combined<VRep>> {
    let (lhs, rhs) = (lhs.into(), rhs.into());
    precheck(lhs.shape()?, rhs.shape()?, true)?;
    let (a, b) = (lhs.vrep()?, rhs.vrep()?);
    let rep = vconvexhull(&a, &b)?;
    Ok(lhs.finish(&rhs, rep))
}

/// Convex hull of all operands, folded left.
pub fn convexhull_all<'a, I>(first: impl Into<VOperand<'a>>, rest: I) -> Result<Combined<VRep>>
where
    I: IntoIterator,
    I::Item: Into<VOperand<'a>>,
{
    let mut acc = first.into().to_combined()?;
    for op in rest {
        acc = convexhull(&acc, op)?;
    }
    Ok(acc)
}

/// Cone-generator form of `x` (points turn into rays).
pub fn conify<'a>(x: impl Into<VOperand<'a>>) -> Result<Combined<VRep>> {
    x.into().conify()
}

/// Convex hull of the conified operands.
pub fn conichull<'a, I>(first: impl Into<VOperand<'a>>, rest: I) -> Result<Combined<VRep>>
where
    I: IntoIterator,
    I::Item: Into<VOperand<'a>>,
{
    let first = first.into().conify()?;
    let rest = rest
        .into_iter()
        .map(|op| op.into().conify())
        .collect::<Result<Vec<_>>>()?;
    convexhull_all(&first, rest.iter())
}

/// Minkowski sum `lhs + rhs`.
pub fn minkowski_sum<'a, 'b>(
    lhs: impl Into<VOperand<'a>>,
    rhs: impl Into<VOperand<'b>>,
) -> Result<Combined<VRep>> {
    let (lhs, rhs) = (lhs.into(), rhs.into());
    precheck(lhs.shape()?, rhs.shape()?, true)?;
    let (a, b) = (lhs.vrep()?, rhs.vrep()?);
    let rep = vsum(&a, &b)?;
    Ok(lhs.finish(&rhs, rep))
}

/// Cartesian product computed on the H side.
///
/// The caller picks the side; for two polyhedra, [`cartesian_product`] picks
/// it from what is already cached.
pub fn cartesian_product_h<'a, 'b>(
    lhs: impl Into<HOperand<'a>>,
    rhs: impl Into<HOperand<'b>>,
) -> Result<Combined<HRep>> {
    let (lhs, rhs) = (lhs.into(), rhs.into());
    precheck(lhs.shape()?, rhs.shape()?, false)?;
    let (a, b) = (lhs.hrep()?, rhs.hrep()?);
    let rep = hproduct(&a, &b)?;
    Ok(lhs.finish(&rhs, rep))
}

/// Cartesian product computed on the V side. See [`cartesian_product_h`].
pub fn cartesian_product_v<'a, 'b>(
    lhs: impl Into<VOperand<'a>>,
    rhs: impl Into<VOperand<'b>>,
) -> Result<Combined<VRep>> {
    let (lhs, rhs) = (lhs.into(), rhs.into());
    precheck(lhs.shape()?, rhs.shape()?, false)?;
    let (a, b) = (lhs.vrep()?, rhs.vrep()?);
    let rep = vproduct(&a, &b)?;
    Ok(lhs.finish(&rhs, rep))
}

/// Cartesian product of two polyhedra on the side [`usehrep`] selects.
pub fn cartesian_product(lhs: &Polyhedron, rhs: &Polyhedron) -> Result<Polyhedron> {
    lhs.cartesian_product(rhs)
}
