//! Primitive geometric elements: constraints (H-side) and generators (V-side).
//!
//! - `HalfSpace`: `a·x <= beta`; `HyperPlane`: `a·x = beta`.
//! - `Point`, `Line` (direction spanning ±∞), `Ray` (direction spanning [0,∞)).
//!
//! Elements do not carry a kind of their own: a representation coerces all of
//! its elements to one `CoeffKind` on construction. `HRepElement` and
//! `VRepElement` let a single element stand in for a one-element representation.

use crate::coeff::{
    add_checked, checked_dot, checked_mat_vec, coerce_vector, promote_all, sub_checked,
    vector_kind, Coeff, CoeffKind, Matrix, Vector,
};
use crate::dim::zeropad;
use crate::error::Result;
use crate::rep::{HRep, VRep};

macro_rules! constraint {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name {
            pub a: Vector,
            pub beta: Coeff,
        }

        impl $name {
            #[inline]
            pub fn new(a: Vector, beta: impl Into<Coeff>) -> Self {
                Self { a, beta: beta.into() }
            }
            #[inline]
            pub fn dim(&self) -> usize {
                self.a.len()
            }
            /// Common kind of the normal and the offset.
            pub fn kind(&self) -> Result<CoeffKind> {
                vector_kind(&self.a)?.promote(self.beta.kind())
            }
            pub fn coerced(&self, kind: CoeffKind) -> Result<Self> {
                Ok(Self {
                    a: coerce_vector(&self.a, kind)?,
                    beta: self.beta.to_kind(kind)?,
                })
            }
            /// Embed into a larger space; the offset is unchanged.
            pub fn zeropad(&self, pad: isize, kind: CoeffKind) -> Self {
                Self {
                    a: zeropad(&self.a, pad, kind),
                    beta: self.beta,
                }
            }
            /// `(a, beta) ↦ (P a, beta)`. `P` must already be coerced to `kind`.
            pub(crate) fn transformed(&self, p: &Matrix, kind: CoeffKind) -> Result<Self> {
                Ok(Self {
                    a: checked_mat_vec(p, &self.a, kind, "linear transform")?,
                    beta: self.beta,
                })
            }
        }
    };
}

constraint!(
    /// Closed half-space `a · x <= beta`.
    HalfSpace
);
constraint!(
    /// Hyperplane `a · x = beta`.
    HyperPlane
);

impl HalfSpace {
    /// Membership with slack `eps` (zero for exact kinds).
    #[inline]
    pub fn contains(&self, x: &Vector, eps: Coeff) -> Result<bool> {
        let lhs = checked_dot(&self.a, x, CoeffKind::Int, "membership")?;
        Ok(lhs <= add_checked(self.beta, eps, "membership")?)
    }
}

impl HyperPlane {
    #[inline]
    pub fn contains(&self, x: &Vector, eps: Coeff) -> Result<bool> {
        let lhs = checked_dot(&self.a, x, CoeffKind::Int, "membership")?;
        Ok(lhs <= add_checked(self.beta, eps, "membership")?
            && lhs >= sub_checked(self.beta, eps, "membership")?)
    }
}

macro_rules! generator {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name(pub Vector);

        impl $name {
            #[inline]
            pub fn new(v: Vector) -> Self {
                Self(v)
            }
            #[inline]
            pub fn coords(&self) -> &Vector {
                &self.0
            }
            #[inline]
            pub fn dim(&self) -> usize {
                self.0.len()
            }
            pub fn kind(&self) -> Result<CoeffKind> {
                vector_kind(&self.0)
            }
            pub fn coerced(&self, kind: CoeffKind) -> Result<Self> {
                Ok(Self(coerce_vector(&self.0, kind)?))
            }
            pub fn zeropad(&self, pad: isize, kind: CoeffKind) -> Self {
                Self(zeropad(&self.0, pad, kind))
            }
            /// `v ↦ P v`. `P` must already be coerced to `kind`.
            pub(crate) fn transformed(&self, p: &Matrix, kind: CoeffKind) -> Result<Self> {
                Ok(Self(checked_mat_vec(p, &self.0, kind, "linear transform")?))
            }
        }
    };
}

generator!(
    /// A point of the polyhedron.
    Point
);
generator!(
    /// Direction `l`; the polyhedron contains `x + t l` for all real `t`.
    Line
);
generator!(
    /// Direction `r`; the polyhedron contains `x + t r` for all `t >= 0`.
    Ray
);

impl Point {
    #[inline]
    pub fn is_origin(&self) -> bool {
        self.0.iter().all(num_traits::Zero::is_zero)
    }
}

/// One constraint viewed as an H-representation element.
#[derive(Clone, Debug, PartialEq)]
pub enum HRepElement {
    HyperPlane(HyperPlane),
    HalfSpace(HalfSpace),
}

impl HRepElement {
    pub fn dim(&self) -> usize {
        match self {
            HRepElement::HyperPlane(h) => h.dim(),
            HRepElement::HalfSpace(h) => h.dim(),
        }
    }

    pub fn kind(&self) -> Result<CoeffKind> {
        match self {
            HRepElement::HyperPlane(h) => h.kind(),
            HRepElement::HalfSpace(h) => h.kind(),
        }
    }

    /// Singleton H-representation holding just this constraint.
    pub fn into_hrep(self) -> Result<HRep> {
        let dim = self.dim();
        match self {
            HRepElement::HyperPlane(h) => HRep::new(dim, vec![h], Vec::new()),
            HRepElement::HalfSpace(h) => HRep::new(dim, Vec::new(), vec![h]),
        }
    }
}

impl From<HyperPlane> for HRepElement {
    fn from(h: HyperPlane) -> Self {
        HRepElement::HyperPlane(h)
    }
}
impl From<HalfSpace> for HRepElement {
    fn from(h: HalfSpace) -> Self {
        HRepElement::HalfSpace(h)
    }
}

/// One generator viewed as a V-representation element.
#[derive(Clone, Debug, PartialEq)]
pub enum VRepElement {
    Point(Point),
    Line(Line),
    Ray(Ray),
}

impl VRepElement {
    pub fn dim(&self) -> usize {
        match self {
            VRepElement::Point(p) => p.dim(),
            VRepElement::Line(l) => l.dim(),
            VRepElement::Ray(r) => r.dim(),
        }
    }

    pub fn kind(&self) -> Result<CoeffKind> {
        match self {
            VRepElement::Point(p) => p.kind(),
            VRepElement::Line(l) => l.kind(),
            VRepElement::Ray(r) => r.kind(),
        }
    }

    /// Cone-generator form: a point becomes the ray through it; lines and rays are kept.
    pub fn conify(self) -> VRepElement {
        match self {
            VRepElement::Point(p) => VRepElement::Ray(Ray(p.0)),
            other => other,
        }
    }

    /// Singleton V-representation holding just this generator.
    pub fn into_vrep(self) -> Result<VRep> {
        let dim = self.dim();
        match self {
            VRepElement::Point(p) => VRep::new(dim, vec![p], Vec::new(), Vec::new()),
            VRepElement::Line(l) => VRep::new(dim, Vec::new(), vec![l], Vec::new()),
            VRepElement::Ray(r) => VRep::new(dim, Vec::new(), Vec::new(), vec![r]),
        }
    }
}

impl From<Point> for VRepElement {
    fn from(p: Point) -> Self {
        VRepElement::Point(p)
    }
}
impl From<Line> for VRepElement {
    fn from(l: Line) -> Self {
        VRepElement::Line(l)
    }
}
impl From<Ray> for VRepElement {
    fn from(r: Ray) -> Self {
        VRepElement::Ray(r)
    }
}

/// Common kind of a batch of elements.
pub(crate) fn elements_kind<I>(kinds: I) -> Result<CoeffKind>
where
    I: IntoIterator<Item = Result<CoeffKind>>,
{
    let kinds = kinds.into_iter().collect::<Result<Vec<_>>>()?;
    promote_all(kinds)
}
