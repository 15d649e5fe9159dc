//! Coefficient kinds, the tagged scalar `Coeff`, and the promotion resolver.
//!
//! Purpose
//! - Every representation carries exactly one `CoeffKind`. Before two
//!   representations are combined, `CoeffKind::promote` picks the kind both
//!   convert into, and both operands are coerced to it.
//!
//! Registry
//! - `Int` (i64) widens to `Rational` (`Rational64`) and to `Float` (f64).
//! - `Rational` and `Float` have no common kind: exact arithmetic is never
//!   silently degraded. Callers that want floats convert explicitly first.
//!
//! Scalar arithmetic on `Coeff` is total (mixed operands widen, with
//! `Rational`×`Float` going to `Float`), so nalgebra can multiply matrices of
//! `Coeff`. The representation layer guarantees operands already share a kind.
//! Structural routines go through the `checked_*` helpers instead, which
//! report `Overflow` where `i64` arithmetic would panic or wrap.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use nalgebra::{DMatrix, DVector};
use num_rational::Rational64;
use num_traits::{CheckedAdd, CheckedMul, CheckedSub, One, Zero};

use crate::error::{PolyError, Result};

/// Numeric kind of a coefficient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CoeffKind {
    Int,
    Rational,
    Float,
}

impl CoeffKind {
    #[inline]
    pub fn is_exact(self) -> bool {
        !matches!(self, CoeffKind::Float)
    }

    /// Common kind of `self` and `other`, or `TypeIncompatibility`.
    pub fn promote(self, other: CoeffKind) -> Result<CoeffKind> {
        use CoeffKind::*;
        match (self, other) {
            (a, b) if a == b => Ok(a),
            (Int, Rational) | (Rational, Int) => Ok(Rational),
            (Int, Float) | (Float, Int) => Ok(Float),
            (left, right) => Err(PolyError::TypeIncompatibility { left, right }),
        }
    }
}

impl fmt::Display for CoeffKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CoeffKind::Int => "Int",
            CoeffKind::Rational => "Rational",
            CoeffKind::Float => "Float",
        };
        f.write_str(s)
    }
}

/// Promote a sequence of kinds. The empty sequence promotes to `Int`.
pub fn promote_all<I>(kinds: I) -> Result<CoeffKind>
where
    I: IntoIterator<Item = CoeffKind>,
{
    kinds
        .into_iter()
        .try_fold(CoeffKind::Int, |acc, k| acc.promote(k))
}

/// A single coefficient.
///
/// Equality and ordering are numeric across kinds (`Int(1) == Float(1.0)`);
/// use [`Coeff::kind`] to tell kinds apart.
#[derive(Clone, Copy, Debug)]
pub enum Coeff {
    Int(i64),
    Rational(Rational64),
    Float(f64),
}

/// Both operands lifted to one kind.
enum Pair {
    Int(i64, i64),
    Rational(Rational64, Rational64),
    Float(f64, f64),
}

impl Coeff {
    /// Exact `numer/denom`. Panics if `denom == 0`.
    #[inline]
    pub fn ratio(numer: i64, denom: i64) -> Self {
        Coeff::Rational(Rational64::new(numer, denom))
    }

    #[inline]
    pub fn kind(&self) -> CoeffKind {
        match self {
            Coeff::Int(_) => CoeffKind::Int,
            Coeff::Rational(_) => CoeffKind::Rational,
            Coeff::Float(_) => CoeffKind::Float,
        }
    }

    #[inline]
    pub fn zero_of(kind: CoeffKind) -> Self {
        Coeff::Int(0).lift(kind)
    }

    #[inline]
    pub fn one_of(kind: CoeffKind) -> Self {
        Coeff::Int(1).lift(kind)
    }

    /// Convert along the promotion rule; anything else is `TypeIncompatibility`.
    pub fn to_kind(self, kind: CoeffKind) -> Result<Coeff> {
        if self.kind().promote(kind)? == kind {
            Ok(self.lift(kind))
        } else {
            Err(PolyError::TypeIncompatibility {
                left: self.kind(),
                right: kind,
            })
        }
    }

    pub fn to_f64(&self) -> f64 {
        match *self {
            Coeff::Int(x) => x as f64,
            Coeff::Rational(r) => *r.numer() as f64 / *r.denom() as f64,
            Coeff::Float(x) => x,
        }
    }

    /// Total widening used by arithmetic. Never narrows: a target below the
    /// current kind returns `self` unchanged.
    pub(crate) fn lift(self, kind: CoeffKind) -> Coeff {
        match (self, kind) {
            (Coeff::Int(x), CoeffKind::Rational) => Coeff::Rational(Rational64::from_integer(x)),
            (Coeff::Int(_) | Coeff::Rational(_), CoeffKind::Float) => Coeff::Float(self.to_f64()),
            (c, _) => c,
        }
    }

    pub fn checked_add(self, rhs: Coeff) -> Option<Coeff> {
        match self.pair(rhs) {
            Pair::Int(a, b) => a.checked_add(b).map(Coeff::Int),
            Pair::Rational(a, b) => CheckedAdd::checked_add(&a, &b).map(Coeff::Rational),
            Pair::Float(a, b) => Some(Coeff::Float(a + b)),
        }
    }

    pub fn checked_sub(self, rhs: Coeff) -> Option<Coeff> {
        match self.pair(rhs) {
            Pair::Int(a, b) => a.checked_sub(b).map(Coeff::Int),
            Pair::Rational(a, b) => CheckedSub::checked_sub(&a, &b).map(Coeff::Rational),
            Pair::Float(a, b) => Some(Coeff::Float(a - b)),
        }
    }

    pub fn checked_mul(self, rhs: Coeff) -> Option<Coeff> {
        match self.pair(rhs) {
            Pair::Int(a, b) => a.checked_mul(b).map(Coeff::Int),
            Pair::Rational(a, b) => CheckedMul::checked_mul(&a, &b).map(Coeff::Rational),
            Pair::Float(a, b) => Some(Coeff::Float(a * b)),
        }
    }

    fn pair(self, rhs: Coeff) -> Pair {
        match (self, rhs) {
            (Coeff::Int(a), Coeff::Int(b)) => Pair::Int(a, b),
            (Coeff::Float(a), b) => Pair::Float(a, b.to_f64()),
            (a, Coeff::Float(b)) => Pair::Float(a.to_f64(), b),
            (Coeff::Rational(a), Coeff::Rational(b)) => Pair::Rational(a, b),
            (Coeff::Rational(a), Coeff::Int(b)) => Pair::Rational(a, Rational64::from_integer(b)),
            (Coeff::Int(a), Coeff::Rational(b)) => Pair::Rational(Rational64::from_integer(a), b),
        }
    }
}

impl From<i64> for Coeff {
    fn from(x: i64) -> Self {
        Coeff::Int(x)
    }
}
impl From<i32> for Coeff {
    fn from(x: i32) -> Self {
        Coeff::Int(i64::from(x))
    }
}
impl From<Rational64> for Coeff {
    fn from(x: Rational64) -> Self {
        Coeff::Rational(x)
    }
}
impl From<f64> for Coeff {
    fn from(x: f64) -> Self {
        Coeff::Float(x)
    }
}

impl fmt::Display for Coeff {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Coeff::Int(x) => write!(f, "{x}"),
            Coeff::Rational(r) => write!(f, "{r}"),
            Coeff::Float(x) => write!(f, "{x}"),
        }
    }
}

impl PartialEq for Coeff {
    fn eq(&self, other: &Coeff) -> bool {
        match self.pair(*other) {
            Pair::Int(a, b) => a == b,
            Pair::Rational(a, b) => a == b,
            Pair::Float(a, b) => a == b,
        }
    }
}

impl PartialOrd for Coeff {
    fn partial_cmp(&self, other: &Coeff) -> Option<Ordering> {
        match self.pair(*other) {
            Pair::Int(a, b) => a.partial_cmp(&b),
            Pair::Rational(a, b) => a.partial_cmp(&b),
            Pair::Float(a, b) => a.partial_cmp(&b),
        }
    }
}

macro_rules! coeff_binop {
    ($tr:ident, $method:ident, $assign_tr:ident, $assign:ident, $op:tt) => {
        impl $tr for Coeff {
            type Output = Coeff;
            #[inline]
            fn $method(self, rhs: Coeff) -> Coeff {
                match self.pair(rhs) {
                    Pair::Int(a, b) => Coeff::Int(a $op b),
                    Pair::Rational(a, b) => Coeff::Rational(a $op b),
                    Pair::Float(a, b) => Coeff::Float(a $op b),
                }
            }
        }
        impl $assign_tr for Coeff {
            #[inline]
            fn $assign(&mut self, rhs: Coeff) {
                *self = *self $op rhs;
            }
        }
    };
}

coeff_binop!(Add, add, AddAssign, add_assign, +);
coeff_binop!(Sub, sub, SubAssign, sub_assign, -);
coeff_binop!(Mul, mul, MulAssign, mul_assign, *);

impl Neg for Coeff {
    type Output = Coeff;
    #[inline]
    fn neg(self) -> Coeff {
        match self {
            Coeff::Int(x) => Coeff::Int(-x),
            Coeff::Rational(r) => Coeff::Rational(-r),
            Coeff::Float(x) => Coeff::Float(-x),
        }
    }
}

impl Zero for Coeff {
    #[inline]
    fn zero() -> Self {
        Coeff::Int(0)
    }
    #[inline]
    fn is_zero(&self) -> bool {
        match self {
            Coeff::Int(x) => *x == 0,
            Coeff::Rational(r) => r.is_zero(),
            Coeff::Float(x) => *x == 0.0,
        }
    }
}

impl One for Coeff {
    #[inline]
    fn one() -> Self {
        Coeff::Int(1)
    }
}

/// Dense column vector of coefficients.
pub type Vector = DVector<Coeff>;
/// Dense matrix of coefficients.
pub type Matrix = DMatrix<Coeff>;

/// Build a [`Vector`] from anything convertible into `Coeff`.
pub fn vector<I, T>(xs: I) -> Vector
where
    I: IntoIterator<Item = T>,
    T: Into<Coeff>,
{
    Vector::from_vec(xs.into_iter().map(Into::into).collect())
}

/// Build a `nrows × ncols` [`Matrix`] from row-major entries.
pub fn matrix<I, T>(nrows: usize, ncols: usize, row_major: I) -> Result<Matrix>
where
    I: IntoIterator<Item = T>,
    T: Into<Coeff>,
{
    let entries: Vec<Coeff> = row_major.into_iter().map(Into::into).collect();
    if entries.len() != nrows * ncols {
        return Err(PolyError::dims(nrows * ncols, entries.len()));
    }
    Ok(Matrix::from_row_slice(nrows, ncols, &entries))
}

/// Common kind of a vector's entries (`Int` when empty).
pub fn vector_kind(v: &Vector) -> Result<CoeffKind> {
    promote_all(v.iter().map(Coeff::kind))
}

/// Common kind of a matrix's entries (`Int` when empty).
pub fn matrix_kind(m: &Matrix) -> Result<CoeffKind> {
    promote_all(m.iter().map(Coeff::kind))
}

pub(crate) fn coerce_vector(v: &Vector, kind: CoeffKind) -> Result<Vector> {
    let coords = v
        .iter()
        .map(|c| c.to_kind(kind))
        .collect::<Result<Vec<_>>>()?;
    Ok(Vector::from_vec(coords))
}

pub(crate) fn coerce_matrix(m: &Matrix, kind: CoeffKind) -> Result<Matrix> {
    // nalgebra iterates column-major, which is what `from_vec` expects.
    let entries = m
        .iter()
        .map(|c| c.to_kind(kind))
        .collect::<Result<Vec<_>>>()?;
    Ok(Matrix::from_vec(m.nrows(), m.ncols(), entries))
}

fn overflow(lhs: Coeff, rhs: Coeff, op: &'static str) -> PolyError {
    let kind = match (lhs.kind(), rhs.kind()) {
        (CoeffKind::Int, CoeffKind::Int) => CoeffKind::Int,
        _ => CoeffKind::Rational,
    };
    PolyError::Overflow { kind, op }
}

/// `x + y` with `Overflow` instead of wrapping.
pub(crate) fn add_checked(x: Coeff, y: Coeff, op: &'static str) -> Result<Coeff> {
    x.checked_add(y).ok_or_else(|| overflow(x, y, op))
}

/// `x - y`; see [`add_checked`].
pub(crate) fn sub_checked(x: Coeff, y: Coeff, op: &'static str) -> Result<Coeff> {
    x.checked_sub(y).ok_or_else(|| overflow(x, y, op))
}

/// Entrywise `a + b`; both must have the same length.
pub(crate) fn checked_sum(a: &Vector, b: &Vector, op: &'static str) -> Result<Vector> {
    let coords = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| add_checked(x, y, op))
        .collect::<Result<Vec<_>>>()?;
    Ok(Vector::from_vec(coords))
}

/// `a · b`, accumulated from `zero_of(kind)`.
pub(crate) fn checked_dot(
    a: &Vector,
    b: &Vector,
    kind: CoeffKind,
    op: &'static str,
) -> Result<Coeff> {
    a.iter().zip(b.iter()).try_fold(Coeff::zero_of(kind), |acc, (&x, &y)| {
        let term = x.checked_mul(y).ok_or_else(|| overflow(x, y, op))?;
        add_checked(acc, term, op)
    })
}

/// `P v` with every entry in `kind`. `P` needs `v.len()` columns.
pub(crate) fn checked_mat_vec(
    p: &Matrix,
    v: &Vector,
    kind: CoeffKind,
    op: &'static str,
) -> Result<Vector> {
    let coords = (0..p.nrows())
        .map(|i| checked_dot(&p.row(i).transpose(), v, kind, op))
        .collect::<Result<Vec<_>>>()?;
    Ok(Vector::from_vec(coords))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotion_table() {
        use CoeffKind::*;
        assert_eq!(Int.promote(Int).unwrap(), Int);
        assert_eq!(Int.promote(Rational).unwrap(), Rational);
        assert_eq!(Float.promote(Int).unwrap(), Float);
        assert_eq!(
            Rational.promote(Float),
            Err(PolyError::TypeIncompatibility {
                left: Rational,
                right: Float
            })
        );
        assert_eq!(promote_all(Vec::<CoeffKind>::new()).unwrap(), Int);
        assert_eq!(promote_all([Int, Rational, Int]).unwrap(), Rational);
        assert!(promote_all([Int, Float, Rational]).is_err());
    }

    #[test]
    fn conversion_follows_promotion() {
        let half = Coeff::ratio(1, 2);
        assert_eq!(Coeff::Int(3).to_kind(CoeffKind::Rational).unwrap().kind(), CoeffKind::Rational);
        assert!(half.to_kind(CoeffKind::Int).is_err());
        assert!(half.to_kind(CoeffKind::Float).is_err());
        assert!(Coeff::Float(0.5).to_kind(CoeffKind::Rational).is_err());
        assert_eq!(Coeff::Int(2).to_kind(CoeffKind::Float).unwrap(), Coeff::Float(2.0));
    }

    #[test]
    fn mixed_arithmetic_widens() {
        let x = Coeff::Int(1) + Coeff::ratio(1, 2);
        assert_eq!(x.kind(), CoeffKind::Rational);
        assert_eq!(x, Coeff::ratio(3, 2));
        let y = Coeff::Int(2) * Coeff::Float(0.25);
        assert_eq!(y.kind(), CoeffKind::Float);
        assert_eq!(y, Coeff::Float(0.5));
        assert!(Coeff::ratio(1, 3) < Coeff::Int(1));
        assert_eq!(-Coeff::ratio(1, 3), Coeff::ratio(-1, 3));
    }

    #[test]
    fn exact_overflow_is_reported() {
        assert_eq!(Coeff::Int(i64::MAX).checked_add(Coeff::Int(1)), None);
        assert_eq!(Coeff::Int(i64::MIN).checked_sub(Coeff::Int(1)), None);
        assert_eq!(Coeff::Int(3).checked_mul(Coeff::Int(4)), Some(Coeff::Int(12)));
        let big = Coeff::ratio(i64::MAX, 2);
        assert_eq!(big.checked_mul(Coeff::Int(4)), None);
        assert!(Coeff::Float(f64::MAX).checked_add(Coeff::Float(f64::MAX)).is_some());

        let err = checked_sum(&vector([i64::MAX, 0]), &vector([1, 0]), "test").unwrap_err();
        assert_eq!(
            err,
            PolyError::Overflow {
                kind: CoeffKind::Int,
                op: "test"
            }
        );
        let p = matrix(1, 2, [i64::MAX, 1]).unwrap();
        assert!(checked_mat_vec(&p, &vector([1, 1]), CoeffKind::Int, "test").is_err());
        assert_eq!(
            checked_mat_vec(&p, &vector([0, 5]), CoeffKind::Int, "test").unwrap(),
            vector([5])
        );
    }

    #[test]
    fn matrix_vector_product_over_coeffs() {
        let p = matrix(2, 3, [1, 0, 2, 0, 1, 0]).unwrap();
        let v = vector([1, 2, 3]);
        let w = &p * &v;
        assert_eq!(w, vector([7, 2]));
        assert!(matrix(2, 2, [1, 2, 3]).is_err());
    }
}
