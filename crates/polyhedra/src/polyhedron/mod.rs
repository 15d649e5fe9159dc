//! Polyhedron facade: a pair of lazily computed representations.
//!
//! Purpose
//! - Own at most one `HRep` and one `VRep` of the same dimension and kind, and
//!   compute the missing side on demand through a `Converter` (the external
//!   H↔V conversion collaborator). A computed side is cached for the lifetime
//!   of the value.
//! - Route every algebra operation to the side it needs, materializing that
//!   side only when it is not cached.
//!
//! Cache contract
//! - Construction sets one side; the other starts uncomputed.
//! - `reset_hrep`/`reset_vrep` replace one slot and leave the other untouched:
//!   keeping both consistent is the caller's obligation (or call
//!   `clear_hrep`/`clear_vrep`).
//! - In-place operators compute the full result first, then replace the side
//!   they computed and clear the other, which is stale by construction.
//! - No internal locking: callers sharing a polyhedron across threads must
//!   serialize the `&mut self` methods themselves.

mod enumeration;

pub use enumeration::Enumeration;

use std::cell::OnceCell;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::algebra::{self, HOperand, VOperand};
use crate::coeff::{matrix_kind, CoeffKind, Matrix};
use crate::error::{check_dim, ConversionError, PolyError, Result};
use crate::rep::{HRep, VRep};

/// External H↔V conversion collaborator (double description, vertex
/// enumeration, ...). Calls may be slow; results are cached by `Polyhedron`.
pub trait Converter: fmt::Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;
    fn to_hrep(&self, v: &VRep) -> std::result::Result<HRep, ConversionError>;
    fn to_vrep(&self, h: &HRep) -> std::result::Result<VRep, ConversionError>;
}

#[derive(Clone)]
pub struct Polyhedron {
    dim: usize,
    kind: CoeffKind,
    hrep: OnceCell<HRep>,
    vrep: OnceCell<VRep>,
    converter: Arc<dyn Converter>,
}

impl fmt::Debug for Polyhedron {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Polyhedron")
            .field("dim", &self.dim)
            .field("kind", &self.kind)
            .field("hrep", &self.hrep.get())
            .field("vrep", &self.vrep.get())
            .field("converter", &self.converter.name())
            .finish()
    }
}

impl Polyhedron {
    pub fn from_hrep(h: HRep, converter: Arc<dyn Converter>) -> Self {
        Self {
            dim: h.dim(),
            kind: h.kind(),
            hrep: OnceCell::from(h),
            vrep: OnceCell::new(),
            converter,
        }
    }

    pub fn from_vrep(v: VRep, converter: Arc<dyn Converter>) -> Self {
        Self {
            dim: v.dim(),
            kind: v.kind(),
            hrep: OnceCell::new(),
            vrep: OnceCell::from(v),
            converter,
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }
    #[inline]
    pub fn kind(&self) -> CoeffKind {
        self.kind
    }
    #[inline]
    pub fn converter(&self) -> Arc<dyn Converter> {
        Arc::clone(&self.converter)
    }
    #[inline]
    pub fn hrep_computed(&self) -> bool {
        self.hrep.get().is_some()
    }
    #[inline]
    pub fn vrep_computed(&self) -> bool {
        self.vrep.get().is_some()
    }

    /// H-representation, converted from the V side on first use.
    pub fn hrep(&self) -> Result<&HRep> {
        if let Some(h) = self.hrep.get() {
            return Ok(h);
        }
        let v = self.vrep.get().ok_or_else(Self::no_representation)?;
        debug!(dim = self.dim, converter = self.converter.name(), "computing H-representation");
        let h = self.converter.to_hrep(v)?;
        check_dim(self.dim, h.dim())?;
        let h = h.coerced(self.kind)?;
        Ok(self.hrep.get_or_init(|| h))
    }

    /// V-representation, converted from the H side on first use.
    pub fn vrep(&self) -> Result<&VRep> {
        if let Some(v) = self.vrep.get() {
            return Ok(v);
        }
        let h = self.hrep.get().ok_or_else(Self::no_representation)?;
        debug!(dim = self.dim, converter = self.converter.name(), "computing V-representation");
        let v = self.converter.to_vrep(h)?;
        check_dim(self.dim, v.dim())?;
        let v = v.coerced(self.kind)?;
        Ok(self.vrep.get_or_init(|| v))
    }

    fn no_representation() -> PolyError {
        ConversionError::new("polyhedron holds neither representation").into()
    }

    /// Replace the H side. With the V side present, `h` must coerce to this
    /// polyhedron's kind; otherwise the polyhedron adopts `h`'s kind.
    pub fn reset_hrep(&mut self, h: HRep) -> Result<()> {
        check_dim(self.dim, h.dim())?;
        let h = if self.vrep_computed() {
            h.coerced(self.kind)?
        } else {
            self.kind = h.kind();
            h
        };
        self.hrep = OnceCell::from(h);
        Ok(())
    }

    /// Replace the V side; same kind rule as [`Polyhedron::reset_hrep`].
    pub fn reset_vrep(&mut self, v: VRep) -> Result<()> {
        check_dim(self.dim, v.dim())?;
        let v = if self.hrep_computed() {
            v.coerced(self.kind)?
        } else {
            self.kind = v.kind();
            v
        };
        self.vrep = OnceCell::from(v);
        Ok(())
    }

    /// Drop the cached H side; no-op (returns false) if it is the only side.
    pub fn clear_hrep(&mut self) -> bool {
        if self.vrep_computed() {
            self.hrep = OnceCell::new();
            true
        } else {
            false
        }
    }

    /// Drop the cached V side; no-op (returns false) if it is the only side.
    pub fn clear_vrep(&mut self) -> bool {
        if self.hrep_computed() {
            self.vrep = OnceCell::new();
            true
        } else {
            false
        }
    }

    fn commit_hrep(&mut self, h: HRep) {
        debug!(dim = h.dim(), constraints = h.len(), "committing H-representation");
        self.dim = h.dim();
        self.kind = h.kind();
        self.hrep = OnceCell::from(h);
        self.vrep = OnceCell::new();
    }

    fn commit_vrep(&mut self, v: VRep) {
        debug!(dim = v.dim(), generators = v.len(), "committing V-representation");
        self.dim = v.dim();
        self.kind = v.kind();
        self.vrep = OnceCell::from(v);
        self.hrep = OnceCell::new();
    }

    #[inline]
    fn shape(&self) -> (usize, CoeffKind) {
        (self.dim, self.kind)
    }

    /// `P` must map from this polyhedron's space; checked before any conversion.
    fn precheck_matrix(&self, p: &Matrix) -> Result<()> {
        check_dim(self.dim, p.ncols())?;
        self.kind.promote(matrix_kind(p)?)?;
        Ok(())
    }

    #[inline]
    fn derive_h(&self, h: HRep) -> Polyhedron {
        Polyhedron::from_hrep(h, self.converter())
    }

    #[inline]
    fn derive_v(&self, v: VRep) -> Polyhedron {
        Polyhedron::from_vrep(v, self.converter())
    }

    /// `self ∩ other` (needs the H side).
    pub fn intersect<'b>(&self, other: impl Into<HOperand<'b>>) -> Result<Polyhedron> {
        let other = other.into();
        algebra::precheck(self.shape(), other.shape()?, true)?;
        let h = algebra::hintersect(self.hrep()?, &*other.hrep()?)?;
        Ok(self.derive_h(h))
    }

    /// Convex hull of `self` and `other` (needs the V side).
    pub fn convexhull<'b>(&self, other: impl Into<VOperand<'b>>) -> Result<Polyhedron> {
        let other = other.into();
        algebra::precheck(self.shape(), other.shape()?, true)?;
        let v = algebra::vconvexhull(self.vrep()?, &*other.vrep()?)?;
        Ok(self.derive_v(v))
    }

    /// Minkowski sum (needs the V side).
    pub fn minkowski_sum<'b>(&self, other: impl Into<VOperand<'b>>) -> Result<Polyhedron> {
        let other = other.into();
        algebra::precheck(self.shape(), other.shape()?, true)?;
        let v = algebra::vsum(self.vrep()?, &*other.vrep()?)?;
        Ok(self.derive_v(v))
    }

    /// Cartesian product; the side follows [`algebra::usehrep`].
    pub fn cartesian_product(&self, other: &Polyhedron) -> Result<Polyhedron> {
        algebra::precheck(self.shape(), other.shape(), false)?;
        if algebra::usehrep(self, other) {
            Ok(self.derive_h(algebra::hproduct(self.hrep()?, other.hrep()?)?))
        } else {
            Ok(self.derive_v(algebra::vproduct(self.vrep()?, other.vrep()?)?))
        }
    }

    /// `self / P` on the H side.
    pub fn transform_h(&self, p: &Matrix) -> Result<Polyhedron> {
        self.precheck_matrix(p)?;
        Ok(self.derive_h(algebra::div(self.hrep()?, p)?))
    }

    /// `P \ self` on the H side.
    pub fn left_div(&self, p: &Matrix) -> Result<Polyhedron> {
        check_dim(self.dim, p.nrows())?;
        self.kind.promote(matrix_kind(p)?)?;
        Ok(self.derive_h(algebra::left_div(p, self.hrep()?)?))
    }

    /// `P * self` on the V side.
    pub fn linear_image(&self, p: &Matrix) -> Result<Polyhedron> {
        self.precheck_matrix(p)?;
        Ok(self.derive_v(algebra::mul(p, self.vrep()?)?))
    }

    /// `self ∩= other`. Nothing changes unless the intersection succeeds.
    pub fn intersect_in_place<'b>(&mut self, other: impl Into<HOperand<'b>>) -> Result<()> {
        let other = other.into();
        algebra::precheck(self.shape(), other.shape()?, true)?;
        let h = algebra::hintersect(self.hrep()?, &*other.hrep()?)?;
        self.commit_hrep(h);
        Ok(())
    }

    /// `self = convexhull(self, other)`. Nothing changes unless the hull succeeds.
    pub fn convexhull_in_place<'b>(&mut self, other: impl Into<VOperand<'b>>) -> Result<()> {
        let other = other.into();
        algebra::precheck(self.shape(), other.shape()?, true)?;
        let v = algebra::vconvexhull(self.vrep()?, &*other.vrep()?)?;
        self.commit_vrep(v);
        Ok(())
    }
}

#[cfg(test)]
mod tests;
