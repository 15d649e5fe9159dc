use crate::coeff::{vector_kind, CoeffKind, Vector};
use crate::elements::{elements_kind, HRepElement, HalfSpace, HyperPlane};
use crate::error::{check_dim, Result};

use super::membership_eps;

/// H-representation: `{x : a·x = beta (hyperplanes), a·x <= beta (halfspaces)}`.
#[derive(Clone, Debug, PartialEq)]
pub struct HRep {
    dim: usize,
    kind: CoeffKind,
    hyperplanes: Vec<HyperPlane>,
    halfspaces: Vec<HalfSpace>,
}

impl HRep {
    /// Validate dimensions and coerce everything to the promoted kind.
    pub fn new(
        dim: usize,
        hyperplanes: Vec<HyperPlane>,
        halfspaces: Vec<HalfSpace>,
    ) -> Result<Self> {
        let kind = elements_kind(
            hyperplanes
                .iter()
                .map(HyperPlane::kind)
                .chain(halfspaces.iter().map(HalfSpace::kind)),
        )?;
        Self::with_kind(dim, kind, hyperplanes, halfspaces)
    }

    /// Like [`HRep::new`] but with an explicit target kind.
    pub fn with_kind(
        dim: usize,
        kind: CoeffKind,
        hyperplanes: Vec<HyperPlane>,
        halfspaces: Vec<HalfSpace>,
    ) -> Result<Self> {
        for h in &hyperplanes {
            check_dim(dim, h.dim())?;
        }
        for h in &halfspaces {
            check_dim(dim, h.dim())?;
        }
        let hyperplanes = hyperplanes
            .iter()
            .map(|h| h.coerced(kind))
            .collect::<Result<Vec<_>>>()?;
        let halfspaces = halfspaces
            .iter()
            .map(|h| h.coerced(kind))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_parts(dim, kind, hyperplanes, halfspaces))
    }

    #[inline]
    pub fn from_halfspaces(dim: usize, halfspaces: Vec<HalfSpace>) -> Result<Self> {
        Self::new(dim, Vec::new(), halfspaces)
    }

    /// No constraints: the whole space `R^dim`.
    #[inline]
    pub fn universe(dim: usize, kind: CoeffKind) -> Self {
        Self::from_parts(dim, kind, Vec::new(), Vec::new())
    }

    /// Caller guarantees the invariants (dimension and kind already checked).
    #[inline]
    pub(crate) fn from_parts(
        dim: usize,
        kind: CoeffKind,
        hyperplanes: Vec<HyperPlane>,
        halfspaces: Vec<HalfSpace>,
    ) -> Self {
        Self {
            dim,
            kind,
            hyperplanes,
            halfspaces,
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
    pub fn hyperplanes(&self) -> &[HyperPlane] {
        &self.hyperplanes
    }
    #[inline]
    pub fn halfspaces(&self) -> &[HalfSpace] {
        &self.halfspaces
    }
    /// Total number of constraints.
    #[inline]
    pub fn len(&self) -> usize {
        self.hyperplanes.len() + self.halfspaces.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All constraints, hyperplanes first.
    pub fn elements(&self) -> impl Iterator<Item = HRepElement> + '_ {
        self.hyperplanes
            .iter()
            .cloned()
            .map(HRepElement::from)
            .chain(self.halfspaces.iter().cloned().map(HRepElement::from))
    }

    /// Same constraints with coefficients converted to `kind`.
    pub fn coerced(&self, kind: CoeffKind) -> Result<Self> {
        if kind == self.kind {
            return Ok(self.clone());
        }
        Self::with_kind(self.dim, kind, self.hyperplanes.clone(), self.halfspaces.clone())
    }

    /// Whether `x` satisfies every constraint (`Float` uses a small slack).
    pub fn contains(&self, x: &Vector) -> Result<bool> {
        check_dim(self.dim, x.len())?;
        let eps = membership_eps(self.kind.promote(vector_kind(x)?)?);
        for h in &self.hyperplanes {
            if !h.contains(x, eps)? {
                return Ok(false);
            }
        }
        for h in &self.halfspaces {
            if !h.contains(x, eps)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
