//! Full representations: `HRep` (constraints) and `VRep` (generators).
//!
//! Invariants (both kinds)
//! - Every element has exactly `dim` components.
//! - Every coefficient has the representation's `kind`.
//! - Element order is preserved and duplicates are kept; nothing here
//!   canonicalizes or removes redundancy.

mod hrep;
mod vrep;

pub use hrep::HRep;
pub use vrep::VRep;

use crate::cfg::FEAS_EPS;
use crate::coeff::{Coeff, CoeffKind};

/// Membership slack for `kind`: zero for exact kinds.
#[inline]
pub(crate) fn membership_eps(kind: CoeffKind) -> Coeff {
    if kind.is_exact() {
        Coeff::zero_of(kind)
    } else {
        Coeff::Float(FEAS_EPS)
    }
}

#[cfg(test)]
mod tests;
