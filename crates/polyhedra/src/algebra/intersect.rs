//! H-side unions: `∩` on representations and on raw constraints.

use crate::elements::HRepElement;
use crate::error::{check_dim, Result};
use crate::rep::HRep;

/// Intersection of two H-representations: the union of their constraints
/// under the promoted kind. No redundancy removal.
pub fn hintersect(a: &HRep, b: &HRep) -> Result<HRep> {
    check_dim(a.dim(), b.dim())?;
    let kind = a.kind().promote(b.kind())?;
    let (a, b) = (a.coerced(kind)?, b.coerced(kind)?);
    let mut hyperplanes = a.hyperplanes().to_vec();
    hyperplanes.extend_from_slice(b.hyperplanes());
    let mut halfspaces = a.halfspaces().to_vec();
    halfspaces.extend_from_slice(b.halfspaces());
    Ok(HRep::from_parts(a.dim(), kind, hyperplanes, halfspaces))
}

/// Intersection of raw constraints, folded left pairwise.
///
/// Two constraints always give a two-constraint representation.
pub fn intersect_elements<I>(first: HRepElement, rest: I) -> Result<HRep>
where
    I: IntoIterator<Item = HRepElement>,
{
    rest.into_iter()
        .try_fold(first.into_hrep()?, |acc, e| hintersect(&acc, &e.into_hrep()?))
}
