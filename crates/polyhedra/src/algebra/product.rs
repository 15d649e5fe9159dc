//! Cartesian products: block-diagonal embedding into `R^(d1+d2)`.

use tracing::trace;

use crate::dim::{neg_fulldim, sum_fulldim};
use crate::error::Result;
use crate::polyhedron::Polyhedron;
use crate::rep::{HRep, VRep};

use super::minkowski::vsum;

/// `a × b` on the H side: pad constraints into disjoint blocks and union them.
pub fn hproduct(a: &HRep, b: &HRep) -> Result<HRep> {
    let kind = a.kind().promote(b.kind())?;
    let (d1, d2) = (a.dim(), b.dim());
    let (a, b) = (a.coerced(kind)?, b.coerced(kind)?);
    trace!(d1, d2, lhs = a.len(), rhs = b.len(), "H-side cartesian product");
    let (high, low) = (d2 as isize, neg_fulldim(d1));
    let hyperplanes = a
        .hyperplanes()
        .iter()
        .map(|h| h.zeropad(high, kind))
        .chain(b.hyperplanes().iter().map(|h| h.zeropad(low, kind)))
        .collect();
    let halfspaces = a
        .halfspaces()
        .iter()
        .map(|h| h.zeropad(high, kind))
        .chain(b.halfspaces().iter().map(|h| h.zeropad(low, kind)))
        .collect();
    Ok(HRep::from_parts(sum_fulldim(d1, d2), kind, hyperplanes, halfspaces))
}

/// `a × b` on the V side: pad generators into disjoint blocks, then take the
/// Minkowski sum (a padded point alone is not in the product).
pub fn vproduct(a: &VRep, b: &VRep) -> Result<VRep> {
    let kind = a.kind().promote(b.kind())?;
    let (d1, d2) = (a.dim(), b.dim());
    let (a, b) = (a.coerced(kind)?, b.coerced(kind)?);
    trace!(d1, d2, lhs = a.len(), rhs = b.len(), "V-side cartesian product");
    let dim = sum_fulldim(d1, d2);
    let pad = |v: &VRep, by: isize| {
        VRep::from_parts(
            dim,
            kind,
            v.points().iter().map(|p| p.zeropad(by, kind)).collect(),
            v.lines().iter().map(|l| l.zeropad(by, kind)).collect(),
            v.rays().iter().map(|r| r.zeropad(by, kind)).collect(),
        )
    };
    vsum(&pad(&a, d2 as isize), &pad(&b, neg_fulldim(d1)))
}

/// Whether a polyhedron product should be computed on the H side: reuse what
/// is already computed, ties go to H.
pub fn usehrep(p1: &Polyhedron, p2: &Polyhedron) -> bool {
    p1.hrep_computed() && (!p1.vrep_computed() || p2.hrep_computed())
}
