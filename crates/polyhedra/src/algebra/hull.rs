//! V-side unions: convex hull of representations and raw generators, and
//! conification.

use crate::elements::{Ray, VRepElement};
use crate::error::{check_dim, Result};
use crate::rep::VRep;

/// Convex hull of two V-representations: the union of their points, lines
/// and rays under the promoted kind.
pub fn vconvexhull(a: &VRep, b: &VRep) -> Result<VRep> {
    check_dim(a.dim(), b.dim())?;
    let kind = a.kind().promote(b.kind())?;
    let (a, b) = (a.coerced(kind)?, b.coerced(kind)?);
    let mut points = a.points().to_vec();
    points.extend_from_slice(b.points());
    let mut lines = a.lines().to_vec();
    lines.extend_from_slice(b.lines());
    let mut rays = a.rays().to_vec();
    rays.extend_from_slice(b.rays());
    Ok(VRep::from_parts(a.dim(), kind, points, lines, rays))
}

/// Wrap raw generators into one V-representation, as given.
pub fn convexhull_elements<I>(first: VRepElement, rest: I) -> Result<VRep>
where
    I: IntoIterator<Item = VRepElement>,
{
    let dim = first.dim();
    VRep::from_elements(dim, std::iter::once(first).chain(rest))
}

/// Points become rays anchored at the origin; lines and rays pass through.
pub(crate) fn conify(v: &VRep) -> VRep {
    let rays = v
        .points()
        .iter()
        .map(|p| Ray(p.0.clone()))
        .chain(v.rays().iter().cloned())
        .collect();
    VRep::from_parts(v.dim(), v.kind(), Vec::new(), v.lines().to_vec(), rays)
}
