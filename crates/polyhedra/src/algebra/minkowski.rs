//! Minkowski sum of V-representations.

use tracing::trace;

use crate::coeff::checked_sum;
use crate::elements::Point;
use crate::error::{check_dim, Result};
use crate::rep::VRep;

/// `a + b`.
///
/// Points are the full cross-sum `{p + q}` (|a|·|b| of them); lines and rays
/// are the union of both. When one side is a cone its only point is the
/// origin, so the other side's points are kept as they are.
pub fn vsum(a: &VRep, b: &VRep) -> Result<VRep> {
    check_dim(a.dim(), b.dim())?;
    let kind = a.kind().promote(b.kind())?;
    let (a, b) = (a.coerced(kind)?, b.coerced(kind)?);
    let points = if b.is_cone() {
        a.points().to_vec()
    } else if a.is_cone() {
        b.points().to_vec()
    } else {
        cross_sum(a.points(), b.points())?
    };
    let mut lines = a.lines().to_vec();
    lines.extend_from_slice(b.lines());
    let mut rays = a.rays().to_vec();
    rays.extend_from_slice(b.rays());
    Ok(VRep::from_parts(a.dim(), kind, points, lines, rays))
}

fn cross_sum(ps: &[Point], qs: &[Point]) -> Result<Vec<Point>> {
    trace!(m = ps.len(), n = qs.len(), "minkowski cross-sum");
    let mut out = Vec::with_capacity(ps.len() * qs.len());
    for p in ps {
        for q in qs {
            out.push(Point(checked_sum(&p.0, &q.0, "minkowski sum")?));
        }
    }
    Ok(out)
}
