//! Linear transforms by a coefficient matrix `P`.
//!
//! - `div` (`rep / P`): each constraint `(a, beta)` becomes `(P a, beta)`;
//!   `P` needs `dim` columns and the result lives in `R^(rows of P)`.
//! - `left_div` (`P \ rep`): `rep / Pᵗ`.
//! - `mul` (`P * rep`): each generator `v` becomes `P v`.
//!
//! The kind is promoted over the representation and the matrix entries.
//! Exact products that leave `i64` fail with `Overflow`.

use crate::coeff::{coerce_matrix, matrix_kind, Matrix};
use crate::error::{check_dim, Result};
use crate::rep::{HRep, VRep};

pub fn div(rep: &HRep, p: &Matrix) -> Result<HRep> {
    check_dim(rep.dim(), p.ncols())?;
    let kind = rep.kind().promote(matrix_kind(p)?)?;
    let p = coerce_matrix(p, kind)?;
    let rep = rep.coerced(kind)?;
    let hyperplanes = rep
        .hyperplanes()
        .iter()
        .map(|h| h.transformed(&p, kind))
        .collect::<Result<_>>()?;
    let halfspaces = rep
        .halfspaces()
        .iter()
        .map(|h| h.transformed(&p, kind))
        .collect::<Result<_>>()?;
    Ok(HRep::from_parts(p.nrows(), kind, hyperplanes, halfspaces))
}

pub fn left_div(p: &Matrix, rep: &HRep) -> Result<HRep> {
    div(rep, &p.transpose())
}

pub fn mul(p: &Matrix, rep: &VRep) -> Result<VRep> {
    check_dim(rep.dim(), p.ncols())?;
    let kind = rep.kind().promote(matrix_kind(p)?)?;
    let p = coerce_matrix(p, kind)?;
    let rep = rep.coerced(kind)?;
    Ok(VRep::from_parts(
        p.nrows(),
        kind,
        rep.points().iter().map(|v| v.transformed(&p, kind)).collect::<Result<_>>()?,
        rep.lines().iter().map(|v| v.transformed(&p, kind)).collect::<Result<_>>()?,
        rep.rays().iter().map(|v| v.transformed(&p, kind)).collect::<Result<_>>()?,
    ))
}
