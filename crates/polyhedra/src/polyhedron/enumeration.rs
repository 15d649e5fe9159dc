//! Brute-force H↔V converter for small bounded polytopes in floating point.
//!
//! - H→V: every `d`-subset of constraints (hyperplanes count as two opposite
//!   halfspaces) with an invertible normal matrix gives a candidate vertex;
//!   feasible candidates are kept.
//! - V→H: every `d`-subset of points spans a candidate hyperplane (nullspace
//!   of `[p_i^T, -1]` via SVD); supporting planes are kept, oriented so the
//!   points satisfy `n·x <= c`.
//!
//! Complexity is `O(C(m, d))` solves; fine for the small inputs used in tests
//! and demos. Only `Float` representations are accepted. Lines, rays,
//! lower-dimensional point sets and constraint sets without any vertex are
//! rejected with `ConversionError`. An unbounded H-representation that still
//! has vertices is not detected: callers must pass bounded inputs.

use std::collections::HashSet;

use nalgebra::{DMatrix, DVector};
use tracing::debug;

use crate::cfg::EnumCfg;
use crate::coeff::{Coeff, CoeffKind, Vector};
use crate::elements::{HalfSpace, Point};
use crate::error::ConversionError;
use crate::rep::{HRep, VRep};

use super::Converter;

type ConvResult<T> = std::result::Result<T, ConversionError>;

/// Vertex/facet enumeration converter.
#[derive(Clone, Copy, Debug, Default)]
pub struct Enumeration {
    pub cfg: EnumCfg,
}

impl Enumeration {
    pub fn new(cfg: EnumCfg) -> Self {
        Self { cfg }
    }
}

impl Converter for Enumeration {
    fn name(&self) -> &'static str {
        "enumeration"
    }

    fn to_vrep(&self, h: &HRep) -> ConvResult<VRep> {
        require_float(h.kind())?;
        let d = h.dim();
        let mut rows: Vec<(DVector<f64>, f64)> = Vec::with_capacity(h.len() * 2);
        for hp in h.hyperplanes() {
            let a = to_f64(&hp.a);
            let b = hp.beta.to_f64();
            rows.push((-a.clone(), -b));
            rows.push((a, b));
        }
        for hs in h.halfspaces() {
            rows.push((to_f64(&hs.a), hs.beta.to_f64()));
        }
        let feasible =
            |x: &DVector<f64>| rows.iter().all(|(a, b)| a.dot(x) <= b + self.cfg.eps_feas);
        if d == 0 {
            return if feasible(&DVector::zeros(0)) {
                points_to_vrep(0, vec![DVector::zeros(0)])
            } else {
                Err(reject("infeasible constraints have no V-representation"))
            };
        }
        let mut verts: Vec<DVector<f64>> = Vec::new();
        for comb in combinations(rows.len(), d) {
            let a = DMatrix::from_fn(d, d, |i, j| rows[comb[i]].0[j]);
            if a.determinant().abs() <= self.cfg.eps_rank {
                continue;
            }
            let b = DVector::from_fn(d, |i, _| rows[comb[i]].1);
            if let Some(x) = a.lu().solve(&b) {
                if feasible(&x) {
                    verts.push(x);
                }
            }
        }
        dedup_points(&mut verts, self.cfg.eps_dedup);
        if verts.is_empty() {
            return Err(reject("no vertices: the polyhedron is empty or unbounded"));
        }
        points_to_vrep(d, verts)
    }

    fn to_hrep(&self, v: &VRep) -> ConvResult<HRep> {
        require_float(v.kind())?;
        if !v.lines().is_empty() || !v.rays().is_empty() {
            return Err(reject("lines and rays are not supported"));
        }
        let d = v.dim();
        let pts: Vec<DVector<f64>> = v.points().iter().map(|p| to_f64(&p.0)).collect();
        if d == 0 {
            return Ok(HRep::universe(0, CoeffKind::Float));
        }
        if affine_rank(&pts, self.cfg.eps_rank) < d {
            return Err(reject("points do not span a full-dimensional polytope"));
        }
        let mut seen = HashSet::new();
        let mut out = Vec::new();
        for comb in combinations(pts.len(), d) {
            let subset: Vec<&DVector<f64>> = comb.iter().map(|&i| &pts[i]).collect();
            let Some((n, c)) = plane_through(&subset, self.cfg.eps_rank) else {
                continue;
            };
            let (n, c) = if pts.iter().all(|p| n.dot(p) <= c + self.cfg.eps_feas) {
                (n, c)
            } else if pts.iter().all(|p| n.dot(p) >= c - self.cfg.eps_feas) {
                (-n, -c)
            } else {
                continue;
            };
            if seen.insert(quantize(&n, c, self.cfg.eps_dedup)) {
                out.push(HalfSpace::new(from_f64(&n), c));
            }
        }
        HRep::from_halfspaces(d, out).map_err(|e| reject(e.to_string()))
    }
}

fn reject(message: impl Into<String>) -> ConversionError {
    let err = ConversionError::new(message);
    debug!(reason = %err, "enumeration rejected input");
    err
}

fn require_float(kind: CoeffKind) -> ConvResult<()> {
    if kind == CoeffKind::Float {
        Ok(())
    } else {
        Err(reject(format!("enumeration works on Float coefficients, got {kind}")))
    }
}

fn to_f64(v: &Vector) -> DVector<f64> {
    v.map(|c| c.to_f64())
}

fn from_f64(v: &DVector<f64>) -> Vector {
    v.map(Coeff::Float)
}

fn points_to_vrep(d: usize, verts: Vec<DVector<f64>>) -> ConvResult<VRep> {
    let points = verts.iter().map(|x| Point(from_f64(x))).collect();
    VRep::from_points(d, points).map_err(|e| reject(e.to_string()))
}

/// Unit-normal hyperplane `n·x = c` through `d` points in `R^d`, if unique.
fn plane_through(pts: &[&DVector<f64>], eps_rank: f64) -> Option<(DVector<f64>, f64)> {
    let d = pts.len();
    // Rows [p_i^T, -1]; padded with a zero row so the SVD yields a full V^T.
    let m = DMatrix::from_fn(d + 1, d + 1, |i, j| {
        if i == d {
            0.0
        } else if j == d {
            -1.0
        } else {
            pts[i][j]
        }
    });
    let svd = m.svd(false, true);
    let v_t = svd.v_t?;
    let sv = &svd.singular_values;
    let small: Vec<usize> = (0..sv.len()).filter(|&i| sv[i] <= eps_rank).collect();
    if small.len() != 1 {
        return None;
    }
    let null = v_t.row(small[0]).transpose();
    let n = DVector::from_fn(d, |i, _| null[i]);
    let norm = n.norm();
    if !norm.is_finite() || norm <= eps_rank {
        return None;
    }
    Some((n / norm, null[d] / norm))
}

/// Dimension of the affine hull of `pts`.
fn affine_rank(pts: &[DVector<f64>], eps_rank: f64) -> usize {
    let Some(first) = pts.first() else {
        return 0;
    };
    if pts.len() == 1 {
        return 0;
    }
    let diffs = DMatrix::from_fn(first.len(), pts.len() - 1, |i, j| pts[j + 1][i] - first[i]);
    diffs.rank(eps_rank)
}

/// k-subsets of `0..n` in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if k == 0 || k > n {
        return out;
    }
    let mut idxs: Vec<usize> = (0..k).collect();
    loop {
        out.push(idxs.clone());
        // rightmost index that can still move
        let Some(i) = (0..k).rev().find(|&i| idxs[i] != i + n - k) else {
            return out;
        };
        idxs[i] += 1;
        for j in i + 1..k {
            idxs[j] = idxs[j - 1] + 1;
        }
    }
}

fn quantize(n: &DVector<f64>, c: f64, tol: f64) -> Vec<i64> {
    let s = 1.0 / tol;
    n.iter()
        .chain(std::iter::once(&c))
        .map(|x| (x * s).round() as i64)
        .collect()
}

fn dedup_points(points: &mut Vec<DVector<f64>>, tol: f64) {
    let mut seen = HashSet::new();
    points.retain(|p| seen.insert(quantize(p, 0.0, tol)));
}
