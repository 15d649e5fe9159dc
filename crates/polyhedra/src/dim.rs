//! Ambient-dimension helpers used to embed two spaces into their product.
//!
//! Sign convention for `zeropad`
//! - `pad > 0`: the element keeps the low indices, `pad` zeros follow.
//! - `pad < 0`: `|pad|` zeros come first, the element takes the high indices.
//!
//! A Cartesian product pads its first operand with `d2` and its second with
//! `neg_fulldim(d1)`, so the blocks never overlap.

use crate::coeff::{Coeff, CoeffKind, Vector};

/// Dimension of the product space.
#[inline]
pub fn sum_fulldim(d1: usize, d2: usize) -> usize {
    d1 + d2
}

/// Direction tag: "pad before my coordinates by `d`".
#[inline]
pub fn neg_fulldim(d: usize) -> isize {
    -(d as isize)
}

/// Embed `v` into dimension `v.len() + |pad|`, filling with zeros of `kind`.
pub fn zeropad(v: &Vector, pad: isize, kind: CoeffKind) -> Vector {
    let zeros = std::iter::repeat(Coeff::zero_of(kind)).take(pad.unsigned_abs());
    let coords: Vec<Coeff> = if pad >= 0 {
        v.iter().copied().chain(zeros).collect()
    } else {
        zeros.chain(v.iter().copied()).collect()
    };
    Vector::from_vec(coords)
}

/// Coordinates `start..start + len` of `v`; the inverse of `zeropad` on its block.
#[inline]
pub fn project(v: &Vector, start: usize, len: usize) -> Vector {
    Vector::from_vec(v.iter().skip(start).take(len).copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coeff::vector;

    #[test]
    fn pad_after_and_before() {
        let v = vector([1, 2]);
        assert_eq!(zeropad(&v, 3, CoeffKind::Int), vector([1, 2, 0, 0, 0]));
        assert_eq!(zeropad(&v, neg_fulldim(1), CoeffKind::Int), vector([0, 1, 2]));
        assert_eq!(zeropad(&v, 0, CoeffKind::Int), v);
        assert_eq!(sum_fulldim(2, 3), 5);
    }

    #[test]
    fn pad_uses_kind_zero_and_projects_back() {
        let v = vector([0.5, -1.0]);
        let w = zeropad(&v, neg_fulldim(2), CoeffKind::Float);
        assert!(w.iter().all(|c| c.kind() == CoeffKind::Float));
        assert_eq!(project(&w, 2, 2), v);
        assert_eq!(project(&w, 0, 2), vector([0.0, 0.0]));
    }
}
