//! Polyhedral algebra over H- and V-representations.
//!
//! A polyhedron is described by constraints (`HRep`: hyperplanes and
//! halfspaces) or by generators (`VRep`: points, lines and rays). This crate
//! provides the set algebra on these descriptions (intersection, convex hull,
//! Minkowski sum, Cartesian product, linear transforms) with coefficient-type
//! promotion, plus a `Polyhedron` that caches both sides and converts lazily
//! through a pluggable `Converter`.
//!
//! Layout
//! - `coeff`: coefficient kinds (`Int`, `Rational`, `Float`), promotion, `Coeff`.
//! - `elements`, `rep`: primitive elements and full representations.
//! - `algebra`: operand normalization, the result-kind table, every operation.
//! - `polyhedron`: lazy two-sided cache and the brute-force `Enumeration` converter.
//! - `special`, `random`: known polytope families and seeded random inputs.
//!
//! API Policy
//! - Every fallible operation returns `error::Result`; nothing panics on bad input.
//! - Exact kinds never use tolerances; `EnumCfg` only tunes floating-point conversion.

pub mod algebra;
mod cfg;
pub mod coeff;
pub mod dim;
pub mod elements;
pub mod error;
pub mod polyhedron;
pub mod random;
pub mod rep;
pub mod special;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::EnumCfg;
pub use coeff::{Coeff, CoeffKind, Matrix, Vector};
pub use error::{ConversionError, PolyError, Result};
pub use polyhedron::{Converter, Enumeration, Polyhedron};
pub use rep::{HRep, VRep};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::algebra::{
        cartesian_product, cartesian_product_h, cartesian_product_v, conichull, conify,
        convexhull, convexhull_all, convexhull_in_place, intersect, intersect_all,
        intersect_in_place, minkowski_sum, Combined, HOperand, OperandKind, ResultKind, VOperand,
    };
    pub use crate::coeff::{matrix, promote_all, vector, Coeff, CoeffKind, Matrix, Vector};
    pub use crate::elements::{HRepElement, HalfSpace, HyperPlane, Line, Point, Ray, VRepElement};
    pub use crate::error::{ConversionError, PolyError, Result};
    pub use crate::polyhedron::{Converter, Enumeration, Polyhedron};
    pub use crate::rep::{HRep, VRep};
    pub use crate::EnumCfg;
}
