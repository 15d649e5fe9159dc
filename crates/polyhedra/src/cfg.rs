//! Tolerance defaults (internal).
//!
//! Policy
//! - Exact coefficient kinds never use tolerances; these constants only apply
//!   to `Float` arithmetic.
//! - Defaults are fixed constants; the enumeration converter takes them through
//!   a small `EnumCfg` so callers can tighten them without touching call sites.

/// Feasibility epsilon used by `HRep::contains` on floating-point representations.
pub(crate) const FEAS_EPS: f64 = 1e-9;
/// Singular values below this count as zero when deciding ranks.
pub(crate) const RANK_EPS: f64 = 1e-10;
/// Quantization step for geometric dedup of enumerated vertices/facets.
pub(crate) const DEDUP_EPS: f64 = 1e-7;

/// Tolerances for the brute-force enumeration converter.
#[derive(Clone, Copy, Debug)]
pub struct EnumCfg {
    pub eps_feas: f64,
    pub eps_rank: f64,
    pub eps_dedup: f64,
}

impl Default for EnumCfg {
    fn default() -> Self {
        Self {
            eps_feas: FEAS_EPS,
            eps_rank: RANK_EPS,
            eps_dedup: DEDUP_EPS,
        }
    }
}
