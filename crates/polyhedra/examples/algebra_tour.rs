//! Walk through the algebra on small polytopes and print the results.
//!
//! Usage:
//!   cargo run -p polyhedra --example algebra_tour
//!
//! Logs at DEBUG so converter calls and cache commits are visible.
//!
//! Shows:
//! - exact intersection with Int/Rational promotion,
//! - Minkowski sum with a cone (no cross-sum needed),
//! - a lazily converted `Polyhedron` and an in-place update.

use std::sync::Arc;

use polyhedra::prelude::*;
use polyhedra::special::{hypercube_h, simplex_v};
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(Level::DEBUG)
        .init();

    let cube = hypercube_h(2, 1);
    let cut = HalfSpace::new(vector([1, 1]), Coeff::ratio(1, 2));
    if let Combined::Rep(exact) = intersect(&cube, &cut)? {
        println!("cube ∩ cut: {} constraints, kind {}", exact.len(), exact.kind());
    }

    let tri = simplex_v(2, CoeffKind::Int);
    let up = Ray::new(vector([0, 1]));
    if let Combined::Rep(v) = minkowski_sum(&tri, &up)? {
        println!("simplex + ray: {} points, {} rays", v.points().len(), v.rays().len());
    }

    let mut p = Polyhedron::from_hrep(hypercube_h(3, 1.0), Arc::new(Enumeration::default()));
    println!("cube3 vertices: {}", p.vrep()?.points().len());
    p.intersect_in_place(&HalfSpace::new(vector([1.0, 1.0, 1.0]), 0.0))?;
    println!(
        "after cut: {} constraints, {} vertices",
        p.hrep()?.len(),
        p.vrep()?.points().len()
    );
    Ok(())
}
