//! `std::ops` surface. Every operator returns `Result` since operands may
//! disagree on dimension or coefficient kind.
//!
//! - `&VRep + &VRep`, `&VRep + &Line`, `&VRep + &Ray`: Minkowski sum.
//! - `&HRep * &HRep`, `&VRep * &VRep`: Cartesian product.
//! - `&Matrix * &VRep`: linear image.
//! - `&HRep / &Matrix`: constraint transform (see [`super::div`]).

use std::ops::{Add, Div, Mul};

use crate::coeff::Matrix;
use crate::elements::{Line, Ray, VRepElement};
use crate::error::Result;
use crate::rep::{HRep, VRep};

use super::{div, hproduct, mul, vproduct, vsum};

impl<'a, 'b> Add<&'b VRep> for &'a VRep {
    type Output = Result<VRep>;
    fn add(self, rhs: &'b VRep) -> Result<VRep> {
        vsum(self, rhs)
    }
}

impl<'a, 'b> Add<&'b Line> for &'a VRep {
    type Output = Result<VRep>;
    fn add(self, rhs: &'b Line) -> Result<VRep> {
        vsum(self, &VRepElement::Line(rhs.clone()).into_vrep()?)
    }
}

impl<'a, 'b> Add<&'b Ray> for &'a VRep {
    type Output = Result<VRep>;
    fn add(self, rhs: &'b Ray) -> Result<VRep> {
        vsum(self, &VRepElement::Ray(rhs.clone()).into_vrep()?)
    }
}

impl<'a, 'b> Mul<&'b HRep> for &'a HRep {
    type Output = Result<HRep>;
    fn mul(self, rhs: &'b HRep) -> Result<HRep> {
        hproduct(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b VRep> for &'a VRep {
    type Output = Result<VRep>;
    fn mul(self, rhs: &'b VRep) -> Result<VRep> {
        vproduct(self, rhs)
    }
}

impl<'a, 'b> Mul<&'b VRep> for &'a Matrix {
    type Output = Result<VRep>;
    fn mul(self, rhs: &'b VRep) -> Result<VRep> {
        mul(self, rhs)
    }
}

impl<'a, 'b> Div<&'b Matrix> for &'a HRep {
    type Output = Result<HRep>;
    fn div(self, rhs: &'b Matrix) -> Result<HRep> {
        div(self, rhs)
    }
}
