use crate::coeff::CoeffKind;
use crate::elements::{elements_kind, Line, Point, Ray, VRepElement};
use crate::error::{check_dim, Result};

/// V-representation: `conv(points) + cone(rays) + span(lines)`.
///
/// A representation without points is a cone anchored at the origin; with no
/// generators at all it is `{0}`.
#[derive(Clone, Debug, PartialEq)]
pub struct VRep {
    dim: usize,
    kind: CoeffKind,
    points: Vec<Point>,
    lines: Vec<Line>,
    rays: Vec<Ray>,
}

impl VRep {
    pub fn new(dim: usize, points: Vec<Point>, lines: Vec<Line>, rays: Vec<Ray>) -> Result<Self> {
        let kind = elements_kind(
            points
                .iter()
                .map(Point::kind)
                .chain(lines.iter().map(Line::kind))
                .chain(rays.iter().map(Ray::kind)),
        )?;
        Self::with_kind(dim, kind, points, lines, rays)
    }

    pub fn with_kind(
        dim: usize,
        kind: CoeffKind,
        points: Vec<Point>,
        lines: Vec<Line>,
        rays: Vec<Ray>,
    ) -> Result<Self> {
        for p in &points {
            check_dim(dim, p.dim())?;
        }
        for l in &lines {
            check_dim(dim, l.dim())?;
        }
        for r in &rays {
            check_dim(dim, r.dim())?;
        }
        let points = points
            .iter()
            .map(|p| p.coerced(kind))
            .collect::<Result<Vec<_>>>()?;
        let lines = lines
            .iter()
            .map(|l| l.coerced(kind))
            .collect::<Result<Vec<_>>>()?;
        let rays = rays
            .iter()
            .map(|r| r.coerced(kind))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_parts(dim, kind, points, lines, rays))
    }

    #[inline]
    pub fn from_points(dim: usize, points: Vec<Point>) -> Result<Self> {
        Self::new(dim, points, Vec::new(), Vec::new())
    }

    /// Cone generated by `lines` and `rays`.
    #[inline]
    pub fn cone(dim: usize, lines: Vec<Line>, rays: Vec<Ray>) -> Result<Self> {
        Self::new(dim, Vec::new(), lines, rays)
    }

    /// Wrap raw generators as they are, without deduplication.
    pub fn from_elements<I>(dim: usize, elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = VRepElement>,
    {
        let (mut points, mut lines, mut rays) = (Vec::new(), Vec::new(), Vec::new());
        for e in elements {
            match e {
                VRepElement::Point(p) => points.push(p),
                VRepElement::Line(l) => lines.push(l),
                VRepElement::Ray(r) => rays.push(r),
            }
        }
        Self::new(dim, points, lines, rays)
    }

    #[inline]
    pub(crate) fn from_parts(
        dim: usize,
        kind: CoeffKind,
        points: Vec<Point>,
        lines: Vec<Line>,
        rays: Vec<Ray>,
    ) -> Self {
        Self {
            dim,
            kind,
            points,
            lines,
            rays,
        }
    }

    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }
    #[inline]
    pub fn kind(&self) -> CoeffKind {
        self.kind
    }
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }
    #[inline]
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len() + self.lines.len() + self.rays.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// No points other than the origin: only lines and rays matter.
    pub fn is_cone(&self) -> bool {
        self.points.iter().all(Point::is_origin)
    }

    /// All generators: points, then lines, then rays.
    pub fn elements(&self) -> impl Iterator<Item = VRepElement> + '_ {
        self.points
            .iter()
            .cloned()
            .map(VRepElement::from)
            .chain(self.lines.iter().cloned().map(VRepElement::from))
            .chain(self.rays.iter().cloned().map(VRepElement::from))
    }

    pub fn coerced(&self, kind: CoeffKind) -> Result<Self> {
        if kind == self.kind {
            return Ok(self.clone());
        }
        Self::with_kind(
            self.dim,
            kind,
            self.points.clone(),
            self.lines.clone(),
            self.rays.clone(),
        )
    }
}
