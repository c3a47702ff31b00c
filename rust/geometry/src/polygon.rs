// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 2D polygon value types

use crate::bool2d::{compute_signed_area, contour_bounds};
use crate::error::{Error, Result};
use crate::line::LineString2D;
use nalgebra::Point2;

/// 2D polygon with optional holes
///
/// Contours are stored open: the closing vertex is not repeated.
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon2D {
    /// Outer boundary (counter-clockwise)
    pub outer: Vec<Point2<f64>>,
    /// Holes (clockwise)
    pub holes: Vec<Vec<Point2<f64>>>,
}

impl Polygon2D {
    /// Create a new polygon without holes
    pub fn new(outer: Vec<Point2<f64>>) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Create a polygon with holes
    pub fn with_holes(outer: Vec<Point2<f64>>, holes: Vec<Vec<Point2<f64>>>) -> Self {
        Self { outer, holes }
    }

    /// Build a hole-less polygon whose boundary is the given closed ring
    pub fn from_ring(ring: &LineString2D) -> Result<Self> {
        if !ring.is_closed() {
            return Err(Error::InvalidGeometry(format!(
                "Ring must be closed with at least 4 points, got {} points",
                ring.len()
            )));
        }

        let points = ring.points();
        Ok(Self::new(points[..points.len() - 1].to_vec()))
    }

    /// Unsigned area: outer boundary minus holes
    pub fn area(&self) -> f64 {
        let holes: f64 = self
            .holes
            .iter()
            .map(|h| compute_signed_area(h).abs())
            .sum();
        compute_signed_area(&self.outer).abs() - holes
    }

    /// Bounding box of the outer boundary
    pub fn bounds(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        contour_bounds(&self.outer)
    }
}

/// Multi-part polygon, as produced by boolean operations
///
/// Parts are expected to be pairwise disjoint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiPolygon2D(pub Vec<Polygon2D>);

impl MultiPolygon2D {
    pub fn new(parts: Vec<Polygon2D>) -> Self {
        Self(parts)
    }

    pub fn parts(&self) -> &[Polygon2D] {
        &self.0
    }

    pub fn into_parts(self) -> Vec<Polygon2D> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Sum of part areas
    pub fn area(&self) -> f64 {
        self.0.iter().map(Polygon2D::area).sum()
    }
}

impl From<Polygon2D> for MultiPolygon2D {
    fn from(polygon: Polygon2D) -> Self {
        Self(vec![polygon])
    }
}

impl FromIterator<Polygon2D> for MultiPolygon2D {
    fn from_iter<I: IntoIterator<Item = Polygon2D>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MultiPolygon2D {
    type Item = Polygon2D;
    type IntoIter = std::vec::IntoIter<Polygon2D>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
