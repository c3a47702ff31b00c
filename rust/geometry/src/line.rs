// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polylines and rings

use crate::bool2d::contour_bounds;
use nalgebra::Point2;

/// An open polyline, or a ring when its first and last points coincide
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineString2D(pub Vec<Point2<f64>>);

impl LineString2D {
    pub fn new(points: Vec<Point2<f64>>) -> Self {
        Self(points)
    }

    pub fn points(&self) -> &[Point2<f64>] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A ring needs at least 4 points with the last repeating the first
    pub fn is_closed(&self) -> bool {
        self.0.len() >= 4 && self.0.first() == self.0.last()
    }

    pub fn bounds(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        contour_bounds(&self.0)
    }
}

impl From<Vec<Point2<f64>>> for LineString2D {
    fn from(points: Vec<Point2<f64>>) -> Self {
        Self(points)
    }
}

/// A collection of polylines, applied one after another when splitting
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MultiLineString2D(pub Vec<LineString2D>);

impl MultiLineString2D {
    pub fn new(lines: Vec<LineString2D>) -> Self {
        Self(lines)
    }

    pub fn lines(&self) -> &[LineString2D] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there is no line with at least two points
    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|l| l.len() < 2)
    }
}

impl From<LineString2D> for MultiLineString2D {
    fn from(line: LineString2D) -> Self {
        Self(vec![line])
    }
}

impl FromIterator<LineString2D> for MultiLineString2D {
    fn from_iter<I: IntoIterator<Item = LineString2D>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
