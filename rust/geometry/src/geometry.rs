// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Heterogeneous geometry value and decomposition into simple parts

use crate::line::{LineString2D, MultiLineString2D};
use crate::polygon::{MultiPolygon2D, Polygon2D};

/// Any geometry handled by the splitter
///
/// Values are never mutated once built; operations return new values.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Geometry {
    #[default]
    Empty,
    Polygon(Polygon2D),
    MultiPolygon(MultiPolygon2D),
    LineString(LineString2D),
    MultiLineString(MultiLineString2D),
}

impl Geometry {
    /// Number of simple parts
    pub fn num_geometries(&self) -> usize {
        match self {
            Geometry::Empty => 0,
            Geometry::Polygon(_) | Geometry::LineString(_) => 1,
            Geometry::MultiPolygon(m) => m.len(),
            Geometry::MultiLineString(m) => m.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.num_geometries() == 0
    }

    /// Decompose into simple parts, in storage order
    ///
    /// A simple geometry yields a single element equal to itself.
    pub fn parts(&self) -> Vec<Geometry> {
        match self {
            Geometry::Empty => Vec::new(),
            Geometry::Polygon(_) | Geometry::LineString(_) => vec![self.clone()],
            Geometry::MultiPolygon(m) => m.parts().iter().cloned().map(Geometry::Polygon).collect(),
            Geometry::MultiLineString(m) => {
                m.lines().iter().cloned().map(Geometry::LineString).collect()
            }
        }
    }

    /// Area of polygonal geometries, zero for lines
    pub fn area(&self) -> f64 {
        match self {
            Geometry::Polygon(p) => p.area(),
            Geometry::MultiPolygon(m) => m.area(),
            _ => 0.0,
        }
    }
}

impl From<Polygon2D> for Geometry {
    fn from(p: Polygon2D) -> Self {
        Geometry::Polygon(p)
    }
}

impl From<MultiPolygon2D> for Geometry {
    fn from(m: MultiPolygon2D) -> Self {
        Geometry::MultiPolygon(m)
    }
}

impl From<LineString2D> for Geometry {
    fn from(l: LineString2D) -> Self {
        Geometry::LineString(l)
    }
}

impl From<MultiLineString2D> for Geometry {
    fn from(m: MultiLineString2D) -> Self {
        Geometry::MultiLineString(m)
    }
}
