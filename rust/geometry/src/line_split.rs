// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Splitting a polygon with a single open polyline

use crate::bool2d::{
    bounds_overlap, contour_to_path, polygon_to_paths, shapes_to_polygons, MIN_AREA_RATIO,
};
use crate::error::{Error, Result};
use crate::line::LineString2D;
use crate::polygon::Polygon2D;
use i_overlay::core::fill_rule::FillRule;
use i_overlay::float::slice::FloatSlice;
use nalgebra::Point2;
use smallvec::SmallVec;

/// Pieces produced by one cut; nearly always two
pub type SplitPieces = SmallVec<[Polygon2D; 2]>;

/// Cuts polygons along one open polyline
///
/// Built once per cutting line. A polygon counts as splittable only when the
/// line crosses it so that at least two non-degenerate pieces result; a line
/// that merely touches the boundary, or ends inside the polygon without
/// crossing it, leaves it whole.
#[derive(Debug, Clone)]
pub struct LineSplitter {
    path: Vec<[f64; 2]>,
    bounds: Option<(Point2<f64>, Point2<f64>)>,
    min_piece_ratio: f64,
}

impl LineSplitter {
    pub fn new(line: &LineString2D) -> Self {
        Self {
            path: contour_to_path(line.points()),
            bounds: line.bounds(),
            min_piece_ratio: MIN_AREA_RATIO,
        }
    }

    /// Pieces whose area is at most this fraction of the cut polygon's area
    /// are discarded
    pub fn with_min_piece_ratio(mut self, min_piece_ratio: f64) -> Self {
        self.min_piece_ratio = min_piece_ratio.clamp(0.0, 1.0);
        self
    }

    /// Whether this line cuts the polygon into two or more pieces
    pub fn can_split(&self, polygon: &Polygon2D) -> bool {
        self.try_split(polygon).is_some()
    }

    /// Cut the polygon, returning the pieces in kernel output order
    pub fn split(&self, polygon: &Polygon2D) -> Result<SplitPieces> {
        self.try_split(polygon).ok_or_else(|| {
            Error::SplitFailed(format!(
                "Line with {} points does not cross the polygon",
                self.path.len()
            ))
        })
    }

    /// Cut the polygon with a single kernel call, `None` when the line does
    /// not divide it
    pub fn try_split(&self, polygon: &Polygon2D) -> Option<SplitPieces> {
        let pieces = self.slice(polygon);
        (pieces.len() >= 2).then_some(pieces)
    }

    fn slice(&self, polygon: &Polygon2D) -> SplitPieces {
        if self.path.len() < 2 {
            return SplitPieces::new();
        }

        let (Some((line_min, line_max)), Some((poly_min, poly_max))) =
            (self.bounds, polygon.bounds())
        else {
            return SplitPieces::new();
        };
        if !bounds_overlap(&line_min, &line_max, &poly_min, &poly_max) {
            return SplitPieces::new();
        }

        let subject = polygon_to_paths(polygon);
        let lines = vec![self.path.clone()];
        let shapes = subject.slice_by(&lines, FillRule::EvenOdd);

        let min_area = self.min_piece_ratio * polygon.area();
        let pieces: SplitPieces = shapes_to_polygons(shapes, min_area).collect();
        tracing::trace!(pieces = pieces.len(), "Sliced polygon by line");
        pieces
    }
}
