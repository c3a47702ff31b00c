// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! 2D Boolean Operations
//!
//! Polygon difference, intersection and union backed by the i_overlay crate,
//! plus the contour helpers shared by the rest of the crate. Every operation
//! returns a freshly built [`MultiPolygon2D`]; operands are never modified.

use crate::polygon::{MultiPolygon2D, Polygon2D};
use i_overlay::core::fill_rule::FillRule;
use i_overlay::core::overlay_rule::OverlayRule;
use i_overlay::float::single::SingleFloatOverlay;
use nalgebra::Point2;

/// Epsilon for floating point comparisons in 2D operations, relative to the
/// extent of the contour being tested
pub(crate) const EPSILON_2D: f64 = 1e-9;

/// Minimum area ratio - polygons whose area is at most this fraction of the
/// reference area are considered degenerate
///
/// Relative so that small-coordinate data (e.g. geographic degrees) keeps
/// its pieces.
pub const MIN_AREA_RATIO: f64 = 1e-10;

/// Perform 2D boolean difference: subject - clip
///
/// The result may have more parts than the subject when the clip bisects it,
/// and is empty when the clip covers it entirely.
pub fn difference(subject: &MultiPolygon2D, clip: &Polygon2D) -> MultiPolygon2D {
    if subject.is_empty() {
        return MultiPolygon2D::default();
    }

    let subject_paths = multi_polygon_to_paths(subject);
    let clip_paths = polygon_to_paths(clip);

    let result = subject_paths.overlay(&clip_paths, OverlayRule::Difference, FillRule::EvenOdd);
    shapes_to_multi_polygon(result, MIN_AREA_RATIO * subject.area())
}

/// Perform 2D boolean intersection: a ∩ b
///
/// Disjoint operands give an empty result.
pub fn intersection(a: &Polygon2D, b: &Polygon2D) -> MultiPolygon2D {
    let subject_paths = polygon_to_paths(a);
    let clip_paths = polygon_to_paths(b);

    let result = subject_paths.overlay(&clip_paths, OverlayRule::Intersect, FillRule::EvenOdd);
    shapes_to_multi_polygon(result, MIN_AREA_RATIO * a.area().min(b.area()))
}

/// Union any number of polygons into disjoint parts
///
/// Operands may overlap each other, so the non-zero fill rule is used on
/// consistently wound contours.
pub fn union_all(polygons: &[Polygon2D]) -> MultiPolygon2D {
    let Some((first, rest)) = polygons.split_first() else {
        return MultiPolygon2D::default();
    };

    let subject = polygon_to_paths(first);
    let clip: Vec<Vec<[f64; 2]>> = rest.iter().flat_map(polygon_to_paths).collect();

    let largest = polygons.iter().map(Polygon2D::area).fold(0.0, f64::max);
    let result = subject.overlay(&clip, OverlayRule::Union, FillRule::NonZero);
    shapes_to_multi_polygon(result, MIN_AREA_RATIO * largest)
}

/// Check if a contour is valid (has area, not degenerate)
///
/// The area is compared against the square of the contour's own extent, so
/// the test does not depend on the coordinate magnitude.
pub fn is_valid_contour(contour: &[Point2<f64>]) -> bool {
    if contour.len() < 3 {
        return false;
    }

    let extent = contour_extent(contour);
    let area = compute_signed_area(contour).abs();
    area > MIN_AREA_RATIO * extent * extent
}

/// Compute the signed area of a 2D contour
/// Positive = counter-clockwise, Negative = clockwise
pub fn compute_signed_area(contour: &[Point2<f64>]) -> f64 {
    if contour.len() < 3 {
        return 0.0;
    }

    // Relative to the first vertex, so far-from-origin coordinates keep
    // their precision
    let origin = contour[0];
    let mut area = 0.0;
    let n = contour.len();

    for i in 1..n - 1 {
        let a = contour[i] - origin;
        let b = contour[i + 1] - origin;
        area += a.x * b.y - b.x * a.y;
    }

    area * 0.5
}

/// Ensure contour has counter-clockwise winding (positive area)
pub fn ensure_ccw(contour: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let area = compute_signed_area(contour);
    if area < 0.0 {
        contour.iter().rev().cloned().collect()
    } else {
        contour.to_vec()
    }
}

/// Ensure contour has clockwise winding (for holes)
pub fn ensure_cw(contour: &[Point2<f64>]) -> Vec<Point2<f64>> {
    let area = compute_signed_area(contour);
    if area > 0.0 {
        contour.iter().rev().cloned().collect()
    } else {
        contour.to_vec()
    }
}

/// Compute bounding box of a contour
pub fn contour_bounds(contour: &[Point2<f64>]) -> Option<(Point2<f64>, Point2<f64>)> {
    let (first, rest) = contour.split_first()?;

    let mut min = *first;
    let mut max = *first;

    for p in rest {
        min.x = min.x.min(p.x);
        min.y = min.y.min(p.y);
        max.x = max.x.max(p.x);
        max.y = max.y.max(p.y);
    }

    Some((min, max))
}

/// Larger side of a contour's bounding box, zero for an empty contour
pub fn contour_extent(contour: &[Point2<f64>]) -> f64 {
    contour_bounds(contour)
        .map(|(min, max)| (max.x - min.x).max(max.y - min.y))
        .unwrap_or(0.0)
}

/// Check if two bounding boxes overlap
pub fn bounds_overlap(
    a_min: &Point2<f64>,
    a_max: &Point2<f64>,
    b_min: &Point2<f64>,
    b_max: &Point2<f64>,
) -> bool {
    a_min.x <= b_max.x && a_max.x >= b_min.x && a_min.y <= b_max.y && a_max.y >= b_min.y
}

// ============================================================================
// Internal Helper Functions
// ============================================================================

/// Convert a polygon to i_overlay path format
pub(crate) fn polygon_to_paths(polygon: &Polygon2D) -> Vec<Vec<[f64; 2]>> {
    let mut paths = Vec::with_capacity(1 + polygon.holes.len());

    paths.push(contour_to_path(&ensure_ccw(&polygon.outer)));

    for hole in &polygon.holes {
        paths.push(contour_to_path(&ensure_cw(hole)));
    }

    paths
}

/// Flatten every part's contours into one path list
///
/// Parts are disjoint, so the even-odd rule still recovers them.
fn multi_polygon_to_paths(multi: &MultiPolygon2D) -> Vec<Vec<[f64; 2]>> {
    multi.parts().iter().flat_map(polygon_to_paths).collect()
}

/// Convert a Point2 contour to i_overlay path format
pub(crate) fn contour_to_path(contour: &[Point2<f64>]) -> Vec<[f64; 2]> {
    contour.iter().map(|p| [p.x, p.y]).collect()
}

fn path_to_contour(path: &[[f64; 2]]) -> Vec<Point2<f64>> {
    path.iter().map(|p| Point2::new(p[0], p[1])).collect()
}

/// Convert i_overlay result shapes back to polygons
///
/// i_overlay returns Vec<Vec<Vec<[f64; 2]>>> where:
/// - Outer Vec: list of shapes
/// - Middle Vec: list of contours per shape (first is outer, rest are holes)
/// - Inner Vec: list of points per contour
///
/// Shapes whose area does not exceed `min_area` are dropped.
pub(crate) fn shapes_to_polygons(
    shapes: Vec<Vec<Vec<[f64; 2]>>>,
    min_area: f64,
) -> impl Iterator<Item = Polygon2D> {
    shapes.into_iter().filter_map(move |shape| {
        let (outer, holes) = shape.split_first()?;

        let outer = path_to_contour(outer);
        if !is_valid_contour(&outer) {
            return None;
        }

        let holes: Vec<Vec<Point2<f64>>> = holes
            .iter()
            .map(|h| path_to_contour(h))
            .filter(|h| is_valid_contour(h))
            .map(|h| ensure_cw(&h))
            .collect();

        let polygon = Polygon2D::with_holes(ensure_ccw(&outer), holes);
        (polygon.area() > min_area).then_some(polygon)
    })
}

fn shapes_to_multi_polygon(shapes: Vec<Vec<Vec<[f64; 2]>>>, min_area: f64) -> MultiPolygon2D {
    shapes_to_polygons(shapes, min_area).collect()
}
