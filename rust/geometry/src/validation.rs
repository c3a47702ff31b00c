// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Validity predicates for split inputs
//!
//! The boolean kernel happily consumes malformed contours and returns
//! something; these checks turn such inputs into an explicit error before
//! any operation runs.

use crate::bool2d::{contour_extent, is_valid_contour, EPSILON_2D};
use crate::error::{Error, Result};
use crate::line::LineString2D;
use crate::polygon::Polygon2D;
use nalgebra::Point2;

/// Check that a polygon is usable as a split subject
///
/// Requires at least 3 finite vertices per contour, a non-degenerate outer
/// boundary and an outer boundary without self-intersections.
pub fn validate_polygon(polygon: &Polygon2D) -> Result<()> {
    if polygon.outer.len() < 3 {
        return Err(Error::InvalidGeometry(format!(
            "Polygon must have at least 3 vertices, got {}",
            polygon.outer.len()
        )));
    }

    if !all_finite(&polygon.outer) || !polygon.holes.iter().all(|h| all_finite(h)) {
        return Err(Error::InvalidGeometry(
            "Polygon has non-finite coordinates".to_string(),
        ));
    }

    if !is_valid_contour(&polygon.outer) {
        return Err(Error::InvalidGeometry(
            "Polygon outer boundary has no area".to_string(),
        ));
    }

    if !is_simple_contour(&polygon.outer) {
        return Err(Error::InvalidGeometry(
            "Polygon outer boundary self-intersects".to_string(),
        ));
    }

    if let Some(idx) = polygon.holes.iter().position(|h| h.len() < 3) {
        return Err(Error::InvalidGeometry(format!(
            "Polygon hole {} has fewer than 3 vertices",
            idx
        )));
    }

    Ok(())
}

/// Check that a line string is a closed ring
pub fn validate_ring(ring: &LineString2D) -> Result<()> {
    if !ring.is_closed() {
        return Err(Error::InvalidGeometry(format!(
            "Ring must be closed with at least 4 points, got {} points",
            ring.len()
        )));
    }

    if !all_finite(ring.points()) {
        return Err(Error::InvalidGeometry(
            "Ring has non-finite coordinates".to_string(),
        ));
    }

    Ok(())
}

/// Check that a line string can act as a cutting line
pub fn validate_line(line: &LineString2D) -> Result<()> {
    if line.len() < 2 {
        return Err(Error::InvalidGeometry(format!(
            "Line must have at least 2 points, got {}",
            line.len()
        )));
    }

    if !all_finite(line.points()) {
        return Err(Error::InvalidGeometry(
            "Line has non-finite coordinates".to_string(),
        ));
    }

    Ok(())
}

/// Check that no two non-adjacent edges of a closed contour touch
///
/// Accepts the contour open or with a repeated closing vertex. Consecutive
/// vertices closer than the tolerance are merged first, so repeated points
/// do not count as a self-touch.
pub fn is_simple_contour(contour: &[Point2<f64>]) -> bool {
    let extent = contour_extent(contour);
    let tol = Tolerance {
        dist: EPSILON_2D * extent,
        orient: EPSILON_2D * extent * extent,
    };

    let mut points: Vec<Point2<f64>> = Vec::with_capacity(contour.len());
    for p in contour {
        if points.last().map_or(true, |q| (p - q).norm() > tol.dist) {
            points.push(*p);
        }
    }
    while points.len() > 1 && (points[points.len() - 1] - points[0]).norm() <= tol.dist {
        points.pop();
    }

    let n = points.len();
    if n < 3 {
        return false;
    }

    for i in 0..n {
        let (a0, a1) = (points[i], points[(i + 1) % n]);
        for j in (i + 2)..n {
            // first and last edges share the closing vertex
            if i == 0 && j == n - 1 {
                continue;
            }
            let (b0, b1) = (points[j], points[(j + 1) % n]);
            if segments_touch(&a0, &a1, &b0, &b1, tol) {
                return false;
            }
        }
    }

    true
}

fn all_finite(points: &[Point2<f64>]) -> bool {
    points.iter().all(|p| p.x.is_finite() && p.y.is_finite())
}

/// Tolerances scaled to the extent of the contour under test
#[derive(Debug, Clone, Copy)]
struct Tolerance {
    /// Distance between coordinates
    dist: f64,
    /// Orientation determinant, which scales with length squared
    orient: f64,
}

fn orient(a: &Point2<f64>, b: &Point2<f64>, c: &Point2<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// `p` is collinear with segment `a`-`b`; test whether it lies within its box
fn within_segment(a: &Point2<f64>, b: &Point2<f64>, p: &Point2<f64>, eps: f64) -> bool {
    p.x >= a.x.min(b.x) - eps
        && p.x <= a.x.max(b.x) + eps
        && p.y >= a.y.min(b.y) - eps
        && p.y <= a.y.max(b.y) + eps
}

fn segments_touch(
    p0: &Point2<f64>,
    p1: &Point2<f64>,
    q0: &Point2<f64>,
    q1: &Point2<f64>,
    tol: Tolerance,
) -> bool {
    let d0 = orient(q0, q1, p0);
    let d1 = orient(q0, q1, p1);
    let d2 = orient(p0, p1, q0);
    let d3 = orient(p0, p1, q1);

    let eps = tol.orient;
    let straddles = |a: f64, b: f64| (a > eps && b < -eps) || (a < -eps && b > eps);
    if straddles(d0, d1) && straddles(d2, d3) {
        return true;
    }

    (d0.abs() <= eps && within_segment(q0, q1, p0, tol.dist))
        || (d1.abs() <= eps && within_segment(q0, q1, p1, tol.dist))
        || (d2.abs() <= eps && within_segment(p0, p1, q0, tol.dist))
        || (d3.abs() <= eps && within_segment(p0, p1, q1, tol.dist))
}
