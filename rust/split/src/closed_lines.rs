// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Split of a polygon by a line containing closed loops
//!
//! Runs in two phases. The ring phase subtracts every loop's enclosed area
//! from the polygon and keeps the part of that area lying inside the original
//! polygon as pieces of its own. The line phase then cuts whatever is left
//! with each open line of the remaining split line in turn, so a piece can be
//! cut again by a later line.

use crate::config::SplitConfig;
use crate::error::Result;
use crate::ring_input::RingExtractionResult;
use crate::strategy::SplitStrategy;
use polysplit_geometry::{
    difference, intersection, validate_line, validate_polygon, validate_ring, LineSplitter,
    LineString2D, MultiLineString2D, MultiPolygon2D, Polygon2D,
};

/// Output of the ring phase
#[derive(Debug, Clone, Default)]
pub struct RingPhase {
    /// The polygon less every ring area; may be disconnected or empty
    pub remainder: MultiPolygon2D,
    /// Ring areas clipped to the original polygon, in ring order
    pub pieces: Vec<Polygon2D>,
}

/// One-shot closed-line split
///
/// Consumed by [`run`](Self::run), so a single instance serves exactly one
/// split request.
#[derive(Debug, Clone)]
pub struct SplitClosedLines {
    remaining_line: MultiLineString2D,
    rings: Vec<LineString2D>,
    config: SplitConfig,
}

impl SplitClosedLines {
    pub fn new(input: RingExtractionResult) -> Self {
        let (remaining_line, rings) = input.into_parts();
        Self {
            remaining_line,
            rings,
            config: SplitConfig::default(),
        }
    }

    pub fn with_config(mut self, config: SplitConfig) -> Self {
        self.config = config;
        self
    }

    /// Split the polygon using the built-in line splitter
    ///
    /// Returns the ring pieces first, then the pieces left after cutting the
    /// remainder with the open lines.
    pub fn run(self, polygon: &Polygon2D) -> Result<Vec<Polygon2D>> {
        let min_piece_ratio = self.config.min_piece_ratio;
        self.run_with(polygon, |line| {
            LineSplitter::new(line).with_min_piece_ratio(min_piece_ratio)
        })
    }

    /// Split the polygon, building one strategy per open line
    pub fn run_with<S, F>(self, polygon: &Polygon2D, make_strategy: F) -> Result<Vec<Polygon2D>>
    where
        S: SplitStrategy,
        F: FnMut(&LineString2D) -> S,
    {
        if self.config.validate_input {
            self.validate(polygon)?;
        }

        tracing::debug!(
            rings = self.rings.len(),
            lines = self.remaining_line.len(),
            "Starting closed line split"
        );

        let RingPhase {
            remainder,
            mut pieces,
        } = process_rings(polygon, &self.rings, self.config.min_piece_ratio)?;

        let line_pieces = process_remaining_line(remainder, &self.remaining_line, make_strategy)?;

        tracing::debug!(
            ring_pieces = pieces.len(),
            line_pieces = line_pieces.len(),
            "Closed line split complete"
        );

        pieces.extend(line_pieces);
        Ok(pieces)
    }

    fn validate(&self, polygon: &Polygon2D) -> Result<()> {
        validate_polygon(polygon)?;
        for ring in &self.rings {
            validate_ring(ring)?;
        }
        for line in self.remaining_line.lines().iter().filter(|l| l.len() >= 2) {
            validate_line(line)?;
        }
        Ok(())
    }
}

/// Split `polygon` by a ring extraction result with the default settings
pub fn split_polygon_by_closed_lines(
    polygon: &Polygon2D,
    input: RingExtractionResult,
) -> Result<Vec<Polygon2D>> {
    SplitClosedLines::new(input).run(polygon)
}

/// Subtract every ring from the polygon, collecting ring ∩ polygon pieces
///
/// Rings apply in order against the shrinking remainder, but each ring's
/// piece is clipped against the original polygon. Overlapping rings therefore
/// yield overlapping pieces. Pieces and remainder parts whose area is at most
/// `min_piece_ratio` of the polygon's area are dropped.
pub fn process_rings(
    polygon: &Polygon2D,
    rings: &[LineString2D],
    min_piece_ratio: f64,
) -> Result<RingPhase> {
    let min_piece_area = min_piece_ratio * polygon.area();
    let mut remainder = MultiPolygon2D::from(polygon.clone());
    let mut pieces = Vec::new();

    for (idx, ring) in rings.iter().enumerate() {
        let ring_polygon = Polygon2D::from_ring(ring)?;

        remainder = difference(&remainder, &ring_polygon);

        let overlap = intersection(&ring_polygon, polygon);
        let before = pieces.len();
        pieces.extend(overlap.into_iter().filter(|p| p.area() > min_piece_area));

        tracing::trace!(
            ring = idx,
            pieces = pieces.len() - before,
            remainder_parts = remainder.len(),
            "Applied ring"
        );
    }

    let remainder = remainder
        .into_iter()
        .filter(|p| p.area() > min_piece_area)
        .collect();

    Ok(RingPhase { remainder, pieces })
}

/// Cut the remainder with each open line in order
///
/// Every line sees the full piece list produced by the previous line. Lines
/// with fewer than two points cut nothing.
pub fn process_remaining_line<S, F>(
    remainder: MultiPolygon2D,
    remaining_line: &MultiLineString2D,
    mut make_strategy: F,
) -> Result<Vec<Polygon2D>>
where
    S: SplitStrategy,
    F: FnMut(&LineString2D) -> S,
{
    remaining_line
        .lines()
        .iter()
        .enumerate()
        .filter(|(_, line)| line.len() >= 2)
        .try_fold(remainder.into_parts(), |pieces, (idx, line)| {
            let strategy = make_strategy(line);
            let next = split_pieces(&strategy, pieces)?;
            tracing::trace!(line = idx, pieces = next.len(), "Applied line");
            Ok(next)
        })
}

/// Map a piece list through one strategy; unsplittable pieces pass through
fn split_pieces<S: SplitStrategy>(strategy: &S, pieces: Vec<Polygon2D>) -> Result<Vec<Polygon2D>> {
    let mut next = Vec::with_capacity(pieces.len() + 1);
    for piece in pieces {
        match strategy.try_split(&piece)? {
            Some(cut) => next.extend(cut),
            None => next.push(piece),
        }
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use approx::assert_relative_eq;
    use polysplit_geometry::{Point2, SplitPieces};
    use std::cell::Cell;

    fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Polygon2D {
        Polygon2D::new(vec![
            Point2::new(x0, y0),
            Point2::new(x1, y0),
            Point2::new(x1, y1),
            Point2::new(x0, y1),
        ])
    }

    fn rect_ring(x0: f64, y0: f64, x1: f64, y1: f64) -> LineString2D {
        let mut points = rect(x0, y0, x1, y1).outer;
        points.push(points[0]);
        LineString2D::new(points)
    }

    fn line(points: &[(f64, f64)]) -> LineString2D {
        LineString2D::new(points.iter().map(|&(x, y)| Point2::new(x, y)).collect())
    }

    /// Halves any piece whose x-range straddles `x`, without using the line
    struct VerticalCut {
        x: f64,
    }

    impl SplitStrategy for VerticalCut {
        fn can_split(&self, piece: &Polygon2D) -> bool {
            piece
                .bounds()
                .is_some_and(|(min, max)| min.x < self.x && max.x > self.x)
        }

        fn split(&self, piece: &Polygon2D) -> Result<SplitPieces> {
            let Some((min, max)) = piece.bounds() else {
                return Err(Error::InvalidInput("empty piece".to_string()));
            };
            let mut out = SplitPieces::new();
            out.extend(intersection(piece, &rect(min.x, min.y, self.x, max.y)));
            out.extend(intersection(piece, &rect(self.x, min.y, max.x, max.y)));
            Ok(out)
        }
    }

    struct NeverSplit;

    impl SplitStrategy for NeverSplit {
        fn can_split(&self, _piece: &Polygon2D) -> bool {
            false
        }

        fn split(&self, _piece: &Polygon2D) -> Result<SplitPieces> {
            Err(Error::InvalidInput("never splits".to_string()))
        }
    }

    /// Splits in `try_split` alone; `can_split` always says no
    struct SingleCall {
        x: f64,
        calls: Cell<usize>,
    }

    impl SplitStrategy for SingleCall {
        fn can_split(&self, _piece: &Polygon2D) -> bool {
            false
        }

        fn split(&self, _piece: &Polygon2D) -> Result<SplitPieces> {
            Err(Error::InvalidInput("split is not used".to_string()))
        }

        fn try_split(&self, piece: &Polygon2D) -> Result<Option<SplitPieces>> {
            self.calls.set(self.calls.get() + 1);
            let cut = VerticalCut { x: self.x };
            if cut.can_split(piece) {
                cut.split(piece).map(Some)
            } else {
                Ok(None)
            }
        }
    }

    #[test]
    fn test_ring_phase_hole_and_piece() {
        let square = rect(0.0, 0.0, 10.0, 10.0);
        let phase = process_rings(&square, &[rect_ring(4.0, 4.0, 6.0, 6.0)], 1e-10).unwrap();

        assert_eq!(phase.pieces.len(), 1);
        assert_relative_eq!(phase.pieces[0].area(), 4.0, epsilon = 1e-6);
        assert_eq!(phase.remainder.len(), 1);
        assert_eq!(phase.remainder.parts()[0].holes.len(), 1);
        assert_relative_eq!(phase.remainder.area(), 96.0, epsilon = 1e-6);
    }

    #[test]
    fn test_ring_phase_bisecting_ring() {
        let square = rect(0.0, 0.0, 10.0, 10.0);
        let phase = process_rings(&square, &[rect_ring(4.0, -2.0, 6.0, 12.0)], 1e-10).unwrap();

        // Only the part inside the square becomes a piece
        assert_eq!(phase.pieces.len(), 1);
        assert_relative_eq!(phase.pieces[0].area(), 20.0, epsilon = 1e-6);
        assert_eq!(phase.remainder.len(), 2);
        assert_relative_eq!(phase.remainder.area(), 80.0, epsilon = 1e-6);
    }

    #[test]
    fn test_ring_phase_covering_ring_empties_remainder() {
        let square = rect(0.0, 0.0, 1.0, 1.0);
        let phase = process_rings(&square, &[rect_ring(-1.0, -1.0, 2.0, 2.0)], 1e-10).unwrap();

        assert!(phase.remainder.is_empty());
        assert_eq!(phase.pieces.len(), 1);
        assert_relative_eq!(phase.pieces[0].area(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_ring_phase_rejects_open_ring() {
        let square = rect(0.0, 0.0, 1.0, 1.0);
        let open = line(&[(0.2, 0.2), (0.8, 0.2), (0.8, 0.8)]);
        assert!(matches!(
            process_rings(&square, &[open], 1e-10),
            Err(Error::Geometry(_))
        ));
    }

    #[test]
    fn test_line_phase_without_lines_passes_through() {
        let remainder = MultiPolygon2D::new(vec![rect(0.0, 0.0, 1.0, 1.0), rect(2.0, 0.0, 3.0, 1.0)]);
        let pieces = process_remaining_line(
            remainder.clone(),
            &MultiLineString2D::default(),
            |_| NeverSplit,
        )
        .unwrap();

        assert_eq!(pieces, remainder.into_parts());
    }

    #[test]
    fn test_line_phase_builds_one_strategy_per_line() {
        let built = Cell::new(0);
        let lines = MultiLineString2D::new(vec![
            line(&[(0.5, -1.0), (0.5, 2.0)]),
            line(&[(0.25, -1.0), (0.25, 2.0)]),
            line(&[(0.0, 0.0)]),
        ]);
        let xs = [0.5, 0.25];

        let pieces = process_remaining_line(
            MultiPolygon2D::from(rect(0.0, 0.0, 1.0, 1.0)),
            &lines,
            |_| {
                let x = xs[built.get()];
                built.set(built.get() + 1);
                VerticalCut { x }
            },
        )
        .unwrap();

        // The degenerate third line is skipped
        assert_eq!(built.get(), 2);
        // Second cut only hits the left half produced by the first
        assert_eq!(pieces.len(), 3);
        let total: f64 = pieces.iter().map(Polygon2D::area).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_line_phase_uses_try_split() {
        let strategy = SingleCall {
            x: 0.5,
            calls: Cell::new(0),
        };
        let pieces = split_pieces(
            &strategy,
            vec![rect(0.0, 0.0, 1.0, 1.0), rect(2.0, 0.0, 3.0, 1.0)],
        )
        .unwrap();

        // One decision per piece; only the first straddles x = 0.5
        assert_eq!(strategy.calls.get(), 2);
        assert_eq!(pieces.len(), 3);
        assert_relative_eq!(pieces[0].area(), 0.5, epsilon = 1e-6);
        assert_relative_eq!(pieces[1].area(), 0.5, epsilon = 1e-6);
        assert_eq!(pieces[2], rect(2.0, 0.0, 3.0, 1.0));
    }

    #[test]
    fn test_default_try_split_follows_can_split() {
        let piece = rect(0.0, 0.0, 1.0, 1.0);
        assert!(NeverSplit.try_split(&piece).unwrap().is_none());
        assert_eq!(
            VerticalCut { x: 0.5 }.try_split(&piece).unwrap().map(|p| p.len()),
            Some(2)
        );
    }

    #[test]
    fn test_line_phase_keeps_order_of_untouched_pieces() {
        let left = rect(0.0, 0.0, 1.0, 1.0);
        let right = rect(2.0, 0.0, 3.0, 1.0);
        let pieces = process_remaining_line(
            MultiPolygon2D::new(vec![left.clone(), right.clone()]),
            &MultiLineString2D::from(line(&[(2.5, -1.0), (2.5, 2.0)])),
            |_| VerticalCut { x: 2.5 },
        )
        .unwrap();

        assert_eq!(pieces.len(), 3);
        assert_eq!(pieces[0], left);
        assert_relative_eq!(pieces[1].area() + pieces[2].area(), right.area(), epsilon = 1e-6);
    }

    #[test]
    fn test_run_rejects_invalid_polygon() {
        let bowtie = Polygon2D::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ]);
        let result = SplitClosedLines::new(RingExtractionResult::default()).run(&bowtie);
        assert!(matches!(result, Err(Error::Geometry(_))));
    }

    #[test]
    fn test_run_skips_validation_when_disabled() {
        let bowtie = Polygon2D::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 0.0),
            Point2::new(0.0, 1.0),
        ]);
        let result = SplitClosedLines::new(RingExtractionResult::default())
            .with_config(SplitConfig::default().with_validation(false))
            .run(&bowtie);
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_accepts_repeated_vertices() {
        let repeated = Polygon2D::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]);
        let input = RingExtractionResult::line_only(line(&[(0.5, -1.0), (0.5, 2.0)]));

        let pieces = SplitClosedLines::new(input).run(&repeated).unwrap();

        assert_eq!(pieces.len(), 2);
        for piece in &pieces {
            assert_relative_eq!(piece.area(), 0.5, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_min_piece_ratio_drops_small_ring_pieces() {
        let square = rect(0.0, 0.0, 10.0, 10.0);
        let input = RingExtractionResult::rings_only(vec![rect_ring(1.0, 1.0, 1.5, 1.5)]);

        // Ring piece is 0.25% of the square, below the 1% cutoff
        let pieces = SplitClosedLines::new(input)
            .with_config(SplitConfig::default().with_min_piece_ratio(0.01))
            .run(&square)
            .unwrap();

        assert_eq!(pieces.len(), 1);
        assert_relative_eq!(pieces[0].area(), 99.75, epsilon = 1e-6);
    }
}
