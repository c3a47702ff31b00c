// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Splitting line already separated into closed loops and open remainder

use crate::error::{Error, Result};
use polysplit_geometry::{Geometry, LineString2D, MultiLineString2D};

/// A splitting line decomposed into its rings and the open rest
///
/// Together the remaining line and the rings are expected to cover the
/// original line exactly once; this is not checked here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RingExtractionResult {
    remaining_line: MultiLineString2D,
    rings: Vec<LineString2D>,
}

impl RingExtractionResult {
    pub fn new(remaining_line: impl Into<MultiLineString2D>, rings: Vec<LineString2D>) -> Self {
        Self {
            remaining_line: remaining_line.into(),
            rings,
        }
    }

    /// Splitting line made only of closed loops
    pub fn rings_only(rings: Vec<LineString2D>) -> Self {
        Self::new(MultiLineString2D::default(), rings)
    }

    /// Splitting line without any closed loop
    pub fn line_only(remaining_line: impl Into<MultiLineString2D>) -> Self {
        Self::new(remaining_line, Vec::new())
    }

    /// Build from untyped geometries
    ///
    /// The remaining line must be empty or linear, every ring a line string.
    pub fn from_geometry(remaining_line: &Geometry, rings: &[Geometry]) -> Result<Self> {
        let remaining_line = match remaining_line {
            Geometry::Empty => MultiLineString2D::default(),
            Geometry::LineString(line) => MultiLineString2D::from(line.clone()),
            Geometry::MultiLineString(lines) => lines.clone(),
            other => {
                return Err(Error::InvalidInput(format!(
                    "Remaining line must be linear, got {} polygonal part(s)",
                    other.num_geometries()
                )))
            }
        };

        let rings = rings
            .iter()
            .enumerate()
            .map(|(idx, ring)| match ring {
                Geometry::LineString(line) => Ok(line.clone()),
                _ => Err(Error::InvalidInput(format!(
                    "Ring {} is not a line string",
                    idx
                ))),
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self::new(remaining_line, rings))
    }

    pub fn remaining_line(&self) -> &MultiLineString2D {
        &self.remaining_line
    }

    pub fn rings(&self) -> &[LineString2D] {
        &self.rings
    }

    pub fn into_parts(self) -> (MultiLineString2D, Vec<LineString2D>) {
        (self.remaining_line, self.rings)
    }
}
