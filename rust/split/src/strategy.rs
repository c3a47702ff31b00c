// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Per-line split strategy

use crate::error::Result;
use polysplit_geometry::{LineSplitter, Polygon2D, SplitPieces};

/// Decides whether and how one cutting line splits a polygon piece
///
/// A strategy is built fresh for every line of the remaining split line and
/// only ever reasons about that single line.
pub trait SplitStrategy {
    /// False for lines that miss the piece or only touch its boundary
    fn can_split(&self, piece: &Polygon2D) -> bool;

    /// Cut the piece; only called after `can_split` returned true
    fn split(&self, piece: &Polygon2D) -> Result<SplitPieces>;

    /// Cut the piece if possible, `Ok(None)` when it stays whole
    ///
    /// The orchestrator calls this. Override it when deciding and cutting
    /// share work.
    fn try_split(&self, piece: &Polygon2D) -> Result<Option<SplitPieces>> {
        if self.can_split(piece) {
            self.split(piece).map(Some)
        } else {
            Ok(None)
        }
    }
}

impl SplitStrategy for LineSplitter {
    fn can_split(&self, piece: &Polygon2D) -> bool {
        LineSplitter::can_split(self, piece)
    }

    fn split(&self, piece: &Polygon2D) -> Result<SplitPieces> {
        Ok(LineSplitter::split(self, piece)?)
    }

    fn try_split(&self, piece: &Polygon2D) -> Result<Option<SplitPieces>> {
        Ok(LineSplitter::try_split(self, piece))
    }
}
