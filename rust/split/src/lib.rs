// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Polysplit
//!
//! Splits a polygon along a line that may contain closed loops.
//!
//! The splitting line arrives already separated into its closed loops (rings)
//! and its open remainder, as a [`RingExtractionResult`]. Each ring carves its
//! enclosed area out of the polygon as separate pieces; the open remainder
//! then cuts what is left, one line at a time.
//!
//! ```no_run
//! use polysplit::{RingExtractionResult, SplitClosedLines};
//! use polysplit_geometry::{LineString2D, Point2, Polygon2D};
//!
//! let square = Polygon2D::new(vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.0),
//!     Point2::new(1.0, 1.0),
//!     Point2::new(0.0, 1.0),
//! ]);
//! let diagonal = LineString2D::new(vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]);
//!
//! let pieces = SplitClosedLines::new(RingExtractionResult::line_only(diagonal))
//!     .run(&square)
//!     .unwrap();
//! assert_eq!(pieces.len(), 2);
//! ```

pub mod closed_lines;
pub mod config;
pub mod error;
pub mod ring_input;
pub mod strategy;

pub use closed_lines::{split_polygon_by_closed_lines, SplitClosedLines};
pub use config::SplitConfig;
pub use error::{Error, Result};
pub use ring_input::RingExtractionResult;
pub use strategy::SplitStrategy;
