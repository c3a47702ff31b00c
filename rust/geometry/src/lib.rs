// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Polysplit Geometry
//!
//! 2D polygon and polyline value types with boolean operations backed by
//! i_overlay and nalgebra points.

pub mod bool2d;
pub mod error;
pub mod geometry;
pub mod line;
pub mod line_split;
pub mod polygon;
pub mod validation;

// Re-export nalgebra types for convenience
pub use nalgebra::Point2;

pub use bool2d::{difference, intersection, union_all, MIN_AREA_RATIO};
pub use error::{Error, Result};
pub use geometry::Geometry;
pub use line::{LineString2D, MultiLineString2D};
pub use line_split::{LineSplitter, SplitPieces};
pub use polygon::{MultiPolygon2D, Polygon2D};
pub use validation::{is_simple_contour, validate_line, validate_polygon, validate_ring};
