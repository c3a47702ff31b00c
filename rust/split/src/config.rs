// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Split configuration, optionally loaded from environment variables.

use polysplit_geometry::MIN_AREA_RATIO;

/// Split configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SplitConfig {
    /// Pieces whose area is at most this fraction of the input polygon's
    /// area are dropped as degenerate.
    pub min_piece_ratio: f64,
    /// Validate the polygon, rings and lines before splitting.
    pub validate_input: bool,
}

impl SplitConfig {
    /// Load configuration from environment variables.
    ///
    /// Unset or unparsable variables fall back to the defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            min_piece_ratio: std::env::var("POLYSPLIT_MIN_PIECE_RATIO")
                .ok()
                .and_then(|v| v.trim().parse::<f64>().ok())
                .filter(|v| (0.0..=1.0).contains(v))
                .unwrap_or(defaults.min_piece_ratio),
            validate_input: std::env::var("POLYSPLIT_VALIDATE_INPUT")
                .ok()
                .and_then(|v| parse_flag(&v))
                .unwrap_or(defaults.validate_input),
        }
    }

    pub fn with_min_piece_ratio(mut self, min_piece_ratio: f64) -> Self {
        self.min_piece_ratio = min_piece_ratio.clamp(0.0, 1.0);
        self
    }

    pub fn with_validation(mut self, validate_input: bool) -> Self {
        self.validate_input = validate_input;
        self
    }
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            min_piece_ratio: MIN_AREA_RATIO,
            validate_input: true,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
