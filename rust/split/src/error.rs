// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for split operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a split request
#[derive(Error, Debug)]
pub enum Error {
    #[error("Geometry error: {0}")]
    Geometry(#[from] polysplit_geometry::Error),

    #[error("Invalid split input: {0}")]
    InvalidInput(String),
}
