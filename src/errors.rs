/*
 * Copyright 2024 Neatify
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use http::status::StatusCode;
use thiserror::Error;

/// Everything the support site itself can fail with. The page has no
/// fallible operations, so this is only ever the server saying "no such
/// path".
#[derive(Debug, Clone, Error)]
pub enum SupportError {
    #[error("Not Found")]
    NotFound,
}

impl SupportError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SupportError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}
