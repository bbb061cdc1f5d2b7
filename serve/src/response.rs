//! JSON body for `POST /review`: exactly one of `review` or `error`.

use serde::{Deserialize, Serialize};

/// Review endpoint response. Untagged, so the wire shape is a plain object
/// with a single `review` or `error` key.
#[derive(Debug, Serialize, Deserialize)]
#[serde(untagged)]
pub(crate) enum ReviewResponse {
    Review { review: String },
    Error { error: String },
}
