use serde::{Deserialize, Serialize};

/// One listing interaction, sent as the JSON body of
/// `POST /categories/{slug}/navigate`.
///
/// ```json
/// { "action": "toggle", "key": "color", "value": "pink" }
/// { "action": "set_min", "value": 25000 }
/// ```
#[derive(Debug, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum NavigateRequest {
    /// Flip one value of a multi-select filter (`color` or `shape`).
    Toggle { key: String, value: String },
    /// Drop every value of a multi-select filter.
    Clear { key: String },
    /// Move the lower price slider.
    SetMin { value: i64 },
    /// Move the upper price slider.
    SetMax { value: i64 },
    /// Change the order; unknown keys mean `rec`.
    Sort { value: String },
    /// Change the display currency; unknown codes mean `USD`.
    Currency { value: String },
}

/// Where the client should go next.
#[derive(Debug, Serialize)]
pub struct NavigateResponse {
    pub location: String,
    /// New query string without the leading `?`.
    pub query: String,
}
