//! Wire types that are specific to the HTTP layer

use serde::{Deserialize, Serialize};

/// Error body returned by a backend on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(alias = "message")]
    pub error: String,
}
