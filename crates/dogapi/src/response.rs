//! dog.ceo response decoding
//!
//! Success body:
//! ```text
//! {"message": ["afghan", "basset"], "status": "success"}
//! ```
//!
//! Unknown breed:
//! ```text
//! {"status": "error", "message": "Breed not found (main breed does not exist)", "code": 404}
//! ```

use serde::Deserialize;

use crate::error::{Error, Result};

/// Status value of a successful response
pub const STATUS_SUCCESS: &str = "success";

/// Status value of a failed response
pub const STATUS_ERROR: &str = "error";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: String,
    message: Message,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Message {
    List(Vec<String>),
    Text(String),
}

/// Decode a `/breed/{breed}/list` response body
pub fn parse_sub_breeds(breed: &str, body: &str) -> Result<Vec<String>> {
    let response: ApiResponse = serde_json::from_str(body)?;

    match (response.status.as_str(), response.message) {
        (STATUS_SUCCESS, Message::List(sub_breeds)) => Ok(sub_breeds),
        (STATUS_SUCCESS, Message::Text(text)) => Err(Error::Decode(format!(
            "expected a list of sub-breeds, got text: {}",
            text
        ))),
        (STATUS_ERROR, _) => Err(Error::BreedNotFound(breed.to_string())),
        (other, _) => Err(Error::Decode(format!("unexpected status: {}", other))),
    }
}
