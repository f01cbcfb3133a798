use serde::Serialize;

mod error;

pub use error::ApiError;

/// Standardized API response wrapper for all outgoing JSON responses.
///
/// Every endpoint answers with this envelope. Fields that are `None` are left out
/// of the body entirely:
/// ```json
/// {
///   "success": true,
///   "count": 2,
///   "data": [ ... ],
///   "message": "Some message"
/// }
/// ```
///
/// ## Example (success):
/// ```json
/// {
///   "success": true,
///   "data": { "id": 1, "username": "alice", "email": "alice@example.com" }
/// }
/// ```
///
/// ## Example (error):
/// ```json
/// {
///   "success": false,
///   "message": "User not found"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    /// Constructs a success response with the given data and message.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            count: None,
            data: Some(data),
            message: Some(message.into()),
        }
    }

    /// Constructs a success response carrying only data.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            count: None,
            data: Some(data),
            message: None,
        }
    }

    /// Constructs an error response. No `data` is serialized.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            count: None,
            data: None,
            message: Some(message.into()),
        }
    }
}

impl<T> ApiResponse<Vec<T>>
where
    T: Serialize,
{
    /// Constructs a listing response; `count` is the number of items.
    pub fn list(items: Vec<T>) -> Self {
        Self {
            success: true,
            count: Some(items.len()),
            data: Some(items),
            message: None,
        }
    }
}

impl ApiResponse<()> {
    /// Constructs a success response that only carries a message, e.g. after a delete.
    pub fn acknowledged(message: impl Into<String>) -> Self {
        Self {
            success: true,
            count: None,
            data: None,
            message: Some(message.into()),
        }
    }
}
