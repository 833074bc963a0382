//! Standardized API response types (RFC 7807 compliant for errors).

use serde::{Deserialize, Serialize};

/// `{success, message, posts}` - returned when posts are created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostsEnvelope<T> {
    pub success: bool,
    pub message: String,
    pub posts: Vec<T>,
}

impl<T> PostsEnvelope<T> {
    pub fn ok(posts: Vec<T>, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            posts,
        }
    }
}

/// `{success, message?, post}` - wraps a single post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostEnvelope<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub post: T,
}

impl<T> PostEnvelope<T> {
    pub fn ok(post: T) -> Self {
        Self {
            success: true,
            message: None,
            post,
        }
    }

    pub fn ok_with_message(post: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            post,
        }
    }
}

/// `{success, message, deleted?}` - for operations without a document body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<u64>,
}

/// RFC 7807 Problem Details for HTTP APIs.
///
/// See: https://datatracker.ietf.org/doc/html/rfc7807
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A URI reference that identifies the problem type.
    #[serde(rename = "type")]
    pub error_type: String,

    /// A short, human-readable summary of the problem type.
    pub title: String,

    /// The HTTP status code.
    pub status: u16,

    /// A human-readable explanation specific to this occurrence.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,

    /// Always `false`, so clients can branch on `success` for every body.
    pub success: bool,
}

impl ErrorResponse {
    pub fn new(status: u16, title: impl Into<String>) -> Self {
        Self {
            error_type: "about:blank".to_string(),
            title: title.into(),
            status,
            detail: None,
            success: false,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(400, "Bad Request").with_detail(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(404, "Not Found").with_detail(detail)
    }

    pub fn payload_too_large(detail: impl Into<String>) -> Self {
        Self::new(413, "Payload Too Large").with_detail(detail)
    }

    pub fn internal_error() -> Self {
        Self::new(500, "Internal Server Error")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_details_shape() {
        let body = serde_json::to_value(ErrorResponse::not_found("Post with id x not found"))
            .unwrap();
        assert_eq!(body["type"], "about:blank");
        assert_eq!(body["status"], 404);
        assert_eq!(body["success"], false);
        assert_eq!(body["detail"], "Post with id x not found");
    }

    #[test]
    fn test_post_envelope_omits_missing_message() {
        let body = serde_json::to_value(PostEnvelope::ok(1)).unwrap();
        assert!(body.get("message").is_none());
        assert_eq!(body["post"], 1);
    }
}
