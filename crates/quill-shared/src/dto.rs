//! Data Transfer Objects - request bodies for the API.

use serde::{Deserialize, Serialize};

/// A request body that is either a single object or an array of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Body of `PATCH /posts/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LikeRequest {
    pub inc: i64,
}

/// Response to a successful image upload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub url: String,
}

impl UploadResponse {
    pub fn ok(url: impl Into<String>) -> Self {
        Self {
            success: true,
            message: "Image uploaded successfully".to_string(),
            url: url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    #[test]
    fn test_one_or_many_accepts_object() {
        let body: OneOrMany<Value> = serde_json::from_str(r#"{"title":"A"}"#).unwrap();
        let items = body.into_vec();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["title"], "A");
    }

    #[test]
    fn test_one_or_many_accepts_array() {
        let body: OneOrMany<Value> =
            serde_json::from_str(r#"[{"title":"A"},{"title":"B"},{"title":"C"}]"#).unwrap();
        assert_eq!(body.into_vec().len(), 3);
    }

    #[test]
    fn test_like_request_rejects_fractions() {
        assert!(serde_json::from_str::<LikeRequest>(r#"{"inc":1.5}"#).is_err());
        assert_eq!(
            serde_json::from_str::<LikeRequest>(r#"{"inc":-1}"#)
                .unwrap()
                .inc,
            -1
        );
    }
}
