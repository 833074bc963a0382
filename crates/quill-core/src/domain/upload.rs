use std::path::Path;

use serde::Serialize;

/// Target category of an uploaded image. Each maps to its own directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageCategory {
    /// User avatars.
    User,
    /// Post cover images.
    Post,
}

impl ImageCategory {
    pub const ALL: [ImageCategory; 2] = [ImageCategory::User, ImageCategory::Post];

    /// Directory under the upload root.
    pub fn dir(&self) -> &'static str {
        match self {
            ImageCategory::User => "users",
            ImageCategory::Post => "posts",
        }
    }
}

/// A file received from a client.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub original_name: Option<String>,
    pub data: Vec<u8>,
}

/// Result of a stored upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredUpload {
    pub file_name: String,
    pub url: String,
}

/// Build a stored file name: `<millis>-<random><.ext>`.
pub fn stored_file_name(original: Option<&str>, millis: i64, suffix: u32) -> String {
    let ext = original
        .and_then(|name| Path::new(name).extension())
        .and_then(|e| e.to_str())
        .filter(|e| !e.is_empty());

    match ext {
        Some(ext) => format!("{}-{}.{}", millis, suffix, ext),
        None => format!("{}-{}", millis, suffix),
    }
}
