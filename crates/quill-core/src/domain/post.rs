use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Image used when a draft does not carry one.
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/600x400?text=No+Image";

/// Reading speed used to derive `readTime`.
pub const WORDS_PER_MINUTE: usize = 200;

/// Embedded author value object. Not a reference to any user record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub img: String,
}

/// Like counter embedded in every post.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Like {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub isliked: bool,
}

/// Post entity - a published blog post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub image: String,
    pub category: String,
    pub title: String,
    pub description: String,
    pub author: Author,
    pub date: String,
    pub like: Like,
    pub read_time: String,
}

/// Client-supplied fields for a new post, before defaults are applied.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostDraft {
    pub image: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub author: Author,
    pub date: Option<String>,
    pub like: Option<Like>,
    pub read_time: Option<String>,
}

impl PostDraft {
    /// Apply creation defaults and produce the post to persist.
    ///
    /// Blank strings count as missing for `image`, `date` and `readTime`.
    pub fn normalize(self, id: Uuid, now: DateTime<Utc>) -> Post {
        let read_time = present(self.read_time).unwrap_or_else(|| read_time(&self.description));

        Post {
            id,
            image: present(self.image).unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            category: self.category,
            title: self.title,
            description: self.description,
            author: self.author,
            date: present(self.date).unwrap_or_else(|| iso_timestamp(now)),
            like: self.like.unwrap_or_default(),
            read_time,
        }
    }
}

/// Body of a full update. Fields left out keep their stored value.
///
/// `like.count` is never written through this path; only `like.isliked` is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostUpdate {
    pub image: Option<String>,
    pub category: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub author: Option<Author>,
    pub date: Option<String>,
    pub like: Option<Like>,
    pub read_time: Option<String>,
}

impl PostUpdate {
    pub fn apply_to(self, post: &mut Post) {
        if let Some(image) = self.image {
            post.image = image;
        }
        if let Some(category) = self.category {
            post.category = category;
        }
        if let Some(title) = self.title {
            post.title = title;
        }
        if let Some(description) = self.description {
            post.description = description;
        }
        if let Some(author) = self.author {
            post.author = author;
        }
        if let Some(date) = self.date {
            post.date = date;
        }
        if let Some(like) = self.like {
            post.like.isliked = like.isliked;
        }
        if let Some(read_time) = self.read_time {
            post.read_time = read_time;
        }
    }
}

/// Number of whitespace-separated words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Human reading time, e.g. `"3 min read"`. Never less than one minute.
pub fn read_time(description: &str) -> String {
    let text = if description.trim().is_empty() {
        "temp"
    } else {
        description
    };
    let minutes = word_count(text).div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{} min read", minutes)
}

fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
