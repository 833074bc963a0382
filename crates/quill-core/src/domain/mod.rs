//! Domain entities - the core business objects.

mod post;

mod upload;

pub use post::{
    Author, Like, PLACEHOLDER_IMAGE, Post, PostDraft, PostUpdate, WORDS_PER_MINUTE, read_time,
    word_count,
};
pub use upload::{ImageCategory, IncomingFile, StoredUpload, stored_file_name};
