//! Application services - use cases built on top of the ports.

mod posts;
mod uploads;

pub use posts::{ALLOWED_LIKE_DELTAS, PostService};
pub use uploads::UploadService;
