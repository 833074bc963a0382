//! # Quill Core
//!
//! The domain layer of the Quill blog backend.
//! Posts, upload naming, the service layer and the ports that infrastructure
//! implements. No database or filesystem code lives here.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::{PostService, UploadService};
