//! Middleware modules.

pub mod cors;
pub mod error;
pub mod request_id;
