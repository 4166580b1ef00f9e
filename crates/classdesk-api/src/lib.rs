pub mod auth;
pub mod client;
pub mod error;

pub use client::{ADMIN_TOKEN_HEADER, ApiClient};
pub use error::ApiError;
