//! Foundation types shared by every domain module.

mod errors;

pub use errors::{DomainError, ErrorCode};
