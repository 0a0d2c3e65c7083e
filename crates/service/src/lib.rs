//! Service layer providing business-oriented CRUD operations on top of models.
//! - Separates business logic from data access.
//! - Reuses validation and entity definitions in `models` crate.
//! - Provides clear error types and documented interfaces.

pub mod auth;
pub mod content;
pub mod errors;
pub mod pagination;
#[cfg(test)]
pub mod test_support;

pub use content::{ContentResource, ContentService, DeletePolicy};
pub use errors::ServiceError;
pub use pagination::Pagination;
