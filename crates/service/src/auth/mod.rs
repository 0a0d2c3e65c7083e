//! Auth module: three-layer architecture (domain, repository, service).
//!
//! The portal has a single administrator account taken from configuration;
//! a successful login yields a signed, expiring bearer token.

pub mod domain;
pub mod errors;
pub mod repository;
pub mod service;

pub use repository::{CredentialStore, StaticCredentialStore};
pub use service::{AuthService, AuthSettings};
