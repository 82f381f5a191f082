//! Shared types for the GitOps demo service.

pub mod types;

pub use types::AppVersion;
