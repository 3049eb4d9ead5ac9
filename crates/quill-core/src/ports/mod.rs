//! Ports - trait definitions for external dependencies.
//!
//! These are the interfaces infrastructure must implement. The domain layer
//! only ever talks to storage and auth through them.

mod auth;
mod repository;

pub use auth::{AuthError, PasswordService, TokenClaims, TokenService};
pub use repository::{GroupRepository, PostFilter, PostRepository, UserRepository};
