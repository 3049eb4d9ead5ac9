//! # Quill Core
//!
//! The domain layer of the quill blogging platform. Everything here is
//! plain business logic: entities, the access and validation rules around
//! posting, the listing engine, and the port traits infrastructure plugs
//! into. No HTTP, no SQL.

pub mod access;
pub mod domain;
pub mod error;
pub mod feed;
pub mod form;
pub mod pagination;
pub mod ports;

pub use error::DomainError;
