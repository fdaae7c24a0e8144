//! # Quill Core
//!
//! The domain layer of the Quill blog backend.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the document renderer, the draft/publish state machine, and the ports the
//! infrastructure must implement.

pub mod domain;
pub mod error;
pub mod ports;
pub mod render;
pub mod service;
pub mod validation;

pub use error::DomainError;
