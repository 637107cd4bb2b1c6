//! # Roster Core
//!
//! Core types, traits, and error definitions for Roster.
//! This crate provides the foundational abstractions used across all layers
//! of the service.

pub mod error;
pub mod id;
pub mod model;
pub mod result;
pub mod validation;

pub use error::*;
pub use id::*;
pub use model::*;
pub use result::*;
pub use validation::*;
