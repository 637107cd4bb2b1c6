//! # Roster Service
//!
//! Business logic service layer for Roster.
//! Coordinates cache lookups, database reads/writes, and cache invalidation
//! for user records.

pub mod cache;
pub mod dto;
pub mod health_service;
pub mod user_service;

pub use cache::*;
pub use dto::*;
pub use health_service::*;
pub use user_service::*;
