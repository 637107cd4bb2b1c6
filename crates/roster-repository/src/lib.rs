//! # Roster Repository
//!
//! PostgreSQL persistence layer for Roster.
//! Provides the user repository and database pool management.

pub mod pool;
pub mod postgres;
pub mod traits;

pub use pool::*;
pub use postgres::*;
pub use traits::*;
