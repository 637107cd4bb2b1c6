//! Caching infrastructure for the service layer.
//!
//! This module provides a cache abstraction with a Redis implementation.
//! Cached values are derived snapshots of persistence-layer query results:
//! short-lived, invalidated on writes, and never authoritative.

mod cache_interface;
pub mod cache_keys;
mod redis_cache;

pub use cache_interface::{CacheExt, CacheInterface};
pub use redis_cache::{RedisCacheService, RedisCacheServiceParameters, LIST_TTL, USER_TTL};
