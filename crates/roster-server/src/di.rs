//! Dependency injection module using Shaku.
//!
//! Wires the database pool, repository, cache, and business services into a
//! single module built once at startup.

use roster_config::{DatabaseConfig, RedisConfig};
use roster_core::{RosterError, RosterResult};
use roster_repository::{
    DatabasePool, DatabasePoolInterface, DatabasePoolParameters, PgUserRepository,
};
use roster_service::{
    HealthService, HealthServiceComponent, RedisCacheService, RedisCacheServiceParameters,
    UserService, UserServiceComponent,
};
use shaku::{module, HasComponent};
use std::sync::Arc;

module! {
    pub AppModule {
        components = [
            DatabasePool,
            PgUserRepository,
            RedisCacheService,
            UserServiceComponent,
            HealthServiceComponent,
        ],
        providers = [],
    }
}

/// Builds the application module with all dependencies.
pub async fn build_module(
    db_config: &DatabaseConfig,
    redis_config: &RedisConfig,
) -> RosterResult<Arc<AppModule>> {
    // Create database pool (async operation)
    let db_pool = DatabasePool::connect(db_config).await?;

    // Create Redis cache pool (if enabled)
    let cache_pool = if redis_config.enabled {
        let mut redis_cfg = deadpool_redis::Config::from_url(&redis_config.url);
        redis_cfg.pool = Some(deadpool_redis::PoolConfig::new(
            redis_config.pool_size as usize,
        ));
        let pool = redis_cfg
            .create_pool(Some(deadpool_redis::Runtime::Tokio1))
            .map_err(|e| RosterError::Cache(format!("Failed to create Redis pool: {}", e)))?;
        Some(Arc::new(pool))
    } else {
        None
    };

    let module = AppModule::builder()
        .with_component_parameters::<DatabasePool>(DatabasePoolParameters {
            pool: db_pool.inner().clone(),
        })
        .with_component_parameters::<RedisCacheService>(RedisCacheServiceParameters {
            pool: cache_pool,
        })
        .build();

    Ok(Arc::new(module))
}

/// Trait for resolving common services from the module.
pub trait ServiceResolver {
    /// Resolves the user service from the module.
    fn user_service(&self) -> Arc<dyn UserService>;

    /// Resolves the health service from the module.
    fn health_service(&self) -> Arc<dyn HealthService>;

    /// Resolves the database pool from the module.
    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface>;
}

impl ServiceResolver for AppModule {
    fn user_service(&self) -> Arc<dyn UserService> {
        self.resolve()
    }

    fn health_service(&self) -> Arc<dyn HealthService> {
        self.resolve()
    }

    fn database_pool(&self) -> Arc<dyn DatabasePoolInterface> {
        self.resolve()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_repository::UserRepository;
    use roster_service::CacheInterface;

    #[test]
    fn test_module_provides_all_components() {
        // Compile-time verification that the module wires every interface
        fn _assert_has_user_service<T: HasComponent<dyn UserService>>() {}
        fn _assert_has_health_service<T: HasComponent<dyn HealthService>>() {}
        fn _assert_has_user_repository<T: HasComponent<dyn UserRepository>>() {}
        fn _assert_has_database_pool<T: HasComponent<dyn DatabasePoolInterface>>() {}
        fn _assert_has_cache<T: HasComponent<dyn CacheInterface>>() {}

        _assert_has_user_service::<AppModule>();
        _assert_has_health_service::<AppModule>();
        _assert_has_user_repository::<AppModule>();
        _assert_has_database_pool::<AppModule>();
        _assert_has_cache::<AppModule>();
    }

    #[test]
    fn test_resolver_trait_is_object_safe() {
        fn _use_service_resolver(_r: &dyn ServiceResolver) {}
    }
}
