use crate::di::DependenciesInject;
use shared::{
    abstract_trait::{DynHashing, DynJwtService},
    config::{Config, ConnectionPool, Hashing, JwtConfig},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
    pub jwt_config: DynJwtService,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("di_container", &self.di_container)
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool, config: &Config) -> Self {
        let jwt_config = Arc::new(JwtConfig::new(&config.jwt_secret)) as DynJwtService;
        let hashing = Arc::new(Hashing::new()) as DynHashing;

        let di_container = DependenciesInject::new(pool, hashing, jwt_config.clone());

        Self {
            di_container,
            jwt_config,
        }
    }
}
