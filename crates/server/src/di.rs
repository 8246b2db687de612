use shared::{
    abstract_trait::{
        DynHashing, DynJwtService, DynLoginService, DynProductCommandRepository,
        DynProductCommandService, DynProductQueryRepository, DynProductQueryService,
        DynRegisterService, DynUserCommandRepository, DynUserQueryRepository,
    },
    config::ConnectionPool,
    repository::{
        ProductCommandRepository, ProductQueryRepository, UserCommandRepository,
        UserQueryRepository,
    },
    service::{LoginService, ProductCommandService, ProductQueryService, RegisterService},
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct DependenciesInject {
    pub register_service: DynRegisterService,
    pub login_service: DynLoginService,
    pub product_query_service: DynProductQueryService,
    pub product_command_service: DynProductCommandService,
}

impl fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("register_service", &"RegisterService")
            .field("login_service", &"LoginService")
            .field("product_query_service", &"ProductQueryService")
            .field("product_command_service", &"ProductCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(pool: ConnectionPool, hash: DynHashing, jwt_config: DynJwtService) -> Self {
        let user_query =
            Arc::new(UserQueryRepository::new(pool.clone())) as DynUserQueryRepository;
        let user_command =
            Arc::new(UserCommandRepository::new(pool.clone())) as DynUserCommandRepository;
        let product_query =
            Arc::new(ProductQueryRepository::new(pool.clone())) as DynProductQueryRepository;
        let product_command =
            Arc::new(ProductCommandRepository::new(pool)) as DynProductCommandRepository;

        let register_service = Arc::new(RegisterService::new(
            user_query.clone(),
            user_command,
            hash.clone(),
        )) as DynRegisterService;

        let login_service =
            Arc::new(LoginService::new(user_query, hash, jwt_config)) as DynLoginService;

        let product_query_service =
            Arc::new(ProductQueryService::new(product_query)) as DynProductQueryService;

        let product_command_service =
            Arc::new(ProductCommandService::new(product_command)) as DynProductCommandService;

        Self {
            register_service,
            login_service,
            product_query_service,
            product_command_service,
        }
    }
}
