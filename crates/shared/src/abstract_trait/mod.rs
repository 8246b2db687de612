mod auth;
mod hashing;
mod jwt;
mod product;
mod user;

pub use self::auth::{
    DynLoginService, DynRegisterService, LoginServiceTrait, RegisterServiceTrait,
};
pub use self::hashing::{DynHashing, HashingTrait};
pub use self::jwt::{DynJwtService, JwtServiceTrait};
pub use self::product::{
    DynProductCommandRepository, DynProductCommandService, DynProductQueryRepository,
    DynProductQueryService, ProductCommandRepositoryTrait, ProductCommandServiceTrait,
    ProductQueryRepositoryTrait, ProductQueryServiceTrait,
};
pub use self::user::{
    DynUserCommandRepository, DynUserQueryRepository, UserCommandRepositoryTrait,
    UserQueryRepositoryTrait,
};
