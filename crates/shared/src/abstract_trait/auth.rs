use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{
        requests::{LoginRequest, RegisterRequest},
        responses::{TokenResponse, UserResponse},
    },
    errors::ServiceError,
};

pub type DynRegisterService = Arc<dyn RegisterServiceTrait + Send + Sync>;

#[async_trait]
pub trait RegisterServiceTrait {
    async fn register(&self, req: &RegisterRequest) -> Result<UserResponse, ServiceError>;
}

pub type DynLoginService = Arc<dyn LoginServiceTrait + Send + Sync>;

#[async_trait]
pub trait LoginServiceTrait {
    async fn login(&self, req: &LoginRequest) -> Result<TokenResponse, ServiceError>;
}
