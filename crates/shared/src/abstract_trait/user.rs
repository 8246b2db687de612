use async_trait::async_trait;
use std::sync::Arc;

use crate::{domain::requests::CreateUserRequest, errors::RepositoryError, model::User};

pub type DynUserQueryRepository = Arc<dyn UserQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserQueryRepositoryTrait {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
}

pub type DynUserCommandRepository = Arc<dyn UserCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait UserCommandRepositoryTrait {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<User, RepositoryError>;
}
