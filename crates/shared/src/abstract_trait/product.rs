use async_trait::async_trait;
use std::sync::Arc;

use crate::{
    domain::{requests::CreateProductRequest, responses::ProductResponse},
    errors::{RepositoryError, ServiceError},
    model::Product,
};

pub type DynProductQueryRepository = Arc<dyn ProductQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryRepositoryTrait {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, RepositoryError>;
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Product>, RepositoryError>;
}

pub type DynProductCommandRepository = Arc<dyn ProductCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandRepositoryTrait {
    async fn create_product(
        &self,
        user_id: i32,
        req: &CreateProductRequest,
    ) -> Result<Product, RepositoryError>;
}

pub type DynProductQueryService = Arc<dyn ProductQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductQueryServiceTrait {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError>;
    async fn find_by_id(&self, product_id: i32) -> Result<ProductResponse, ServiceError>;
    async fn find_by_user(&self, user_id: i32) -> Result<Vec<ProductResponse>, ServiceError>;
}

pub type DynProductCommandService = Arc<dyn ProductCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait ProductCommandServiceTrait {
    async fn create_product(
        &self,
        user_id: i32,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError>;
}
