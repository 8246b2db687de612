use crate::{
    abstract_trait::{DynProductQueryRepository, ProductQueryServiceTrait},
    domain::responses::ProductResponse,
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::error;

pub struct ProductQueryService {
    query: DynProductQueryRepository,
}

impl ProductQueryService {
    pub fn new(query: DynProductQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl ProductQueryServiceTrait for ProductQueryService {
    async fn find_all(&self) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.query.find_all().await.map_err(|e| {
            error!("Error fetching products: {e:?}");
            ServiceError::Repo(e)
        })?;

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    async fn find_by_id(&self, product_id: i32) -> Result<ProductResponse, ServiceError> {
        let product = self.query.find_by_id(product_id).await.map_err(|e| {
            error!("Error fetching product with id {product_id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        match product {
            Some(product) => Ok(ProductResponse::from(product)),
            None => Err(ServiceError::Repo(RepositoryError::NotFound)),
        }
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<ProductResponse>, ServiceError> {
        let products = self.query.find_by_user(user_id).await.map_err(|e| {
            error!("Error fetching products for user {user_id}: {e:?}");
            ServiceError::Repo(e)
        })?;

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }
}
