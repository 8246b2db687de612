use crate::{
    abstract_trait::{DynProductCommandRepository, ProductCommandServiceTrait},
    domain::{requests::CreateProductRequest, responses::ProductResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct ProductCommandService {
    command: DynProductCommandRepository,
}

impl ProductCommandService {
    pub fn new(command: DynProductCommandRepository) -> Self {
        Self { command }
    }
}

#[async_trait]
impl ProductCommandServiceTrait for ProductCommandService {
    async fn create_product(
        &self,
        user_id: i32,
        req: &CreateProductRequest,
    ) -> Result<ProductResponse, ServiceError> {
        let product = self.command.create_product(user_id, req).await.map_err(|e| {
            error!("Error creating product: {e:?}");
            ServiceError::Repo(e)
        })?;

        info!(
            "Product created: {} (id {}) by user {user_id}",
            product.name, product.product_id
        );

        Ok(ProductResponse::from(product))
    }
}
