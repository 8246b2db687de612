use crate::{
    abstract_trait::ProductCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateProductRequest, errors::RepositoryError,
    model::Product as ProductModel,
};
use async_trait::async_trait;

pub struct ProductCommandRepository {
    db: ConnectionPool,
}

impl ProductCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for ProductCommandRepository {
    async fn create_product(
        &self,
        user_id: i32,
        req: &CreateProductRequest,
    ) -> Result<ProductModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            INSERT INTO products (name, seller, price, image_url, user_id, created_at)
            VALUES ($1, $2, $3, $4, $5, CURRENT_TIMESTAMP)
            RETURNING product_id, name, seller, price, image_url, user_id, created_at
            "#,
        )
        .bind(&req.name)
        .bind(&req.seller)
        .bind(req.price)
        .bind(&req.image_url)
        .bind(user_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(product)
    }
}
