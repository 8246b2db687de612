use crate::{
    abstract_trait::ProductQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::Product as ProductModel,
};
use async_trait::async_trait;

pub struct ProductQueryRepository {
    db: ConnectionPool,
}

impl ProductQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for ProductQueryRepository {
    async fn find_all(&self) -> Result<Vec<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT product_id, name, seller, price, image_url, user_id, created_at
            FROM products
            "#,
        )
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(products)
    }

    async fn find_by_id(&self, product_id: i32) -> Result<Option<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let product = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT product_id, name, seller, price, image_url, user_id, created_at
            FROM products
            WHERE product_id = $1
            "#,
        )
        .bind(product_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(product)
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<ProductModel>, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let products = sqlx::query_as::<_, ProductModel>(
            r#"
            SELECT product_id, name, seller, price, image_url, user_id, created_at
            FROM products
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_all(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(products)
    }
}
