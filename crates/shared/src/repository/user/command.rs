use crate::{
    abstract_trait::UserCommandRepositoryTrait, config::ConnectionPool,
    domain::requests::CreateUserRequest, errors::RepositoryError, model::User as UserModel,
};
use async_trait::async_trait;

pub struct UserCommandRepository {
    db: ConnectionPool,
}

impl UserCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for UserCommandRepository {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<UserModel, RepositoryError> {
        let mut conn = self.db.acquire().await.map_err(RepositoryError::from)?;

        let user = sqlx::query_as::<_, UserModel>(
            r#"
            INSERT INTO users (email, password, created_at)
            VALUES ($1, $2, CURRENT_TIMESTAMP)
            RETURNING user_id, email, password, created_at
            "#,
        )
        .bind(&req.email)
        .bind(&req.password)
        .fetch_one(&mut *conn)
        .await
        .map_err(RepositoryError::from)?;

        Ok(user)
    }
}
