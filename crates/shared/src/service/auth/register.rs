use crate::{
    abstract_trait::{
        DynHashing, DynUserCommandRepository, DynUserQueryRepository, RegisterServiceTrait,
    },
    domain::{
        requests::{CreateUserRequest, RegisterRequest},
        responses::UserResponse,
    },
    errors::{RepositoryError, ServiceError},
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct RegisterService {
    query: DynUserQueryRepository,
    command: DynUserCommandRepository,
    hash: DynHashing,
}

impl RegisterService {
    pub fn new(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        hash: DynHashing,
    ) -> Self {
        Self {
            query,
            command,
            hash,
        }
    }
}

#[async_trait]
impl RegisterServiceTrait for RegisterService {
    async fn register(&self, req: &RegisterRequest) -> Result<UserResponse, ServiceError> {
        info!("Starting user registration | Email: {}", req.email);

        let existing_user = match self.query.find_by_email(&req.email).await {
            Ok(user) => user,
            Err(e) => {
                error!("Failed to check email in DB: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        if existing_user.is_some() {
            error!("Email already taken | Email: {}", req.email);
            return Err(ServiceError::Repo(RepositoryError::AlreadyExists(
                req.email.clone(),
            )));
        }

        let hashed_password = self.hash.hash_password(&req.password).await?;

        let new_request = CreateUserRequest {
            email: req.email.clone(),
            password: hashed_password,
        };

        // The unique index on email still backs this up if two registrations race.
        let new_user = match self.command.create_user(&new_request).await {
            Ok(user) => user,
            Err(e) => {
                error!("Failed to create user: {e:?}");
                return Err(ServiceError::Repo(e));
            }
        };

        info!("User registered successfully: {}", new_user.email);

        Ok(UserResponse::from(new_user))
    }
}
