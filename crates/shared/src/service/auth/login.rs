use crate::{
    abstract_trait::{DynHashing, DynJwtService, DynUserQueryRepository, LoginServiceTrait},
    domain::{requests::LoginRequest, responses::TokenResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use tracing::{error, info};

pub struct LoginService {
    query: DynUserQueryRepository,
    hash: DynHashing,
    jwt: DynJwtService,
}

impl LoginService {
    pub fn new(query: DynUserQueryRepository, hash: DynHashing, jwt: DynJwtService) -> Self {
        Self { query, hash, jwt }
    }
}

#[async_trait]
impl LoginServiceTrait for LoginService {
    async fn login(&self, request: &LoginRequest) -> Result<TokenResponse, ServiceError> {
        let email = &request.email;

        info!("Attempting login for email: {email}");

        let user = match self.query.find_by_email(email).await {
            Ok(Some(user)) => user,
            Ok(None) => {
                // Same response as a bad password; no account probing.
                error!("User not found: {email}");
                return Err(ServiceError::InvalidCredentials);
            }
            Err(err) => {
                error!("Failed to query user: {err}");
                return Err(ServiceError::Repo(err));
            }
        };

        match self.hash.compare_password(&user.password, &request.password).await {
            Ok(()) => {}
            Err(ServiceError::InvalidCredentials) => {
                error!("Invalid password for user: {email}");
                return Err(ServiceError::InvalidCredentials);
            }
            Err(err) => {
                error!("Password verification failed: {err}");
                return Err(err);
            }
        }

        let token = match self.jwt.generate_token(user.user_id, &user.email) {
            Ok(token) => token,
            Err(e) => {
                error!("Failed to generate access token: {e:?}");
                return Err(e);
            }
        };

        info!("Login successful for email: {email}");

        Ok(TokenResponse {
            token,
            message: "Login successful!".to_string(),
        })
    }
}
