use crate::{abstract_trait::JwtServiceTrait, errors::ServiceError};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

const TOKEN_TTL_MINUTES: i64 = 60;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i32,
    pub email: String,
    pub exp: usize,
    pub iat: usize,
}

impl Claims {
    pub fn new(user_id: i32, email: String, exp: usize, iat: usize) -> Self {
        Claims {
            user_id,
            email,
            exp,
            iat,
        }
    }
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    jwt_secret: String,
}

impl JwtConfig {
    pub fn new(jwt_secret: &str) -> Self {
        JwtConfig {
            jwt_secret: jwt_secret.to_string(),
        }
    }
}

impl JwtServiceTrait for JwtConfig {
    fn generate_token(&self, user_id: i32, email: &str) -> Result<String, ServiceError> {
        let now = Utc::now();
        let iat = now.timestamp() as usize;
        let exp = (now + Duration::minutes(TOKEN_TTL_MINUTES)).timestamp() as usize;

        let claims = Claims::new(user_id, email.to_string(), exp, iat);

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )
        .map_err(ServiceError::Jwt)
    }

    fn verify_token(&self, token: &str) -> Result<i32, ServiceError> {
        let decoding_key = DecodingKey::from_secret(self.jwt_secret.as_ref());
        let token_data =
            decode::<Claims>(token, &decoding_key, &Validation::default()).map_err(|err| {
                match err.kind() {
                    ErrorKind::ExpiredSignature => ServiceError::TokenExpired,
                    _ => ServiceError::Jwt(err),
                }
            })?;

        Ok(token_data.claims.user_id)
    }
}
