#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, header},
};
use chrono::Utc;
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header};
use serde_json::Value;
use server::{di::DependenciesInject, handler::AppRouter, state::AppState};
use shared::{
    abstract_trait::{
        DynHashing, DynJwtService, DynProductCommandRepository, DynProductQueryRepository,
        DynUserCommandRepository, DynUserQueryRepository, ProductCommandRepositoryTrait,
        ProductQueryRepositoryTrait, UserCommandRepositoryTrait, UserQueryRepositoryTrait,
    },
    config::{Claims, Hashing, JwtConfig},
    domain::requests::{CreateProductRequest, CreateUserRequest},
    errors::RepositoryError,
    model::{Product, User},
    service::{LoginService, ProductCommandService, ProductQueryService, RegisterService},
};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

#[derive(Default)]
pub struct MemoryUserRepository {
    users: Mutex<Vec<User>>,
}

impl MemoryUserRepository {
    pub fn count(&self) -> usize {
        self.users.lock().unwrap().len()
    }
}

#[async_trait]
impl UserQueryRepositoryTrait for MemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl UserCommandRepositoryTrait for MemoryUserRepository {
    async fn create_user(&self, req: &CreateUserRequest) -> Result<User, RepositoryError> {
        let mut users = self.users.lock().unwrap();

        // The unique index on email.
        if users.iter().any(|u| u.email == req.email) {
            return Err(RepositoryError::AlreadyExists(req.email.clone()));
        }

        let user = User {
            user_id: users.len() as i32 + 1,
            email: req.email.clone(),
            password: req.password.clone(),
            created_at: Some(Utc::now().naive_utc()),
        };
        users.push(user.clone());
        Ok(user)
    }
}

#[derive(Default)]
pub struct MemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

impl MemoryProductRepository {
    pub fn count(&self) -> usize {
        self.products.lock().unwrap().len()
    }
}

#[async_trait]
impl ProductQueryRepositoryTrait for MemoryProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.lock().unwrap().clone())
    }

    async fn find_by_id(&self, product_id: i32) -> Result<Option<Product>, RepositoryError> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.product_id == product_id).cloned())
    }

    async fn find_by_user(&self, user_id: i32) -> Result<Vec<Product>, RepositoryError> {
        let products = self.products.lock().unwrap();
        Ok(products
            .iter()
            .filter(|p| p.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MemoryProductRepository {
    async fn create_product(
        &self,
        user_id: i32,
        req: &CreateProductRequest,
    ) -> Result<Product, RepositoryError> {
        let mut products = self.products.lock().unwrap();
        let product = Product {
            product_id: products.len() as i32 + 1,
            name: req.name.clone(),
            seller: req.seller.clone(),
            price: req.price,
            image_url: req.image_url.clone(),
            user_id,
            created_at: Some(Utc::now().naive_utc()),
        };
        products.push(product.clone());
        Ok(product)
    }
}

pub struct FailingProductRepository;

#[async_trait]
impl ProductQueryRepositoryTrait for FailingProductRepository {
    async fn find_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Err(RepositoryError::Custom("storage offline".to_string()))
    }

    async fn find_by_id(&self, _product_id: i32) -> Result<Option<Product>, RepositoryError> {
        Err(RepositoryError::Custom("storage offline".to_string()))
    }

    async fn find_by_user(&self, _user_id: i32) -> Result<Vec<Product>, RepositoryError> {
        Err(RepositoryError::Custom("storage offline".to_string()))
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for FailingProductRepository {
    async fn create_product(
        &self,
        _user_id: i32,
        _req: &CreateProductRequest,
    ) -> Result<Product, RepositoryError> {
        Err(RepositoryError::Custom("storage offline".to_string()))
    }
}

pub struct TestApp {
    pub router: Router,
    pub users: Arc<MemoryUserRepository>,
    pub products: Arc<MemoryProductRepository>,
}

fn build_router(
    user_query: DynUserQueryRepository,
    user_command: DynUserCommandRepository,
    product_query: DynProductQueryRepository,
    product_command: DynProductCommandRepository,
) -> Router {
    let hashing: DynHashing = Arc::new(Hashing::new());
    let jwt_config: DynJwtService = Arc::new(JwtConfig::new(TEST_JWT_SECRET));

    let di_container = DependenciesInject {
        register_service: Arc::new(RegisterService::new(
            user_query.clone(),
            user_command,
            hashing.clone(),
        )),
        login_service: Arc::new(LoginService::new(user_query, hashing, jwt_config.clone())),
        product_query_service: Arc::new(ProductQueryService::new(product_query)),
        product_command_service: Arc::new(ProductCommandService::new(product_command)),
    };

    let state = AppState {
        di_container,
        jwt_config,
    };

    AppRouter::build(Arc::new(state))
}

pub fn test_app() -> TestApp {
    let users = Arc::new(MemoryUserRepository::default());
    let products = Arc::new(MemoryProductRepository::default());

    let router = build_router(
        users.clone(),
        users.clone(),
        products.clone(),
        products.clone(),
    );

    TestApp {
        router,
        users,
        products,
    }
}

pub fn failing_products_app() -> Router {
    let users = Arc::new(MemoryUserRepository::default());
    let failing = Arc::new(FailingProductRepository);

    build_router(users.clone(), users, failing.clone(), failing)
}

pub async fn send_json(router: &Router, method: &str, uri: &str, body: Value) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    router.clone().oneshot(request).await.unwrap()
}

pub async fn send_json_with_token(
    router: &Router,
    method: &str,
    uri: &str,
    token: &str,
    body: Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();

    router.clone().oneshot(request).await.unwrap()
}

pub async fn get(router: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn get_with_token(router: &Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    router.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn register(router: &Router, email: &str, password: &str) -> Value {
    let response = send_json(
        router,
        "POST",
        "/api/register",
        serde_json::json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status(), 201);
    body_json(response).await
}

pub async fn login_token(router: &Router, email: &str, password: &str) -> String {
    let response = send_json(
        router,
        "POST",
        "/api/login",
        serde_json::json!({ "email": email, "password": password }),
    )
    .await;
    assert_eq!(response.status(), 200);
    body_json(response).await["token"].as_str().unwrap().to_string()
}

pub fn expired_token(user_id: i32, email: &str) -> String {
    let now = Utc::now();
    let claims = Claims::new(
        user_id,
        email.to_string(),
        (now - chrono::Duration::hours(2)).timestamp() as usize,
        (now - chrono::Duration::hours(3)).timestamp() as usize,
    );

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_ref()),
    )
    .unwrap()
}
