use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CreateProductRequest {
    #[validate(length(min = 1, message = "Name, price, and imageUrl are required."))]
    pub name: String,

    pub seller: Option<String>,

    pub price: Decimal,

    #[serde(rename = "imageUrl")]
    #[validate(length(min = 1, message = "Name, price, and imageUrl are required."))]
    pub image_url: String,
}
