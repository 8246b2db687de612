use crate::model::Product;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct ProductResponse {
    pub id: i32,
    pub name: String,
    pub seller: Option<String>,
    pub price: Decimal,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub owner_user_id: i32,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
}

// model to response
impl From<Product> for ProductResponse {
    fn from(value: Product) -> Self {
        ProductResponse {
            id: value.product_id,
            name: value.name,
            seller: value.seller,
            price: value.price,
            image_url: value.image_url,
            owner_user_id: value.user_id,
            created_at: value.created_at.map(|dt| dt.to_string()),
        }
    }
}
