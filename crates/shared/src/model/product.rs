use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub product_id: i32,
    pub name: String,
    pub seller: Option<String>,
    pub price: Decimal,
    pub image_url: String,
    pub user_id: i32,
    pub created_at: Option<NaiveDateTime>,
}
