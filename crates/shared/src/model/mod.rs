mod product;
mod user;

pub use self::product::Product;
pub use self::user::User;
