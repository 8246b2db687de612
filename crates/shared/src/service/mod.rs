mod auth;
mod product;

pub use self::auth::{LoginService, RegisterService};
pub use self::product::{ProductCommandService, ProductQueryService};
