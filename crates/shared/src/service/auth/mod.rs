mod login;
mod register;

pub use self::login::LoginService;
pub use self::register::RegisterService;
