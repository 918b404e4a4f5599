mod repository;
mod request;
mod validator;

pub use repository::*;
pub use request::*;
pub use validator::*;
