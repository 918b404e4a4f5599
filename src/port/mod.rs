mod repository;
mod use_case;
mod validator;

pub use repository::*;
pub use use_case::*;
pub use validator::*;
