mod address;
mod command;
mod customer;
mod error;
mod orchestrator;

pub use address::*;
pub use command::*;
pub use customer::*;
pub use error::*;
pub use orchestrator::*;
