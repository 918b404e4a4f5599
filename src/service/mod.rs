mod address;
mod boot;
pub mod mock;
pub mod orchestrator;

pub use address::*;
pub use boot::*;
pub use orchestrator::Orchestrator;
