pub mod alarm;
pub mod backend;
pub mod config;
pub mod error;
pub mod provision;
pub mod relay_plan;
pub mod snapshot;

pub use error::ProvisionError;
pub use provision::{plan, provision, ProvisionReport};
