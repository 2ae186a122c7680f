pub mod domain_arn;
pub mod relay_env;
pub mod retry;
pub mod signal;

pub use domain_arn::{ArnError, DomainArn};
pub use retry::{retry_linear, LinearRetry, RetryOutcome};
