mod channel;
mod cloudwatch;
mod memory;

pub use channel::{AlarmBackend, BackendError};
pub use cloudwatch::CloudWatchBackend;
pub use memory::{InMemoryBackend, RegisteredAlarm};
