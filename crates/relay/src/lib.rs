pub mod client;
pub mod config;
pub mod event;
pub mod handler;
pub mod publish;
pub mod queries;
pub mod report;

pub use config::RelayConfig;
pub use event::{AlarmEvent, SnsEnvelope};
pub use handler::{DiagnosticRelay, RelayOutcome};
