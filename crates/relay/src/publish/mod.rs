mod sns;

pub use sns::SnsPublisher;

#[async_trait::async_trait]
pub trait ReportPublisher: Send + Sync {
    fn name(&self) -> &str;

    /// Publishes `payload` tagged with the relay marker; returns the message id.
    async fn publish(&self, payload: &str) -> Result<String, PublishError>;
}

#[derive(Debug)]
pub struct PublishError(pub String);

impl std::fmt::Display for PublishError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "publish: {}", self.0)
    }
}

impl std::error::Error for PublishError {}
