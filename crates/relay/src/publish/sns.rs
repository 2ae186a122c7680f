use aws_sdk_sns::error::DisplayErrorContext;
use aws_sdk_sns::types::MessageAttributeValue;
use aws_sdk_sns::Client;

use searchwatch_common::signal::RELAY_MARKER_ATTRIBUTE;

use super::{PublishError, ReportPublisher};

pub struct SnsPublisher {
    topic_arn: String,
    client: Client,
}

impl SnsPublisher {
    pub fn new(client: Client, topic_arn: String) -> Self {
        Self { topic_arn, client }
    }
}

#[async_trait::async_trait]
impl ReportPublisher for SnsPublisher {
    fn name(&self) -> &str {
        "sns"
    }

    async fn publish(&self, payload: &str) -> Result<String, PublishError> {
        let marker = MessageAttributeValue::builder()
            .data_type("String")
            .string_value("true")
            .build()
            .map_err(|e| PublishError(e.to_string()))?;

        let output = self
            .client
            .publish()
            .topic_arn(&self.topic_arn)
            .message(payload)
            .message_attributes(RELAY_MARKER_ATTRIBUTE, marker)
            .send()
            .await
            .map_err(|e| with_context(&e))?;

        // A publish without an id is not confirmed by the service.
        output
            .message_id()
            .map(str::to_string)
            .ok_or_else(|| PublishError("response carried no message id".into()))
    }
}

/// The SDK's own `Display` stops at "service error"; the context walks the
/// source chain down to the service's message.
fn with_context<E: std::error::Error>(err: &E) -> PublishError {
    PublishError(DisplayErrorContext(err).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Outer(Inner);

    #[derive(Debug)]
    struct Inner;

    impl std::fmt::Display for Outer {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "service error")
        }
    }

    impl std::error::Error for Outer {
        fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
            Some(&self.0)
        }
    }

    impl std::fmt::Display for Inner {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "NotFound: Topic does not exist")
        }
    }

    impl std::error::Error for Inner {}

    #[test]
    fn publish_error_includes_source_chain() {
        let err = with_context(&Outer(Inner));
        let msg = err.to_string();
        assert!(msg.starts_with("publish: "));
        assert!(msg.contains("service error"));
        assert!(msg.contains("Topic does not exist"));
    }
}
