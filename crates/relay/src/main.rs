use aws_config::{BehaviorVersion, Region};
use lambda_runtime::{service_fn, Error, LambdaEvent};
use searchwatch_relay::client::SigV4Client;
use searchwatch_relay::publish::SnsPublisher;
use searchwatch_relay::{DiagnosticRelay, RelayConfig, RelayOutcome, SnsEnvelope};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .without_time()
        .init();

    let config = RelayConfig::from_env()?;
    tracing::info!(
        endpoint = %config.endpoint,
        domain = config.domain_arn.domain_name(),
        output_topic = config.output_topic_arn.as_deref().unwrap_or("-"),
        "relay configured"
    );

    let region = config.domain_arn.region().to_string();
    let sdk = aws_config::defaults(BehaviorVersion::latest())
        .region(Region::new(region.clone()))
        .load()
        .await;

    let client = SigV4Client::new(&sdk, config.endpoint.clone(), region, config.query_timeout)?;
    let publisher = config
        .output_topic_arn
        .clone()
        .map(|topic| SnsPublisher::new(aws_sdk_sns::Client::new(&sdk), topic));

    let relay = DiagnosticRelay::new(client, publisher).with_retry(config.query_retry, config.publish_retry);
    let relay = &relay;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<SnsEnvelope>| async move {
        let outcome = relay.handle_envelope(&event.payload).await?;
        let summary = match outcome {
            RelayOutcome::Skipped => "skipped".to_string(),
            RelayOutcome::UnknownSignal(signal) => format!("unknown signal {signal}"),
            RelayOutcome::Completed { report, published } => format!(
                "{} queries, {} failed, published: {}",
                report.results.len(),
                report.failed(),
                published.is_some()
            ),
        };
        Ok::<_, Error>(summary)
    }))
    .await
}
