use searchwatch_common::{retry_linear, LinearRetry};

use crate::client::ClusterClient;
use crate::event::{AlarmEvent, EnvelopeError, SnsEnvelope};
use crate::publish::ReportPublisher;
use crate::queries::queries_for;
use crate::report::{DiagnosticReport, FailureKind, QueryOutcome, QueryResult};

#[derive(Debug, Clone, PartialEq)]
pub enum RelayOutcome {
    /// The delivery was the relay's own report coming back.
    Skipped,
    UnknownSignal(String),
    Completed {
        report: DiagnosticReport,
        /// Message id of the published report, when a publish succeeded.
        published: Option<String>,
    },
}

pub struct DiagnosticRelay<C, P> {
    client: C,
    publisher: Option<P>,
    query_retry: LinearRetry,
    publish_retry: LinearRetry,
}

impl<C: ClusterClient, P: ReportPublisher> DiagnosticRelay<C, P> {
    pub fn new(client: C, publisher: Option<P>) -> Self {
        Self {
            client,
            publisher,
            query_retry: LinearRetry::cluster_queries(),
            publish_retry: LinearRetry::publish(),
        }
    }

    pub fn with_retry(mut self, query_retry: LinearRetry, publish_retry: LinearRetry) -> Self {
        self.query_retry = query_retry;
        self.publish_retry = publish_retry;
        self
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn publisher(&self) -> Option<&P> {
        self.publisher.as_ref()
    }

    pub async fn handle_envelope(&self, envelope: &SnsEnvelope) -> Result<RelayOutcome, EnvelopeError> {
        let event = AlarmEvent::from_envelope(envelope)?;
        Ok(self.handle(&event).await)
    }

    pub async fn handle(&self, event: &AlarmEvent) -> RelayOutcome {
        let signal_name = match event {
            AlarmEvent::RelayRepublish => {
                tracing::info!("relay output delivered back to the relay, ignoring");
                return RelayOutcome::Skipped;
            }
            AlarmEvent::Breach {
                signal_name,
                alarm_name,
                domain_name,
            } => {
                tracing::info!(
                    signal = %signal_name,
                    alarm = alarm_name.as_deref().unwrap_or("-"),
                    domain = domain_name.as_deref().unwrap_or("-"),
                    "alarm received"
                );
                signal_name
            }
        };

        let Some(queries) = queries_for(signal_name) else {
            tracing::warn!(signal = %signal_name, "no diagnostics mapped for signal");
            return RelayOutcome::UnknownSignal(signal_name.clone());
        };

        let mut report = DiagnosticReport::default();
        for query in queries {
            report.push(self.run_query(signal_name, query).await);
        }

        tracing::info!(
            signal = %signal_name,
            queries = report.results.len(),
            failed = report.failed(),
            report = %report.to_json().unwrap_or_default(),
            "diagnostics collected"
        );

        let published = self.publish(&report).await;
        RelayOutcome::Completed { report, published }
    }

    async fn run_query(&self, signal_name: &str, query: &str) -> QueryResult {
        let outcome = retry_linear(&self.query_retry, |attempt| {
            tracing::debug!(query, attempt, "querying cluster");
            self.client.get(query)
        })
        .await;

        let result = match outcome.result {
            Ok(body) => QueryOutcome::Success { body },
            Err(err) => {
                tracing::error!(query, attempts = outcome.attempts, error = %err, "query failed");
                QueryOutcome::Failure {
                    kind: FailureKind::from(&err),
                    message: err.to_string(),
                }
            }
        };

        QueryResult {
            endpoint: self.client.endpoint().to_string(),
            signal_name: signal_name.to_string(),
            query: query.to_string(),
            attempts: outcome.attempts,
            outcome: result,
        }
    }

    async fn publish(&self, report: &DiagnosticReport) -> Option<String> {
        let publisher = self.publisher.as_ref()?;

        let payload = match report.to_json() {
            Ok(p) => p,
            Err(e) => {
                tracing::error!(error = %e, "report could not be serialized");
                return None;
            }
        };

        let outcome = retry_linear(&self.publish_retry, |_| publisher.publish(&payload)).await;
        match outcome.result {
            Ok(message_id) => {
                tracing::info!(publisher = publisher.name(), %message_id, "report published");
                Some(message_id)
            }
            Err(e) => {
                tracing::error!(
                    publisher = publisher.name(),
                    attempts = outcome.attempts,
                    error = %e,
                    "report publish failed"
                );
                None
            }
        }
    }
}
