use aws_config::SdkConfig;
use aws_sdk_cloudwatch::error::DisplayErrorContext;
use aws_sdk_cloudwatch::types::{ComparisonOperator, Dimension, Statistic as CwStatistic};

use searchwatch_common::{signal, DomainArn};

use super::channel::{AlarmBackend, BackendError};
use crate::alarm::{AlarmSpec, Comparison, Statistic};

/// CloudWatch `PutMetricAlarm`, which replaces an existing alarm of the same
/// name, so re-running provisioning updates alarms instead of duplicating them.
pub struct CloudWatchBackend {
    client: aws_sdk_cloudwatch::Client,
}

impl CloudWatchBackend {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_cloudwatch::Client::new(config),
        }
    }
}

#[async_trait::async_trait]
impl AlarmBackend for CloudWatchBackend {
    fn name(&self) -> &str {
        "cloudwatch"
    }

    async fn put_alarm(&self, domain: &DomainArn, spec: &AlarmSpec) -> Result<(), BackendError> {
        let alarm_name = spec.alarm_name(domain.domain_name());

        let dimensions = [
            ("DomainName", domain.domain_name()),
            ("ClientId", domain.account()),
        ]
        .into_iter()
        .map(|(name, value)| {
            Ok::<_, BackendError>(Dimension::builder().name(name).value(value).build())
        })
        .collect::<Result<Vec<_>, _>>()?;

        let actions = (!spec.notification_targets.is_empty())
            .then(|| spec.notification_targets.clone());

        self.client
            .put_metric_alarm()
            .alarm_name(&alarm_name)
            .alarm_description(format!(
                "{} {} {} on domain {}",
                spec.signal_name,
                spec.comparison.as_symbol(),
                spec.threshold,
                domain.domain_name()
            ))
            .namespace(signal::NAMESPACE)
            .metric_name(&spec.signal_name)
            .set_dimensions(Some(dimensions))
            .threshold(spec.threshold)
            .comparison_operator(comparison_operator(spec.comparison))
            .period(spec.period_seconds() as i32)
            .evaluation_periods(spec.evaluation_periods as i32)
            .statistic(statistic(spec.statistic))
            .treat_missing_data(spec.missing_data.wire_name())
            .set_alarm_actions(actions)
            .send()
            .await
            .map_err(|e| BackendError(DisplayErrorContext(&e).to_string()))?;

        tracing::info!(alarm = %alarm_name, "alarm registered");
        Ok(())
    }
}

fn comparison_operator(comparison: Comparison) -> ComparisonOperator {
    match comparison {
        Comparison::GreaterOrEqual => ComparisonOperator::GreaterThanOrEqualToThreshold,
        Comparison::LessOrEqual => ComparisonOperator::LessThanOrEqualToThreshold,
        Comparison::LessThan => ComparisonOperator::LessThanThreshold,
    }
}

fn statistic(statistic: Statistic) -> CwStatistic {
    match statistic {
        Statistic::Maximum => CwStatistic::Maximum,
        Statistic::Minimum => CwStatistic::Minimum,
        Statistic::Average => CwStatistic::Average,
    }
}
