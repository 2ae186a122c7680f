use std::collections::HashMap;

use serde::Deserialize;

use searchwatch_common::signal::RELAY_MARKER_ATTRIBUTE;

/// SNS delivery as handed to the function by the Lambda runtime.
#[derive(Debug, Clone, Deserialize)]
pub struct SnsEnvelope {
    #[serde(rename = "Records", default)]
    pub records: Vec<SnsRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnsRecord {
    #[serde(rename = "Sns")]
    pub sns: SnsEntity,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SnsEntity {
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "MessageAttributes", default)]
    pub message_attributes: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct AlarmMessage {
    #[serde(rename = "AlarmName")]
    alarm_name: Option<String>,
    #[serde(rename = "Trigger")]
    trigger: Trigger,
}

#[derive(Debug, Deserialize)]
struct Trigger {
    #[serde(rename = "MetricName")]
    metric_name: String,
    #[serde(rename = "Dimensions", default)]
    dimensions: Vec<TriggerDimension>,
}

#[derive(Debug, Deserialize)]
struct TriggerDimension {
    name: String,
    value: String,
}

#[derive(Debug, thiserror::Error)]
pub enum EnvelopeError {
    #[error("delivery contains no records")]
    NoRecords,
    #[error("alarm message is not valid alarm JSON: {0}")]
    Message(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlarmEvent {
    Breach {
        signal_name: String,
        alarm_name: Option<String>,
        domain_name: Option<String>,
    },
    /// The relay's own diagnostic report, delivered back through a topic it
    /// is subscribed to.
    RelayRepublish,
}

impl AlarmEvent {
    pub fn from_envelope(envelope: &SnsEnvelope) -> Result<Self, EnvelopeError> {
        let record = envelope.records.first().ok_or(EnvelopeError::NoRecords)?;

        // Checked before the body is parsed: relay output is not alarm JSON.
        if record.sns.message_attributes.contains_key(RELAY_MARKER_ATTRIBUTE) {
            return Ok(Self::RelayRepublish);
        }

        let message: AlarmMessage = serde_json::from_str(&record.sns.message)?;
        let domain_name = message
            .trigger
            .dimensions
            .iter()
            .find(|d| d.name == "DomainName")
            .map(|d| d.value.clone());

        Ok(Self::Breach {
            signal_name: message.trigger.metric_name,
            alarm_name: message.alarm_name,
            domain_name,
        })
    }

    pub fn is_relay_republish(&self) -> bool {
        matches!(self, Self::RelayRepublish)
    }
}
