use serde::{Deserialize, Serialize};

use searchwatch_common::signal;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmSpec {
    pub signal_name: String,
    pub threshold: f64,
    pub comparison: Comparison,
    pub window_minutes: u32,
    pub evaluation_periods: u32,
    pub statistic: Statistic,
    pub missing_data: MissingDataPolicy,
    pub notification_targets: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Comparison {
    GreaterOrEqual,
    LessOrEqual,
    LessThan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Statistic {
    Maximum,
    Minimum,
    Average,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MissingDataPolicy {
    #[default]
    Missing,
    Breaching,
    NotBreaching,
    Ignore,
}

impl AlarmSpec {
    pub fn new(
        signal_name: &str,
        threshold: f64,
        comparison: Comparison,
        window_minutes: u32,
        evaluation_periods: u32,
        statistic: Statistic,
    ) -> Self {
        Self {
            signal_name: signal_name.to_string(),
            threshold,
            comparison,
            window_minutes,
            evaluation_periods,
            statistic,
            missing_data: MissingDataPolicy::default(),
            notification_targets: Vec::new(),
        }
    }

    pub fn with_missing_data(mut self, policy: MissingDataPolicy) -> Self {
        self.missing_data = policy;
        self
    }

    pub fn alarm_name(&self, domain_name: &str) -> String {
        signal::alarm_name(domain_name, &self.signal_name)
    }

    pub fn period_seconds(&self) -> u32 {
        self.window_minutes * 60
    }
}

impl Comparison {
    pub fn as_symbol(&self) -> &'static str {
        match self {
            Self::GreaterOrEqual => ">=",
            Self::LessOrEqual => "<=",
            Self::LessThan => "<",
        }
    }

    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::GreaterOrEqual => "GreaterThanOrEqualToThreshold",
            Self::LessOrEqual => "LessThanOrEqualToThreshold",
            Self::LessThan => "LessThanThreshold",
        }
    }
}

impl Statistic {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Maximum => "Maximum",
            Self::Minimum => "Minimum",
            Self::Average => "Average",
        }
    }
}

impl MissingDataPolicy {
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Breaching => "breaching",
            Self::NotBreaching => "notBreaching",
            Self::Ignore => "ignore",
        }
    }
}
