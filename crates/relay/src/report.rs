use serde::{Deserialize, Serialize};

use crate::client::QueryError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "code")]
pub enum FailureKind {
    Status(u16),
    Transport,
    Timeout,
    Signing,
}

impl From<&QueryError> for FailureKind {
    fn from(err: &QueryError) -> Self {
        match err {
            QueryError::Status { code, .. } => Self::Status(*code),
            QueryError::Transport(_) => Self::Transport,
            QueryError::Timeout => Self::Timeout,
            QueryError::Signing(_) => Self::Signing,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryOutcome {
    Success { body: String },
    Failure { kind: FailureKind, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub endpoint: String,
    pub signal_name: String,
    pub query: String,
    pub attempts: u32,
    #[serde(flatten)]
    pub outcome: QueryOutcome,
}

impl QueryResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, QueryOutcome::Success { .. })
    }
}

/// Results in the order the queries were issued.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticReport {
    pub results: Vec<QueryResult>,
}

impl DiagnosticReport {
    pub fn push(&mut self, result: QueryResult) {
        self.results.push(result);
    }

    pub fn failed(&self) -> usize {
        self.results.iter().filter(|r| !r.is_success()).count()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
