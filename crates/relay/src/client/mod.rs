mod sigv4;

pub use sigv4::SigV4Client;

/// Read-only access to the cluster's HTTP API.
#[async_trait::async_trait]
pub trait ClusterClient: Send + Sync {
    fn endpoint(&self) -> &str;

    /// GET `https://<endpoint>/<path>`, returning the response body on 2xx.
    async fn get(&self, path: &str) -> Result<String, QueryError>;
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum QueryError {
    #[error("cluster returned {code}: {body}")]
    Status { code: u16, body: String },
    #[error("transport: {0}")]
    Transport(String),
    #[error("request timed out")]
    Timeout,
    #[error("signing: {0}")]
    Signing(String),
}

pub fn request_url(endpoint: &str, path: &str) -> String {
    format!("https://{}/{}", endpoint, path.trim_start_matches('/'))
}
