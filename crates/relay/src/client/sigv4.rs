use std::time::{Duration, SystemTime};

use aws_config::SdkConfig;
use aws_credential_types::provider::{ProvideCredentials, SharedCredentialsProvider};
use aws_sigv4::http_request::{sign, SignableBody, SignableRequest, SigningSettings};
use aws_sigv4::sign::v4;
use reqwest::Client;

use super::{request_url, ClusterClient, QueryError};

const SERVICE: &str = "es";

/// Issues SigV4-signed GETs using the function's execution role.
pub struct SigV4Client {
    endpoint: String,
    region: String,
    credentials: SharedCredentialsProvider,
    client: Client,
}

impl SigV4Client {
    pub fn new(sdk: &SdkConfig, endpoint: String, region: String, timeout: Duration) -> Result<Self, QueryError> {
        let credentials = sdk
            .credentials_provider()
            .ok_or_else(|| QueryError::Signing("no credentials provider configured".into()))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| QueryError::Transport(e.to_string()))?;

        Ok(Self {
            endpoint,
            region,
            credentials,
            client,
        })
    }

    async fn signed_headers(&self, url: &str) -> Result<Vec<(String, String)>, QueryError> {
        let credentials = self
            .credentials
            .provide_credentials()
            .await
            .map_err(|e| QueryError::Signing(e.to_string()))?;
        let identity = credentials.into();

        let params = v4::SigningParams::builder()
            .identity(&identity)
            .region(&self.region)
            .name(SERVICE)
            .time(SystemTime::now())
            .settings(SigningSettings::default())
            .build()
            .map_err(|e| QueryError::Signing(e.to_string()))?
            .into();

        let host = [("host", self.endpoint.as_str())];
        let request = SignableRequest::new("GET", url, host.into_iter(), SignableBody::Bytes(&[]))
            .map_err(|e| QueryError::Signing(e.to_string()))?;

        let (instructions, _signature) = sign(request, &params)
            .map_err(|e| QueryError::Signing(e.to_string()))?
            .into_parts();

        Ok(instructions
            .headers()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect())
    }
}

#[async_trait::async_trait]
impl ClusterClient for SigV4Client {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn get(&self, path: &str) -> Result<String, QueryError> {
        let url = request_url(&self.endpoint, path);
        let headers = self.signed_headers(&url).await?;

        let mut request = self.client.get(&url);
        for (name, value) in headers {
            request = request.header(name, value);
        }

        let response = request.send().await.map_err(classify)?;
        let status = response.status();
        let body = response.text().await.map_err(classify)?;

        if !status.is_success() {
            return Err(QueryError::Status {
                code: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}

fn classify(err: reqwest::Error) -> QueryError {
    if err.is_timeout() {
        QueryError::Timeout
    } else {
        QueryError::Transport(err.to_string())
    }
}
