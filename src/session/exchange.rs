use super::Session;
use async_trait::async_trait;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("exchange endpoint rejected the credential (HTTP {0})")]
    Rejected(u16),

    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("credential must not be empty")]
    EmptyCredential,
}

/// Pluggable credential-for-session exchange. The wire protocol belongs to
/// the identity provider, not to this crate; implementations only hand back
/// a [`Session`].
#[async_trait]
pub trait CredentialExchange: Send + Sync {
    async fn exchange(&self, credential: &str) -> Result<Session, AuthError>;
}

/// Production exchange: posts the opaque credential to the configured auth
/// endpoint and reads back the display name.
pub struct HttpCredentialExchange {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpCredentialExchange {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ExchangeResponse {
    #[serde(default)]
    display_name: Option<String>,
}

#[async_trait]
impl CredentialExchange for HttpCredentialExchange {
    async fn exchange(&self, credential: &str) -> Result<Session, AuthError> {
        if credential.is_empty() {
            return Err(AuthError::EmptyCredential);
        }

        let response = self
            .http
            .post(&self.endpoint)
            .json(&serde_json::json!({ "credential": credential }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthError::Rejected(status.as_u16()));
        }

        let body: ExchangeResponse = response.json().await?;
        Ok(Session {
            display_name: body.display_name,
        })
    }
}

/// Development/offline exchange used when no exchange endpoint is
/// configured: any non-empty credential signs in without a display name.
#[derive(Debug, Default)]
pub struct OfflineExchange;

#[async_trait]
impl CredentialExchange for OfflineExchange {
    async fn exchange(&self, credential: &str) -> Result<Session, AuthError> {
        if credential.is_empty() {
            return Err(AuthError::EmptyCredential);
        }
        Ok(Session { display_name: None })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn offline_exchange_accepts_any_non_empty_credential() {
        let session = OfflineExchange
            .exchange("opaque-token")
            .await
            .expect("accepted");
        assert!(session.display_name.is_none());
    }

    #[tokio::test]
    async fn offline_exchange_rejects_empty_credential() {
        let err = OfflineExchange.exchange("").await.expect_err("rejected");
        assert!(matches!(err, AuthError::EmptyCredential));
    }
}
