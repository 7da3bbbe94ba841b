use super::domain::{records_from_value, ApplicationRecord};
use serde_json::Value;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Liveness token scoped to one board mount.
///
/// Cancelling the scope aborts an in-flight fetch outright instead of
/// merely suppressing a late result.
#[derive(Debug, Clone, Default)]
pub struct ViewScope {
    token: CancellationToken,
}

impl ViewScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the owning view as unmounted.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    async fn cancelled(&self) {
        self.token.cancelled().await;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The service answered with a non-success status; the code is not
    /// otherwise inspected.
    #[error("tracker service answered HTTP {0}")]
    Status(u16),

    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("fetch aborted: view unmounted")]
    Cancelled,
}

/// Read-only client for the remote classification service.
#[derive(Debug, Clone)]
pub struct TrackerClient {
    http: reqwest::Client,
    base_url: String,
}

impl TrackerClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One `GET {base}/tracker`, no parameters, no retry.
    ///
    /// A 2xx response with a non-array body coerces to the empty list; any
    /// other status or a transport failure is an error. Cancelling `scope`
    /// while the round-trip is pending drops the request and yields
    /// [`FetchError::Cancelled`].
    pub async fn fetch(
        &self,
        scope: &ViewScope,
    ) -> Result<Vec<ApplicationRecord>, FetchError> {
        if scope.is_cancelled() {
            return Err(FetchError::Cancelled);
        }

        let url = format!("{}/tracker", self.base_url);
        debug!(%url, "fetching classified applications");

        let response = tokio::select! {
            _ = scope.cancelled() => return Err(FetchError::Cancelled),
            response = self.http.get(&url).send() => response?,
        };

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = tokio::select! {
            _ = scope.cancelled() => return Err(FetchError::Cancelled),
            body = response.json::<Value>() => body?,
        };

        Ok(records_from_value(body))
    }
}
