//! Consolidated data gateway client.
//!
//! One operation: fetch the whole HUD payload for a ticker in a single round
//! trip against the local gateway process. Existence checking is folded into
//! this call (a 404 maps to `NotFound`), so a submission costs at most one
//! network request. No retries; the user resubmits after a failure.

use std::fmt::{Display, Formatter};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::domain::{HudPayload, TickerSymbol};
use crate::http_client::{HttpClient, HttpRequest};

/// Gateway failure classification consumed by the session controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatewayErrorKind {
    /// The gateway does not recognize the ticker.
    NotFound,
    /// Transport failure or a non-2xx gateway status.
    Network,
    /// Anything else, including an undecodable body.
    Unknown,
}

/// Structured gateway error with a stable code string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayError {
    kind: GatewayErrorKind,
    message: String,
}

impl GatewayError {
    pub fn not_found(ticker: &str) -> Self {
        Self {
            kind: GatewayErrorKind::NotFound,
            message: format!("ticker '{ticker}' is not recognized by the gateway"),
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            kind: GatewayErrorKind::Network,
            message: message.into(),
        }
    }

    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            kind: GatewayErrorKind::Unknown,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> GatewayErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub const fn code(&self) -> &'static str {
        match self.kind {
            GatewayErrorKind::NotFound => "gateway.not_found",
            GatewayErrorKind::Network => "gateway.network",
            GatewayErrorKind::Unknown => "gateway.unknown",
        }
    }
}

impl Display for GatewayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.message, self.code())
    }
}

impl std::error::Error for GatewayError {}

/// Client contract for the consolidated gateway.
pub trait GatewayClient: Send + Sync {
    /// Fetch the consolidated HUD payload for a validated ticker.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError`] with kind `NotFound` for unrecognized
    /// tickers, `Network` for transport failures and non-2xx statuses, and
    /// `Unknown` for undecodable payloads.
    fn fetch_consolidated<'a>(
        &'a self,
        ticker: &'a TickerSymbol,
    ) -> Pin<Box<dyn Future<Output = Result<HudPayload, GatewayError>> + Send + 'a>>;
}

/// HTTP implementation backed by `GET {base}/api/run?ticker=<SYMBOL>`.
pub struct HttpGatewayClient {
    base_url: String,
    timeout_ms: u64,
    http: Arc<dyn HttpClient>,
}

impl HttpGatewayClient {
    pub fn new(base_url: impl Into<String>, http: Arc<dyn HttpClient>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: 8_000,
            http,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    fn run_url(&self, ticker: &TickerSymbol) -> String {
        format!(
            "{}/api/run?ticker={}",
            self.base_url.trim_end_matches('/'),
            urlencoding::encode(ticker.as_str())
        )
    }
}

impl GatewayClient for HttpGatewayClient {
    fn fetch_consolidated<'a>(
        &'a self,
        ticker: &'a TickerSymbol,
    ) -> Pin<Box<dyn Future<Output = Result<HudPayload, GatewayError>> + Send + 'a>> {
        Box::pin(async move {
            let request = HttpRequest::get(self.run_url(ticker)).with_timeout_ms(self.timeout_ms);
            let response = self
                .http
                .execute(request)
                .await
                .map_err(|e| GatewayError::network(e.message()))?;

            if response.status == 404 {
                return Err(GatewayError::not_found(ticker.as_str()));
            }
            if !response.is_success() {
                return Err(GatewayError::network(format!(
                    "gateway returned status {}",
                    response.status
                )));
            }

            serde_json::from_str(&response.body)
                .map_err(|e| GatewayError::unknown(format!("undecodable gateway payload: {e}")))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::StaticHttpClient;

    fn ticker(raw: &str) -> TickerSymbol {
        TickerSymbol::parse(raw).expect("valid ticker")
    }

    fn client(http: StaticHttpClient) -> HttpGatewayClient {
        HttpGatewayClient::new("http://127.0.0.1:8015/", Arc::new(http))
    }

    #[test]
    fn run_url_encodes_the_ticker_once() {
        let gateway = client(StaticHttpClient::respond(200, "{}"));
        assert_eq!(
            gateway.run_url(&ticker("AAPL")),
            "http://127.0.0.1:8015/api/run?ticker=AAPL"
        );
    }

    #[tokio::test]
    async fn decodes_a_consolidated_payload() {
        let gateway = client(StaticHttpClient::respond(
            200,
            r#"{"features": {"r_1m": 0.012}, "quote": {"last": 189.5}, "cache_age_seconds": 12}"#,
        ));
        let payload = gateway
            .fetch_consolidated(&ticker("AAPL"))
            .await
            .expect("payload should decode");
        assert_eq!(payload.features.r_1m, Some(0.012));
        assert_eq!(payload.cache_age_seconds, Some(12));
    }

    #[tokio::test]
    async fn maps_404_to_not_found() {
        let gateway = client(StaticHttpClient::respond(404, "not found"));
        let error = gateway
            .fetch_consolidated(&ticker("ZZZZZ"))
            .await
            .expect_err("must fail");
        assert_eq!(error.kind(), GatewayErrorKind::NotFound);
    }

    #[tokio::test]
    async fn maps_server_errors_and_transport_failures_to_network() {
        let gateway = client(StaticHttpClient::respond(502, "bad gateway"));
        let error = gateway
            .fetch_consolidated(&ticker("AAPL"))
            .await
            .expect_err("must fail");
        assert_eq!(error.kind(), GatewayErrorKind::Network);

        let gateway = client(StaticHttpClient::fail("connection refused"));
        let error = gateway
            .fetch_consolidated(&ticker("AAPL"))
            .await
            .expect_err("must fail");
        assert_eq!(error.kind(), GatewayErrorKind::Network);
    }

    #[tokio::test]
    async fn maps_undecodable_bodies_to_unknown() {
        let gateway = client(StaticHttpClient::respond(200, "<html>oops</html>"));
        let error = gateway
            .fetch_consolidated(&ticker("AAPL"))
            .await
            .expect_err("must fail");
        assert_eq!(error.kind(), GatewayErrorKind::Unknown);
    }
}
