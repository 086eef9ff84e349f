use serde::{Deserialize, Serialize};

/// Consolidated gateway response for one ticker (`GET /api/run`).
///
/// Every field is optional on the wire. A payload with missing or null
/// sub-fields still deserializes; each display slot degrades to a
/// placeholder independently instead of failing the render.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct HudPayload {
    #[serde(default)]
    pub ticker: Option<String>,
    #[serde(default)]
    pub features: Features,
    #[serde(default)]
    pub recommendation: Recommendation,
    #[serde(default)]
    pub one_liner: OneLiner,
    #[serde(default)]
    pub quote: Option<QuoteSnapshot>,
    #[serde(default)]
    pub top_headline: Option<Headline>,
    #[serde(default)]
    pub cache_age_seconds: Option<i64>,
}

/// Derived market features computed by the context service.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Features {
    /// Mean sentiment over recent headlines.
    #[serde(default)]
    pub sent_mean: Option<f64>,
    /// Sentiment standard deviation.
    #[serde(default)]
    pub sent_std: Option<f64>,
    /// 1-minute return expressed as a fraction (0.012 = +1.2%).
    #[serde(default)]
    pub r_1m: Option<f64>,
    /// 5-minute return expressed as a fraction.
    #[serde(default)]
    pub r_5m: Option<f64>,
    /// Whether last trades above the 20-period moving average.
    #[serde(default)]
    pub above_sma20: Option<bool>,
}

/// Strategy recommendation: class code plus a confidence fraction in [0, 1].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(rename = "class", default)]
    pub code: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// One-line natural-language strategy summary.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OneLiner {
    #[serde(default)]
    pub text: String,
}

/// Top-of-book snapshot; bid/ask may be null on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QuoteSnapshot {
    #[serde(default)]
    pub last: Option<f64>,
    #[serde(default)]
    pub bid: Option<f64>,
    #[serde(default)]
    pub ask: Option<f64>,
}

/// Top news headline backing the sentiment features.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Headline {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub publisher: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_full_gateway_payload() {
        let payload: HudPayload = serde_json::from_str(
            r#"{
                "ticker": "AAPL",
                "features": {"sent_mean": 0.21, "sent_std": 0.08, "r_1m": 0.012, "r_5m": 0.004, "above_sma20": true},
                "recommendation": {"class": "IC", "confidence": 0.76},
                "one_liner": {"text": "IC: Range day. Conf 76%."},
                "quote": {"last": 189.5, "bid": 189.4, "ask": 189.6},
                "top_headline": {"title": "Apple unveils results", "publisher": "Reuters", "url": "https://example.test/a"},
                "cache_age_seconds": 12
            }"#,
        )
        .expect("payload should decode");

        assert_eq!(payload.recommendation.code.as_deref(), Some("IC"));
        assert_eq!(payload.features.r_1m, Some(0.012));
        assert_eq!(payload.quote.as_ref().and_then(|q| q.last), Some(189.5));
        assert_eq!(payload.cache_age_seconds, Some(12));
    }

    #[test]
    fn tolerates_missing_and_null_fields() {
        let payload: HudPayload = serde_json::from_str(
            r#"{"features": {}, "quote": {"last": 10.0, "bid": null, "ask": null}}"#,
        )
        .expect("partial payload should decode");

        assert_eq!(payload.features.r_1m, None);
        assert!(payload.top_headline.is_none());
        let quote = payload.quote.expect("quote present");
        assert_eq!(quote.last, Some(10.0));
        assert_eq!(quote.bid, None);
    }

    #[test]
    fn ignores_unknown_gateway_fields() {
        let payload: HudPayload = serde_json::from_str(
            r#"{"ticker": "NVDA", "features_used": {}, "ts_gateway": "2026-01-01T00:00:00Z"}"#,
        )
        .expect("extra fields are ignored");
        assert_eq!(payload.ticker.as_deref(), Some("NVDA"));
    }
}
