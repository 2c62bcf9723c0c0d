//! Order endpoint client and the validating decode boundary.
//!
//! The fetch is a single unauthenticated GET returning a JSON array of
//! order-shaped objects. Shape problems split into two severities: a body
//! that is not JSON or not an array fails the whole cycle with
//! `MalformedResponse`, while an individual element that does not survive the
//! strict decode is dropped with a warning so one poisoned record cannot
//! blank the panel.

use chrono::NaiveDate;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use rust_decimal::Decimal;
use serde::Deserialize;
use url::Url;

use orderdesk_core::{Email, OrderRecord};

use crate::config::PanelConfig;
use crate::error::PanelError;

/// Client for the remote order endpoint.
#[derive(Debug, Clone)]
pub struct OrderSource {
    client: reqwest::Client,
    api_url: String,
    retries: u32,
}

impl OrderSource {
    /// Create a new order endpoint client.
    ///
    /// The request timeout and retry budget come from configuration; the
    /// endpoint itself is resolved per fetch so that a blank value surfaces
    /// as `ConfigurationMissing` inside the load cycle.
    ///
    /// # Errors
    ///
    /// Returns `PanelError::Internal` if the HTTP client fails to build.
    pub fn new(config: &PanelConfig) -> Result<Self, PanelError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.fetch_timeout)
            .build()
            .map_err(|e| PanelError::Internal(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_url: config.api_url.clone(),
            retries: config.fetch_retries,
        })
    }

    /// Resolve the configured endpoint.
    fn endpoint(&self) -> Result<Url, PanelError> {
        let raw = self.api_url.trim();
        if raw.is_empty() {
            return Err(PanelError::ConfigurationMissing);
        }
        Url::parse(raw).map_err(|_| PanelError::ConfigurationMissing)
    }

    /// Fetch the raw order collection.
    ///
    /// Network failures are retried up to the configured budget (default 0,
    /// a single attempt). A malformed body is never retried - reissuing the
    /// identical request cannot fix a parse failure.
    ///
    /// # Errors
    ///
    /// - `ConfigurationMissing` when no endpoint is resolvable
    /// - `Network { status }` on transport failure or a non-2xx response
    /// - `MalformedResponse` when the body is not a top-level JSON array
    pub async fn fetch(&self) -> Result<Vec<serde_json::Value>, PanelError> {
        let endpoint = self.endpoint()?;

        let mut attempt: u32 = 0;
        loop {
            attempt += 1;
            match self.fetch_once(endpoint.clone()).await {
                Ok(raw) => return Ok(raw),
                Err(err @ PanelError::Network { .. }) if attempt <= self.retries => {
                    tracing::warn!(attempt, error = %err, "order fetch failed, retrying");
                }
                Err(err) => return Err(err),
            }
        }
    }

    async fn fetch_once(&self, endpoint: Url) -> Result<Vec<serde_json::Value>, PanelError> {
        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(|err| PanelError::Network {
                status: err.status().map(|s| s.as_u16()),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PanelError::Network {
                status: Some(status.as_u16()),
            });
        }

        let body = response.text().await.map_err(|_| PanelError::Network {
            status: Some(status.as_u16()),
        })?;

        let value: serde_json::Value = serde_json::from_str(&body)
            .map_err(|err| PanelError::MalformedResponse(format!("body is not valid JSON: {err}")))?;

        match value {
            serde_json::Value::Array(items) => Ok(items),
            other => Err(PanelError::MalformedResponse(format!(
                "expected a JSON array at the top level, got {}",
                json_type(&other)
            ))),
        }
    }
}

/// Wire shape of one order element, before validation.
#[derive(Deserialize)]
struct RawOrder {
    order_id: String,
    #[serde(default)]
    customer_external_id: Option<String>,
    #[serde(default)]
    customer_email: Option<String>,
    date_placed: NaiveDate,
    status: String,
    total_amount: Decimal,
    currency: String,
    summary_items: String,
}

/// Decode raw elements into validated records, dropping malformed ones.
///
/// Rejection reasons: the element does not match the order schema (including
/// an unparseable `date_placed`), a negative `total_amount`, or a
/// present-but-unparseable `customer_email`. A missing or empty email is NOT
/// malformed - the record is kept with `customer_email: None` and excluded
/// later by the filter.
#[must_use]
pub fn decode_records(raw: Vec<serde_json::Value>) -> Vec<OrderRecord> {
    raw.into_iter()
        .filter_map(|value| match validate(value) {
            Ok(record) => Some(record),
            Err(reason) => {
                tracing::warn!(%reason, "rejected malformed order record");
                None
            }
        })
        .collect()
}

fn validate(value: serde_json::Value) -> Result<OrderRecord, String> {
    let raw: RawOrder =
        serde_json::from_value(value).map_err(|err| format!("schema mismatch: {err}"))?;

    if raw.total_amount.is_sign_negative() {
        return Err(format!(
            "order {} has a negative total ({})",
            raw.order_id, raw.total_amount
        ));
    }

    let customer_email = match raw.customer_email.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(value) => Some(Email::parse(value).map_err(|err| {
            format!("order {} has an unusable customer email: {err}", raw.order_id)
        })?),
    };

    Ok(OrderRecord {
        order_id: raw.order_id,
        customer_external_id: raw.customer_external_id,
        customer_email,
        date_placed: raw.date_placed,
        status: raw.status,
        total_amount: raw.total_amount,
        currency: raw.currency,
        summary_items: raw.summary_items,
    })
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn order_json(order_id: &str) -> serde_json::Value {
        serde_json::json!({
            "order_id": order_id,
            "customer_external_id": "user1",
            "customer_email": "customer@example.com",
            "date_placed": "2024-02-10",
            "status": "Delivered",
            "total_amount": 780.00,
            "currency": "USD",
            "summary_items": "1x DSLR Camera"
        })
    }

    #[test]
    fn test_decode_valid_record() {
        let records = decode_records(vec![order_json("SE-100199")]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].order_id, "SE-100199");
    }

    #[test]
    fn test_unparseable_date_rejects_record() {
        let mut bad = order_json("SE-1");
        bad["date_placed"] = serde_json::json!("yesterday-ish");
        let records = decode_records(vec![bad, order_json("SE-2")]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].order_id, "SE-2");
    }

    #[test]
    fn test_negative_total_rejects_record() {
        let mut bad = order_json("SE-1");
        bad["total_amount"] = serde_json::json!(-5.00);
        assert!(decode_records(vec![bad]).is_empty());
    }

    #[test]
    fn test_invalid_email_rejects_record() {
        let mut bad = order_json("SE-1");
        bad["customer_email"] = serde_json::json!("not-an-email");
        assert!(decode_records(vec![bad]).is_empty());
    }

    #[test]
    fn test_missing_email_survives_decode() {
        let mut orphan = order_json("SE-1");
        orphan
            .as_object_mut()
            .unwrap()
            .remove("customer_email");
        let records = decode_records(vec![orphan]);
        assert_eq!(records.len(), 1);
        assert!(records[0].customer_email.is_none());
    }

    #[test]
    fn test_empty_email_survives_decode_as_none() {
        let mut orphan = order_json("SE-1");
        orphan["customer_email"] = serde_json::json!("");
        let records = decode_records(vec![orphan]);
        assert_eq!(records.len(), 1);
        assert!(records[0].customer_email.is_none());
    }

    #[test]
    fn test_non_object_element_is_rejected() {
        let records = decode_records(vec![serde_json::json!("junk"), order_json("SE-2")]);
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_blank_endpoint_is_configuration_missing() {
        let config = PanelConfig {
            api_url: "   ".to_string(),
            ..PanelConfig::default()
        };
        let source = OrderSource::new(&config).unwrap();
        assert!(matches!(
            source.endpoint(),
            Err(PanelError::ConfigurationMissing)
        ));
    }

    #[test]
    fn test_unparseable_endpoint_is_configuration_missing() {
        let config = PanelConfig {
            api_url: "not a url".to_string(),
            ..PanelConfig::default()
        };
        let source = OrderSource::new(&config).unwrap();
        assert!(matches!(
            source.endpoint(),
            Err(PanelError::ConfigurationMissing)
        ));
    }
}
