//! The Aladhan public API as a [`LunarAuthority`].
//!
//! `GET {base_url}/gToH?date=DD-MM-YYYY` answers with a JSON envelope whose
//! `data.hijri` object carries the official date. Day and year arrive as
//! strings, the month number as an integer.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::authority::{LunarAuthority, OfficialLunarDate};
use rayyan_core::ensure;
use rayyan_core::{Error, Result};
use rayyan_time::Date;

/// Production endpoint.
pub const DEFAULT_BASE_URL: &str = "https://api.aladhan.com/v1";

/// Request timeout used when none is configured, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Where and how patiently to ask the authority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthorityConfig {
    /// API root, without the trailing `/gToH`.
    pub base_url: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AuthorityConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AuthorityConfig {
    /// Read a JSON document; missing fields take their defaults.
    ///
    /// The document must be a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))?;
        if !value.is_object() {
            return Err(Error::Config(format!("expected a JSON object, got {value}")));
        }
        let config: Self = serde_json::from_value(value).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration.
    pub fn validate(&self) -> Result<()> {
        ensure!(!self.base_url.is_empty(), "base_url must not be empty");
        ensure!(self.timeout_secs >= 1, "timeout_secs must be >= 1, got {}", self.timeout_secs);
        Ok(())
    }
}

/// Official dates from the Aladhan `gToH` endpoint.
#[derive(Debug, Clone)]
pub struct AladhanAuthority {
    client: reqwest::Client,
    base_url: String,
}

impl AladhanAuthority {
    /// Build a client bounded by the configured timeout.
    pub fn new(config: &AuthorityConfig) -> Result<Self> {
        config.validate()?;
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::Network(format!("cannot build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Request URL for `today`.
    pub fn url_for(&self, today: Date) -> String {
        format!(
            "{}/gToH?date={:02}-{:02}-{:04}",
            self.base_url,
            today.day_of_month(),
            today.month(),
            today.year()
        )
    }
}

#[async_trait]
impl LunarAuthority for AladhanAuthority {
    async fn official_date(&self, today: Date) -> Result<OfficialLunarDate> {
        let url = self.url_for(today);
        tracing::debug!(%url, "querying lunar authority");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| Error::Network(format!("Aladhan request failed: {e}")))?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Network(format!("Aladhan answered HTTP {status}")));
        }
        let body = response
            .text()
            .await
            .map_err(|e| Error::Network(format!("cannot read Aladhan response: {e}")))?;
        parse_gtoh_payload(&body)
    }

    fn name(&self) -> &str {
        "aladhan"
    }
}

#[derive(Deserialize)]
struct Envelope {
    data: Payload,
}

#[derive(Deserialize)]
struct Payload {
    hijri: HijriPart,
}

#[derive(Deserialize)]
struct HijriPart {
    day: String,
    month: MonthPart,
    year: String,
}

#[derive(Deserialize)]
struct MonthPart {
    number: u8,
}

/// Extract the official date from a `gToH` response body.
pub fn parse_gtoh_payload(body: &str) -> Result<OfficialLunarDate> {
    let envelope: Envelope = serde_json::from_str(body)
        .map_err(|e| Error::Network(format!("malformed Aladhan payload: {e}")))?;
    let hijri = envelope.data.hijri;
    let day: u8 = hijri
        .day
        .trim()
        .parse()
        .map_err(|_| Error::Network(format!("malformed Hijri day {:?}", hijri.day)))?;
    let year: u16 = hijri
        .year
        .trim()
        .parse()
        .map_err(|_| Error::Network(format!("malformed Hijri year {:?}", hijri.year)))?;
    let month = hijri.month.number;
    if !(1..=30).contains(&day) || !(1..=12).contains(&month) {
        return Err(Error::Network(format!(
            "Hijri date out of range: {day}/{month}/{year}"
        )));
    }
    Ok(OfficialLunarDate { day, month, year })
}
