//! Client for the INE (Spanish statistics office) time-series API.
//!
//! The engine only ever asks for single-day ranges (day fixed to the 1st)
//! on two series: the consumer price index and the rental-housing index.
//! The client carries no business logic: HTTP GET, JSON decode, and error
//! translation into the engine's taxonomy.

use std::str::FromStr;
use std::time::Duration;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

use crate::error::RentUpdateError;
use crate::RentUpdateResult;

/// IPC series code (current base).
pub const SERIES_IPC: &str = "IPC290751";
/// IRAV series code.
pub const SERIES_IRAV: &str = "IRAV1";

const BASE_URL: &str = "https://servicios.ine.es/wstempus/js/ES/DATOS_SERIE";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// One observation in a series payload. A non-numeric `Valor` decodes as
/// `None` and is treated by callers as data-unavailable, not as a failure.
#[derive(Debug, Clone, Deserialize)]
pub struct SeriesEntry {
    #[serde(rename = "Valor", default, deserialize_with = "lenient_decimal")]
    pub value: Option<Decimal>,
}

/// Decoded `DATOS_SERIE` payload. An empty `Data` collection means the
/// period has no published value yet.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeriesPayload {
    #[serde(rename = "Data", default)]
    pub data: Vec<SeriesEntry>,
}

impl SeriesPayload {
    /// Value of the first entry, if the payload has one and it is numeric.
    pub fn first_value(&self) -> Option<Decimal> {
        self.data.first().and_then(|entry| entry.value)
    }
}

fn lenient_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;
    let parsed = match &raw {
        serde_json::Value::Number(n) => Decimal::from_str(&n.to_string()).ok(),
        serde_json::Value::String(s) => Decimal::from_str(s).ok(),
        _ => None,
    };
    Ok(parsed)
}

/// Seam between the strategies and the statistics-office API.
pub trait SeriesClient: Send + Sync {
    fn fetch_series(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        series: &str,
    ) -> RentUpdateResult<SeriesPayload>;
}

/// Blocking HTTP implementation against the INE API.
#[derive(Debug, Clone, Default)]
pub struct IneClient;

impl SeriesClient for IneClient {
    fn fetch_series(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        series: &str,
    ) -> RentUpdateResult<SeriesPayload> {
        if start > end {
            return Err(RentUpdateError::InvalidInput {
                field: "start_date".to_string(),
                reason: "Start date cannot be later than end date.".to_string(),
            });
        }

        let url = format!(
            "{BASE_URL}/{series}?date={}:{}",
            start.format("%Y%m%d"),
            end.format("%Y%m%d"),
        );

        tracing::debug!(%url, "requesting INE API");
        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| RentUpdateError::Connection(err.to_string()))?;

        let response = client.get(&url).send().map_err(|err| {
            if err.is_timeout() {
                RentUpdateError::Connection("The request timed out.".to_string())
            } else {
                RentUpdateError::Connection(format!(
                    "Connection error while calling INE API: {err}"
                ))
            }
        })?;
        let response = response.error_for_status().map_err(|err| {
            RentUpdateError::Connection(format!("HTTP error while calling INE API: {err}"))
        })?;

        let body = response
            .text()
            .map_err(|err| RentUpdateError::Connection(err.to_string()))?;
        serde_json::from_str(&body).map_err(|err| RentUpdateError::MalformedResponse(err.to_string()))
    }
}
