//! Update by the rental-housing price index (IRAV).
//!
//! The series is published as a whole-number-scaled rate, so the raw value
//! is divided by 100 before use. Data exists from November 2024 onward.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::dates::month_name_es;
use crate::error::RentUpdateError;
use crate::ine::{IneClient, SeriesClient, SERIES_IRAV};
use crate::model::{UpdateInput, UpdateOutcome};
use crate::strategies::{round_money, round_rate, RentUpdateStrategy};
use crate::RentUpdateResult;

pub struct IravUpdate {
    client: Arc<dyn SeriesClient>,
}

impl Default for IravUpdate {
    fn default() -> Self {
        Self::new()
    }
}

impl IravUpdate {
    pub fn new() -> Self {
        Self::with_client(Arc::new(IneClient))
    }

    pub fn with_client(client: Arc<dyn SeriesClient>) -> Self {
        Self { client }
    }

    fn unavailable(month: u32, year: i32) -> RentUpdateResult<RentUpdateError> {
        Ok(RentUpdateError::DataUnavailable(format!(
            "Rent not updated: Could not fetch IRAV data for {} {year}.",
            month_name_es(month)?
        )))
    }

    /// IRAV variation rate for a month, as a fraction rounded to 3 decimals.
    fn fetch_irav(&self, year: i32, month: u32) -> RentUpdateResult<Decimal> {
        let query_date =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| RentUpdateError::InvalidInput {
                field: "period".to_string(),
                reason: format!("{year}-{month} is not a valid period."),
            })?;
        let payload = self
            .client
            .fetch_series(query_date, query_date, SERIES_IRAV)?;
        match payload.first_value() {
            Some(value) => Ok(round_rate(value / dec!(100))),
            None => Err(Self::unavailable(month, year)?),
        }
    }
}

impl RentUpdateStrategy for IravUpdate {
    fn calculate(&self, input: &UpdateInput) -> RentUpdateResult<UpdateOutcome> {
        let year_start = input
            .year_start()
            .ok_or_else(|| RentUpdateError::InvalidInput {
                field: "year_start".to_string(),
                reason: "Year start is required.".to_string(),
            })?;
        let month = input.month().ok_or_else(|| RentUpdateError::InvalidInput {
            field: "month".to_string(),
            reason: "Month is required.".to_string(),
        })?;
        if year_start < 2024 || (year_start == 2024 && month < 11) {
            return Err(RentUpdateError::UnsupportedPeriod(
                "IRAV data is only available from November 2024 onward.".to_string(),
            ));
        }

        let amount = round_money(input.amount());
        let variation_rate = match self.fetch_irav(year_start, month) {
            Ok(rate) => rate,
            Err(err) => {
                if matches!(err, RentUpdateError::Connection(_)) {
                    tracing::error!("INE IRAV fetch failed: {err}");
                }
                return Err(err);
            }
        };
        let updated_amount = round_money(amount * (Decimal::ONE + variation_rate));

        Ok(UpdateOutcome {
            amount,
            updated_amount,
            variation_rate: Some(variation_rate),
            month: Some(month_name_es(month)?.to_string()),
            year_start: Some(year_start),
            ..UpdateOutcome::default()
        })
    }
}
