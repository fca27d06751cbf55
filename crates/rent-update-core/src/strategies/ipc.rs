//! Update by consumer-price-index variation, reconciling the discontinued
//! base-1992 series with live values from the current base.

use std::sync::Arc;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::dates::month_name_es;
use crate::error::RentUpdateError;
use crate::ine::{IneClient, SeriesClient, SERIES_IPC};
use crate::model::{UpdateInput, UpdateOutcome};
use crate::strategies::{round_money, round_rate, tables, RentUpdateStrategy};
use crate::RentUpdateResult;

pub struct IpcUpdate {
    client: Arc<dyn SeriesClient>,
}

impl Default for IpcUpdate {
    fn default() -> Self {
        Self::new()
    }
}

impl IpcUpdate {
    pub fn new() -> Self {
        Self::with_client(Arc::new(IneClient))
    }

    pub fn with_client(client: Arc<dyn SeriesClient>) -> Self {
        Self { client }
    }

    fn unavailable(month: u32, year: i32) -> RentUpdateResult<RentUpdateError> {
        Ok(RentUpdateError::DataUnavailable(format!(
            "Rent not updated: Could not fetch IPC data for {} {year}.",
            month_name_es(month)?
        )))
    }

    /// Live IPC value for a month, in the current statistical base.
    fn fetch_ipc(&self, year: i32, month: u32) -> RentUpdateResult<Decimal> {
        let query_date =
            NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| RentUpdateError::InvalidInput {
                field: "period".to_string(),
                reason: format!("{year}-{month} is not a valid period."),
            })?;
        let payload = self.client.fetch_series(query_date, query_date, SERIES_IPC)?;
        match payload.first_value() {
            Some(value) => Ok(value),
            None => Err(Self::unavailable(month, year)?),
        }
    }

    /// Base-1992 table value for a pre-2002 month, rounded to 3 decimals.
    fn table_index(year: i32, month: u32) -> RentUpdateResult<Decimal> {
        match tables::ipc_base_1992(year, month) {
            Some(value) => Ok(round_rate(value)),
            None => Err(Self::unavailable(month, year)?),
        }
    }

    /// Resolve (index_start, index_end) for the three base-placement cases.
    fn resolve_indices(
        &self,
        year_start: i32,
        year_end: i32,
        month: u32,
    ) -> RentUpdateResult<(Decimal, Decimal)> {
        if year_start < 2002 && year_end >= 2002 {
            // Cross-base: live value converted into base-1992 terms.
            let live = self.fetch_ipc(year_end, month)?;
            let coefficient = tables::lau_link_coefficient(month).ok_or_else(|| {
                RentUpdateError::InvalidInput {
                    field: "month".to_string(),
                    reason: "Month must be between 1 and 12.".to_string(),
                }
            })?;
            let index_end = round_rate(live * coefficient);
            let index_start = Self::table_index(year_start, month)?;
            Ok((index_start, index_end))
        } else if year_end < 2002 {
            let index_end = Self::table_index(year_end, month)?;
            let index_start = Self::table_index(year_start, month)?;
            Ok((index_start, index_end))
        } else {
            let index_end = round_rate(self.fetch_ipc(year_end, month)?);
            let index_start = round_rate(self.fetch_ipc(year_start, month)?);
            Ok((index_start, index_end))
        }
    }
}

impl RentUpdateStrategy for IpcUpdate {
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
        let year_end = input
            .year_end()
            .ok_or_else(|| RentUpdateError::InvalidInput {
                field: "year_end".to_string(),
                reason: "Year end is required.".to_string(),
            })?;
        if year_start < 1954 || (year_start == 1954 && month < 3) {
            return Err(RentUpdateError::UnsupportedPeriod(
                "IPC data is only available from March 1954 onward.".to_string(),
            ));
        }

        let amount = round_money(input.amount());
        let (index_start, index_end) = match self.resolve_indices(year_start, year_end, month) {
            Ok(pair) => pair,
            Err(err) => {
                if matches!(err, RentUpdateError::Connection(_)) {
                    tracing::error!("INE IPC fetch failed: {err}");
                }
                return Err(err);
            }
        };
        if index_start.is_zero() {
            return Err(Self::unavailable(month, year_start)?);
        }

        let variation_rate = round_rate(index_end / index_start - Decimal::ONE);
        let updated_amount = round_money(amount + amount * variation_rate);

        Ok(UpdateOutcome {
            amount,
            updated_amount,
            variation_rate: Some(variation_rate),
            month: Some(month_name_es(month)?.to_string()),
            year_start: Some(year_start),
            year_end: Some(year_end),
            index_start: Some(index_start),
            index_end: Some(index_end),
            ..UpdateOutcome::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::testing::{Canned, StubClient};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn input(
        amount: Decimal,
        month: Option<u32>,
        year_start: Option<i32>,
        year_end: Option<i32>,
    ) -> UpdateInput {
        UpdateInput::new(amount, None, month, year_start, year_end).unwrap()
    }

    fn offline() -> IpcUpdate {
        IpcUpdate::with_client(Arc::new(StubClient::default()))
    }

    #[test]
    fn both_periods_before_2002_use_the_table() {
        let outcome = offline()
            .calculate(&input(dec!(1000.00), Some(6), Some(1995), Some(2001)))
            .unwrap();
        assert_eq!(outcome.index_start, Some(dec!(114.402)));
        assert_eq!(outcome.index_end, Some(dec!(135.247)));
        assert_eq!(outcome.variation_rate, Some(dec!(0.182)));
        assert_eq!(outcome.updated_amount, dec!(1182.00));
        assert_eq!(outcome.month.as_deref(), Some("junio"));
    }

    #[test]
    fn adjacent_pre_2002_years() {
        let outcome = offline()
            .calculate(&input(dec!(250.00), Some(1), Some(1960), Some(1961)))
            .unwrap();
        assert_eq!(outcome.index_start, Some(dec!(5.162)));
        assert_eq!(outcome.index_end, Some(dec!(5.263)));
        assert_eq!(outcome.variation_rate, Some(dec!(0.020)));
        assert_eq!(outcome.updated_amount, dec!(255.00));
    }

    #[test]
    fn cross_base_applies_the_linking_coefficient() {
        let client = StubClient::default().with(SERIES_IPC, 2002, 1, Canned::Value(dec!(72.068)));
        let outcome = IpcUpdate::with_client(Arc::new(client))
            .calculate(&input(dec!(600.00), Some(1), Some(2001), Some(2002)))
            .unwrap();
        // 72.068 * 1.9022926 rounded to 3, not the raw live value.
        assert_eq!(outcome.index_end, Some(dec!(137.094)));
        assert_eq!(outcome.index_start, Some(dec!(133.754)));
        assert_eq!(outcome.variation_rate, Some(dec!(0.025)));
        assert_eq!(outcome.updated_amount, dec!(615.00));
    }

    #[test]
    fn both_periods_from_2002_fetch_live_values() {
        let client = StubClient::default()
            .with(SERIES_IPC, 2003, 8, Canned::Value(dec!(76.021)))
            .with(SERIES_IPC, 2002, 8, Canned::Value(dec!(73.855)));
        let strategy = IpcUpdate::with_client(Arc::new(client));
        let outcome = strategy
            .calculate(&input(dec!(400.00), Some(8), Some(2002), Some(2003)))
            .unwrap();
        assert_eq!(outcome.index_start, Some(dec!(73.855)));
        assert_eq!(outcome.index_end, Some(dec!(76.021)));
        assert_eq!(outcome.variation_rate, Some(dec!(0.029)));
        assert_eq!(outcome.updated_amount, dec!(411.60));

        // Identical inputs and identical index values: identical outcome.
        let again = strategy
            .calculate(&input(dec!(400.00), Some(8), Some(2002), Some(2003)))
            .unwrap();
        assert_eq!(outcome, again);
    }

    #[test]
    fn periods_before_march_1954_fail() {
        for (year_start, month) in [(1953, 12), (1954, 2), (1910, 6)] {
            let err = offline()
                .calculate(&input(dec!(100.00), Some(month), Some(year_start), Some(2001)))
                .unwrap_err();
            assert_eq!(
                err.to_string(),
                "IPC data is only available from March 1954 onward."
            );
        }
    }

    #[test]
    fn march_1954_is_the_first_supported_period() {
        let outcome = offline()
            .calculate(&input(dec!(100.00), Some(3), Some(1954), Some(1955)))
            .unwrap();
        assert_eq!(outcome.index_start, Some(dec!(3.373)));
    }

    #[test]
    fn missing_fields_fail_in_declared_order() {
        let err = offline()
            .calculate(&input(dec!(100.00), None, None, None))
            .unwrap_err();
        assert!(err.to_string().contains("Year start is required."));
        let err = offline()
            .calculate(&input(dec!(100.00), None, Some(2002), Some(2003)))
            .unwrap_err();
        assert!(err.to_string().contains("Month is required."));
        let err = offline()
            .calculate(&input(dec!(100.00), Some(8), Some(2002), None))
            .unwrap_err();
        assert!(err.to_string().contains("Year end is required."));
    }

    #[test]
    fn out_of_range_calendar_year_is_invalid_for_either_endpoint() {
        // chrono cannot represent this year; the failing endpoint here is
        // year_end, so the error must not blame year_start.
        let err = offline()
            .calculate(&input(dec!(100.00), Some(6), Some(2002), Some(300_000)))
            .unwrap_err();
        match err {
            RentUpdateError::InvalidInput { field, reason } => {
                assert_eq!(field, "period");
                assert!(reason.contains("300000-6"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_payload_names_the_failing_period() {
        let client = StubClient::default().with(SERIES_IPC, 2003, 8, Canned::Empty);
        let err = IpcUpdate::with_client(Arc::new(client))
            .calculate(&input(dec!(400.00), Some(8), Some(2002), Some(2003)))
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Rent not updated: Could not fetch IPC data for agosto 2003."
        );
    }

    #[test]
    fn non_numeric_payload_is_data_unavailable() {
        let client = StubClient::default().with(SERIES_IPC, 2003, 8, Canned::NonNumeric);
        let err = IpcUpdate::with_client(Arc::new(client))
            .calculate(&input(dec!(400.00), Some(8), Some(2002), Some(2003)))
            .unwrap_err();
        assert!(matches!(err, RentUpdateError::DataUnavailable(_)));
    }

    #[test]
    fn connection_failures_pass_through_unchanged() {
        let client = StubClient::default().with(SERIES_IPC, 2003, 8, Canned::Down);
        let err = IpcUpdate::with_client(Arc::new(client))
            .calculate(&input(dec!(400.00), Some(8), Some(2002), Some(2003)))
            .unwrap_err();
        assert!(matches!(err, RentUpdateError::Connection(_)));
        assert!(err.to_string().contains("connection refused"));
    }
}
