//! Update strategies: one interchangeable implementation per legal method.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::{UpdateInput, UpdateOutcome};
use crate::RentUpdateResult;

pub mod fixed_amount;
pub mod ipc;
pub mod ipc_then_percentage;
pub mod irav;
pub mod min_ipc_or_percentage;
pub mod percentage;
pub(crate) mod tables;

pub use fixed_amount::FixedAmountUpdate;
pub use ipc::IpcUpdate;
pub use ipc_then_percentage::IpcThenPercentageUpdate;
pub use irav::IravUpdate;
pub use min_ipc_or_percentage::MinIpcOrPercentageUpdate;
pub use percentage::PercentageUpdate;

/// One rent update method. Implementations are stateless between calls and
/// safe to reuse.
pub trait RentUpdateStrategy {
    fn calculate(&self, input: &UpdateInput) -> RentUpdateResult<UpdateOutcome>;
}

/// Round-half-up to 2 decimals (monetary amounts).
pub(crate) fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Round-half-up to 3 decimals (rates and index values).
pub(crate) fn round_rate(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(3, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    use crate::error::RentUpdateError;
    use crate::ine::{SeriesClient, SeriesEntry, SeriesPayload};
    use crate::RentUpdateResult;

    /// Canned response for one (series, month) lookup.
    #[derive(Debug, Clone)]
    pub enum Canned {
        Value(Decimal),
        /// Entry present but `Valor` is not a number.
        NonNumeric,
        /// Empty `Data` collection.
        Empty,
        Down,
    }

    /// In-memory stand-in for the INE API, keyed by series code and query
    /// start date.
    #[derive(Debug, Default)]
    pub struct StubClient {
        responses: HashMap<(String, NaiveDate), Canned>,
    }

    impl StubClient {
        pub fn with(mut self, series: &str, year: i32, month: u32, canned: Canned) -> Self {
            let date = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
            self.responses.insert((series.to_string(), date), canned);
            self
        }
    }

    impl SeriesClient for StubClient {
        fn fetch_series(
            &self,
            start: NaiveDate,
            _end: NaiveDate,
            series: &str,
        ) -> RentUpdateResult<SeriesPayload> {
            match self
                .responses
                .get(&(series.to_string(), start))
                .unwrap_or_else(|| panic!("unexpected lookup: {series} {start}"))
            {
                Canned::Value(value) => Ok(SeriesPayload {
                    data: vec![SeriesEntry {
                        value: Some(*value),
                    }],
                }),
                Canned::NonNumeric => Ok(SeriesPayload {
                    data: vec![SeriesEntry { value: None }],
                }),
                Canned::Empty => Ok(SeriesPayload::default()),
                Canned::Down => Err(RentUpdateError::Connection(
                    "Connection error while calling INE API: connection refused".to_string(),
                )),
            }
        }
    }
}
