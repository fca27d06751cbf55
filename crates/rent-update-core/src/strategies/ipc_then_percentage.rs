//! Update by CPI variation followed by a percentage on the updated amount.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::dates::month_name_es;
use crate::error::RentUpdateError;
use crate::ine::{IneClient, SeriesClient};
use crate::model::{UpdateInput, UpdateOutcome};
use crate::strategies::{round_money, round_rate, IpcUpdate, RentUpdateStrategy};
use crate::RentUpdateResult;

pub struct IpcThenPercentageUpdate {
    client: Arc<dyn SeriesClient>,
}

impl Default for IpcThenPercentageUpdate {
    fn default() -> Self {
        Self::new()
    }
}

impl IpcThenPercentageUpdate {
    pub fn new() -> Self {
        Self::with_client(Arc::new(IneClient))
    }

    pub fn with_client(client: Arc<dyn SeriesClient>) -> Self {
        Self { client }
    }
}

/// Shared precondition block for the composite strategies: the CPI field
/// checks first (in the CPI strategy's order), then the percentage data.
pub(crate) fn check_composite_input(
    input: &UpdateInput,
) -> RentUpdateResult<(i32, u32, i32, Decimal)> {
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
    let data = input.percentage_data()?;
    Ok((year_start, month, year_end, data))
}

impl RentUpdateStrategy for IpcThenPercentageUpdate {
    fn calculate(&self, input: &UpdateInput) -> RentUpdateResult<UpdateOutcome> {
        let (year_start, month, year_end, data) = check_composite_input(input)?;

        let amount = round_money(input.amount());
        let ipc = IpcUpdate::with_client(Arc::clone(&self.client)).calculate(&UpdateInput::new(
            amount,
            None,
            Some(month),
            Some(year_start),
            Some(year_end),
        )?)?;

        // The percentage applies to the already-CPI-updated amount.
        let percentage_delta = round_money(ipc.updated_amount * data);
        let updated_amount = round_money(ipc.updated_amount + percentage_delta);
        // Combined effective rate against the original amount, not the sum
        // of the two partial rates. Undefined for a zero amount.
        let variation_rate = updated_amount
            .checked_div(amount)
            .map(|ratio| round_rate(ratio - Decimal::ONE))
            .ok_or_else(|| RentUpdateError::InvalidInput {
                field: "amount".to_string(),
                reason: "Variation rate is undefined for a zero amount.".to_string(),
            })?;

        Ok(UpdateOutcome {
            amount,
            updated_amount,
            data: Some(data),
            variation_rate: Some(variation_rate),
            month: Some(month_name_es(month)?.to_string()),
            year_start: Some(year_start),
            year_end: Some(year_end),
            index_start: ipc.index_start,
            index_end: ipc.index_end,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ine::SERIES_IPC;
    use crate::strategies::testing::{Canned, StubClient};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn strategy() -> IpcThenPercentageUpdate {
        let client = StubClient::default()
            .with(SERIES_IPC, 2003, 8, Canned::Value(dec!(76.021)))
            .with(SERIES_IPC, 2002, 8, Canned::Value(dec!(73.855)));
        IpcThenPercentageUpdate::with_client(Arc::new(client))
    }

    fn input(data: Option<Decimal>) -> UpdateInput {
        UpdateInput::new(dec!(400.00), data, Some(8), Some(2002), Some(2003)).unwrap()
    }

    #[test]
    fn percentage_applies_to_the_cpi_updated_amount() {
        // CPI step: 400.00 -> 411.60 (rate 0.029); then +2% of 411.60 = 8.23.
        let outcome = strategy().calculate(&input(Some(dec!(0.02)))).unwrap();
        assert_eq!(outcome.updated_amount, dec!(419.83));
        assert_eq!(outcome.variation_rate, Some(dec!(0.050)));
        assert_eq!(outcome.data, Some(dec!(0.02)));
        assert_eq!(outcome.index_start, Some(dec!(73.855)));
        assert_eq!(outcome.index_end, Some(dec!(76.021)));
    }

    #[test]
    fn cpi_field_errors_take_precedence_over_data_errors() {
        let incomplete = UpdateInput::new(dec!(400.00), None, None, None, None).unwrap();
        let err = strategy().calculate(&incomplete).unwrap_err();
        assert!(err.to_string().contains("Year start is required."));
    }

    #[test]
    fn missing_data_fails_after_cpi_checks() {
        let err = strategy().calculate(&input(None)).unwrap_err();
        assert!(err.to_string().contains("Field 'data' is required."));
    }

    #[test]
    fn out_of_range_data_fails() {
        let err = strategy().calculate(&input(Some(dec!(1.5)))).unwrap_err();
        assert!(matches!(err, RentUpdateError::InvalidInput { .. }));
    }

    #[test]
    fn zero_amount_fails_instead_of_dividing_by_zero() {
        let zero =
            UpdateInput::new(dec!(0.00), Some(dec!(0.02)), Some(8), Some(2002), Some(2003))
                .unwrap();
        let err = strategy().calculate(&zero).unwrap_err();
        assert!(err
            .to_string()
            .contains("Variation rate is undefined for a zero amount."));
    }

    #[test]
    fn full_negative_rate_cancels_the_cpi_step() {
        let outcome = strategy().calculate(&input(Some(dec!(-1.0)))).unwrap();
        assert_eq!(outcome.updated_amount, dec!(0.00));
        assert_eq!(outcome.variation_rate, Some(dec!(-1.000)));
    }
}
