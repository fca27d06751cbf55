//! Update by the lower of the CPI variation or a capped percentage.

use std::sync::Arc;

use crate::dates::month_name_es;
use crate::ine::{IneClient, SeriesClient};
use crate::model::{UpdateInput, UpdateOutcome};
use crate::strategies::ipc_then_percentage::check_composite_input;
use crate::strategies::{round_money, IpcUpdate, RentUpdateStrategy};
use crate::RentUpdateResult;

pub struct MinIpcOrPercentageUpdate {
    client: Arc<dyn SeriesClient>,
}

impl Default for MinIpcOrPercentageUpdate {
    fn default() -> Self {
        Self::new()
    }
}

impl MinIpcOrPercentageUpdate {
    pub fn new() -> Self {
        Self::with_client(Arc::new(IneClient))
    }

    pub fn with_client(client: Arc<dyn SeriesClient>) -> Self {
        Self { client }
    }
}

impl RentUpdateStrategy for MinIpcOrPercentageUpdate {
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

        // Direct comparison of the two signed rates; no extra rounding.
        let ipc_variation = ipc.variation_rate.unwrap_or_default();
        let variation_rate = ipc_variation.min(data);
        let updated_amount = round_money(amount + amount * variation_rate);

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
