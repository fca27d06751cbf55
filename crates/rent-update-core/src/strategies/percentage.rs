//! Update by a signed fraction of the current rent.

use crate::model::{UpdateInput, UpdateOutcome};
use crate::strategies::{round_money, RentUpdateStrategy};
use crate::RentUpdateResult;

#[derive(Debug, Clone, Default)]
pub struct PercentageUpdate;

impl RentUpdateStrategy for PercentageUpdate {
    fn calculate(&self, input: &UpdateInput) -> RentUpdateResult<UpdateOutcome> {
        let data = input.percentage_data()?;
        let amount = round_money(input.amount());
        let updated_amount = amount + round_money(amount * data);
        Ok(UpdateOutcome {
            amount,
            updated_amount,
            data: Some(data),
            variation_rate: Some(data),
            ..UpdateOutcome::default()
        })
    }
}
