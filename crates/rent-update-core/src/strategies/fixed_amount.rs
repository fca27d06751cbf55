//! Update by a fixed amount (positive or negative).

use crate::error::RentUpdateError;
use crate::model::{UpdateInput, UpdateOutcome};
use crate::strategies::{round_money, RentUpdateStrategy};
use crate::RentUpdateResult;

#[derive(Debug, Clone, Default)]
pub struct FixedAmountUpdate;

impl RentUpdateStrategy for FixedAmountUpdate {
    fn calculate(&self, input: &UpdateInput) -> RentUpdateResult<UpdateOutcome> {
        let data = input.data().ok_or_else(|| RentUpdateError::InvalidInput {
            field: "data".to_string(),
            reason: "Field 'data' is required.".to_string(),
        })?;
        let amount = round_money(input.amount());
        // The sum is not re-rounded: a delta with more fractional digits
        // carries through to the updated amount.
        Ok(UpdateOutcome {
            amount,
            updated_amount: amount + data,
            data: Some(data),
            ..UpdateOutcome::default()
        })
    }
}
