//! Input and outcome value objects shared by every update strategy.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::RentUpdateError;
use crate::RentUpdateResult;

/// Validated inputs for one rent update calculation.
///
/// Construction is fail-fast: a value that violates any field constraint
/// never produces an instance. Which optional fields are required depends on
/// the strategy; the constructor only enforces the field-level constraints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateInput {
    amount: Decimal,
    data: Option<Decimal>,
    month: Option<u32>,
    year_start: Option<i32>,
    year_end: Option<i32>,
}

impl UpdateInput {
    pub fn new(
        amount: Decimal,
        data: Option<Decimal>,
        month: Option<u32>,
        year_start: Option<i32>,
        year_end: Option<i32>,
    ) -> RentUpdateResult<Self> {
        if let Some(month) = month {
            if !(1..=12).contains(&month) {
                return Err(RentUpdateError::InvalidInput {
                    field: "month".to_string(),
                    reason: "Month must be between 1 and 12.".to_string(),
                });
            }
        }
        if let (Some(start), Some(end)) = (year_start, year_end) {
            if end < start {
                return Err(RentUpdateError::InvalidInput {
                    field: "year_end".to_string(),
                    reason: "Year end cannot be earlier than year start.".to_string(),
                });
            }
        }
        Ok(Self {
            amount,
            data,
            month,
            year_start,
            year_end,
        })
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn data(&self) -> Option<Decimal> {
        self.data
    }

    pub fn month(&self) -> Option<u32> {
        self.month
    }

    pub fn year_start(&self) -> Option<i32> {
        self.year_start
    }

    pub fn year_end(&self) -> Option<i32> {
        self.year_end
    }

    /// The data field as a signed fraction, validated to [-1, 1].
    pub(crate) fn percentage_data(&self) -> RentUpdateResult<Decimal> {
        let data = self.data.ok_or_else(|| RentUpdateError::InvalidInput {
            field: "data".to_string(),
            reason: "Field 'data' is required.".to_string(),
        })?;
        if !(dec!(-1.0)..=dec!(1.0)).contains(&data) {
            return Err(RentUpdateError::InvalidInput {
                field: "data".to_string(),
                reason: "Data must be a percentage between -1 (-100%) and 1 (100%).".to_string(),
            });
        }
        Ok(data)
    }
}

/// Outcome of one rent update calculation.
///
/// `amount` is the input amount rounded to 2 decimals; `updated_amount` is
/// the recalculated rent, also at 2 decimals. The remaining fields are
/// diagnostic and only present when the strategy produced them. Equality is
/// structural over all fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOutcome {
    pub amount: Decimal,
    pub updated_amount: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variation_rate: Option<Decimal>,
    /// Localized (Spanish) month name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_start: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year_end: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_start: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_end: Option<Decimal>,
}

impl UpdateOutcome {
    /// External representation omitting absent optional fields.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or_default()
    }

    /// External representation with absent optional fields as explicit nulls.
    pub fn to_value_with_nulls(&self) -> Value {
        fn opt<T: Serialize>(value: &Option<T>) -> Value {
            value
                .as_ref()
                .map(|v| serde_json::to_value(v).unwrap_or_default())
                .unwrap_or(Value::Null)
        }

        serde_json::json!({
            "amount": self.amount,
            "updated_amount": self.updated_amount,
            "data": opt(&self.data),
            "variation_rate": opt(&self.variation_rate),
            "month": opt(&self.month),
            "year_start": opt(&self.year_start),
            "year_end": opt(&self.year_end),
            "index_start": opt(&self.index_start),
            "index_end": opt(&self.index_end),
        })
    }
}
