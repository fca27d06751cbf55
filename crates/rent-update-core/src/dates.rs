//! Month localization for user-facing messages and results.

use crate::error::RentUpdateError;
use crate::RentUpdateResult;

static MONTHS_ES: [&str; 12] = [
    "enero",
    "febrero",
    "marzo",
    "abril",
    "mayo",
    "junio",
    "julio",
    "agosto",
    "septiembre",
    "octubre",
    "noviembre",
    "diciembre",
];

/// Spanish name of a month number (1–12).
pub fn month_name_es(month: u32) -> RentUpdateResult<&'static str> {
    if (1..=12).contains(&month) {
        Ok(MONTHS_ES[(month - 1) as usize])
    } else {
        Err(RentUpdateError::InvalidInput {
            field: "month".to_string(),
            reason: format!("Month {month} is invalid. It must be between 1 and 12."),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn first_and_last_month() {
        assert_eq!(month_name_es(1).unwrap(), "enero");
        assert_eq!(month_name_es(12).unwrap(), "diciembre");
    }

    #[test]
    fn out_of_range_months_fail() {
        assert!(month_name_es(0).is_err());
        assert!(month_name_es(13).is_err());
    }
}
