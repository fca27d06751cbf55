//! Rental revaluation engine for Spanish housing leases.
//!
//! Computes the legally-mandated update of a rent amount under one of the
//! regulator-defined methods: fixed amount, percentage, consumer price index
//! (IPC, including the cross-base arithmetic between the discontinued
//! base-1992 series and the current one), rent index (IRAV), and the two
//! hybrid IPC/percentage methods.
//!
//! All monetary, rate, and index arithmetic uses `rust_decimal::Decimal`
//! (never f64) with round-half-up applied at each regulator-prescribed step:
//! 2 decimals for amounts, 3 for rates and index values.
//!
//! Strategies are resolved by name through [`RentUpdateFactory`]; external
//! strategies can be registered at runtime or discovered through a
//! caller-installed plugin source.

pub mod dates;
pub mod error;
pub mod factory;
pub mod ine;
pub mod model;
pub mod strategies;

pub use error::RentUpdateError;
pub use factory::RentUpdateFactory;
pub use model::{UpdateInput, UpdateOutcome};
pub use strategies::{
    FixedAmountUpdate, IpcThenPercentageUpdate, IpcUpdate, IravUpdate, MinIpcOrPercentageUpdate,
    PercentageUpdate, RentUpdateStrategy,
};

/// Standard result type for all rent-update operations
pub type RentUpdateResult<T> = Result<T, RentUpdateError>;
