//! Value types consumed by the stake module.
//!
//! These are the collaborators stake transactions are built from: actor
//! references, coin amounts, and the exact fixed-point [`Decimal`] used for
//! commission rates.

pub mod actor;
pub mod coin;
pub mod decimal;
pub mod error;

pub use actor::Actor;
pub use coin::{is_valid_denom, Coin, Coins};
pub use decimal::Decimal;
pub use error::TypesError;
