//! Supporting utilities used by models.
//!
//! These APIs are public because they're useful on their own, but they are not
//! yet stable.

pub mod constraint;
pub mod table;
pub mod units;
