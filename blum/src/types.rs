//! Amounts, cell helpers and BoC handling on top of `tonlib_core`.
mod boc;
mod cells;
mod coins;

pub use boc::*;
pub use cells::*;
pub use coins::*;
