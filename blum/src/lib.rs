//! Client library for the Blum jetton market contract and its per-owner jetton wallets.
//!
//! Builds message bodies for buy, sell, transfer and burn and decodes get-method result stacks.
//! Network access goes through the [`contracts::GetMethodAccessor`] and [`contracts::InternalSender`] traits.
pub use tonlib_core; // re-export
pub mod clients;
pub mod contracts;
pub mod errors;
pub mod messages;
pub mod test_utils;
pub mod tvm_results;
pub mod tvm_types;
pub mod types;
