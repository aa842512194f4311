//! Scripted accessor and sender for exercising contract handles without a network.
use crate::contracts::{GetMethodAccessor, InternalSender};
use crate::errors::{BlumError, BlumResult};
use crate::messages::{OutboundMessage, SendMode};
use crate::tvm_types::TVMStack;
use async_trait::async_trait;
use crate::types::{Coins, address_to_cell, build_cell, empty_cell, parse_address};
use num_bigint::BigInt;
use parking_lot::Mutex;
use std::collections::VecDeque;
use tonlib_core::TonAddress;

pub const BCL_AUTHOR: &str = "UQD1KZNlg7m-8ymJqNKSA15nmc2ftTS1kyUlSuGonqr0bFas";

#[derive(Debug, Clone, PartialEq)]
pub struct MockCall {
    pub address: TonAddress,
    pub method: String,
    pub args: TVMStack,
}

/// Replays queued responses in FIFO order and records every call
#[derive(Default)]
pub struct MockAccessor {
    calls: Mutex<Vec<MockCall>>,
    responses: Mutex<VecDeque<BlumResult<TVMStack>>>,
}

impl MockAccessor {
    pub fn push_response(&self, stack: TVMStack) { self.responses.lock().push_back(Ok(stack)); }

    pub fn push_error(&self, error: BlumError) { self.responses.lock().push_back(Err(error)); }

    pub fn calls(&self) -> Vec<MockCall> { self.calls.lock().clone() }

    pub fn methods(&self) -> Vec<String> { self.calls.lock().iter().map(|call| call.method.clone()).collect() }

    pub fn responses_left(&self) -> usize { self.responses.lock().len() }
}

#[async_trait]
impl GetMethodAccessor for MockAccessor {
    async fn call(&self, address: &TonAddress, method: &str, args: &TVMStack) -> BlumResult<TVMStack> {
        self.calls.lock().push(MockCall {
            address: address.clone(),
            method: method.to_string(),
            args: args.clone(),
        });
        match self.responses.lock().pop_front() {
            Some(response) => response,
            None => Err(BlumError::Custom(format!("MockAccessor: no response queued for {method}"))),
        }
    }
}

/// Collects sent messages instead of broadcasting them
#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<(OutboundMessage, SendMode)>>,
}

impl RecordingSender {
    pub fn sent(&self) -> Vec<(OutboundMessage, SendMode)> { self.sent.lock().clone() }
}

#[async_trait]
impl InternalSender for RecordingSender {
    async fn send_internal(&self, message: &OutboundMessage, send_mode: SendMode) -> BlumResult<()> {
        self.sent.lock().push((message.clone(), send_mode));
        Ok(())
    }
}

/// `get_bcl_data` answer with the given `trading_enabled` flag.
/// admin is Null, router addresses are `addr_none`, author and fee addresses are [`BCL_AUTHOR`].
pub fn bcl_data_stack(trading_enabled: i64) -> BlumResult<TVMStack> {
    let author = parse_address(BCL_AUTHOR)?;
    let content = build_cell(|builder| {
        builder.store_u8(8, 0x01)?;
        Ok(())
    })?;

    let mut stack = TVMStack::default();
    stack.push_int(BigInt::from(1_000_000_000_000_000_000u64)); // total_supply
    stack.push_int(BigInt::from(800_000_000_000_000_000u64)); // bcl_supply
    stack.push_int(BigInt::from(200_000_000_000_000_000u64)); // liq_supply
    stack.push_null(); // admin
    stack.push_cell_slice(address_to_cell(&author)?); // author_address
    stack.push_cell(content); // content
    stack.push_cell_slice(address_to_cell(&author)?); // fee_address
    stack.push_tiny_int(1); // trade_fee_numerator
    stack.push_tiny_int(100); // trade_fee_denominator
    stack.push_tiny_int(0); // ttl
    stack.push_tiny_int(1_717_000_000); // last_trade_date
    stack.push_tiny_int(trading_enabled);
    stack.push_tiny_int(12_000_000_000); // ton_liq_collected
    stack.push_null(); // referral
    stack.push_tiny_int(100_000_000); // trading_close_fee
    stack.push_int(BigInt::from(1_500_000_000_000u64)); // full_price_ton_need
    stack.push_tiny_int(15_000_000_000); // full_price_ton_fees
    stack.push_cell_slice(address_to_cell(&TonAddress::NULL)?); // router_address
    stack.push_null(); // router_pton_wallet_address
    Ok(stack)
}

/// `get_wallet_data` answer, wallet code is an empty cell
pub fn wallet_data_stack(balance: &Coins, owner: &TonAddress, minter: &TonAddress) -> BlumResult<TVMStack> {
    let mut stack = TVMStack::default();
    stack.push_int(BigInt::from(balance));
    stack.push_cell_slice(address_to_cell(owner)?);
    stack.push_cell_slice(address_to_cell(minter)?);
    stack.push_cell(empty_cell()?);
    Ok(stack)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_err;

    #[tokio::test]
    async fn test_mock_accessor_replays_in_order() -> anyhow::Result<()> {
        let accessor = MockAccessor::default();
        let address = parse_address(BCL_AUTHOR)?;
        accessor.push_response(TVMStack::new(vec![1i64.into()]));
        accessor.push_error(BlumError::TradingDisabled);

        let mut args = TVMStack::default();
        args.push_tiny_int(7);
        assert_eq!(accessor.call(&address, "first", &args).await?.len(), 1);
        assert_err!(accessor.call(&address, "second", &TVMStack::EMPTY).await);
        let err = assert_err!(accessor.call(&address, "third", &TVMStack::EMPTY).await);
        assert_eq!(err.to_string(), "CustomError: MockAccessor: no response queued for third");

        assert_eq!(accessor.methods(), vec!["first", "second", "third"]);
        assert_eq!(accessor.calls()[0].args, args);
        assert_eq!(accessor.responses_left(), 0);
        Ok(())
    }
}
