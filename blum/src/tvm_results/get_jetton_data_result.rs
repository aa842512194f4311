use crate::errors::BlumResult;
use crate::tvm_types::{FromTVMStack, TVMStack};
use crate::types::Coins;
use num_bigint::BigInt;
use tonlib_core::TonAddress;
use tonlib_core::cell::ArcCell;

/// `get_jetton_data` of the market contract. `admin` is None for `addr_none`.
#[derive(Debug, Clone, PartialEq)]
pub struct GetJettonDataResult {
    pub total_supply: Coins,
    pub mintable: BigInt,
    pub admin: Option<TonAddress>,
    pub content: ArcCell,
    pub wallet_code: ArcCell,
}

impl FromTVMStack for GetJettonDataResult {
    fn from_stack(stack: &mut TVMStack) -> BlumResult<Self> {
        Ok(Self {
            total_supply: stack.pop_coins()?,
            mintable: stack.pop_int()?,
            admin: stack.pop_address_or_none()?,
            content: stack.pop_cell()?,
            wallet_code: stack.pop_cell()?,
        })
    }
}
