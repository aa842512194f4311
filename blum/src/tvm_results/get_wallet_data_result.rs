use crate::errors::BlumResult;
use crate::tvm_types::{FromTVMStack, TVMStack};
use crate::types::Coins;
use tonlib_core::TonAddress;
use tonlib_core::cell::ArcCell;

/// `get_wallet_data` of a jetton wallet
#[derive(Debug, Clone, PartialEq)]
pub struct GetWalletDataResult {
    pub balance: Coins,
    pub owner_address: TonAddress,
    pub minter_address: TonAddress,
    pub wallet_code: ArcCell,
}

impl FromTVMStack for GetWalletDataResult {
    fn from_stack(stack: &mut TVMStack) -> BlumResult<Self> {
        Ok(Self {
            balance: stack.pop_coins()?,
            owner_address: stack.pop_address()?,
            minter_address: stack.pop_address()?,
            wallet_code: stack.pop_cell()?,
        })
    }
}
