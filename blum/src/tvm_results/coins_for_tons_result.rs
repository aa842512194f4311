use crate::errors::BlumResult;
use crate::tvm_types::{FromTVMStack, TVMStack};
use crate::types::Coins;

/// Quote of `coins_for_tons(int tons)`: fees in nanotons, then jetton units received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinsForTonsResult {
    pub fees: Coins,
    pub coins: Coins,
}

impl FromTVMStack for CoinsForTonsResult {
    fn from_stack(stack: &mut TVMStack) -> BlumResult<Self> {
        Ok(Self {
            fees: stack.pop_coins()?,
            coins: stack.pop_coins()?,
        })
    }
}
