use crate::errors::BlumResult;
use crate::tvm_types::{FromTVMStack, TVMStack};
use num_bigint::BigInt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoinPriceResult {
    pub coin_price: BigInt,
}

impl FromTVMStack for CoinPriceResult {
    fn from_stack(stack: &mut TVMStack) -> BlumResult<Self> {
        Ok(Self {
            coin_price: stack.pop_int()?,
        })
    }
}
