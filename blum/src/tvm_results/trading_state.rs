use crate::errors::BlumResult;
use crate::tvm_results::GetBclDataResult;
use crate::tvm_types::{FromTVMStack, TVMStack};

/// Derived from a fresh `get_bcl_data` answer, never cached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradingState {
    pub trading_enabled: bool,
}

impl From<&GetBclDataResult> for TradingState {
    fn from(bcl_data: &GetBclDataResult) -> Self {
        Self {
            trading_enabled: bcl_data.is_trading_enabled(),
        }
    }
}

impl FromTVMStack for TradingState {
    fn from_stack(stack: &mut TVMStack) -> BlumResult<Self> { Ok(Self::from(&GetBclDataResult::from_stack(stack)?)) }
}
