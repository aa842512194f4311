use crate::errors::BlumResult;
use crate::tvm_types::{FromTVMStack, TVMStack};
use tonlib_core::TonAddress;

/// `get_wallet_address(slice owner)`. `addr_none` is a valid answer and comes back as None.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetWalletAddressResult {
    pub jetton_wallet_address: Option<TonAddress>,
}

impl FromTVMStack for GetWalletAddressResult {
    fn from_stack(stack: &mut TVMStack) -> BlumResult<Self> {
        Ok(Self {
            jetton_wallet_address: stack.pop_address_or_none()?,
        })
    }
}
