use crate::errors::BlumResult;
use crate::messages::{OutboundMessage, SendMode};
use crate::tvm_types::TVMStack;
use async_trait::async_trait;
use tonlib_core::TonAddress;

/// Runs a get-method on a deployed contract and returns the result stack in emission order.
///
/// Errors are handed back to the caller as is: no retries, no wrapping.
#[async_trait]
pub trait GetMethodAccessor: Send + Sync {
    async fn call(&self, address: &TonAddress, method: &str, args: &TVMStack) -> BlumResult<TVMStack>;
}

/// Sends an internal message from the caller's wallet. Signing and seqno handling belong to the implementor.
#[async_trait]
pub trait InternalSender: Send + Sync {
    async fn send_internal(&self, message: &OutboundMessage, send_mode: SendMode) -> BlumResult<()>;
}
