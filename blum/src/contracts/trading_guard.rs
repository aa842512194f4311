use crate::contracts::{BlumContract, BlumGetMethod};
use crate::errors::{BlumError, BlumResult};
use crate::tvm_results::TradingState;
use crate::tvm_types::TVMStack;
use std::future::Future;

/// Fetches a fresh trading state right before the guarded action and refuses to run it when
/// trading is disabled and `enforce` is set.
///
/// [`TradingGuard::run`] always pays the `get_bcl_data` round trip.
/// [`TradingGuard::run_if_enforced`] skips it when `enforce == false`.
pub struct TradingGuard<'a, C: BlumContract> {
    contract: &'a C,
    enforce: bool,
}

impl<'a, C: BlumContract> TradingGuard<'a, C> {
    pub fn new(contract: &'a C, enforce: bool) -> Self { Self { contract, enforce } }

    pub async fn run<T, F, Fut>(&self, action: F) -> BlumResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = BlumResult<T>>,
    {
        let state = self.fetch_state().await?;
        if self.enforce && !state.trading_enabled {
            return Err(BlumError::TradingDisabled);
        }
        action().await
    }

    pub async fn run_if_enforced<T, F, Fut>(&self, action: F) -> BlumResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = BlumResult<T>>,
    {
        match self.enforce {
            true => self.run(action).await,
            false => action().await,
        }
    }

    async fn fetch_state(&self) -> BlumResult<TradingState> {
        let state: TradingState = self.contract.run_get_method(BlumGetMethod::GetBclData, &TVMStack::EMPTY).await?;
        log::debug!("trading_enabled={} for {}", state.trading_enabled, self.contract.get_address());
        Ok(state)
    }
}
