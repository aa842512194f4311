use crate::contracts::GetMethodAccessor;
use crate::errors::BlumResult;
use crate::tvm_types::{FromTVMStack, TVMStack};
use async_trait::async_trait;
use tonlib_core::TonAddress;
use std::sync::Arc;
use strum::{AsRefStr, Display};

/// Get-methods exposed by the Blum market and wallet contracts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum BlumGetMethod {
    GetJettonData,
    GetWalletAddress,
    CoinPrice,
    CoinsForTons,
    TonsForCoins,
    GetBclData,
    GetWalletData,
}

#[async_trait]
pub trait BlumContract: Send + Sync + Sized {
    // derive implementation automatically using blum_contract! macro
    fn from_accessor(accessor: Arc<dyn GetMethodAccessor>, address: TonAddress) -> Self;
    fn get_address(&self) -> &TonAddress;
    fn get_accessor(&self) -> &Arc<dyn GetMethodAccessor>;

    fn new(accessor: Arc<dyn GetMethodAccessor>, address: TonAddress) -> Self { Self::from_accessor(accessor, address) }

    async fn run_get_method<T: FromTVMStack + Send>(&self, method: BlumGetMethod, args: &TVMStack) -> BlumResult<T> {
        let address = self.get_address();
        log::debug!("running get-method {method} on {address} with {} args", args.len());
        let mut stack = self.get_accessor().call(address, method.as_ref(), args).await?;
        log::trace!("get-method {method} on {address} returned {stack}");
        T::from_stack(&mut stack)
    }
}

#[macro_export]
macro_rules! blum_contract {
    ($name:ident $( : $($traits:tt)+ )? ) => {
        #[derive(Clone)]
        pub struct $name {
            address: $crate::tonlib_core::TonAddress,
            accessor: std::sync::Arc<dyn $crate::contracts::GetMethodAccessor>,
        }

        impl $crate::contracts::BlumContract for $name {
            fn from_accessor(
                accessor: std::sync::Arc<dyn $crate::contracts::GetMethodAccessor>,
                address: $crate::tonlib_core::TonAddress,
            ) -> Self {
                Self { address, accessor }
            }
            fn get_address(&self) -> &$crate::tonlib_core::TonAddress { &self.address }
            fn get_accessor(&self) -> &std::sync::Arc<dyn $crate::contracts::GetMethodAccessor> { &self.accessor }
        }

        impl std::fmt::Debug for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}[{}]", stringify!($name), self.address)
            }
        }

        $(
            $crate::__impl_traits_for_contract!($name : $($traits)+);
        )?
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! __impl_traits_for_contract {
    ($name:ident : $trait:path) => {
        impl $trait for $name {}
    };

    ($name:ident : $trait:path , $($rest:tt)+) => {
        impl $trait for $name {}
        $crate::__impl_traits_for_contract!($name : $($rest)+);
    };
}
