mod blum_contract;
mod contract_accessor;
mod contract_methods;
mod contracts_impl;
mod trading_guard;

pub use blum_contract::*;
pub use contract_accessor::*;
pub use contract_methods::*;
pub use contracts_impl::*;
pub use trading_guard::*;
