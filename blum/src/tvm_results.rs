//! Typed results of the Blum get-methods, one decode sequence per method.
mod coin_price_result;
mod coins_for_tons_result;
mod get_bcl_data_result;
mod get_jetton_data_result;
mod get_wallet_address_result;
mod get_wallet_data_result;
mod tons_for_coins_result;
mod trading_state;

pub use coin_price_result::*;
pub use coins_for_tons_result::*;
pub use get_bcl_data_result::*;
pub use get_jetton_data_result::*;
pub use get_wallet_address_result::*;
pub use get_wallet_data_result::*;
pub use tons_for_coins_result::*;
pub use trading_state::*;
