mod blum_jetton_methods;
mod blum_jetton_wallet_methods;

pub use blum_jetton_methods::*;
pub use blum_jetton_wallet_methods::*;
