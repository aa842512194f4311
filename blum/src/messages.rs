//! Message bodies understood by the Blum market and jetton wallet contracts.
mod buy_jetton_msg;
mod jetton_burn_msg;
mod jetton_sell_msg;
mod jetton_transfer_msg;
mod message_body;
mod outbound_message;

pub use buy_jetton_msg::*;
pub use jetton_burn_msg::*;
pub use jetton_sell_msg::*;
pub use jetton_transfer_msg::*;
pub use message_body::*;
pub use outbound_message::*;

pub mod opcodes {
    pub const BUY: u32 = 0xaf750d34;
    pub const SELL: u32 = 0x742b36d8;
    pub const TRANSFER: u32 = 0x0f8a7ea5;
    pub const TRANSFER_NOTIFICATION: u32 = 0x7362d09c;
    pub const INTERNAL_TRANSFER: u32 = 0x178d4519;
    pub const BURN: u32 = 0x595f07bc;
    pub const EXCESSES: u32 = 0xd53276db;
}
