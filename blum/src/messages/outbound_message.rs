use crate::errors::BlumResult;
use crate::types::{Coins, build_cell, store_address};
use std::fmt::{Display, Formatter};
use std::ops::BitOr;
use tonlib_core::TonAddress;
use tonlib_core::cell::ArcCell;

/// Internal message ready to be sent from a wallet: where, how much, and the body.
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    pub destination: TonAddress,
    pub value: Coins,
    pub body: ArcCell,
    pub bounce: bool,
}

impl OutboundMessage {
    pub fn new(destination: TonAddress, value: Coins, body: ArcCell) -> Self {
        Self {
            destination,
            value,
            body,
            bounce: true,
        }
    }

    /// ```raw
    /// int_msg_info$0 ihr_disabled:Bool bounce:Bool bounced:Bool
    ///   src:MsgAddressInt dest:MsgAddressInt value:CurrencyCollection
    ///   ihr_fee:Grams fwd_fee:Grams created_lt:uint64 created_at:uint32
    ///   init:(Maybe (Either StateInit ^StateInit)) body:(Either X ^X)
    /// ```
    /// `src`, fees and timestamps are zero: the validator rewrites them when the wallet sends the message.
    pub fn to_internal_msg_cell(&self) -> BlumResult<ArcCell> {
        build_cell(|builder| {
            builder.store_bit(false)?; // int_msg_info
            builder.store_bit(true)?; // ihr_disabled
            builder.store_bit(self.bounce)?;
            builder.store_bit(false)?; // bounced
            store_address(builder, &TonAddress::NULL)?;
            store_address(builder, &self.destination)?;
            self.value.store(builder)?;
            builder.store_bit(false)?; // extra currencies
            Coins::zero().store(builder)?; // ihr_fee
            Coins::zero().store(builder)?; // fwd_fee
            builder.store_u64(64, 0)?.store_u32(32, 0)?;
            builder.store_bit(false)?; // init
            builder.store_bit(true)?.store_reference(&self.body)?;
            Ok(())
        })
    }
}

/// Flags of the action-phase `SENDRAWMSG` mode byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SendMode(pub u8);

impl SendMode {
    pub const DEFAULT: SendMode = SendMode(0);
    pub const PAY_GAS_SEPARATELY: SendMode = SendMode(1);
    pub const IGNORE_ERRORS: SendMode = SendMode(2);
    pub const DESTROY_ACCOUNT_IF_ZERO: SendMode = SendMode(32);
    pub const CARRY_ALL_REMAINING_INCOMING_VALUE: SendMode = SendMode(64);
    pub const CARRY_ALL_REMAINING_BALANCE: SendMode = SendMode(128);

    pub fn contains(&self, other: SendMode) -> bool { self.0 & other.0 == other.0 }
}

impl BitOr for SendMode {
    type Output = SendMode;
    fn bitor(self, rhs: SendMode) -> SendMode { SendMode(self.0 | rhs.0) }
}

impl Display for SendMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::{BuyJettonMsg, MessageBody};
    use crate::types::{parse_address, parse_cell};

    #[test]
    fn test_send_mode_flags() {
        let mode = SendMode::PAY_GAS_SEPARATELY | SendMode::IGNORE_ERRORS;
        assert_eq!(mode, SendMode(3));
        assert!(mode.contains(SendMode::PAY_GAS_SEPARATELY));
        assert!(!mode.contains(SendMode::CARRY_ALL_REMAINING_BALANCE));
        assert_eq!(SendMode::default(), SendMode::DEFAULT);
        assert_eq!(mode.to_string(), "3");
    }

    #[test]
    fn test_internal_msg_cell() -> anyhow::Result<()> {
        let destination = parse_address("EQCmF9eJucr_iW5Xpk9Au7l-jtRWRCOxTmNESSlbJ7F-8IdI")?;
        let body = BuyJettonMsg::new(Coins::from(1u32)).to_cell()?;
        let message = OutboundMessage::new(destination.clone(), Coins::from(1_000_000_000u64), body.clone());
        assert!(message.bounce);

        let cell = message.to_internal_msg_cell()?;
        // value is 0x3b9aca00: 4 bytes
        assert_eq!(cell.bit_len(), 4 + 2 + 267 + (4 + 32) + 1 + 4 + 4 + 64 + 32 + 1 + 1);
        assert_eq!(cell.references(), &[body]);

        let (flags, dest, value) = parse_cell(&cell, |parser| {
            let flags = parser.load_u8(4)?;
            let _src = parser.load_address()?;
            Ok((flags, parser.load_address()?, Coins::load(parser)?))
        })?;
        assert_eq!(flags, 0b0110);
        assert_eq!(dest, destination);
        assert_eq!(value, Coins::from(1_000_000_000u64));
        Ok(())
    }
}
