use crate::errors::BlumResult;
use crate::messages::{MessageBody, opcodes};
use crate::types::{Coins, load_maybe_ref, store_address, store_maybe_ref};
use tonlib_core::TonAddress;
use tonlib_core::cell::{ArcCell, CellBuilder, CellParser, TonCellError};

/// ```raw
/// buy#af750d34 query_id:uint64 limit:(VarUInteger 16)
///   referral:(Maybe ^Cell)
///   buyer_address:MsgAddressInt?
/// = InternalMsgBody;
/// ```
/// `buyer_address` has no presence bit: it's appended only when set.
#[derive(Debug, Clone, PartialEq)]
pub struct BuyJettonMsg {
    pub query_id: u64,
    pub limit: Coins,
    pub referral: Option<ArcCell>,
    pub buyer_address: Option<TonAddress>,
}

impl BuyJettonMsg {
    pub fn new(limit: Coins) -> Self {
        Self {
            query_id: 0,
            limit,
            referral: None,
            buyer_address: None,
        }
    }
}

impl MessageBody for BuyJettonMsg {
    const OPCODE: u32 = opcodes::BUY;

    fn write_fields(&self, builder: &mut CellBuilder) -> Result<(), TonCellError> {
        builder.store_u64(64, self.query_id)?;
        self.limit.store(builder)?;
        store_maybe_ref(builder, &self.referral)?;
        if let Some(buyer_address) = &self.buyer_address {
            store_address(builder, buyer_address)?;
        }
        Ok(())
    }

    fn read_fields(parser: &mut CellParser) -> BlumResult<Self> {
        let query_id = parser.load_u64(64)?;
        let limit = Coins::load(parser)?;
        let referral = load_maybe_ref(parser)?;
        let buyer_address = match parser.remaining_bits() {
            0 => None,
            _ => Some(parser.load_address()?),
        };
        Ok(Self {
            query_id,
            limit,
            referral,
            buyer_address,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{build_cell, parse_address, parse_cell};

    #[test]
    fn test_buy_jetton_msg_layout() -> anyhow::Result<()> {
        let msg = BuyJettonMsg::new(Coins::from(1_600_000_000u64));
        let cell = msg.to_cell()?;
        // opcode + query_id + (4 + 4 * 8) coins + maybe bit
        assert_eq!(cell.bit_len(), 32 + 64 + 36 + 1);
        assert!(cell.references().is_empty());

        assert_eq!(parse_cell(&cell, |parser| Ok(parser.load_u32(32)?))?, 0xaf750d34);
        assert_eq!(BuyJettonMsg::from_cell(&cell)?, msg);
        Ok(())
    }

    #[test]
    fn test_buy_jetton_msg_with_referral_and_buyer() -> anyhow::Result<()> {
        let referral = build_cell(|builder| {
            builder.store_u32(16, 0xBEEF)?;
            Ok(())
        })?;
        let msg = BuyJettonMsg {
            query_id: 42,
            limit: Coins::zero(),
            referral: Some(referral),
            buyer_address: Some(parse_address("UQD1KZNlg7m-8ymJqNKSA15nmc2ftTS1kyUlSuGonqr0bFas")?),
        };
        let cell = msg.to_cell()?;
        assert_eq!(cell.bit_len(), 32 + 64 + 4 + 1 + 267);
        assert_eq!(cell.references().len(), 1);
        assert_eq!(BuyJettonMsg::from_cell(&cell)?, msg);
        Ok(())
    }

    #[test]
    fn test_buy_jetton_msg_wrong_opcode() -> anyhow::Result<()> {
        let cell = build_cell(|builder| {
            builder.store_u32(32, 0x742b36d8)?.store_u64(64, 0)?.store_u8(5, 0)?;
            Ok(())
        })?;
        let err = tokio_test::assert_err!(BuyJettonMsg::from_cell(&cell));
        assert_eq!(err.to_string(), "UnexpectedValue: expected: opcode 0xaf750d34, actual: 0x742b36d8");
        Ok(())
    }
}
