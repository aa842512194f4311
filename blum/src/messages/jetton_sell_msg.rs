use crate::errors::BlumResult;
use crate::messages::{MessageBody, opcodes};
use crate::types::{Coins, load_maybe_ref, store_maybe_ref};
use tonlib_core::cell::{ArcCell, CellBuilder, CellParser, TonCellError};

/// ```raw
/// sell#742b36d8 query_id:uint64 amount:(VarUInteger 16) min_receive:(VarUInteger 16)
///   referral:(Maybe ^Cell)
/// = InternalMsgBody;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JettonSellMsg {
    pub query_id: u64,
    pub amount: Coins,
    pub min_receive: Coins,
    pub referral: Option<ArcCell>,
}

impl MessageBody for JettonSellMsg {
    const OPCODE: u32 = opcodes::SELL;

    fn write_fields(&self, builder: &mut CellBuilder) -> Result<(), TonCellError> {
        builder.store_u64(64, self.query_id)?;
        self.amount.store(builder)?;
        self.min_receive.store(builder)?;
        store_maybe_ref(builder, &self.referral)
    }

    fn read_fields(parser: &mut CellParser) -> BlumResult<Self> {
        Ok(Self {
            query_id: parser.load_u64(64)?,
            amount: Coins::load(parser)?,
            min_receive: Coins::load(parser)?,
            referral: load_maybe_ref(parser)?,
        })
    }
}
