use crate::errors::BlumResult;
use crate::messages::{MessageBody, opcodes};
use crate::types::{Coins, store_address};
use tonlib_core::TonAddress;
use tonlib_core::cell::{CellBuilder, CellParser, TonCellError};

/// ```raw
/// burn#595f07bc query_id:uint64 amount:(VarUInteger 16)
///   owner_address:MsgAddress response_destination:MsgAddress
/// = InternalMsgBody;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JettonBurnMsg {
    pub query_id: u64,
    pub amount: Coins,
    pub owner_address: TonAddress,
    pub response_address: TonAddress,
}

impl MessageBody for JettonBurnMsg {
    const OPCODE: u32 = opcodes::BURN;

    fn write_fields(&self, builder: &mut CellBuilder) -> Result<(), TonCellError> {
        builder.store_u64(64, self.query_id)?;
        self.amount.store(builder)?;
        store_address(builder, &self.owner_address)?;
        store_address(builder, &self.response_address)
    }

    fn read_fields(parser: &mut CellParser) -> BlumResult<Self> {
        Ok(Self {
            query_id: parser.load_u64(64)?,
            amount: Coins::load(parser)?,
            owner_address: parser.load_address()?,
            response_address: parser.load_address()?,
        })
    }
}
