use crate::errors::BlumResult;
use crate::messages::{MessageBody, opcodes};
use crate::types::{Coins, load_maybe_ref, store_address, store_maybe_ref};
use tonlib_core::TonAddress;
use tonlib_core::cell::{ArcCell, CellBuilder, CellParser, TonCellError};

/// ```raw
/// transfer#0f8a7ea5 query_id:uint64 amount:(VarUInteger 16) destination:MsgAddress
///   response_destination:MsgAddress custom_payload:(Maybe ^Cell)
///   forward_ton_amount:(VarUInteger 16) forward_payload:(Maybe ^Cell)
/// = InternalMsgBody;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JettonTransferMsg {
    pub query_id: u64,
    pub amount: Coins,
    pub destination: TonAddress,
    pub response_address: TonAddress,
    pub custom_payload: Option<ArcCell>,
    pub forward_amount: Coins,
    pub forward_payload: Option<ArcCell>,
}

impl MessageBody for JettonTransferMsg {
    const OPCODE: u32 = opcodes::TRANSFER;

    fn write_fields(&self, builder: &mut CellBuilder) -> Result<(), TonCellError> {
        builder.store_u64(64, self.query_id)?;
        self.amount.store(builder)?;
        store_address(builder, &self.destination)?;
        store_address(builder, &self.response_address)?;
        store_maybe_ref(builder, &self.custom_payload)?;
        self.forward_amount.store(builder)?;
        store_maybe_ref(builder, &self.forward_payload)
    }

    fn read_fields(parser: &mut CellParser) -> BlumResult<Self> {
        Ok(Self {
            query_id: parser.load_u64(64)?,
            amount: Coins::load(parser)?,
            destination: parser.load_address()?,
            response_address: parser.load_address()?,
            custom_payload: load_maybe_ref(parser)?,
            forward_amount: Coins::load(parser)?,
            forward_payload: load_maybe_ref(parser)?,
        })
    }
}
