use crate::errors::{BlumError, BlumResult};
use crate::types::{build_cell, parse_cell};
use tonlib_core::cell::{ArcCell, Cell, CellBuilder, CellParser, TonCellError};

/// Internal message body that opens with a 32-bit opcode.
///
/// Implementors describe the fields after the opcode; the opcode itself is written and checked here.
pub trait MessageBody: Sized {
    const OPCODE: u32;

    fn write_fields(&self, builder: &mut CellBuilder) -> Result<(), TonCellError>;
    fn read_fields(parser: &mut CellParser) -> BlumResult<Self>;

    fn to_cell(&self) -> BlumResult<ArcCell> {
        build_cell(|builder| {
            builder.store_u32(32, Self::OPCODE)?;
            self.write_fields(builder)
        })
    }

    fn from_cell(cell: &Cell) -> BlumResult<Self> {
        parse_cell(cell, |parser| {
            let opcode = parser.load_u32(32)?;
            if opcode != Self::OPCODE {
                let expected = format!("opcode {:#010x}", Self::OPCODE);
                return Err(BlumError::unexpected(expected, format!("{opcode:#010x}")));
            }
            Self::read_fields(parser)
        })
    }
}
