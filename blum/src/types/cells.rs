use crate::errors::{BlumError, BlumResult};
use std::str::FromStr;
use std::sync::Arc;
use tonlib_core::TonAddress;
use tonlib_core::cell::{ArcCell, Cell, CellBuilder, CellParser, TonCellError};

/// Runs `write` on a fresh builder. Any builder failure is reported as [`BlumError::CellEncode`].
pub fn build_cell<F>(write: F) -> BlumResult<ArcCell>
where
    F: FnOnce(&mut CellBuilder) -> Result<(), TonCellError>,
{
    let mut builder = CellBuilder::new();
    write(&mut builder).map_err(BlumError::CellEncode)?;
    let cell = builder.build().map_err(BlumError::CellEncode)?;
    Ok(Arc::new(cell))
}

/// Runs `read` on a parser over `cell`. Parser failures convert into [`BlumError::CellDecode`].
pub fn parse_cell<T, F>(cell: &Cell, read: F) -> BlumResult<T>
where
    F: FnOnce(&mut CellParser) -> BlumResult<T>,
{
    let mut parser = cell.parser();
    read(&mut parser)
}

pub fn empty_cell() -> BlumResult<ArcCell> { build_cell(|_| Ok(())) }

/// `TonAddress::NULL` is written as `addr_none`
pub fn store_address(builder: &mut CellBuilder, address: &TonAddress) -> Result<(), TonCellError> {
    match address == &TonAddress::NULL {
        true => builder.store_u8(2, 0)?,
        false => builder.store_address(address)?,
    };
    Ok(())
}

pub fn address_to_cell(address: &TonAddress) -> BlumResult<ArcCell> {
    build_cell(|builder| store_address(builder, address))
}

/// Std address or `addr_none` (as `TonAddress::NULL`). Extern and anycast addresses are rejected.
pub fn address_from_cell(cell: &Cell) -> BlumResult<TonAddress> { parse_cell(cell, |parser| Ok(parser.load_address()?)) }

pub fn parse_address(address: &str) -> BlumResult<TonAddress> {
    TonAddress::from_str(address).map_err(|err| BlumError::AddressParse(format!("'{address}': {err}")))
}

/// `Maybe ^Cell`
pub fn store_maybe_ref(builder: &mut CellBuilder, cell: &Option<ArcCell>) -> Result<(), TonCellError> {
    match cell {
        Some(cell) => builder.store_bit(true)?.store_reference(cell)?,
        None => builder.store_bit(false)?,
    };
    Ok(())
}

pub fn load_maybe_ref(parser: &mut CellParser) -> Result<Option<ArcCell>, TonCellError> {
    match parser.load_bit()? {
        true => Ok(Some(parser.next_reference()?)),
        false => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_err;

    const ADDRESS: &str = "EQBiMfDMivebQb052Z6yR3jHrmwNhw1kQ5bcAUOBYsK_VPuK";

    #[test]
    fn test_address_cells() -> anyhow::Result<()> {
        let address = parse_address(ADDRESS)?;
        let cell = address_to_cell(&address)?;
        assert_eq!(cell.bit_len(), 267);
        assert_eq!(address_from_cell(&cell)?, address);

        let none = address_to_cell(&TonAddress::NULL)?;
        assert_eq!(none.bit_len(), 2);
        assert_eq!(address_from_cell(&none)?, TonAddress::NULL);

        let err = assert_err!(address_from_cell(&*empty_cell()?));
        assert!(err.is_decode_error(), "{err}");
        let err = assert_err!(parse_address("not an address"));
        assert!(!err.is_decode_error());
        Ok(())
    }

    #[test]
    fn test_maybe_ref() -> anyhow::Result<()> {
        let payload = build_cell(|builder| {
            builder.store_u32(32, 0xBEEF)?;
            Ok(())
        })?;
        let cell = build_cell(|builder| {
            store_maybe_ref(builder, &Some(payload.clone()))?;
            store_maybe_ref(builder, &None)
        })?;
        assert_eq!(cell.bit_len(), 2);
        assert_eq!(cell.references().len(), 1);

        let (first, second) = parse_cell(&cell, |parser| Ok((load_maybe_ref(parser)?, load_maybe_ref(parser)?)))?;
        assert_eq!(first, Some(payload));
        assert_eq!(second, None);
        Ok(())
    }
}
