use crate::errors::{BlumError, BlumResult};
use crate::tvm_types::TVMStackValue;
use crate::types::{Coins, address_from_cell};
use num_bigint::BigInt;
use std::collections::VecDeque;
use std::fmt::{Debug, Display, Formatter};
use std::ops::{Deref, DerefMut};
use tonlib_core::TonAddress;
use tonlib_core::cell::ArcCell;

macro_rules! extract_stack_val {
    ($maybe_result:expr, $variant:ident) => {
        match $maybe_result {
            None => Err(BlumError::TVMStackEmpty),
            Some(TVMStackValue::$variant(val)) => Ok(val),
            Some(rest) => Err(BlumError::TVMStackWrongType(stringify!($variant).to_string(), format!("{rest:?}"))),
        }
    };
}

/// Get-method stack in emission order: the first value the contract returned is popped first.
///
/// Every `pop_*` removes exactly one value and fails closed on a type mismatch.
#[derive(Clone, Default, PartialEq)]
pub struct TVMStack(VecDeque<TVMStackValue>);

impl Deref for TVMStack {
    type Target = VecDeque<TVMStackValue>;
    fn deref(&self) -> &Self::Target { &self.0 }
}

impl DerefMut for TVMStack {
    fn deref_mut(&mut self) -> &mut Self::Target { &mut self.0 }
}

#[rustfmt::skip]
impl TVMStack {
    pub const EMPTY: TVMStack = TVMStack(VecDeque::new());

    pub fn new(items: Vec<TVMStackValue>) -> Self { Self(items.into()) }

    pub fn push_null(&mut self) { self.push_back(TVMStackValue::Null); }
    pub fn push_tiny_int(&mut self, value: i64) { self.push_back(TVMStackValue::TinyInt(value)); }
    pub fn push_int<T: Into<BigInt>>(&mut self, value: T) { self.push_back(TVMStackValue::Int(value.into())); }
    pub fn push_cell(&mut self, value: ArcCell) { self.push_back(TVMStackValue::Cell(value)); }
    pub fn push_cell_slice(&mut self, value: ArcCell) { self.push_back(TVMStackValue::CellSlice(value)); }
    pub fn push_tuple(&mut self, value: Vec<TVMStackValue>) { self.push_back(TVMStackValue::Tuple(value)); }

    pub fn pop_checked(&mut self) -> BlumResult<TVMStackValue> { self.pop_front().ok_or(BlumError::TVMStackEmpty) }

    pub fn pop_tiny_int(&mut self) -> BlumResult<i64> {
        match self.pop_checked()? {
            TVMStackValue::TinyInt(val) => Ok(val),
            TVMStackValue::Int(val) => i64::try_from(&val).map_err(|_| BlumError::unexpected("i64", format!("Int({val})"))),
            rest => Err(BlumError::TVMStackWrongType("TinyInt".to_string(), format!("{rest:?}"))),
        }
    }

    /// Int and TinyInt are both accepted
    pub fn pop_int(&mut self) -> BlumResult<BigInt> {
        match self.pop_checked()? {
            TVMStackValue::TinyInt(val) => Ok(BigInt::from(val)),
            TVMStackValue::Int(val) => Ok(val),
            rest => Err(BlumError::TVMStackWrongType("Int".to_string(), format!("{rest:?}"))),
        }
    }

    pub fn pop_coins(&mut self) -> BlumResult<Coins> { Coins::try_from(self.pop_int()?) }

    /// Cell and CellSlice are both accepted
    pub fn pop_cell(&mut self) -> BlumResult<ArcCell> {
        match self.pop_checked()? {
            TVMStackValue::Cell(cell) | TVMStackValue::CellSlice(cell) => Ok(cell),
            rest => Err(BlumError::TVMStackWrongType("Cell | CellSlice".to_string(), format!("{rest:?}"))),
        }
    }

    pub fn pop_cell_opt(&mut self) -> BlumResult<Option<ArcCell>> {
        if self.pop_null_if_front()? {
            return Ok(None);
        }
        Ok(Some(self.pop_cell()?))
    }

    pub fn pop_tuple(&mut self) -> BlumResult<Vec<TVMStackValue>> { extract_stack_val!(self.pop_front(), Tuple) }

    /// Std address or `addr_none` stored in a cell (`addr_none` maps to None). A Null value is rejected.
    pub fn pop_address_or_none(&mut self) -> BlumResult<Option<TonAddress>> {
        let address = address_from_cell(&*self.pop_cell()?)?;
        match address == TonAddress::NULL {
            true => Ok(None),
            false => Ok(Some(address)),
        }
    }

    /// Strict std address
    pub fn pop_address(&mut self) -> BlumResult<TonAddress> {
        match self.pop_address_or_none()? {
            Some(address) => Ok(address),
            None => Err(BlumError::unexpected("addr_std", "addr_none")),
        }
    }

    /// Null and addr_none both map to None, extern addresses are rejected
    pub fn pop_address_opt(&mut self) -> BlumResult<Option<TonAddress>> {
        if self.pop_null_if_front()? {
            return Ok(None);
        }
        self.pop_address_or_none()
    }

    /// Drops the front value if it's Null. Empty stack is an error.
    pub(crate) fn pop_null_if_front(&mut self) -> BlumResult<bool> {
        let Some(front) = self.front() else {
            return Err(BlumError::TVMStackEmpty);
        };
        if !front.is_null() {
            return Ok(false);
        }
        self.pop_front();
        Ok(true)
    }
}

impl From<Vec<TVMStackValue>> for TVMStack {
    fn from(value: Vec<TVMStackValue>) -> Self { Self::new(value) }
}

impl Debug for TVMStack {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{self}") }
}

impl Display for TVMStack {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "TVMStack[")?;
        for (pos, value) in self.iter().enumerate() {
            if pos > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{address_to_cell, build_cell, empty_cell, parse_address};
    use tokio_test::assert_err;

    const ADDRESS: &str = "EQBiMfDMivebQb052Z6yR3jHrmwNhw1kQ5bcAUOBYsK_VPuK";

    #[test]
    fn test_tvm_stack_pops_in_emission_order() -> anyhow::Result<()> {
        let mut stack = TVMStack::default();
        stack.push_tiny_int(1);
        stack.push_int(BigInt::from(2));
        stack.push_cell(empty_cell()?);

        assert_eq!(stack.pop_int()?, BigInt::from(1));
        assert_eq!(stack.pop_int()?, BigInt::from(2));
        assert_eq!(stack.pop_cell()?, empty_cell()?);
        assert!(matches!(stack.pop_int(), Err(BlumError::TVMStackEmpty)));
        Ok(())
    }

    #[test]
    fn test_tvm_stack_wrong_type() -> anyhow::Result<()> {
        let mut stack = TVMStack::new(vec![TVMStackValue::Nan, TVMStackValue::TinyInt(3)]);
        let err = assert_err!(stack.pop_int());
        assert!(matches!(err, BlumError::TVMStackWrongType(_, _)));
        assert!(err.is_decode_error());
        let err = assert_err!(stack.pop_cell());
        assert_eq!(err.to_string(), "TVMStackError: fail to pop specified type. expected: Cell | CellSlice, got: TinyInt(3)");
        Ok(())
    }

    #[test]
    fn test_tvm_stack_tiny_int_range() -> anyhow::Result<()> {
        let mut stack = TVMStack::default();
        stack.push_int(BigInt::from(i64::MAX) + 1);
        stack.push_int(BigInt::from(-5));
        assert_err!(stack.pop_tiny_int());
        assert_eq!(stack.pop_tiny_int()?, -5);
        Ok(())
    }

    #[test]
    fn test_tvm_stack_pop_coins() -> anyhow::Result<()> {
        let mut stack = TVMStack::default();
        stack.push_tiny_int(50_000_000);
        stack.push_tiny_int(-1);
        assert_eq!(stack.pop_coins()?, Coins::from(50_000_000u64));
        let err = assert_err!(stack.pop_coins());
        assert!(err.is_decode_error());
        Ok(())
    }

    #[test]
    fn test_tvm_stack_pop_cell_opt() -> anyhow::Result<()> {
        let mut stack = TVMStack::default();
        stack.push_null();
        stack.push_cell_slice(empty_cell()?);
        assert_eq!(stack.pop_cell_opt()?, None);
        assert_eq!(stack.pop_cell_opt()?, Some(empty_cell()?));
        assert!(matches!(stack.pop_cell_opt(), Err(BlumError::TVMStackEmpty)));
        Ok(())
    }

    #[test]
    fn test_tvm_stack_pop_addresses() -> anyhow::Result<()> {
        let address = parse_address(ADDRESS)?;
        let addr_none = address_to_cell(&TonAddress::NULL)?;
        // addr_extern$01 len:(## 9) external_address:(bits len)
        let extern_cell = build_cell(|builder| {
            builder.store_u8(2, 0b01)?.store_u32(9, 8)?.store_u8(8, 0xAB)?;
            Ok(())
        })?;

        let mut stack = TVMStack::default();
        stack.push_cell_slice(address_to_cell(&address)?);
        stack.push_cell(addr_none.clone());
        stack.push_null();
        stack.push_cell_slice(address_to_cell(&address)?);
        stack.push_cell(extern_cell.clone());
        stack.push_cell(addr_none.clone());

        assert_eq!(stack.pop_address()?, address);
        assert_eq!(stack.pop_address_opt()?, None);
        assert_eq!(stack.pop_address_opt()?, None);
        assert_eq!(stack.pop_address_opt()?, Some(address.clone()));
        assert_err!(stack.pop_address_opt());
        assert_err!(stack.pop_address());
        assert!(stack.is_empty());

        let mut stack = TVMStack::default();
        stack.push_cell(addr_none);
        stack.push_null();
        stack.push_cell_slice(address_to_cell(&address)?);
        assert_eq!(stack.pop_address_or_none()?, None);
        assert_err!(stack.pop_address_or_none());
        assert_eq!(stack.pop_address_or_none()?, Some(address));
        Ok(())
    }

    #[test]
    fn test_tvm_stack_display() -> anyhow::Result<()> {
        let mut stack = TVMStack::EMPTY;
        stack.push_tiny_int(1);
        stack.push_null();
        assert_eq!(stack.to_string(), "TVMStack[TinyInt(1), Null]");
        assert_eq!(stack.pop_tuple().unwrap_err().to_string(), "TVMStackError: fail to pop specified type. expected: Tuple, got: TinyInt(1)");
        Ok(())
    }
}
