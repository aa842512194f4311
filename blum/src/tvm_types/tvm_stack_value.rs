use num_bigint::BigInt;
use std::fmt::{Debug, Display, Formatter};
use tonlib_core::cell::ArcCell;

/// Single entry of a get-method result (or argument) stack.
///
/// `CellSlice` holds the full cell the slice covers; partial slices are never produced by the
/// contracts this crate talks to.
#[derive(Clone, PartialEq)]
pub enum TVMStackValue {
    Null,
    TinyInt(i64),
    Int(BigInt),
    Nan,
    Cell(ArcCell),
    CellSlice(ArcCell),
    Tuple(Vec<TVMStackValue>),
}

impl TVMStackValue {
    pub fn is_null(&self) -> bool { matches!(self, TVMStackValue::Null) }

    pub fn type_name(&self) -> &'static str {
        match self {
            TVMStackValue::Null => "Null",
            TVMStackValue::TinyInt(_) => "TinyInt",
            TVMStackValue::Int(_) => "Int",
            TVMStackValue::Nan => "Nan",
            TVMStackValue::Cell(_) => "Cell",
            TVMStackValue::CellSlice(_) => "CellSlice",
            TVMStackValue::Tuple(_) => "Tuple",
        }
    }
}

impl Debug for TVMStackValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{self}") }
}

impl Display for TVMStackValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TVMStackValue::Null => write!(f, "Null"),
            TVMStackValue::TinyInt(v) => write!(f, "TinyInt({v})"),
            TVMStackValue::Int(v) => write!(f, "Int({v})"),
            TVMStackValue::Nan => write!(f, "Nan"),
            TVMStackValue::Cell(v) => write!(f, "Cell(bits: {}, refs: {})", v.bit_len(), v.references().len()),
            TVMStackValue::CellSlice(v) => write!(f, "CellSlice(bits: {}, refs: {})", v.bit_len(), v.references().len()),
            TVMStackValue::Tuple(v) => write!(f, "Tuple{v:?}"),
        }
    }
}

#[rustfmt::skip]
mod traits_impl {
    use super::*;

    impl From<i64> for TVMStackValue { fn from(value: i64) -> Self { TVMStackValue::TinyInt(value) } }
    impl From<BigInt> for TVMStackValue { fn from(value: BigInt) -> Self { TVMStackValue::Int(value) } }
    impl From<ArcCell> for TVMStackValue { fn from(value: ArcCell) -> Self { TVMStackValue::Cell(value) } }
    impl From<Vec<TVMStackValue>> for TVMStackValue { fn from(value: Vec<TVMStackValue>) -> Self { TVMStackValue::Tuple(value) } }
}
