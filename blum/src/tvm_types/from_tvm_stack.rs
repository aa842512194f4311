use crate::errors::{BlumError, BlumResult};
use crate::tvm_types::TVMStack;
use crate::types::Coins;
use num_bigint::BigInt;
use tonlib_core::TonAddress;
use tonlib_core::cell::ArcCell;

/// Trait allows reading data from TVMStack
/// values are consumed in the order the get-method returned them
#[rustfmt::skip]
pub trait FromTVMStack: Sized {
    fn from_stack(stack: &mut TVMStack) -> BlumResult<Self>;
}

impl FromTVMStack for bool {
    fn from_stack(stack: &mut TVMStack) -> BlumResult<Self> { Ok(stack.pop_int()? != BigInt::ZERO) }
}

impl FromTVMStack for BigInt {
    fn from_stack(stack: &mut TVMStack) -> BlumResult<Self> { stack.pop_int() }
}

macro_rules! from_tvm_stack_primitives_impl {
    ($($t:ty),*) => {
        $(
            impl FromTVMStack for $t {
                fn from_stack(stack: &mut TVMStack) -> BlumResult<Self> {
                    let num = stack.pop_int()?;
                    <$t>::try_from(&num).map_err(|_| BlumError::UnexpectedValue {
                        expected: stringify!($t).to_string(),
                        actual: format!("num {num}"),
                    })
                }
            }
        )*
    };
}
from_tvm_stack_primitives_impl!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

impl FromTVMStack for Coins {
    fn from_stack(stack: &mut TVMStack) -> BlumResult<Self> { stack.pop_coins() }
}

impl FromTVMStack for ArcCell {
    fn from_stack(stack: &mut TVMStack) -> BlumResult<Self> { stack.pop_cell() }
}

impl FromTVMStack for TonAddress {
    fn from_stack(stack: &mut TVMStack) -> BlumResult<Self> { stack.pop_address() }
}

impl<T: FromTVMStack> FromTVMStack for Option<T> {
    fn from_stack(stack: &mut TVMStack) -> BlumResult<Self> {
        if stack.pop_null_if_front()? {
            return Ok(None);
        }
        Ok(Some(T::from_stack(stack)?))
    }
}
