use crate::errors::BlumResult;
use crate::tvm_types::TVMStack;

/// Trait allows pushing get-method arguments to TVMStack
pub trait ToTVMStack {
    fn to_stack(&self, stack: &mut TVMStack) -> BlumResult<()>;
}

/// Implementations of ToTVMStack for base classes
mod to_tvm_stack_impls {
    use super::*;
    use crate::types::{Coins, address_to_cell};
    use num_bigint::BigInt;
    use tonlib_core::TonAddress;
    use tonlib_core::cell::ArcCell;

    impl ToTVMStack for bool {
        fn to_stack(&self, stack: &mut TVMStack) -> BlumResult<()> {
            stack.push_tiny_int(if *self { -1 } else { 0 });
            Ok(())
        }
    }

    impl ToTVMStack for i64 {
        fn to_stack(&self, stack: &mut TVMStack) -> BlumResult<()> {
            stack.push_tiny_int(*self);
            Ok(())
        }
    }

    impl ToTVMStack for BigInt {
        fn to_stack(&self, stack: &mut TVMStack) -> BlumResult<()> {
            stack.push_int(self.clone());
            Ok(())
        }
    }

    impl ToTVMStack for Coins {
        fn to_stack(&self, stack: &mut TVMStack) -> BlumResult<()> {
            stack.push_int(BigInt::from(self));
            Ok(())
        }
    }

    impl ToTVMStack for TonAddress {
        fn to_stack(&self, stack: &mut TVMStack) -> BlumResult<()> {
            stack.push_cell_slice(address_to_cell(self)?);
            Ok(())
        }
    }

    impl ToTVMStack for ArcCell {
        fn to_stack(&self, stack: &mut TVMStack) -> BlumResult<()> {
            stack.push_cell(self.clone());
            Ok(())
        }
    }
}
