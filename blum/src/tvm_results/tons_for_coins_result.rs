use crate::errors::BlumResult;
use crate::tvm_types::{FromTVMStack, TVMStack};
use crate::types::Coins;

/// Quote of `tons_for_coins(int coins)`: fees, then nanotons received
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TonsForCoinsResult {
    pub fees: Coins,
    pub tons: Coins,
}

impl FromTVMStack for TonsForCoinsResult {
    fn from_stack(stack: &mut TVMStack) -> BlumResult<Self> {
        Ok(Self {
            fees: stack.pop_coins()?,
            tons: stack.pop_coins()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::assert_err;

    #[test]
    fn test_tons_for_coins_result() -> anyhow::Result<()> {
        let mut stack = TVMStack::default();
        stack.push_tiny_int(7_000_000);
        stack.push_tiny_int(420_000_000);
        stack.push_tiny_int(99);
        let result = TonsForCoinsResult::from_stack(&mut stack)?;
        assert_eq!(result.fees, Coins::from(7_000_000u64));
        assert_eq!(result.tons, Coins::from(420_000_000u64));
        assert_eq!(stack.len(), 1);

        let mut stack = TVMStack::default();
        stack.push_tiny_int(7_000_000);
        assert_err!(TonsForCoinsResult::from_stack(&mut stack));
        Ok(())
    }
}
