use crate::errors::BlumResult;
use crate::tvm_types::{FromTVMStack, TVMStack};
use crate::types::Coins;
use num_bigint::BigInt;
use tonlib_core::TonAddress;
use tonlib_core::cell::ArcCell;

/// Bonding-curve snapshot returned by `get_bcl_data`.
///
/// The 19 values are read strictly in this order; a shorter stack is a decode error.
#[derive(Debug, Clone, PartialEq)]
pub struct GetBclDataResult {
    pub total_supply: Coins,
    pub bcl_supply: Coins,
    pub liq_supply: Coins,
    pub admin: Option<TonAddress>,
    pub author_address: Option<TonAddress>,
    pub content: Option<ArcCell>,
    pub fee_address: Option<TonAddress>,
    pub trade_fee_numerator: BigInt,
    pub trade_fee_denominator: BigInt,
    pub ttl: BigInt,
    pub last_trade_date: BigInt,
    pub trading_enabled: BigInt,
    pub ton_liq_collected: Coins,
    pub referral: Option<ArcCell>,
    pub trading_close_fee: Coins,
    pub full_price_ton_need: Coins,
    pub full_price_ton_fees: Coins,
    pub router_address: Option<TonAddress>,
    pub router_pton_wallet_address: Option<TonAddress>,
}

impl GetBclDataResult {
    /// Only the exact value 1 enables trading
    pub fn is_trading_enabled(&self) -> bool { self.trading_enabled == BigInt::from(1) }
}

impl FromTVMStack for GetBclDataResult {
    fn from_stack(stack: &mut TVMStack) -> BlumResult<Self> {
        Ok(Self {
            total_supply: stack.pop_coins()?,
            bcl_supply: stack.pop_coins()?,
            liq_supply: stack.pop_coins()?,
            admin: stack.pop_address_opt()?,
            author_address: stack.pop_address_opt()?,
            content: stack.pop_cell_opt()?,
            fee_address: stack.pop_address_opt()?,
            trade_fee_numerator: stack.pop_int()?,
            trade_fee_denominator: stack.pop_int()?,
            ttl: stack.pop_int()?,
            last_trade_date: stack.pop_int()?,
            trading_enabled: stack.pop_int()?,
            ton_liq_collected: stack.pop_coins()?,
            referral: stack.pop_cell_opt()?,
            trading_close_fee: stack.pop_coins()?,
            full_price_ton_need: stack.pop_coins()?,
            full_price_ton_fees: stack.pop_coins()?,
            router_address: stack.pop_address_opt()?,
            router_pton_wallet_address: stack.pop_address_opt()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::BlumError;
    use crate::test_utils::{bcl_data_stack, BCL_AUTHOR};
    use crate::tvm_types::TVMStackValue;
    use crate::types::parse_address;
    use tokio_test::assert_err;

    #[test]
    fn test_get_bcl_data_result() -> anyhow::Result<()> {
        let mut stack = bcl_data_stack(1)?;
        assert_eq!(stack.len(), 19);

        let result = GetBclDataResult::from_stack(&mut stack)?;
        assert!(stack.is_empty());
        assert_eq!(result.total_supply, Coins::from(1_000_000_000_000_000_000u64));
        assert_eq!(result.bcl_supply, Coins::from(800_000_000_000_000_000u64));
        assert_eq!(result.liq_supply, Coins::from(200_000_000_000_000_000u64));
        assert_eq!(result.admin, None);
        assert_eq!(result.author_address, Some(parse_address(BCL_AUTHOR)?));
        assert!(result.content.is_some());
        assert_eq!(result.fee_address, Some(parse_address(BCL_AUTHOR)?));
        assert_eq!(result.trade_fee_numerator, BigInt::from(1));
        assert_eq!(result.trade_fee_denominator, BigInt::from(100));
        assert_eq!(result.ttl, BigInt::from(0));
        assert_eq!(result.last_trade_date, BigInt::from(1_717_000_000));
        assert!(result.is_trading_enabled());
        assert_eq!(result.ton_liq_collected, Coins::from(12_000_000_000u64));
        assert_eq!(result.referral, None);
        assert_eq!(result.trading_close_fee, Coins::from(100_000_000u64));
        assert_eq!(result.full_price_ton_need, Coins::from(1_500_000_000_000u64));
        assert_eq!(result.full_price_ton_fees, Coins::from(15_000_000_000u64));
        assert_eq!(result.router_address, None);
        assert_eq!(result.router_pton_wallet_address, None);
        Ok(())
    }

    #[test]
    fn test_get_bcl_data_result_trading_flag() -> anyhow::Result<()> {
        assert!(!GetBclDataResult::from_stack(&mut bcl_data_stack(0)?)?.is_trading_enabled());
        assert!(!GetBclDataResult::from_stack(&mut bcl_data_stack(-1)?)?.is_trading_enabled());
        assert!(!GetBclDataResult::from_stack(&mut bcl_data_stack(2)?)?.is_trading_enabled());
        Ok(())
    }

    #[test]
    fn test_get_bcl_data_result_18_values() -> anyhow::Result<()> {
        let mut stack = bcl_data_stack(1)?;
        stack.pop_back();
        let err = assert_err!(GetBclDataResult::from_stack(&mut stack));
        assert!(matches!(err, BlumError::TVMStackEmpty));
        assert!(err.is_decode_error());
        Ok(())
    }

    #[test]
    fn test_get_bcl_data_result_wrong_type() -> anyhow::Result<()> {
        let mut stack = bcl_data_stack(1)?;
        stack[7] = TVMStackValue::Null;
        let err = assert_err!(GetBclDataResult::from_stack(&mut stack));
        assert!(matches!(err, BlumError::TVMStackWrongType(_, _)));
        Ok(())
    }
}
