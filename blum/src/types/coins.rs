use crate::bail_blum;
use crate::errors::{BlumError, BlumResult};
use num_bigint::{BigInt, BigUint};
use num_traits::{ToPrimitive, Zero};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tonlib_core::cell::{CellBuilder, CellParser, TonCellError};

const NANO_DECIMALS: usize = 9;

/// Non-negative amount of nanotons or jetton units with unbounded integer arithmetic.
///
/// Serialized as `VarUInteger 16`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Coins(BigUint);

impl Coins {
    pub fn new<T: Into<BigUint>>(amount: T) -> Self { Self(amount.into()) }

    pub fn zero() -> Self { Self(BigUint::zero()) }

    /// `"1.05"` -> 1_050_000_000 nanotons
    pub fn from_ton_str(ton: &str) -> BlumResult<Self> {
        let (int_part, frac_part) = ton.trim().split_once('.').unwrap_or((ton.trim(), ""));
        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if int_part.is_empty() && frac_part.is_empty() || !all_digits(int_part) || !all_digits(frac_part) {
            bail_blum!("Can't parse '{ton}' as TON amount");
        }
        if frac_part.len() > NANO_DECIMALS {
            bail_blum!("Can't parse '{ton}' as TON amount: more than {NANO_DECIMALS} decimals");
        }
        let nano_str = format!("{int_part}{frac_part:0<width$}", width = NANO_DECIMALS);
        Ok(Self(BigUint::from_str(&nano_str)?))
    }

    /// nanotons to decimal TON string, trailing zeros are trimmed
    pub fn to_ton_str(&self) -> String {
        let digits = self.0.to_string();
        let nano_str = format!("{digits:0>width$}", width = NANO_DECIMALS + 1);
        let (int_part, frac_part) = nano_str.split_at(nano_str.len() - NANO_DECIMALS);
        let frac_part = frac_part.trim_end_matches('0');
        match frac_part.is_empty() {
            true => int_part.to_string(),
            false => format!("{int_part}.{frac_part}"),
        }
    }

    pub fn inner(&self) -> &BigUint { &self.0 }
    pub fn into_inner(self) -> BigUint { self.0 }
    pub fn is_zero(&self) -> bool { self.0.is_zero() }
    pub fn to_u128(&self) -> Option<u128> { self.0.to_u128() }

    pub fn checked_add(&self, other: &Coins) -> Coins { Coins(&self.0 + &other.0) }

    pub fn checked_sub(&self, other: &Coins) -> BlumResult<Coins> {
        if self.0 < other.0 {
            bail_blum!("underflow: {} - {}", self.0, other.0);
        }
        Ok(Coins(&self.0 - &other.0))
    }

    /// `self * numerator / denominator`, rounded down
    pub fn scaled(&self, numerator: u64, denominator: u64) -> BlumResult<Coins> {
        if denominator == 0 {
            bail_blum!("division by zero: {} * {numerator} / 0", self.0);
        }
        Ok(Coins(&self.0 * numerator / denominator))
    }

    /// lower bound accepted by the caller: `self * (100 - slippage_percent) / 100`, rounded down
    pub fn apply_slippage(&self, slippage_percent: u8) -> BlumResult<Coins> {
        if slippage_percent > 100 {
            bail_blum!("slippage must be in 0..=100 percent, got {slippage_percent}");
        }
        self.scaled(100 - slippage_percent as u64, 100)
    }

    pub fn store(&self, builder: &mut CellBuilder) -> Result<(), TonCellError> {
        builder.store_coins(&self.0)?;
        Ok(())
    }

    pub fn load(parser: &mut CellParser) -> Result<Self, TonCellError> { Ok(Self(parser.load_coins()?)) }
}

#[rustfmt::skip]
mod traits_impl {
    use super::*;
    use std::ops::Add;

    impl From<u32> for Coins { fn from(value: u32) -> Self { Coins::new(value) } }
    impl From<u64> for Coins { fn from(value: u64) -> Self { Coins::new(value) } }
    impl From<u128> for Coins { fn from(value: u128) -> Self { Coins::new(value) } }
    impl From<BigUint> for Coins { fn from(value: BigUint) -> Self { Coins(value) } }
    impl From<Coins> for BigInt { fn from(value: Coins) -> Self { BigInt::from(value.0) } }
    impl From<&Coins> for BigInt { fn from(value: &Coins) -> Self { BigInt::from(value.0.clone()) } }

    impl TryFrom<&BigInt> for Coins {
        type Error = BlumError;
        fn try_from(value: &BigInt) -> Result<Self, Self::Error> {
            match value.to_biguint() {
                Some(val) => Ok(Coins(val)),
                None => Err(BlumError::unexpected("non-negative coins", value)),
            }
        }
    }

    impl TryFrom<BigInt> for Coins {
        type Error = BlumError;
        fn try_from(value: BigInt) -> Result<Self, Self::Error> { Coins::try_from(&value) }
    }

    impl Add for Coins { type Output = Coins; fn add(self, rhs: Coins) -> Coins { Coins(self.0 + rhs.0) } }
    impl Add<&Coins> for &Coins { type Output = Coins; fn add(self, rhs: &Coins) -> Coins { self.checked_add(rhs) } }

    impl FromStr for Coins {
        type Err = BlumError;
        fn from_str(amount: &str) -> Result<Self, Self::Err> { Ok(Coins(BigUint::from_str(amount)?)) }
    }

    impl Display for Coins {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result { write!(f, "{}", self.0) }
    }
}
