use crate::types::Coins;
use thiserror::Error;
use tonlib_core::cell::TonCellError;

#[macro_export]
macro_rules! bail_blum {
    ($($arg:tt)*) => {
        return Err($crate::errors::BlumError::Custom(format!($($arg)*)))
    };
}

pub type BlumResult<T> = Result<T, BlumError>;

#[derive(Error, Debug)]
pub enum BlumError {
    // Market gates
    #[error("TradingDisabled: trading is disabled on the jetton market")]
    TradingDisabled,
    #[error("MinimumAmount: ton_amount must be at least {min} nanotons, given {given}")]
    MinimumAmount { min: Coins, given: Coins },

    // TVMStack
    #[error("TVMStackError: fail to pop specified type. expected: {0}, got: {1}")]
    TVMStackWrongType(String, String),
    #[error("TVMStackError: stack is empty")]
    TVMStackEmpty,
    #[error("UnexpectedValue: expected: {expected}, actual: {actual}")]
    UnexpectedValue { expected: String, actual: String },
    #[error("CellDecode: {0}")]
    CellDecode(#[from] TonCellError),
    #[error("MalformedBoc: {0}")]
    MalformedBoc(String),

    // Encoding and input
    #[error("CellEncode: {0}")]
    CellEncode(TonCellError),
    #[error("AddressParse: {0}")]
    AddressParse(String),

    // Toncenter
    #[error("ToncenterResponse: code: {code:?}, error: {error}")]
    ToncenterResponse { code: Option<i32>, error: String },
    #[error("GetMethodExitCode: method {method} exited with code {exit_code}")]
    GetMethodExitCode { method: String, exit_code: i32 },

    #[error("CustomError: {0}")]
    Custom(String),

    #[error("{0}")]
    Base64(#[from] base64::DecodeError),
    #[error("{0}")]
    ParseBigInt(#[from] num_bigint::ParseBigIntError),
    #[error("{0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("Transport error ({0})")]
    Transport(#[from] reqwest::Error),
}

impl BlumError {
    /// Data received from a contract (stack, cell or BoC) has an unexpected shape.
    /// Failures while building outgoing cells are not decode errors.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            BlumError::TVMStackWrongType(..)
                | BlumError::TVMStackEmpty
                | BlumError::UnexpectedValue { .. }
                | BlumError::CellDecode(_)
                | BlumError::MalformedBoc(_)
        )
    }

    pub fn unexpected<E: ToString, A: ToString>(expected: E, actual: A) -> Self {
        BlumError::UnexpectedValue {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{build_cell, empty_cell, parse_cell};
    use tokio_test::assert_err;

    fn make_custom_error() -> BlumResult<()> {
        let method = "coin_price";
        bail_blum!("no accessor for {method}");
    }

    #[test]
    fn test_bail_blum() {
        let err = make_custom_error().unwrap_err();
        assert_eq!(err.to_string(), "CustomError: no accessor for coin_price");
        assert!(!err.is_decode_error());
    }

    #[test]
    fn test_decode_error_classification() {
        assert!(BlumError::TVMStackEmpty.is_decode_error());
        assert!(BlumError::unexpected("std address", "addr_none").is_decode_error());
        assert!(BlumError::MalformedBoc("truncated header".to_string()).is_decode_error());
        assert!(!BlumError::AddressParse("'x': bad length".to_string()).is_decode_error());
        assert!(!BlumError::TradingDisabled.is_decode_error());
        let err = BlumError::MinimumAmount {
            min: Coins::from(50_000_000u64),
            given: Coins::from(49_999_999u64),
        };
        assert!(!err.is_decode_error());
        assert!(err.to_string().contains("50000000"), "{err}");
    }

    #[test]
    fn test_cell_errors_classification() -> anyhow::Result<()> {
        let decode = assert_err!(parse_cell(&*empty_cell()?, |parser| Ok(parser.load_u32(32)?)));
        assert!(matches!(decode, BlumError::CellDecode(_)));
        assert!(decode.is_decode_error());

        // 17 * 64 bits exceed the cell capacity
        let encode = assert_err!(build_cell(|builder| {
            for _ in 0..17 {
                builder.store_u64(64, 0)?;
            }
            Ok(())
        }));
        assert!(matches!(encode, BlumError::CellEncode(_)));
        assert!(!encode.is_decode_error());
        Ok(())
    }
}
