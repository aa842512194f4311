use crate::errors::{BlumError, BlumResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize)]
pub struct RunGetMethodRequest<'a> {
    pub address: String,
    pub method: &'a str,
    /// `[type, value]` pairs: `num`, `tvm.Slice`, `tvm.Cell`
    pub stack: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendBocRequest {
    pub boc: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ToncenterResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub error: Option<String>,
    pub code: Option<i32>,
}

impl<T> ToncenterResponse<T> {
    pub fn into_result(self) -> BlumResult<T> {
        match (self.ok, self.result) {
            (true, Some(result)) => Ok(result),
            _ => Err(BlumError::ToncenterResponse {
                code: self.code,
                error: self.error.unwrap_or_else(|| "empty result".to_string()),
            }),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunGetMethodResult {
    pub exit_code: i32,
    #[serde(default)]
    pub gas_used: Option<i64>,
    /// `[type, value]` pairs as returned by toncenter
    pub stack: Vec<Value>,
}
