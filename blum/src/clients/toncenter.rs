mod builder;
mod toncenter_stack;
mod types;

pub use builder::*;
pub use toncenter_stack::*;
pub use types::*;

use crate::contracts::GetMethodAccessor;
use crate::errors::{BlumError, BlumResult};
use crate::tvm_types::TVMStack;
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::env;
use tonlib_core::TonAddress;

pub const TONCENTER_ENDPOINT_ENV: &str = "TONCENTER_ENDPOINT";
pub const TONCENTER_API_KEY_ENV: &str = "TONCENTER_API_KEY";

/// [`GetMethodAccessor`] over toncenter HTTP API v2 (`POST {endpoint}/runGetMethod`).
/// Also broadcasts signed external messages via `POST {endpoint}/sendBoc`.
#[derive(Clone)]
pub struct ToncenterAccessor {
    pub(super) endpoint: String,
    pub(super) api_key: Option<String>,
    pub(super) http_client: reqwest::Client,
}

impl ToncenterAccessor {
    pub const MAINNET_ENDPOINT: &'static str = "https://toncenter.com/api/v2";
    pub const TESTNET_ENDPOINT: &'static str = "https://testnet.toncenter.com/api/v2";

    pub fn builder() -> Builder { Builder::new() }

    /// Reads `TONCENTER_ENDPOINT` (mainnet if unset) and `TONCENTER_API_KEY` (optional)
    pub fn from_env() -> BlumResult<Self> {
        let mut builder = Self::builder();
        if let Ok(endpoint) = env::var(TONCENTER_ENDPOINT_ENV) {
            builder = builder.with_endpoint(endpoint);
        }
        if let Ok(api_key) = env::var(TONCENTER_API_KEY_ENV) {
            builder = builder.with_api_key(api_key);
        }
        builder.build()
    }

    pub fn endpoint(&self) -> &str { &self.endpoint }

    /// Broadcasts a serialized external message (standard base64 BoC)
    pub async fn send_boc(&self, boc: &str) -> BlumResult<()> {
        let request = SendBocRequest { boc: boc.to_string() };
        let result: serde_json::Value = self.post("sendBoc", &request).await?;
        log::debug!("sendBoc accepted: {result}");
        Ok(())
    }

    async fn post<Req: Serialize, Res: DeserializeOwned>(&self, api_method: &str, request: &Req) -> BlumResult<Res> {
        let url = format!("{}/{api_method}", self.endpoint.trim_end_matches('/'));
        let mut http_request = self.http_client.post(&url).json(request);
        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("X-API-Key", api_key);
        }
        let body = http_request.send().await?.text().await?;
        log::trace!("{api_method} response: {body}");
        let response: ToncenterResponse<Res> = serde_json::from_str(&body)?;
        response.into_result()
    }
}

#[async_trait]
impl GetMethodAccessor for ToncenterAccessor {
    async fn call(&self, address: &TonAddress, method: &str, args: &TVMStack) -> BlumResult<TVMStack> {
        let request = RunGetMethodRequest {
            address: address.to_string(),
            method,
            stack: stack_to_toncenter(args)?,
        };
        let result: RunGetMethodResult = self.post("runGetMethod", &request).await?;
        log::debug!("runGetMethod {method} on {address}: exit_code={}, gas_used={:?}", result.exit_code, result.gas_used);
        // 1 is the alternative success code
        if result.exit_code != 0 && result.exit_code != 1 {
            return Err(BlumError::GetMethodExitCode {
                method: method.to_string(),
                exit_code: result.exit_code,
            });
        }
        stack_from_toncenter(&result.stack)
    }
}
