use crate::clients::toncenter::ToncenterAccessor;
use crate::errors::BlumResult;
use derive_setters::Setters;
use reqwest::header;
use reqwest::header::{HeaderMap, HeaderValue};
use std::time::Duration;

#[derive(Setters)]
#[setters(prefix = "with_", strip_option)]
pub struct Builder {
    endpoint: String,
    api_key: Option<String>,
    timeout: Duration,
    http_client: Option<reqwest::Client>,
}

impl Builder {
    pub(super) fn new() -> Self {
        Self {
            endpoint: ToncenterAccessor::MAINNET_ENDPOINT.to_string(),
            api_key: None,
            timeout: Duration::from_secs(10),
            http_client: None,
        }
    }

    /// `timeout` is ignored when a custom `http_client` is provided
    pub fn build(self) -> BlumResult<ToncenterAccessor> {
        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let headers = HeaderMap::from_iter([
                    (header::USER_AGENT, HeaderValue::from_static("blum-rs/0.1")),
                    (header::ACCEPT, HeaderValue::from_static("application/json")),
                ]);
                reqwest::Client::builder().default_headers(headers).timeout(self.timeout).build()?
            }
        };
        Ok(ToncenterAccessor {
            endpoint: self.endpoint,
            api_key: self.api_key,
            http_client,
        })
    }
}
