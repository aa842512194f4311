use async_trait::async_trait;
use blum::clients::toncenter::ToncenterAccessor;
use blum::contracts::{GetMethodAccessor, InternalSender};
use blum::errors::{BlumError, BlumResult};
use blum::messages::{OutboundMessage, SendMode};
use blum::tonlib_core::TonAddress;
use blum::tonlib_core::cell::ArcCell;
use blum::tonlib_core::wallet::mnemonic::Mnemonic;
use blum::tonlib_core::wallet::ton_wallet::TonWallet;
use blum::tonlib_core::wallet::wallet_version::WalletVersion;
use blum::tvm_types::TVMStack;
use blum::types::{build_cell, cell_to_boc_b64};
use std::fmt::Display;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

pub const MNEMONIC_ENV: &str = "MNEMONIC_STR";

// default subwallet of v4r2, the one its address is derived with
const WALLET_V4R2_ID: u32 = 698_983_191;
const MESSAGE_TTL: Duration = Duration::from_secs(60);

/// Signs internal messages with a v4r2 wallet and broadcasts them through toncenter `sendBoc`.
pub struct WalletSender {
    wallet: TonWallet,
    accessor: Arc<ToncenterAccessor>,
}

impl WalletSender {
    /// Reads a space separated 24-word phrase from `MNEMONIC_STR`
    pub fn from_env(accessor: Arc<ToncenterAccessor>) -> anyhow::Result<Self> {
        Self::from_phrase(&std::env::var(MNEMONIC_ENV)?, accessor)
    }

    pub fn from_phrase(phrase: &str, accessor: Arc<ToncenterAccessor>) -> anyhow::Result<Self> {
        let words = phrase.split_whitespace().collect::<Vec<_>>();
        let key_pair = Mnemonic::new(words, &None)?.to_key_pair()?;
        let wallet = TonWallet::new(WalletVersion::V4R2, key_pair)?;
        log::info!("wallet {} loaded from {MNEMONIC_ENV}", wallet.address);
        Ok(Self { wallet, accessor })
    }

    pub fn address(&self) -> &TonAddress { &self.wallet.address }

    /// `None` until the wallet is deployed
    async fn seqno(&self) -> BlumResult<Option<u32>> {
        match self.accessor.call(&self.wallet.address, "seqno", &TVMStack::EMPTY).await {
            Ok(mut stack) => {
                let seqno = stack.pop_tiny_int()?;
                let seqno = u32::try_from(seqno).map_err(|_| BlumError::unexpected("non-negative seqno", seqno))?;
                Ok(Some(seqno))
            }
            Err(BlumError::GetMethodExitCode { exit_code, .. }) => {
                log::warn!("seqno exited with {exit_code}, wallet {} is not deployed yet", self.wallet.address);
                Ok(None)
            }
            Err(err) => Err(err),
        }
    }
}

/// ```raw
/// wallet_id:uint32 valid_until:uint32 seqno:uint32 op:uint8 { op = 0 }
///   mode:uint8 ^MessageRelaxed
/// ```
pub fn v4r2_external_body(seqno: u32, valid_until: u32, send_mode: SendMode, message: &ArcCell) -> BlumResult<ArcCell> {
    build_cell(|builder| {
        builder.store_u32(32, WALLET_V4R2_ID)?;
        builder.store_u32(32, valid_until)?;
        builder.store_u32(32, seqno)?;
        builder.store_u8(8, 0)?;
        builder.store_u8(8, send_mode.0)?;
        builder.store_reference(message)?;
        Ok(())
    })
}

fn wallet_error<E: Display>(err: E) -> BlumError { BlumError::Custom(format!("wallet: {err}")) }

#[async_trait]
impl InternalSender for WalletSender {
    async fn send_internal(&self, message: &OutboundMessage, send_mode: SendMode) -> BlumResult<()> {
        let seqno = self.seqno().await?;
        let valid_until = (SystemTime::now() + MESSAGE_TTL).duration_since(UNIX_EPOCH).map_err(wallet_error)?.as_secs() as u32;

        let body = v4r2_external_body(seqno.unwrap_or(0), valid_until, send_mode, &message.to_internal_msg_cell()?)?;
        let signed = self.wallet.sign_external_body(&body).map_err(wallet_error)?;
        let external = self.wallet.wrap_signed_body(signed, seqno.is_none()).map_err(wallet_error)?;

        log::info!(
            "sending {} TON to {} from {} with seqno {seqno:?}, send_mode={send_mode}",
            message.value.to_ton_str(),
            message.destination,
            self.wallet.address
        );
        self.accessor.send_boc(&cell_to_boc_b64(&Arc::new(external))?).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blum::messages::{BuyJettonMsg, MessageBody};
    use blum::types::{Coins, parse_address, parse_cell};
    use tokio_test::assert_err;

    #[test]
    fn test_v4r2_external_body() -> anyhow::Result<()> {
        let jetton = parse_address("EQCmF9eJucr_iW5Xpk9Au7l-jtRWRCOxTmNESSlbJ7F-8IdI")?;
        let message = OutboundMessage::new(jetton, Coins::from(100_000_000u64), BuyJettonMsg::new(Coins::from(1u32)).to_cell()?);
        let internal = message.to_internal_msg_cell()?;
        let mode = SendMode::PAY_GAS_SEPARATELY | SendMode::IGNORE_ERRORS;

        let body = v4r2_external_body(7, 1_700_000_060, mode, &internal)?;
        assert_eq!(body.bit_len(), 32 * 3 + 8 + 8);
        assert_eq!(body.references(), &[internal]);
        let fields = parse_cell(&body, |parser| {
            Ok((parser.load_u32(32)?, parser.load_u32(32)?, parser.load_u32(32)?, parser.load_u8(8)?, parser.load_u8(8)?))
        })?;
        assert_eq!(fields, (WALLET_V4R2_ID, 1_700_000_060, 7, 0, 3));
        Ok(())
    }

    #[test]
    fn test_wallet_sender_rejects_bad_phrase() -> anyhow::Result<()> {
        let accessor = Arc::new(ToncenterAccessor::builder().build()?);
        assert_err!(WalletSender::from_phrase("abandon abandon about", accessor));
        Ok(())
    }
}
