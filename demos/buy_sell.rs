mod common;
#[cfg(feature = "signing")]
mod wallet_sender;

use async_trait::async_trait;
use blum::clients::toncenter::ToncenterAccessor;
use blum::contracts::{
    BlumContract, BlumJetton, BlumJettonMethods, BlumJettonWallet, BlumJettonWalletMethods, BuyJettonParams,
    GetMethodAccessor, InternalSender, JettonSellParams,
};
use blum::errors::BlumResult;
use blum::messages::{OutboundMessage, SendMode};
use blum::tonlib_core::TonAddress;
use blum::types::{Coins, cell_to_boc_b64};
use common::{DEFAULT_JETTON, env_address, env_or, init_logging};
use std::sync::Arc;

const DEFAULT_SLIPPAGE: u8 = 20;

/// Logs the messages a wallet would send
#[cfg_attr(feature = "signing", allow(dead_code))]
struct DryRunSender;

#[async_trait]
impl InternalSender for DryRunSender {
    async fn send_internal(&self, message: &OutboundMessage, send_mode: SendMode) -> BlumResult<()> {
        log::info!(
            "dry-run send: to={}, value={} TON, send_mode={send_mode}, body={}",
            message.destination,
            message.value.to_ton_str(),
            cell_to_boc_b64(&message.body)?
        );
        Ok(())
    }
}

async fn buy(
    accessor: Arc<dyn GetMethodAccessor>,
    sender: &dyn InternalSender,
    jetton_address: &TonAddress,
    ton_amount: Coins,
    slippage: u8,
) -> anyhow::Result<Coins> {
    let jetton = BlumJetton::new(accessor, jetton_address.clone());

    let estimate = jetton.get_coins_for_tons(&ton_amount, true).await?;
    let fee_headroom = estimate.fees.checked_add(&Coins::from_ton_str("0.05")?);
    let limit = estimate.coins.apply_slippage(slippage)?;
    log::info!("buy: expecting {} jettons, limit {limit}", estimate.coins);

    let params = BuyJettonParams::new(ton_amount.checked_add(&fee_headroom), limit);
    let message = jetton.create_buy_jetton(params).await?;
    sender.send_internal(&message, SendMode::PAY_GAS_SEPARATELY | SendMode::IGNORE_ERRORS).await?;
    Ok(estimate.coins)
}

async fn sell(
    accessor: Arc<dyn GetMethodAccessor>,
    sender: &dyn InternalSender,
    jetton_address: &TonAddress,
    holder: &TonAddress,
    jetton_amount: Coins,
    slippage: u8,
) -> anyhow::Result<Coins> {
    let jetton = BlumJetton::new(accessor.clone(), jetton_address.clone());
    let Some(wallet_address) = jetton.get_wallet_address(holder).await?.jetton_wallet_address else {
        anyhow::bail!("Failed to retrieve jetton wallet address for {holder}: addr_none");
    };
    let wallet = BlumJettonWallet::new(accessor, wallet_address);

    let estimate = jetton.get_tons_for_coins(&jetton_amount, true).await?;
    let min_receive = estimate.tons.apply_slippage(slippage)?;
    log::info!("sell: expecting {} TON, min_receive {} TON", estimate.tons.to_ton_str(), min_receive.to_ton_str());

    let message = wallet.create_sell(JettonSellParams::new(jetton_amount, min_receive, estimate.fees))?;
    sender.send_internal(&message, SendMode::PAY_GAS_SEPARATELY | SendMode::IGNORE_ERRORS).await?;
    Ok(estimate.tons)
}

/// With the `signing` feature, MNEMONIC_STR is required: trades are signed by that v4r2 wallet, which is also the holder.
/// Without it, messages are only logged and BLUM_HOLDER_ADDRESS is required.
#[cfg(feature = "signing")]
fn make_sender(toncenter: Arc<ToncenterAccessor>) -> anyhow::Result<(Box<dyn InternalSender>, TonAddress)> {
    let sender = wallet_sender::WalletSender::from_env(toncenter)?;
    let holder = sender.address().clone();
    Ok((Box::new(sender), holder))
}

#[cfg(not(feature = "signing"))]
fn make_sender(_toncenter: Arc<ToncenterAccessor>) -> anyhow::Result<(Box<dyn InternalSender>, TonAddress)> {
    log::warn!("built without the signing feature, messages are not broadcast");
    let holder = blum::types::parse_address(&std::env::var("BLUM_HOLDER_ADDRESS")?)?;
    Ok((Box::new(DryRunSender), holder))
}

/// BLUM_TON_AMOUNT / BLUM_JETTON_AMOUNT / BLUM_SLIPPAGE tune the trade.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let toncenter = Arc::new(ToncenterAccessor::from_env()?);
    let accessor: Arc<dyn GetMethodAccessor> = toncenter.clone();
    let (sender, holder) = make_sender(toncenter)?;

    let jetton_address = env_address("BLUM_JETTON_ADDRESS", DEFAULT_JETTON)?;
    let ton_amount = Coins::from_ton_str(&env_or("BLUM_TON_AMOUNT", "0.1"))?;
    let jetton_amount = Coins::from_ton_str(&env_or("BLUM_JETTON_AMOUNT", "100000"))?;
    let slippage = match std::env::var("BLUM_SLIPPAGE") {
        Ok(val) => val.parse()?,
        Err(_) => DEFAULT_SLIPPAGE,
    };

    let bought = buy(accessor.clone(), sender.as_ref(), &jetton_address, ton_amount, slippage).await?;
    log::info!("buy estimate: {bought} jettons");

    let received = sell(accessor, sender.as_ref(), &jetton_address, &holder, jetton_amount, slippage).await?;
    log::info!("sell estimate: {} TON", received.to_ton_str());
    Ok(())
}
