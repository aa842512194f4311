mod common;

use blum::clients::toncenter::ToncenterAccessor;
use blum::contracts::{BlumContract, BlumJetton, BlumJettonMethods};
use blum::types::Coins;
use common::{DEFAULT_JETTON, env_address, init_logging};
use std::sync::Arc;

const DEFAULT_HOLDER: &str = "UQD1KZNlg7m-8ymJqNKSA15nmc2ftTS1kyUlSuGonqr0bFas";

/// Prints the market state and quotes for 1 TON / 1 jetton.
/// BLUM_JETTON_ADDRESS and BLUM_HOLDER_ADDRESS override the defaults, TONCENTER_* configure the endpoint.
#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let accessor = Arc::new(ToncenterAccessor::from_env()?);
    let jetton_address = env_address("BLUM_JETTON_ADDRESS", DEFAULT_JETTON)?;
    let holder = env_address("BLUM_HOLDER_ADDRESS", DEFAULT_HOLDER)?;
    log::info!("querying {jetton_address} via {}", accessor.endpoint());

    let jetton = BlumJetton::new(accessor, jetton_address);

    let jetton_data = jetton.get_jetton_data().await?;
    log::info!(
        "jetton_data: total_supply={}, mintable={}, admin={}",
        jetton_data.total_supply,
        jetton_data.mintable,
        jetton_data.admin.map(|admin| admin.to_string()).unwrap_or("none".to_string())
    );

    let wallet_address = jetton.get_wallet_address(&holder).await?;
    match wallet_address.jetton_wallet_address {
        Some(address) => log::info!("jetton wallet of {holder}: {address}"),
        None => log::warn!("jetton wallet of {holder}: addr_none"),
    }

    let coin_price = jetton.get_coin_price().await?;
    log::info!("coin_price: {}", coin_price.coin_price);

    let bcl_data = jetton.get_bcl_data().await?;
    log::info!("bcl_data: {bcl_data:?}");

    let one = Coins::from_ton_str("1")?;
    let coins_for_tons = jetton.get_coins_for_tons(&one, true).await?;
    log::info!("coins_for_tons(1 TON): fees={}, coins={}", coins_for_tons.fees.to_ton_str(), coins_for_tons.coins);

    let tons_for_coins = jetton.get_tons_for_coins(&one, true).await?;
    log::info!("tons_for_coins({one}): fees={}, tons={}", tons_for_coins.fees.to_ton_str(), tons_for_coins.tons.to_ton_str());
    Ok(())
}
