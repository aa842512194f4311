use crate::contracts::{BlumContract, BlumGetMethod, TradingGuard};
use crate::errors::{BlumError, BlumResult};
use crate::messages::{BuyJettonMsg, MessageBody, OutboundMessage};
use crate::tvm_results::{
    CoinPriceResult, CoinsForTonsResult, GetBclDataResult, GetJettonDataResult, GetWalletAddressResult,
    TonsForCoinsResult, TradingState,
};
use crate::tvm_types::{TVMStack, ToTVMStack};
use crate::types::Coins;
use async_trait::async_trait;
use derive_setters::Setters;
use tonlib_core::TonAddress;
use tonlib_core::cell::ArcCell;

/// 0.05 TON
pub const MIN_BUY_TON_AMOUNT: u64 = 50_000_000;

#[derive(Setters, Debug, Clone, PartialEq)]
#[setters(prefix = "with_", strip_option)]
pub struct BuyJettonParams {
    #[setters(skip)]
    pub ton_amount: Coins,
    #[setters(skip)]
    pub limit: Coins,
    pub query_id: u64,
    pub referral: Option<ArcCell>,
    pub buyer_address: Option<TonAddress>,
    pub check_trading_state: bool,
}

impl BuyJettonParams {
    /// `limit` is the minimal amount of jettons the buyer agrees to receive
    pub fn new(ton_amount: Coins, limit: Coins) -> Self {
        Self {
            ton_amount,
            limit,
            query_id: 0,
            referral: None,
            buyer_address: None,
            check_trading_state: true,
        }
    }
}

#[async_trait]
pub trait BlumJettonMethods: BlumContract {
    async fn get_jetton_data(&self) -> BlumResult<GetJettonDataResult> {
        self.run_get_method(BlumGetMethod::GetJettonData, &TVMStack::EMPTY).await
    }

    async fn get_wallet_address(&self, owner: &TonAddress) -> BlumResult<GetWalletAddressResult> {
        let mut args = TVMStack::default();
        owner.to_stack(&mut args)?;
        self.run_get_method(BlumGetMethod::GetWalletAddress, &args).await
    }

    async fn get_coin_price(&self) -> BlumResult<CoinPriceResult> {
        self.run_get_method(BlumGetMethod::CoinPrice, &TVMStack::EMPTY).await
    }

    async fn get_bcl_data(&self) -> BlumResult<GetBclDataResult> {
        self.run_get_method(BlumGetMethod::GetBclData, &TVMStack::EMPTY).await
    }

    /// Always a fresh `get_bcl_data` round trip
    async fn get_trading_state(&self) -> BlumResult<TradingState> {
        Ok(TradingState::from(&self.get_bcl_data().await?))
    }

    /// Reads the trading state first even when `check_trading_state == false`, so a quote always costs
    /// two round trips. The state is enforced only when the flag is set.
    async fn get_coins_for_tons(&self, tons: &Coins, check_trading_state: bool) -> BlumResult<CoinsForTonsResult> {
        let mut args = TVMStack::default();
        tons.to_stack(&mut args)?;
        let guard = TradingGuard::new(self, check_trading_state);
        guard.run(|| self.run_get_method(BlumGetMethod::CoinsForTons, &args)).await
    }

    async fn get_tons_for_coins(&self, coins: &Coins, check_trading_state: bool) -> BlumResult<TonsForCoinsResult> {
        let mut args = TVMStack::default();
        coins.to_stack(&mut args)?;
        let guard = TradingGuard::new(self, check_trading_state);
        guard.run(|| self.run_get_method(BlumGetMethod::TonsForCoins, &args)).await
    }

    /// Minimum amount is checked before any network access.
    /// The trading state is fetched only when `check_trading_state` is set.
    async fn create_buy_jetton(&self, params: BuyJettonParams) -> BlumResult<OutboundMessage> {
        let min_amount = Coins::from(MIN_BUY_TON_AMOUNT);
        if params.ton_amount < min_amount {
            return Err(BlumError::MinimumAmount {
                min: min_amount,
                given: params.ton_amount,
            });
        }
        let guard = TradingGuard::new(self, params.check_trading_state);
        guard
            .run_if_enforced(move || async move {
                let msg = BuyJettonMsg {
                    query_id: params.query_id,
                    limit: params.limit,
                    referral: params.referral,
                    buyer_address: params.buyer_address,
                };
                Ok(OutboundMessage::new(self.get_address().clone(), params.ton_amount, msg.to_cell()?))
            })
            .await
    }
}
