use crate::contracts::{BlumContract, BlumGetMethod, InternalSender};
use crate::errors::BlumResult;
use crate::messages::{JettonBurnMsg, JettonSellMsg, JettonTransferMsg, MessageBody, OutboundMessage, SendMode};
use crate::tvm_results::GetWalletDataResult;
use crate::tvm_types::TVMStack;
use crate::types::Coins;
use async_trait::async_trait;
use derive_setters::Setters;
use tonlib_core::TonAddress;
use tonlib_core::cell::ArcCell;

/// 0.06 TON
pub const DEFAULT_SELL_VALUE: u64 = 60_000_000;

#[derive(Setters, Debug, Clone, PartialEq)]
#[setters(prefix = "with_", strip_option)]
pub struct JettonTransferParams {
    #[setters(skip)]
    pub amount: Coins,
    #[setters(skip)]
    pub destination: TonAddress,
    #[setters(skip)]
    pub response_address: TonAddress,
    pub query_id: u64,
    pub custom_payload: Option<ArcCell>,
    pub forward_amount: Coins,
    pub forward_payload: Option<ArcCell>,
}

impl JettonTransferParams {
    pub fn new(amount: Coins, destination: TonAddress, response_address: TonAddress) -> Self {
        Self {
            amount,
            destination,
            response_address,
            query_id: 0,
            custom_payload: None,
            forward_amount: Coins::zero(),
            forward_payload: None,
        }
    }
}

#[derive(Setters, Debug, Clone, PartialEq)]
#[setters(prefix = "with_", strip_option)]
pub struct JettonSellParams {
    #[setters(skip)]
    pub amount: Coins,
    #[setters(skip)]
    pub min_receive: Coins,
    #[setters(skip)]
    pub fee: Coins,
    pub query_id: u64,
    pub referral: Option<ArcCell>,
    /// attached on top of `fee`
    pub value: Coins,
}

impl JettonSellParams {
    pub fn new(amount: Coins, min_receive: Coins, fee: Coins) -> Self {
        Self {
            amount,
            min_receive,
            fee,
            query_id: 0,
            referral: None,
            value: Coins::from(DEFAULT_SELL_VALUE),
        }
    }
}

#[derive(Setters, Debug, Clone, PartialEq)]
#[setters(prefix = "with_", strip_option)]
pub struct JettonBurnParams {
    #[setters(skip)]
    pub amount: Coins,
    #[setters(skip)]
    pub owner_address: TonAddress,
    #[setters(skip)]
    pub response_address: TonAddress,
    pub query_id: u64,
}

impl JettonBurnParams {
    pub fn new(amount: Coins, owner_address: TonAddress, response_address: TonAddress) -> Self {
        Self {
            amount,
            owner_address,
            response_address,
            query_id: 0,
        }
    }
}

#[async_trait]
pub trait BlumJettonWalletMethods: BlumContract {
    fn create_transfer(&self, value: Coins, params: JettonTransferParams) -> BlumResult<OutboundMessage> {
        let msg = JettonTransferMsg {
            query_id: params.query_id,
            amount: params.amount,
            destination: params.destination,
            response_address: params.response_address,
            custom_payload: params.custom_payload,
            forward_amount: params.forward_amount,
            forward_payload: params.forward_payload,
        };
        Ok(OutboundMessage::new(self.get_address().clone(), value, msg.to_cell()?))
    }

    /// Message value is `params.value + params.fee`
    fn create_sell(&self, params: JettonSellParams) -> BlumResult<OutboundMessage> {
        let value = params.value.checked_add(&params.fee);
        let msg = JettonSellMsg {
            query_id: params.query_id,
            amount: params.amount,
            min_receive: params.min_receive,
            referral: params.referral,
        };
        Ok(OutboundMessage::new(self.get_address().clone(), value, msg.to_cell()?))
    }

    fn create_burn(&self, value: Coins, params: JettonBurnParams) -> BlumResult<OutboundMessage> {
        let msg = JettonBurnMsg {
            query_id: params.query_id,
            amount: params.amount,
            owner_address: params.owner_address,
            response_address: params.response_address,
        };
        Ok(OutboundMessage::new(self.get_address().clone(), value, msg.to_cell()?))
    }

    async fn send_transfer(
        &self,
        sender: &dyn InternalSender,
        value: Coins,
        params: JettonTransferParams,
    ) -> BlumResult<()> {
        let message = self.create_transfer(value, params)?;
        log::debug!("sending jetton transfer to {} with value {}", message.destination, message.value);
        sender.send_internal(&message, SendMode::PAY_GAS_SEPARATELY).await
    }

    async fn send_burn(&self, sender: &dyn InternalSender, value: Coins, params: JettonBurnParams) -> BlumResult<()> {
        let message = self.create_burn(value, params)?;
        log::debug!("sending jetton burn to {} with value {}", message.destination, message.value);
        sender.send_internal(&message, SendMode::PAY_GAS_SEPARATELY).await
    }

    async fn get_wallet_data(&self) -> BlumResult<GetWalletDataResult> {
        self.run_get_method(BlumGetMethod::GetWalletData, &TVMStack::EMPTY).await
    }

    async fn get_balance(&self) -> BlumResult<Coins> { Ok(self.get_wallet_data().await?.balance) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::BlumJettonWallet;
    use crate::messages::opcodes;
    use crate::test_utils::{wallet_data_stack, MockAccessor, RecordingSender};
    use crate::types::{empty_cell, parse_address, parse_cell};
    use std::sync::Arc;

    const WALLET: &str = "EQBiMfDMivebQb052Z6yR3jHrmwNhw1kQ5bcAUOBYsK_VPuK";
    const OWNER: &str = "UQD1KZNlg7m-8ymJqNKSA15nmc2ftTS1kyUlSuGonqr0bFas";
    const MINTER: &str = "EQCmF9eJucr_iW5Xpk9Au7l-jtRWRCOxTmNESSlbJ7F-8IdI";

    fn make_wallet() -> anyhow::Result<(Arc<MockAccessor>, BlumJettonWallet)> {
        let accessor = Arc::new(MockAccessor::default());
        let wallet = BlumJettonWallet::new(accessor.clone(), parse_address(WALLET)?);
        Ok((accessor, wallet))
    }

    #[test]
    fn test_create_transfer() -> anyhow::Result<()> {
        let (accessor, wallet) = make_wallet()?;
        let destination = parse_address(MINTER)?;
        let response = parse_address(OWNER)?;
        let params = JettonTransferParams::new(Coins::from(777u32), destination.clone(), response.clone())
            .with_query_id(5)
            .with_forward_amount(Coins::from(1u32))
            .with_forward_payload(empty_cell()?);

        let msg = wallet.create_transfer(Coins::from(100_000_000u64), params)?;
        assert_eq!(msg.destination, parse_address(WALLET)?);
        assert_eq!(msg.value, Coins::from(100_000_000u64));
        assert_eq!(parse_cell(&msg.body, |parser| Ok(parser.load_u32(32)?))?, opcodes::TRANSFER);

        let body = JettonTransferMsg::from_cell(&msg.body)?;
        assert_eq!(body.query_id, 5);
        assert_eq!(body.amount, Coins::from(777u32));
        assert_eq!(body.destination, destination);
        assert_eq!(body.response_address, response);
        assert_eq!(body.custom_payload, None);
        assert_eq!(body.forward_amount, Coins::from(1u32));
        assert_eq!(body.forward_payload, Some(empty_cell()?));
        assert!(accessor.calls().is_empty());
        Ok(())
    }

    #[test]
    fn test_create_sell_value_includes_fee() -> anyhow::Result<()> {
        let (_, wallet) = make_wallet()?;
        let params = JettonSellParams::new(
            Coins::from(2_000_000_000u64),
            Coins::from(336_000_000u64),
            Coins::from(4_200_000u64),
        );
        let msg = wallet.create_sell(params)?;
        assert_eq!(msg.value, Coins::from(DEFAULT_SELL_VALUE + 4_200_000));

        let body = JettonSellMsg::from_cell(&msg.body)?;
        assert_eq!(body.amount, Coins::from(2_000_000_000u64));
        assert_eq!(body.min_receive, Coins::from(336_000_000u64));

        let params = JettonSellParams::new(Coins::from(1u32), Coins::zero(), Coins::from(10u32))
            .with_value(Coins::from(90u32));
        assert_eq!(wallet.create_sell(params)?.value, Coins::from(100u32));
        Ok(())
    }

    #[test]
    fn test_create_burn() -> anyhow::Result<()> {
        let (_, wallet) = make_wallet()?;
        let owner = parse_address(OWNER)?;
        let params = JettonBurnParams::new(Coins::from(10u32), owner.clone(), owner.clone());
        let msg = wallet.create_burn(Coins::from(50_000_000u64), params)?;
        assert_eq!(msg.value, Coins::from(50_000_000u64));
        let body = JettonBurnMsg::from_cell(&msg.body)?;
        assert_eq!(body.owner_address, owner);
        assert_eq!(body.query_id, 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_send_transfer_and_burn() -> anyhow::Result<()> {
        let (_, wallet) = make_wallet()?;
        let sender = RecordingSender::default();
        let owner = parse_address(OWNER)?;

        let transfer = JettonTransferParams::new(Coins::from(1u32), owner.clone(), owner.clone());
        wallet.send_transfer(&sender, Coins::from(30_000_000u64), transfer.clone()).await?;
        let burn = JettonBurnParams::new(Coins::from(1u32), owner.clone(), owner);
        wallet.send_burn(&sender, Coins::from(20_000_000u64), burn.clone()).await?;

        let sent = sender.sent();
        assert_eq!(sent.len(), 2);
        assert_eq!(sent[0], (wallet.create_transfer(Coins::from(30_000_000u64), transfer)?, SendMode::PAY_GAS_SEPARATELY));
        assert_eq!(sent[1], (wallet.create_burn(Coins::from(20_000_000u64), burn)?, SendMode::PAY_GAS_SEPARATELY));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_wallet_data_and_balance() -> anyhow::Result<()> {
        let (accessor, wallet) = make_wallet()?;
        let owner = parse_address(OWNER)?;
        let minter = parse_address(MINTER)?;
        accessor.push_response(wallet_data_stack(&Coins::from(5_000u32), &owner, &minter)?);
        accessor.push_response(wallet_data_stack(&Coins::from(6_000u32), &owner, &minter)?);

        let data = wallet.get_wallet_data().await?;
        assert_eq!(data.balance, Coins::from(5_000u32));
        assert_eq!(data.owner_address, owner);
        assert_eq!(data.minter_address, minter);
        assert_eq!(wallet.get_balance().await?, Coins::from(6_000u32));
        assert_eq!(accessor.methods(), vec!["get_wallet_data", "get_wallet_data"]);
        Ok(())
    }
}
