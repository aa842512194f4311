use crate::blum_contract;
use crate::contracts::{BlumJettonMethods, BlumJettonWalletMethods};

// Market contract: bonding curve, buy entry point and jetton master get-methods
blum_contract!(BlumJetton: BlumJettonMethods);

// Per-owner jetton wallet: transfer, sell and burn entry points
blum_contract!(BlumJettonWallet: BlumJettonWalletMethods);
