use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::errors::WalletError;

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// WalletConfig (instance)
    Config,
    /// SignerConfig (instance)
    Signers,
    /// Next request id (instance)
    NextRequestId,
    /// Sum of all depositor balances (instance)
    TotalDeposits,

    /// Deposited balance per identity (persistent)
    Balance(Address),
    /// Request record (persistent)
    Request(u64),
}

/// Set once by `initialize`.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct WalletConfig {
    pub owner: Address,
    /// Token contract holding the wallet's value
    pub token: Address,
}

#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct SignerConfig {
    pub signers: Vec<Address>,
    pub required_signatures: u32,
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn load_config(env: &Env) -> Result<WalletConfig, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(WalletError::NotInitialized)
}

pub fn save_config(env: &Env, config: &WalletConfig) {
    env.storage().instance().set(&DataKey::Config, config);
}

pub fn load_signer_config(env: &Env) -> Result<SignerConfig, WalletError> {
    env.storage()
        .instance()
        .get(&DataKey::Signers)
        .ok_or(WalletError::NotInitialized)
}

pub fn save_signer_config(env: &Env, config: &SignerConfig) {
    env.storage().instance().set(&DataKey::Signers, config);
}
