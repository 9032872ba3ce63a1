use soroban_sdk::{symbol_short, Env, Symbol};

use crate::errors::WalletError;

const LOCK_KEY: Symbol = symbol_short!("WLT_LOCK");

/// Holds the wallet-wide lock for the duration of an operation that moves
/// value out. Released on drop.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    pub fn new(env: &'a Env) -> Result<Self, WalletError> {
        if env.storage().temporary().has(&LOCK_KEY) {
            return Err(WalletError::Reentrancy);
        }
        env.storage().temporary().set(&LOCK_KEY, &true);
        Ok(Self { env })
    }

    pub fn is_locked(env: &Env) -> bool {
        env.storage().temporary().has(&LOCK_KEY)
    }
}

impl<'a> Drop for ReentrancyGuard<'a> {
    fn drop(&mut self) {
        self.env.storage().temporary().remove(&LOCK_KEY);
    }
}
