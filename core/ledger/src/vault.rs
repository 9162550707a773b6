// chainchat-core/core/ledger/src/vault.rs

use crate::types::LedgerError;
use chainchat_primitives::Address;
use primitive_types::U256;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Token custody: per-address balances plus the ledger's pooled reserve.
///
/// The reserve is the vault's own holding. Content costs flow into it,
/// signup bonuses, like rewards and weekly payouts are paid out of it, and
/// the owner can drain it. All amount arithmetic is overflow-checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenVault {
    balances: HashMap<Address, U256>,
    reserve: U256,
}

impl TokenVault {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn balance_of(&self, address: &Address) -> U256 {
        self.balances.get(address).copied().unwrap_or_default()
    }

    /// The pooled holding backing reward credits
    pub fn reserve(&self) -> U256 {
        self.reserve
    }

    /// Genesis-time issuance straight into an account
    pub fn mint(&mut self, to: Address, amount: U256) -> Result<(), LedgerError> {
        let new_balance = self
            .balance_of(&to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert(to, new_balance);
        Ok(())
    }

    /// Genesis-time funding of the pooled reserve
    pub fn fund_reserve(&mut self, amount: U256) -> Result<(), LedgerError> {
        self.reserve = self
            .reserve
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    /// Move `amount` from a user balance into the reserve
    pub fn debit(&mut self, from: Address, amount: U256) -> Result<(), LedgerError> {
        let have = self.balance_of(&from);
        if have < amount {
            return Err(LedgerError::InsufficientBalance { need: amount, have });
        }
        let new_reserve = self
            .reserve
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.balances.insert(from, have - amount);
        self.reserve = new_reserve;
        debug!("Debited {} from {}", amount, from);
        Ok(())
    }

    /// Move `amount` from the reserve to a user balance
    pub fn credit(&mut self, to: Address, amount: U256) -> Result<(), LedgerError> {
        if self.reserve < amount {
            return Err(LedgerError::InsufficientBalance {
                need: amount,
                have: self.reserve,
            });
        }
        let new_balance = self
            .balance_of(&to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.reserve -= amount;
        self.balances.insert(to, new_balance);
        debug!("Credited {} to {}", amount, to);
        Ok(())
    }

    /// Drain the entire reserve to `to`. Returns the amount moved.
    pub fn withdraw_all(&mut self, to: Address) -> Result<U256, LedgerError> {
        let amount = self.reserve;
        let new_balance = self
            .balance_of(&to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;

        self.reserve = U256::zero();
        self.balances.insert(to, new_balance);
        debug!("Withdrew reserve of {} to {}", amount, to);
        Ok(amount)
    }
}
