//! Escrow ledger: canonical key -> escrowed balance, in persistent storage.
//!
//! Entries are created or topped up by deposits, removed whole by claims and
//! re-armed by the creation-failure callback. A key with no entry is unknown;
//! it is never read as a zero balance.

use crate::types::DataKey;
use linkdrop_errors::LinkdropError;
use soroban_sdk::{BytesN, Env};

fn slot(key: &BytesN<32>) -> DataKey {
    DataKey::Escrow(key.clone())
}

pub fn has(e: &Env, key: &BytesN<32>) -> bool {
    e.storage().persistent().has(&slot(key))
}

pub fn balance_of(e: &Env, key: &BytesN<32>) -> Result<i128, LinkdropError> {
    e.storage()
        .persistent()
        .get(&slot(key))
        .ok_or(LinkdropError::UnknownKey)
}

/// Escrow `attached - allowance` for `key`, on top of any prior balance.
/// Returns the new balance.
pub fn deposit(
    e: &Env,
    key: &BytesN<32>,
    attached: i128,
    allowance: i128,
) -> Result<i128, LinkdropError> {
    if attached <= allowance {
        return Err(LinkdropError::InsufficientDeposit);
    }
    let net = attached - allowance;
    credit(e, key, net)
}

/// Remove the entry and return its balance.
pub fn withdraw(e: &Env, key: &BytesN<32>) -> Result<i128, LinkdropError> {
    let amount = balance_of(e, key)?;
    e.storage().persistent().remove(&slot(key));
    Ok(amount)
}

/// Put `amount` back for `key` after a failed creation. A deposit that landed
/// while the creation was pending is kept and added to.
pub fn restore(e: &Env, key: &BytesN<32>, amount: i128) -> Result<i128, LinkdropError> {
    credit(e, key, amount)
}

fn credit(e: &Env, key: &BytesN<32>, amount: i128) -> Result<i128, LinkdropError> {
    let prior: i128 = e.storage().persistent().get(&slot(key)).unwrap_or(0);
    let balance = prior.checked_add(amount).ok_or(LinkdropError::Overflow)?;
    e.storage().persistent().set(&slot(key), &balance);
    Ok(balance)
}
