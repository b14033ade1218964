//! Instance-storage configuration written once by `initialize`.

use crate::types::DataKey;
use linkdrop_errors::LinkdropError;
use soroban_sdk::{Address, Env};

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Admin)
}

pub fn store(e: &Env, admin: &Address, token: &Address, factory: &Address, allowance: i128) {
    let storage = e.storage().instance();
    storage.set(&DataKey::Admin, admin);
    storage.set(&DataKey::Token, token);
    storage.set(&DataKey::Factory, factory);
    storage.set(&DataKey::Allowance, &allowance);
}

fn read<V>(e: &Env, key: &DataKey) -> Result<V, LinkdropError>
where
    V: soroban_sdk::TryFromVal<Env, soroban_sdk::Val>,
{
    e.storage()
        .instance()
        .get(key)
        .ok_or(LinkdropError::NotInitialized)
}

pub fn admin(e: &Env) -> Result<Address, LinkdropError> {
    read(e, &DataKey::Admin)
}

pub fn token(e: &Env) -> Result<Address, LinkdropError> {
    read(e, &DataKey::Token)
}

pub fn factory(e: &Env) -> Result<Address, LinkdropError> {
    read(e, &DataKey::Factory)
}

pub fn allowance(e: &Env) -> Result<i128, LinkdropError> {
    read(e, &DataKey::Allowance)
}

pub fn require_admin(e: &Env, caller: &Address) -> Result<(), LinkdropError> {
    caller.require_auth();
    if admin(e)? != *caller {
        return Err(LinkdropError::NotAdmin);
    }
    Ok(())
}

pub fn accrued_fees(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get(&DataKey::AccruedFees)
        .unwrap_or(0)
}

pub fn accrue_fee(e: &Env, fee: i128) -> Result<(), LinkdropError> {
    let total = accrued_fees(e)
        .checked_add(fee)
        .ok_or(LinkdropError::Overflow)?;
    e.storage().instance().set(&DataKey::AccruedFees, &total);
    Ok(())
}

/// Clears the accrued fees and returns what was held.
pub fn take_fees(e: &Env) -> Result<i128, LinkdropError> {
    let accrued = accrued_fees(e);
    if accrued == 0 {
        return Err(LinkdropError::NoFeesAccrued);
    }
    e.storage().instance().set(&DataKey::AccruedFees, &0_i128);
    Ok(accrued)
}

pub fn next_request_id(e: &Env) -> Result<u64, LinkdropError> {
    let id: u64 = e
        .storage()
        .instance()
        .get(&DataKey::NextRequestId)
        .unwrap_or(0);
    let next = id.checked_add(1).ok_or(LinkdropError::Overflow)?;
    e.storage().instance().set(&DataKey::NextRequestId, &next);
    Ok(id)
}
