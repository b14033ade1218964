//! Capability issuer: the restricted grant a linkdrop key holds on this
//! contract.

use crate::events;
use crate::types::{Capability, DataKey};
use linkdrop_errors::LinkdropError;
use soroban_sdk::{vec, BytesN, Env, Symbol};

pub const CLAIM_METHOD: &str = "claim";
pub const CREATE_AND_CLAIM_METHOD: &str = "create_account_and_claim";

fn slot(key: &BytesN<32>) -> DataKey {
    DataKey::Capability(key.clone())
}

pub fn get(e: &Env, key: &BytesN<32>) -> Result<Capability, LinkdropError> {
    e.storage()
        .persistent()
        .get(&slot(key))
        .ok_or(LinkdropError::CapabilityNotFound)
}

/// Grant `key` the two claim entry points on this contract, charged
/// `allowance`. A key that already holds a live grant keeps it and has the
/// allowance added to its budget.
pub fn grant(e: &Env, key: &BytesN<32>, allowance: i128) -> Result<Capability, LinkdropError> {
    let capability = match get(e, key) {
        Ok(mut existing) => {
            existing.allowance = existing
                .allowance
                .checked_add(allowance)
                .ok_or(LinkdropError::Overflow)?;
            existing
        }
        Err(_) => {
            let fresh = Capability {
                subject: e.current_contract_address(),
                methods: vec![
                    e,
                    Symbol::new(e, CLAIM_METHOD),
                    Symbol::new(e, CREATE_AND_CLAIM_METHOD),
                ],
                allowance,
                granted_at: e.ledger().sequence(),
            };
            events::emit_capability_granted(e, key, allowance);
            fresh
        }
    };
    e.storage().persistent().set(&slot(key), &capability);
    Ok(capability)
}

/// Remove the grant. Fails with `CapabilityNotFound` if it is already gone.
pub fn revoke(e: &Env, key: &BytesN<32>) -> Result<(), LinkdropError> {
    if !e.storage().persistent().has(&slot(key)) {
        return Err(LinkdropError::CapabilityNotFound);
    }
    e.storage().persistent().remove(&slot(key));
    events::emit_capability_revoked(e, key);
    Ok(())
}

/// Remove the grant if one is still live.
pub fn revoke_if_live(e: &Env, key: &BytesN<32>) {
    if e.storage().persistent().has(&slot(key)) {
        e.storage().persistent().remove(&slot(key));
        events::emit_capability_revoked(e, key);
    }
}

/// The key must hold a live grant on this contract that names `method`.
pub fn require_method(e: &Env, key: &BytesN<32>, method: &str) -> Result<(), LinkdropError> {
    let capability = get(e, key).map_err(|_| LinkdropError::Unauthorized)?;
    if capability.subject != e.current_contract_address()
        || !capability.methods.contains(Symbol::new(e, method))
    {
        return Err(LinkdropError::Unauthorized);
    }
    Ok(())
}
