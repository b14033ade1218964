use crate::types::{ClaimPhase, DataKey};
use linkdrop_errors::LinkdropError;
use soroban_sdk::{BytesN, Env};

pub fn get(e: &Env, key: &BytesN<32>) -> Result<ClaimPhase, LinkdropError> {
    e.storage()
        .persistent()
        .get(&DataKey::Phase(key.clone()))
        .ok_or(LinkdropError::UnknownKey)
}

pub fn set(e: &Env, key: &BytesN<32>, phase: ClaimPhase) {
    e.storage()
        .persistent()
        .set(&DataKey::Phase(key.clone()), &phase);
}

/// A deposit re-arms the key unless a creation is still in flight; the
/// callback settles the phase in that case.
pub fn on_deposit(e: &Env, key: &BytesN<32>) {
    if get(e, key) != Ok(ClaimPhase::CreationPending) {
        set(e, key, ClaimPhase::Escrowed);
    }
}
