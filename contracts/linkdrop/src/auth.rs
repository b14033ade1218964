//! Bearer proof for linkdrop keys.
//!
//! The holder of a linkdrop key authorizes a claim by signing the XDR of a
//! `ClaimIntent` that binds this contract, the claim target and the key's
//! current nonce. Accepting a proof consumes the nonce, so a signature is
//! good for exactly one accepted claim attempt.

use crate::types::{ClaimIntent, ClaimTarget, DataKey};
use linkdrop_errors::LinkdropError;
use soroban_sdk::{xdr::ToXdr, Bytes, BytesN, Env};

pub fn nonce_of(e: &Env, key: &BytesN<32>) -> u32 {
    e.storage()
        .persistent()
        .get(&DataKey::Nonce(key.clone()))
        .unwrap_or(0)
}

/// The exact bytes a key must sign to claim towards `target` right now.
pub fn intent_message(e: &Env, key: &BytesN<32>, target: &ClaimTarget) -> Bytes {
    ClaimIntent {
        linkdrop: e.current_contract_address(),
        target: target.clone(),
        nonce: nonce_of(e, key),
    }
    .to_xdr(e)
}

/// Verify the holder's signature and consume the nonce. A forged signature
/// aborts the invocation inside the host.
pub fn consume_proof(
    e: &Env,
    key: &BytesN<32>,
    target: &ClaimTarget,
    signature: &BytesN<64>,
) -> Result<(), LinkdropError> {
    let message = intent_message(e, key, target);
    e.crypto().ed25519_verify(key, &message, signature);

    let next = nonce_of(e, key)
        .checked_add(1)
        .ok_or(LinkdropError::Overflow)?;
    e.storage()
        .persistent()
        .set(&DataKey::Nonce(key.clone()), &next);
    Ok(())
}
