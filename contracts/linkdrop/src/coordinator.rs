//! Claim coordinator.
//!
//! Per key: `Escrowed -> Claiming -> {Claimed | CreationPending}` and
//! `CreationPending -> {Claimed | RetryableEscrowed}`. `Claiming` is the body
//! of `claim` / `create_account_and_claim`: every check runs before the first
//! write, so a rejected call leaves no trace.
//!
//! The existing-account path pays out immediately and has no compensation.
//! The creation path removes the escrow before the factory has answered and
//! relies on the callback to either pay the new account or restore the escrow.

use crate::types::{ClaimPhase, ClaimTarget, PendingKind};
use crate::{account_id, auth, capability, config, events, factory, funds, keys, ledger, phase};
use linkdrop_errors::LinkdropError;
use soroban_sdk::{Address, BytesN, Env, String};

/// Escrow a deposit against `public_key` and make sure the key holds its
/// capability.
pub fn send(
    e: &Env,
    funder: &Address,
    public_key: &String,
    amount: i128,
) -> Result<i128, LinkdropError> {
    funder.require_auth();
    let key = keys::decode(e, public_key)?;
    let allowance = config::allowance(e)?;

    let balance = ledger::deposit(e, &key, amount, allowance)?;
    config::accrue_fee(e, allowance)?;
    capability::grant(e, &key, allowance)?;
    phase::on_deposit(e, &key);
    funds::transfer_into_contract(e, funder, amount)?;

    events::emit_linkdrop_sent(e, &key, funder, amount - allowance, balance);
    Ok(balance)
}

/// Checks shared by both claim entry points. Returns the escrowed amount.
fn authorize_claim(
    e: &Env,
    key: &BytesN<32>,
    method: &str,
    target: &ClaimTarget,
    signature: &BytesN<64>,
) -> Result<i128, LinkdropError> {
    let amount = ledger::balance_of(e, key)?;
    // A deposit made while a creation is in flight stays locked until the
    // factory answers.
    if phase::get(e, key) == Ok(ClaimPhase::CreationPending) {
        return Err(LinkdropError::Unauthorized);
    }
    capability::require_method(e, key, method)?;
    auth::consume_proof(e, key, target, signature)?;
    Ok(amount)
}

/// Pay the whole escrow for the signing key to an existing account.
pub fn claim(
    e: &Env,
    public_key: &String,
    signature: &BytesN<64>,
    account: &Address,
) -> Result<i128, LinkdropError> {
    let key = keys::decode(e, public_key)?;
    account_id::require_claim_target(e, account)?;
    let target = ClaimTarget::Existing(account.clone());
    authorize_claim(e, &key, capability::CLAIM_METHOD, &target, signature)?;

    let amount = ledger::withdraw(e, &key)?;
    capability::revoke(e, &key)?;
    phase::set(e, &key, ClaimPhase::Claimed);
    funds::transfer_from_contract(e, account, amount)?;

    events::emit_linkdrop_claimed(e, &key, account, amount);
    Ok(amount)
}

/// Remove the escrow for the signing key and ask the factory to create
/// `new_account_id` owned by `new_public_key`. Resolved by
/// `callback::on_account_created_and_claimed`.
pub fn create_account_and_claim(
    e: &Env,
    public_key: &String,
    signature: &BytesN<64>,
    new_account_id: &String,
    new_public_key: &String,
) -> Result<u64, LinkdropError> {
    let key = keys::decode(e, public_key)?;
    account_id::require_valid_name(new_account_id)?;
    let owner_key = keys::decode(e, new_public_key)?;
    let target = ClaimTarget::NewAccount(new_account_id.clone(), owner_key.clone());
    authorize_claim(
        e,
        &key,
        capability::CREATE_AND_CLAIM_METHOD,
        &target,
        signature,
    )?;

    let amount = ledger::withdraw(e, &key)?;
    phase::set(e, &key, ClaimPhase::CreationPending);
    factory::dispatch(
        e,
        PendingKind::Linkdrop(key),
        amount,
        new_account_id,
        &owner_key,
    )
}

/// Fund a new account directly, without a linkdrop. Resolved by
/// `callback::on_account_created`, which refunds `funder` on failure.
pub fn create_account(
    e: &Env,
    funder: &Address,
    new_account_id: &String,
    new_public_key: &String,
    amount: i128,
) -> Result<u64, LinkdropError> {
    funder.require_auth();
    account_id::require_valid_name(new_account_id)?;
    let owner_key = keys::decode(e, new_public_key)?;
    if amount <= 0 {
        return Err(LinkdropError::AmountMustBePositive);
    }

    funds::transfer_into_contract(e, funder, amount)?;
    factory::dispatch(
        e,
        PendingKind::Direct(funder.clone()),
        amount,
        new_account_id,
        &owner_key,
    )
}
