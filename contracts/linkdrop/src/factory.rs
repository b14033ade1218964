//! Account creation through the configured account factory.
//!
//! The factory queues the request and later invokes `callback_fn` on this
//! contract with `(caller, request_id, account)`, where `account` is the new
//! account's address on success and `None` on failure. Until then the
//! request lives here as a `PendingCreation`.

use crate::types::{DataKey, PendingCreation, PendingKind};
use crate::{config, events};
use linkdrop_errors::LinkdropError;
use soroban_sdk::{contractclient, Address, BytesN, Env, String, Symbol};

pub const ON_CREATED_CALLBACK: &str = "on_account_created";
pub const ON_CREATED_AND_CLAIMED_CALLBACK: &str = "on_account_created_and_claimed";

#[contractclient(name = "AccountFactoryClient")]
pub trait AccountFactory {
    /// Queue creation of `new_account_id` with `owner_key` as its full-access
    /// key, answered by a call to `callback_fn` on `callback`.
    fn request_account(
        env: Env,
        new_account_id: String,
        owner_key: BytesN<32>,
        callback: Address,
        callback_fn: Symbol,
        request_id: u64,
    );
}

/// Persist the pending record, then hand the request to the factory.
pub fn dispatch(
    e: &Env,
    kind: PendingKind,
    amount: i128,
    new_account_id: &String,
    owner_key: &BytesN<32>,
) -> Result<u64, LinkdropError> {
    let callback_fn = match kind {
        PendingKind::Linkdrop(_) => ON_CREATED_AND_CLAIMED_CALLBACK,
        PendingKind::Direct(_) => ON_CREATED_CALLBACK,
    };
    let request_id = config::next_request_id(e)?;
    let pending = PendingCreation {
        request_id,
        kind,
        amount,
        new_account_id: new_account_id.clone(),
        requested_at: e.ledger().sequence(),
    };
    e.storage()
        .persistent()
        .set(&DataKey::Pending(request_id), &pending);

    AccountFactoryClient::new(e, &config::factory(e)?).request_account(
        new_account_id,
        owner_key,
        &e.current_contract_address(),
        &Symbol::new(e, callback_fn),
        &request_id,
    );
    events::emit_creation_dispatched(e, request_id, new_account_id, amount);
    Ok(request_id)
}

pub fn pending(e: &Env, request_id: u64) -> Result<PendingCreation, LinkdropError> {
    e.storage()
        .persistent()
        .get(&DataKey::Pending(request_id))
        .ok_or(LinkdropError::PendingCreationNotFound)
}

/// Close the pending record so the request can be resolved only once.
pub fn settle(e: &Env, request_id: u64) {
    e.storage()
        .persistent()
        .remove(&DataKey::Pending(request_id));
}

/// Callbacks are accepted only from the factory the request went to.
pub fn require_factory(e: &Env, caller: &Address) -> Result<(), LinkdropError> {
    if config::factory(e)? != *caller {
        return Err(LinkdropError::Unauthorized);
    }
    caller.require_auth();
    Ok(())
}
