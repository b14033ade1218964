//! Creation callbacks: settle a pending account creation once the factory
//! reports its outcome. Funds end up either paid to the new account or back
//! where they came from, never both and never neither.

use crate::types::{ClaimPhase, PendingKind};
use crate::{capability, events, factory, funds, ledger, phase};
use linkdrop_errors::LinkdropError;
use soroban_sdk::{Address, Env};

/// Direct creation: pay the new account, or refund the funder.
pub fn on_account_created(
    e: &Env,
    caller: &Address,
    request_id: u64,
    account: Option<Address>,
) -> Result<bool, LinkdropError> {
    factory::require_factory(e, caller)?;
    let pending = factory::pending(e, request_id)?;
    let funder = match pending.kind {
        PendingKind::Direct(funder) => funder,
        PendingKind::Linkdrop(_) => return Err(LinkdropError::PendingCreationNotFound),
    };
    factory::settle(e, request_id);

    let created = account.is_some();
    match account {
        Some(new_account) => funds::transfer_from_contract(e, &new_account, pending.amount)?,
        None => {
            funds::transfer_from_contract(e, &funder, pending.amount)?;
            events::emit_creation_refunded(e, &funder, pending.amount);
        }
    }
    events::emit_creation_resolved(e, request_id, created);
    Ok(created)
}

/// Linkdrop creation: on success pay the new account and revoke the key's
/// capability; on failure restore the escrow so the key can claim again.
pub fn on_account_created_and_claimed(
    e: &Env,
    caller: &Address,
    request_id: u64,
    account: Option<Address>,
) -> Result<bool, LinkdropError> {
    factory::require_factory(e, caller)?;
    let pending = factory::pending(e, request_id)?;
    let key = match pending.kind {
        PendingKind::Linkdrop(key) => key,
        PendingKind::Direct(_) => return Err(LinkdropError::PendingCreationNotFound),
    };
    factory::settle(e, request_id);

    let created = account.is_some();
    match account {
        Some(new_account) => {
            funds::transfer_from_contract(e, &new_account, pending.amount)?;
            // A deposit that arrived while pending keeps the key alive.
            if ledger::has(e, &key) {
                phase::set(e, &key, ClaimPhase::Escrowed);
            } else {
                capability::revoke_if_live(e, &key);
                phase::set(e, &key, ClaimPhase::Claimed);
            }
        }
        None => {
            let balance = ledger::restore(e, &key, pending.amount)?;
            phase::set(e, &key, ClaimPhase::RetryableEscrowed);
            events::emit_escrow_restored(e, &key, pending.amount, balance);
        }
    }
    events::emit_creation_resolved(e, request_id, created);
    Ok(created)
}
