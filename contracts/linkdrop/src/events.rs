use crate::context::CallContext;
use soroban_sdk::{Address, BytesN, Env, String, Symbol};

/// Emitted when funds are escrowed against a key.
///
/// # Topics
/// * `Symbol` - "linkdrop_sent"
/// * `BytesN<32>` - The canonical linkdrop key
///
/// # Data
/// * `Address` - The funder
/// * `i128` - Amount escrowed by this deposit (net of allowance)
/// * `i128` - New escrowed balance for the key
/// * `CallContext` - Ledger metadata of the call
pub fn emit_linkdrop_sent(e: &Env, key: &BytesN<32>, funder: &Address, net: i128, balance: i128) {
    let topics = (Symbol::new(e, "linkdrop_sent"), key.clone());
    let data = (funder.clone(), net, balance, CallContext::capture(e));
    e.events().publish(topics, data);
}

/// Emitted when a capability is first granted to a key.
///
/// # Topics
/// * `Symbol` - "capability_granted"
/// * `BytesN<32>` - The canonical linkdrop key
///
/// # Data
/// * `i128` - Allowance charged
/// * `CallContext` - Ledger metadata of the call
pub fn emit_capability_granted(e: &Env, key: &BytesN<32>, allowance: i128) {
    let topics = (Symbol::new(e, "capability_granted"), key.clone());
    e.events()
        .publish(topics, (allowance, CallContext::capture(e)));
}

/// Emitted when a key's capability is permanently removed.
///
/// # Topics
/// * `Symbol` - "capability_revoked"
/// * `BytesN<32>` - The canonical linkdrop key
///
/// # Data
/// * `CallContext` - Ledger metadata of the call
pub fn emit_capability_revoked(e: &Env, key: &BytesN<32>) {
    let topics = (Symbol::new(e, "capability_revoked"), key.clone());
    e.events().publish(topics, CallContext::capture(e));
}

/// Emitted when escrowed funds are paid to an existing account.
///
/// # Topics
/// * `Symbol` - "linkdrop_claimed"
/// * `BytesN<32>` - The canonical linkdrop key
///
/// # Data
/// * `Address` - Receiving account
/// * `i128` - Amount paid
/// * `CallContext` - Ledger metadata of the call
pub fn emit_linkdrop_claimed(e: &Env, key: &BytesN<32>, account: &Address, amount: i128) {
    let topics = (Symbol::new(e, "linkdrop_claimed"), key.clone());
    let data = (account.clone(), amount, CallContext::capture(e));
    e.events().publish(topics, data);
}

/// Emitted when an account creation is handed to the factory.
///
/// # Topics
/// * `Symbol` - "creation_dispatched"
/// * `u64` - Request id
///
/// # Data
/// * `String` - Requested account id
/// * `i128` - Amount held pending the callback
/// * `CallContext` - Ledger metadata of the call
pub fn emit_creation_dispatched(e: &Env, request_id: u64, new_account_id: &String, amount: i128) {
    let topics = (Symbol::new(e, "creation_dispatched"), request_id);
    let data = (new_account_id.clone(), amount, CallContext::capture(e));
    e.events().publish(topics, data);
}

/// Emitted when the factory reports the outcome of an account creation.
///
/// # Topics
/// * `Symbol` - "creation_resolved"
/// * `u64` - Request id
///
/// # Data
/// * `bool` - Whether the account was created
/// * `CallContext` - Ledger metadata of the call
pub fn emit_creation_resolved(e: &Env, request_id: u64, created: bool) {
    let topics = (Symbol::new(e, "creation_resolved"), request_id);
    e.events()
        .publish(topics, (created, CallContext::capture(e)));
}

/// Emitted when a failed creation puts funds back into escrow.
///
/// # Topics
/// * `Symbol` - "escrow_restored"
/// * `BytesN<32>` - The canonical linkdrop key
///
/// # Data
/// * `i128` - Amount restored
/// * `i128` - Escrowed balance after the restore
/// * `CallContext` - Ledger metadata of the call
pub fn emit_escrow_restored(e: &Env, key: &BytesN<32>, amount: i128, balance: i128) {
    let topics = (Symbol::new(e, "escrow_restored"), key.clone());
    let data = (amount, balance, CallContext::capture(e));
    e.events().publish(topics, data);
}

/// Emitted when a failed direct creation refunds the funder.
///
/// # Topics
/// * `Symbol` - "creation_refunded"
/// * `Address` - The funder refunded
///
/// # Data
/// * `i128` - Amount refunded
/// * `CallContext` - Ledger metadata of the call
pub fn emit_creation_refunded(e: &Env, funder: &Address, amount: i128) {
    let topics = (Symbol::new(e, "creation_refunded"), funder.clone());
    e.events()
        .publish(topics, (amount, CallContext::capture(e)));
}

/// Emitted when accrued allowance fees are swept.
///
/// # Topics
/// * `Symbol` - "fees_collected"
///
/// # Data
/// * `Address` - Recipient
/// * `i128` - Amount collected
pub fn emit_fees_collected(e: &Env, recipient: &Address, amount: i128) {
    e.events().publish(
        (Symbol::new(e, "fees_collected"),),
        (recipient.clone(), amount, CallContext::capture(e)),
    );
}
