//! Linkdrop Contract
//!
//! Escrows funds against a one-time ed25519 key. Whoever holds the private
//! key can later claim the funds into an existing account, or use them to
//! fund a brand-new account created through the configured account factory.
//!
//! ## Key design decisions
//!
//! - **Canonical keys**: `ed25519:<base58>` and bare base58 decode to the same
//!   32 bytes, which key every per-key record.
//! - **Capabilities as records**: a funded key holds a `Capability` naming the
//!   two claim entry points; holders prove possession by signing a
//!   `ClaimIntent` at the key's current nonce.
//! - **Optimistic delete, compensated**: account creation removes the escrow
//!   before the factory answers; the factory's callback either pays the new
//!   account or restores the escrow.
//! - **Fail loud**: unknown keys are `UnknownKey`, never a zero balance.

#![no_std]

mod account_id;
mod auth;
mod callback;
mod capability;
mod config;
mod context;
mod coordinator;
mod events;
mod factory;
mod funds;
mod keys;
mod ledger;
mod phase;
pub mod types;

pub use context::CallContext;
pub use factory::{AccountFactory, AccountFactoryClient};
pub use linkdrop_errors::LinkdropError;
pub use types::{Capability, ClaimIntent, ClaimPhase, ClaimTarget, PendingCreation, PendingKind};

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env, String};

#[cfg(test)]
mod test_helpers;


#[contract]
pub struct Linkdrop;

#[contractimpl]
impl Linkdrop {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization.
    ///
    /// # Arguments
    /// * `admin` - May collect accrued allowance fees
    /// * `token` - Stellar asset the linkdrops are funded in
    /// * `factory` - Account factory used for account creation
    /// * `allowance` - Fee kept from every deposit to fund the key's capability
    pub fn initialize(
        e: Env,
        admin: Address,
        token: Address,
        factory: Address,
        allowance: i128,
    ) -> Result<(), LinkdropError> {
        if config::is_initialized(&e) {
            return Err(LinkdropError::AlreadyInitialized);
        }
        if allowance < 0 {
            return Err(LinkdropError::InvalidAllowance);
        }
        admin.require_auth();
        config::store(&e, &admin, &token, &factory, allowance);
        Ok(())
    }

    /// Sweep accrued allowance fees to `recipient`. Returns the amount paid.
    pub fn collect_fees(e: Env, admin: Address, recipient: Address) -> Result<i128, LinkdropError> {
        config::require_admin(&e, &admin)?;
        let accrued = config::take_fees(&e)?;
        funds::transfer_from_contract(&e, &recipient, accrued)?;
        events::emit_fees_collected(&e, &recipient, accrued);
        Ok(accrued)
    }

    // ── Linkdrop lifecycle ─────────────────────────────────────────────────

    /// Escrow `amount` against `public_key`, minus the allowance, and grant
    /// the key its claim capability. Repeat deposits accumulate.
    ///
    /// Returns the key's new balance.
    ///
    /// # Errors
    /// * `InsufficientDeposit` - `amount` does not exceed the allowance
    /// * `InvalidKeyEncoding` / `UnsupportedKeyAlgorithm` - bad `public_key`
    pub fn send(
        e: Env,
        funder: Address,
        public_key: String,
        amount: i128,
    ) -> Result<i128, LinkdropError> {
        coordinator::send(&e, &funder, &public_key, amount)
    }

    /// Pay the full escrow for `public_key` to `account_id` and revoke the
    /// key's capability. `signature` signs the `ClaimIntent` for
    /// `ClaimTarget::Existing(account_id)` at the key's current nonce.
    ///
    /// Returns the amount paid.
    ///
    /// # Errors
    /// * `InvalidAccountId` - `account_id` is this contract
    /// * `UnknownKey` - nothing escrowed for the key
    /// * `Unauthorized` - the key holds no capability for `claim`
    pub fn claim(
        e: Env,
        public_key: String,
        signature: BytesN<64>,
        account_id: Address,
    ) -> Result<i128, LinkdropError> {
        coordinator::claim(&e, &public_key, &signature, &account_id)
    }

    /// Take the escrow for `public_key` and ask the factory to create
    /// `new_account_id` owned by `new_public_key`. The funds move once the
    /// factory calls back; on failure the escrow is restored.
    ///
    /// Returns the creation request id.
    pub fn create_account_and_claim(
        e: Env,
        public_key: String,
        signature: BytesN<64>,
        new_account_id: String,
        new_public_key: String,
    ) -> Result<u64, LinkdropError> {
        coordinator::create_account_and_claim(
            &e,
            &public_key,
            &signature,
            &new_account_id,
            &new_public_key,
        )
    }

    /// Create `new_account_id` funded with `amount` from `funder`, without a
    /// linkdrop. On failure the funder is refunded.
    ///
    /// Returns the creation request id.
    pub fn create_account(
        e: Env,
        funder: Address,
        new_account_id: String,
        new_public_key: String,
        amount: i128,
    ) -> Result<u64, LinkdropError> {
        coordinator::create_account(&e, &funder, &new_account_id, &new_public_key, amount)
    }

    // ── Factory callbacks ──────────────────────────────────────────────────

    /// Outcome of a `create_account` request. `caller` must be the factory.
    /// Returns whether the account was created.
    pub fn on_account_created(
        e: Env,
        caller: Address,
        request_id: u64,
        account: Option<Address>,
    ) -> Result<bool, LinkdropError> {
        callback::on_account_created(&e, &caller, request_id, account)
    }

    /// Outcome of a `create_account_and_claim` request. `caller` must be the
    /// factory. Returns whether the account was created.
    pub fn on_account_created_and_claimed(
        e: Env,
        caller: Address,
        request_id: u64,
        account: Option<Address>,
    ) -> Result<bool, LinkdropError> {
        callback::on_account_created_and_claimed(&e, &caller, request_id, account)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Escrowed balance for `public_key`. Fails with `UnknownKey` if absent.
    pub fn get_key_balance(e: Env, public_key: String) -> Result<i128, LinkdropError> {
        let key = keys::decode(&e, &public_key)?;
        ledger::balance_of(&e, &key)
    }

    pub fn get_capability(e: Env, public_key: String) -> Result<Capability, LinkdropError> {
        let key = keys::decode(&e, &public_key)?;
        capability::get(&e, &key)
    }

    pub fn get_claim_phase(e: Env, public_key: String) -> Result<ClaimPhase, LinkdropError> {
        let key = keys::decode(&e, &public_key)?;
        phase::get(&e, &key)
    }

    /// Nonce the next claim signature for `public_key` must carry.
    pub fn get_key_nonce(e: Env, public_key: String) -> Result<u32, LinkdropError> {
        let key = keys::decode(&e, &public_key)?;
        Ok(auth::nonce_of(&e, &key))
    }

    pub fn get_pending_creation(e: Env, request_id: u64) -> Result<PendingCreation, LinkdropError> {
        factory::pending(&e, request_id)
    }

    pub fn get_admin(e: Env) -> Result<Address, LinkdropError> {
        config::admin(&e)
    }

    pub fn get_token(e: Env) -> Result<Address, LinkdropError> {
        config::token(&e)
    }

    pub fn get_factory(e: Env) -> Result<Address, LinkdropError> {
        config::factory(&e)
    }

    pub fn get_allowance(e: Env) -> Result<i128, LinkdropError> {
        config::allowance(&e)
    }

    pub fn get_accrued_fees(e: Env) -> i128 {
        config::accrued_fees(&e)
    }
}
