use soroban_sdk::{contracttype, Address, BytesN, String, Symbol, Vec};

// ─── Capability ────────────────────────────────────────────────────────────

/// Restricted grant held by a linkdrop key: whoever can sign with the key may
/// invoke only `methods` on `subject`, charged against `allowance`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Capability {
    /// The contract the grant is scoped to (always this linkdrop).
    pub subject: Address,
    /// Entry points the key may invoke.
    pub methods: Vec<Symbol>,
    /// Total allowance charged against this key, one fee per deposit.
    pub allowance: i128,
    /// Ledger sequence of the first grant.
    pub granted_at: u32,
}

// ─── Claim state machine ───────────────────────────────────────────────────

/// Persisted phase of a funded key. The in-call `Claiming` step is never
/// stored: every entry point either completes a transition or aborts.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ClaimPhase {
    /// Funds escrowed, key claimable.
    Escrowed,
    /// Escrow removed, account creation dispatched, awaiting the factory callback.
    CreationPending,
    /// Funds paid out and capability revoked.
    Claimed,
    /// Account creation failed; escrow restored and key claimable again.
    RetryableEscrowed,
}

/// Where a claim sends the escrowed funds. Part of the signed intent.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ClaimTarget {
    /// Transfer to an account that already exists.
    Existing(Address),
    /// Create the named account with the given full-access key, then fund it.
    NewAccount(String, BytesN<32>),
}

/// Message a linkdrop key signs to authorize a claim. XDR-encoded before
/// signing; `nonce` must equal the key's current nonce.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ClaimIntent {
    pub linkdrop: Address,
    pub target: ClaimTarget,
    pub nonce: u32,
}

// ─── Pending account creation ──────────────────────────────────────────────

/// Who gets compensated if a dispatched account creation fails.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum PendingKind {
    /// Linkdrop claim: restore the escrow for this key.
    Linkdrop(BytesN<32>),
    /// Direct creation: refund this funder.
    Direct(Address),
}

/// Arguments threaded from a dispatched creation to its callback.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingCreation {
    pub request_id: u64,
    pub kind: PendingKind,
    /// Amount held by the contract until the callback resolves.
    pub amount: i128,
    pub new_account_id: String,
    /// Ledger sequence at dispatch.
    pub requested_at: u32,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Contract admin address.
    Admin,
    /// Stellar asset token address.
    Token,
    /// Account factory contract address.
    Factory,
    /// Fee charged per deposit to fund the key's capability.
    Allowance,
    /// Allowance fees held in the contract.
    AccruedFees,
    /// Next request id handed to the factory.
    NextRequestId,
    /// Escrowed balance per canonical key.
    Escrow(BytesN<32>),
    /// Live capability per canonical key.
    Capability(BytesN<32>),
    /// Signature nonce per canonical key. Never removed.
    Nonce(BytesN<32>),
    /// Claim phase per canonical key.
    Phase(BytesN<32>),
    /// Pending account creation per request id.
    Pending(u64),
}
