//! Shared test helpers for linkdrop tests.

#![cfg(test)]

extern crate std;

use crate::{ClaimIntent, ClaimTarget, Linkdrop, LinkdropClient};
use ed25519_dalek::{Signer, SigningKey};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::xdr::ToXdr;
use soroban_sdk::{
    contract, contractimpl, contracttype, vec, Address, BytesN, Env, IntoVal, String, Symbol,
    Val, Vec,
};

/// Allowance used by every test deployment.
pub const ALLOWANCE: i128 = 1;

/// Funder's starting token balance.
pub const DEFAULT_MINT: i128 = 1_000_000;

// ─── Mock account factory ──────────────────────────────────────────────────

/// A creation request as the factory received it.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QueuedRequest {
    pub new_account_id: String,
    pub owner_key: BytesN<32>,
    pub callback: Address,
    pub callback_fn: Symbol,
}

#[contracttype]
#[derive(Clone)]
enum MockKey {
    Request(u64),
}

/// Queues creation requests; the test decides when and how each resolves.
#[contract]
pub struct MockAccountFactory;

#[contractimpl]
impl MockAccountFactory {
    pub fn request_account(
        env: Env,
        new_account_id: String,
        owner_key: BytesN<32>,
        callback: Address,
        callback_fn: Symbol,
        request_id: u64,
    ) {
        let request = QueuedRequest {
            new_account_id,
            owner_key,
            callback,
            callback_fn,
        };
        env.storage()
            .persistent()
            .set(&MockKey::Request(request_id), &request);
    }

    pub fn queued(env: Env, request_id: u64) -> Option<QueuedRequest> {
        env.storage().persistent().get(&MockKey::Request(request_id))
    }

    /// Answer a queued request. `None` simulates a failed creation.
    pub fn resolve(env: Env, request_id: u64, account: Option<Address>) -> bool {
        let request: QueuedRequest = env
            .storage()
            .persistent()
            .get(&MockKey::Request(request_id))
            .expect("no queued request");
        env.storage()
            .persistent()
            .remove(&MockKey::Request(request_id));

        let args: Vec<Val> = vec![
            &env,
            env.current_contract_address().into_val(&env),
            request_id.into_val(&env),
            account.into_val(&env),
        ];
        env.invoke_contract::<bool>(&request.callback, &request.callback_fn, args)
    }
}

// ─── Linkdrop key holder ───────────────────────────────────────────────────

/// Off-chain holder of a linkdrop private key.
pub struct Holder {
    signing: SigningKey,
}

impl Holder {
    /// Deterministic key; seeds 1..=11 all encode to 44 base58 characters.
    pub fn new(seed: u8) -> Self {
        Holder {
            signing: SigningKey::from_bytes(&[seed; 32]),
        }
    }

    pub fn key_bytes(&self) -> [u8; 32] {
        self.signing.verifying_key().to_bytes()
    }

    pub fn base58(&self) -> std::string::String {
        bs58::encode(self.key_bytes()).into_string()
    }

    /// Bare base58 form.
    pub fn bare(&self, e: &Env) -> String {
        String::from_str(e, &self.base58())
    }

    /// `ed25519:` prefixed form.
    pub fn prefixed(&self, e: &Env) -> String {
        String::from_str(e, &std::format!("ed25519:{}", self.base58()))
    }

    pub fn canonical(&self, e: &Env) -> BytesN<32> {
        BytesN::from_array(e, &self.key_bytes())
    }

    /// Sign the claim intent the contract will reconstruct.
    pub fn sign(
        &self,
        e: &Env,
        linkdrop: &Address,
        target: &ClaimTarget,
        nonce: u32,
    ) -> BytesN<64> {
        let message = ClaimIntent {
            linkdrop: linkdrop.clone(),
            target: target.clone(),
            nonce,
        }
        .to_xdr(e);
        let bytes: std::vec::Vec<u8> = message.iter().collect();
        BytesN::from_array(e, &self.signing.sign(&bytes).to_bytes())
    }
}

// ─── Deployment ────────────────────────────────────────────────────────────

pub struct TestContext<'a> {
    pub client: LinkdropClient<'a>,
    pub factory: MockAccountFactoryClient<'a>,
    pub token: TokenClient<'a>,
    pub admin: Address,
    pub funder: Address,
    pub contract_id: Address,
}

impl<'a> TestContext<'a> {
    /// Sign for `claim` at the key's current nonce.
    pub fn sign_claim(&self, e: &Env, holder: &Holder, account: &Address) -> BytesN<64> {
        let nonce = self.client.get_key_nonce(&holder.bare(e));
        holder.sign(
            e,
            &self.contract_id,
            &ClaimTarget::Existing(account.clone()),
            nonce,
        )
    }

    /// Sign for `create_account_and_claim` at the key's current nonce.
    pub fn sign_create(
        &self,
        e: &Env,
        holder: &Holder,
        new_account_id: &str,
        new_owner: &Holder,
    ) -> BytesN<64> {
        let nonce = self.client.get_key_nonce(&holder.bare(e));
        let target =
            ClaimTarget::NewAccount(String::from_str(e, new_account_id), new_owner.canonical(e));
        holder.sign(e, &self.contract_id, &target, nonce)
    }

    /// Fund `holder` with `amount` from the default funder.
    pub fn send(&self, e: &Env, holder: &Holder, amount: i128) -> i128 {
        self.client.send(&self.funder, &holder.bare(e), &amount)
    }

    /// Claim `holder`'s escrow into `account`.
    pub fn claim(&self, e: &Env, holder: &Holder, account: &Address) -> i128 {
        let signature = self.sign_claim(e, holder, account);
        self.client.claim(&holder.bare(e), &signature, account)
    }

    /// Dispatch a `create_account_and_claim` for `holder`.
    pub fn create_and_claim(
        &self,
        e: &Env,
        holder: &Holder,
        new_account_id: &str,
        new_owner: &Holder,
    ) -> u64 {
        let signature = self.sign_create(e, holder, new_account_id, new_owner);
        self.client.create_account_and_claim(
            &holder.bare(e),
            &signature,
            &String::from_str(e, new_account_id),
            &new_owner.bare(e),
        )
    }
}

/// Deploys the linkdrop, a mock factory and a Stellar asset; mints to a funder.
pub fn setup(e: &Env) -> TestContext<'_> {
    e.mock_all_auths();

    let contract_id = e.register(Linkdrop, ());
    let client = LinkdropClient::new(e, &contract_id);
    let factory_id = e.register(MockAccountFactory, ());
    let factory = MockAccountFactoryClient::new(e, &factory_id);

    let admin = Address::generate(e);
    let funder = Address::generate(e);

    let stellar_asset = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    StellarAssetClient::new(e, &stellar_asset).mint(&funder, &DEFAULT_MINT);
    let token = TokenClient::new(e, &stellar_asset);

    client.initialize(&admin, &stellar_asset, &factory_id, &ALLOWANCE);

    TestContext {
        client,
        factory,
        token,
        admin,
        funder,
        contract_id,
    }
}
