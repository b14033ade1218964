use soroban_sdk::{contracttype, Address, Env};

/// Ambient call metadata attached to every linkdrop event for auditing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CallContext {
    /// This contract's address.
    pub contract: Address,
    /// Ledger sequence the call executed in.
    pub sequence: u32,
    /// Ledger close timestamp, in seconds.
    pub timestamp: u64,
}

impl CallContext {
    pub fn capture(e: &Env) -> Self {
        let ledger = e.ledger();
        CallContext {
            contract: e.current_contract_address(),
            sequence: ledger.sequence(),
            timestamp: ledger.timestamp(),
        }
    }
}
