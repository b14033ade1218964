use linkdrop_errors::LinkdropError;
use soroban_sdk::{Address, Env, String};

pub const MIN_ACCOUNT_ID_LEN: usize = 2;
pub const MAX_ACCOUNT_ID_LEN: usize = 64;

/// Named account ids: lowercase alphanumeric runs joined by single `.`, `-`
/// or `_` separators, 2..=64 bytes.
pub fn is_valid_account_id(id: &[u8]) -> bool {
    if id.len() < MIN_ACCOUNT_ID_LEN || id.len() > MAX_ACCOUNT_ID_LEN {
        return false;
    }
    // A separator is only allowed directly after an alphanumeric byte.
    let mut after_separator = true;
    for b in id {
        match b {
            b'a'..=b'z' | b'0'..=b'9' => after_separator = false,
            b'.' | b'-' | b'_' => {
                if after_separator {
                    return false;
                }
                after_separator = true;
            }
            _ => return false,
        }
    }
    !after_separator
}

pub fn require_valid_name(id: &String) -> Result<(), LinkdropError> {
    let len = id.len() as usize;
    if len < MIN_ACCOUNT_ID_LEN || len > MAX_ACCOUNT_ID_LEN {
        return Err(LinkdropError::InvalidAccountId);
    }
    let mut buf = [0u8; MAX_ACCOUNT_ID_LEN];
    id.copy_into_slice(&mut buf[..len]);
    if !is_valid_account_id(&buf[..len]) {
        return Err(LinkdropError::InvalidAccountId);
    }
    Ok(())
}

/// Claims into an existing account may target any address except the
/// linkdrop itself, which would strand the funds in escrow custody.
pub fn require_claim_target(e: &Env, account: &Address) -> Result<(), LinkdropError> {
    if *account == e.current_contract_address() {
        return Err(LinkdropError::InvalidAccountId);
    }
    Ok(())
}
