//! Token movements in and out of linkdrop custody.

use crate::config;
use linkdrop_errors::LinkdropError;
use soroban_sdk::token::TokenClient;
use soroban_sdk::{Address, Env};

fn token_client(e: &Env) -> Result<TokenClient<'_>, LinkdropError> {
    Ok(TokenClient::new(e, &config::token(e)?))
}

/// Pull `amount` from `from` into the contract. `from` must have authorized
/// the enclosing call.
pub fn transfer_into_contract(e: &Env, from: &Address, amount: i128) -> Result<(), LinkdropError> {
    if amount <= 0 {
        return Err(LinkdropError::AmountMustBePositive);
    }
    token_client(e)?.transfer(from, &e.current_contract_address(), &amount);
    Ok(())
}

/// Pay `amount` out of the contract to `recipient`.
pub fn transfer_from_contract(
    e: &Env,
    recipient: &Address,
    amount: i128,
) -> Result<(), LinkdropError> {
    if amount < 0 {
        return Err(LinkdropError::AmountMustBePositive);
    }
    if amount == 0 {
        return Ok(());
    }
    token_client(e)?.transfer(&e.current_contract_address(), recipient, &amount);
    Ok(())
}
