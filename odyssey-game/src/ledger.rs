//! Fungible game token ledger.
//!
//! Every mutating function computes all new values with checked arithmetic
//! before its first write, so an `Err` leaves storage untouched.
//! Total supply always equals the sum of all balances.

use cosmwasm_std::{Addr, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{BALANCES, TOTAL_SUPPLY};

pub fn balance_of(storage: &dyn Storage, addr: &Addr) -> StdResult<Uint128> {
    Ok(BALANCES.may_load(storage, addr)?.unwrap_or_default())
}

pub fn total_supply(storage: &dyn Storage) -> StdResult<Uint128> {
    Ok(TOTAL_SUPPLY.may_load(storage)?.unwrap_or_default())
}

/// Create `amount` new tokens for `to`. Returns the new balance.
pub fn mint(storage: &mut dyn Storage, to: &Addr, amount: Uint128) -> Result<Uint128, ContractError> {
    let balance = balance_of(storage, to)?
        .checked_add(amount)
        .map_err(|_| ContractError::Overflow)?;
    let supply = total_supply(storage)?
        .checked_add(amount)
        .map_err(|_| ContractError::Overflow)?;

    BALANCES.save(storage, to, &balance)?;
    TOTAL_SUPPLY.save(storage, &supply)?;
    Ok(balance)
}

/// Grant an action reward. Rewards are newly issued tokens, so this is a mint.
pub fn credit(
    storage: &mut dyn Storage,
    to: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    mint(storage, to, amount)
}

/// Remove `amount` from `from` and from total supply. Returns the new balance.
pub fn debit(
    storage: &mut dyn Storage,
    from: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let available = balance_of(storage, from)?;
    let balance = available
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientBalance {
            needed: amount.to_string(),
            available: available.to_string(),
        })?;
    // supply >= every balance, so this only fails on a corrupted ledger
    let supply = total_supply(storage)?
        .checked_sub(amount)
        .map_err(|_| ContractError::Overflow)?;

    BALANCES.save(storage, from, &balance)?;
    TOTAL_SUPPLY.save(storage, &supply)?;
    Ok(balance)
}

/// Holder-initiated destruction of tokens.
pub fn burn(
    storage: &mut dyn Storage,
    from: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    debit(storage, from, amount)
}

/// Move tokens between holders. Total supply is unchanged.
/// Returns the sender's new balance.
pub fn transfer(
    storage: &mut dyn Storage,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<Uint128, ContractError> {
    let available = balance_of(storage, from)?;
    let from_balance =
        available
            .checked_sub(amount)
            .map_err(|_| ContractError::InsufficientBalance {
                needed: amount.to_string(),
                available: available.to_string(),
            })?;
    if from == to {
        return Ok(available);
    }
    let to_balance = balance_of(storage, to)?
        .checked_add(amount)
        .map_err(|_| ContractError::Overflow)?;

    BALANCES.save(storage, from, &from_balance)?;
    BALANCES.save(storage, to, &to_balance)?;
    Ok(from_balance)
}

/// Check that `holder` can pay `price` for a game purchase.
/// Returns the current balance.
pub fn ensure_can_pay(
    storage: &dyn Storage,
    holder: &Addr,
    price: Uint128,
) -> Result<Uint128, ContractError> {
    let available = balance_of(storage, holder)?;
    if available < price {
        return Err(ContractError::InsufficientTokens {
            needed: price.to_string(),
            available: available.to_string(),
        });
    }
    Ok(available)
}
