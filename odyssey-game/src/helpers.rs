use cosmwasm_std::{Addr, Deps, MessageInfo, Storage, Timestamp};

use crate::error::ContractError;
use crate::state::{ActivityLogEntry, Economy, Player, ACTIVITY_LOGS, CONFIG, LOG_COUNTS, PLAYERS};

const MAX_CHARACTER_FIELD_LEN: usize = 64;
const MAX_IMAGE_URI_LEN: usize = 512;
/// Longest configurable cooldown: one year.
pub const MAX_COOLDOWN_SECONDS: u64 = 365 * 24 * 60 * 60;

pub fn assert_owner(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.owner {
        return Err(ContractError::Unauthorized {
            role: "owner".to_string(),
        });
    }
    Ok(())
}

pub fn assert_not_paused(deps: Deps) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::Paused);
    }
    Ok(())
}

pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}

pub fn load_registered(storage: &dyn Storage, addr: &Addr) -> Result<Player, ContractError> {
    PLAYERS
        .may_load(storage, addr)?
        .ok_or(ContractError::NotRegistered)
}

/// Registered player who also owns a character. Returns the player and the character id.
pub fn load_with_character(
    storage: &dyn Storage,
    addr: &Addr,
) -> Result<(Player, u64), ContractError> {
    let player = load_registered(storage, addr)?;
    let character_id = player.character_id.ok_or(ContractError::NoCharacter)?;
    Ok((player, character_id))
}

pub fn validate_economy(economy: &Economy) -> Result<(), ContractError> {
    if economy.level_up_experience == 0 {
        return Err(ContractError::InvalidEconomy {
            reason: "level_up_experience must be greater than zero".to_string(),
        });
    }
    if economy.cooldown_seconds > MAX_COOLDOWN_SECONDS {
        return Err(ContractError::InvalidEconomy {
            reason: format!("cooldown_seconds must not exceed {MAX_COOLDOWN_SECONDS}"),
        });
    }
    Ok(())
}

pub fn validate_character_field(field: &str, value: &str) -> Result<(), ContractError> {
    if value.trim().is_empty() {
        return Err(ContractError::InvalidCharacter {
            reason: format!("{field} must not be empty"),
        });
    }
    if value.len() > MAX_CHARACTER_FIELD_LEN {
        return Err(ContractError::InvalidCharacter {
            reason: format!("{field} exceeds {MAX_CHARACTER_FIELD_LEN} bytes"),
        });
    }
    Ok(())
}

/// Empty URIs are accepted; only the size is bounded.
pub fn validate_image_uri(image_uri: &str) -> Result<(), ContractError> {
    if image_uri.len() > MAX_IMAGE_URI_LEN {
        return Err(ContractError::InvalidCharacter {
            reason: format!("image_uri exceeds {MAX_IMAGE_URI_LEN} bytes"),
        });
    }
    Ok(())
}

/// Append an entry to the player's activity feed. Returns the entry index.
pub fn append_activity(
    storage: &mut dyn Storage,
    player: &Addr,
    message: String,
    timestamp: Timestamp,
) -> Result<u64, ContractError> {
    let index = LOG_COUNTS.may_load(storage, player)?.unwrap_or_default();
    let next = index.checked_add(1).ok_or(ContractError::Overflow)?;

    ACTIVITY_LOGS.save(
        storage,
        (player, index),
        &ActivityLogEntry {
            index,
            message,
            timestamp,
        },
    )?;
    LOG_COUNTS.save(storage, player, &next)?;
    Ok(index)
}
