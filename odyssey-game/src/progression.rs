//! Reward, experience and cooldown rules for gated actions.

use cosmwasm_std::{Timestamp, Uint128};

use crate::error::ContractError;
use crate::state::{ActionReward, Economy, Player};

const NANOS_PER_SECOND: u64 = 1_000_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Mine,
    Battle,
    Quest,
}

impl ActionKind {
    /// Label carried by the `game_action` event.
    pub fn label(self) -> &'static str {
        match self {
            ActionKind::Mine => "Mining",
            ActionKind::Battle => "Battle",
            ActionKind::Quest => "Quest",
        }
    }

    pub fn rewards(self, economy: &Economy) -> &ActionReward {
        match self {
            ActionKind::Mine => &economy.mining,
            ActionKind::Battle => &economy.battle,
            ActionKind::Quest => &economy.quest,
        }
    }
}

/// `base_reward + level_bonus * (level - 1)`
pub fn reward_for_level(rewards: &ActionReward, level: u32) -> Result<Uint128, ContractError> {
    let levels_above_first = Uint128::from(level.saturating_sub(1));
    rewards
        .level_bonus
        .checked_mul(levels_above_first)
        .map_err(|_| ContractError::Overflow)?
        .checked_add(rewards.base_reward)
        .map_err(|_| ContractError::Overflow)
}

/// Level reached with `experience` total, never below the current `level`.
/// Level `n` advances once experience reaches `n * level_up_experience`, so the
/// result is the smallest `n >= level` with `experience < n * level_up_experience`.
pub fn level_after(level: u32, experience: u64, level_up_experience: u64) -> u32 {
    if level_up_experience == 0 {
        return level;
    }
    let earned = (experience / level_up_experience).saturating_add(1);
    u32::try_from(earned).unwrap_or(u32::MAX).max(level)
}

/// Earliest time the player may act again, if a cooldown applies at all.
pub fn cooldown_until(
    player: &Player,
    cooldown_seconds: u64,
) -> Result<Option<Timestamp>, ContractError> {
    let Some(last) = player.last_action else {
        return Ok(None);
    };
    cooldown_seconds
        .checked_mul(NANOS_PER_SECOND)
        .and_then(|cooldown| last.nanos().checked_add(cooldown))
        .map(|nanos| Some(Timestamp::from_nanos(nanos)))
        .ok_or(ContractError::Overflow)
}

pub fn ensure_off_cooldown(
    player: &Player,
    now: Timestamp,
    cooldown_seconds: u64,
) -> Result<(), ContractError> {
    if let Some(available_at) = cooldown_until(player, cooldown_seconds)? {
        if now < available_at {
            return Err(ContractError::ActionOnCooldown {
                available_at: available_at.seconds().to_string(),
            });
        }
    }
    Ok(())
}

/// Outcome of a gated action, computed before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub reward: Uint128,
    pub experience: u64,
    pub level: u32,
}

impl ActionOutcome {
    pub fn leveled_up(&self, previous_level: u32) -> bool {
        self.level > previous_level
    }
}

pub fn resolve_action(
    player: &Player,
    kind: ActionKind,
    economy: &Economy,
) -> Result<ActionOutcome, ContractError> {
    let rewards = kind.rewards(economy);
    let reward = reward_for_level(rewards, player.level)?;
    let experience = player
        .experience
        .checked_add(rewards.experience)
        .ok_or(ContractError::Overflow)?;
    let level = level_after(player.level, experience, economy.level_up_experience);

    Ok(ActionOutcome {
        reward,
        experience,
        level,
    })
}
