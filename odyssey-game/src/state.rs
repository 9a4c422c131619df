use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

/// Tokens minted to every newly registered player.
pub const REGISTRATION_BONUS: u128 = 100;
/// Price of minting a character.
pub const CHARACTER_PRICE: u128 = 100;
/// Minimum seconds between two gated actions of the same player.
pub const ACTION_COOLDOWN_SECONDS: u64 = 300;
/// Experience needed per level: reaching level `n + 1` takes `n * LEVEL_UP_EXPERIENCE`.
pub const LEVEL_UP_EXPERIENCE: u64 = 100;

pub const MINING_BASE_REWARD: u128 = 12;
pub const MINING_LEVEL_BONUS: u128 = 2;
pub const MINING_EXPERIENCE: u64 = 10;

pub const BATTLE_BASE_REWARD: u128 = 20;
pub const BATTLE_LEVEL_BONUS: u128 = 4;
pub const BATTLE_EXPERIENCE: u64 = 15;

pub const QUEST_BASE_REWARD: u128 = 50;
pub const QUEST_LEVEL_BONUS: u128 = 5;
pub const QUEST_EXPERIENCE: u64 = 25;

/// Reward table for one gated action kind.
#[cw_serde]
pub struct ActionReward {
    /// Tokens paid at level 1
    pub base_reward: Uint128,
    /// Extra tokens per level above 1
    pub level_bonus: Uint128,
    pub experience: u64,
}

/// Tunable economy parameters.
#[cw_serde]
pub struct Economy {
    pub registration_bonus: Uint128,
    pub character_price: Uint128,
    pub cooldown_seconds: u64,
    pub level_up_experience: u64,
    pub mining: ActionReward,
    pub battle: ActionReward,
    pub quest: ActionReward,
}

impl Default for Economy {
    fn default() -> Self {
        Economy {
            registration_bonus: Uint128::new(REGISTRATION_BONUS),
            character_price: Uint128::new(CHARACTER_PRICE),
            cooldown_seconds: ACTION_COOLDOWN_SECONDS,
            level_up_experience: LEVEL_UP_EXPERIENCE,
            mining: ActionReward {
                base_reward: Uint128::new(MINING_BASE_REWARD),
                level_bonus: Uint128::new(MINING_LEVEL_BONUS),
                experience: MINING_EXPERIENCE,
            },
            battle: ActionReward {
                base_reward: Uint128::new(BATTLE_BASE_REWARD),
                level_bonus: Uint128::new(BATTLE_LEVEL_BONUS),
                experience: BATTLE_EXPERIENCE,
            },
            quest: ActionReward {
                base_reward: Uint128::new(QUEST_BASE_REWARD),
                level_bonus: Uint128::new(QUEST_LEVEL_BONUS),
                experience: QUEST_EXPERIENCE,
            },
        }
    }
}

#[cw_serde]
pub struct Config {
    pub owner: Addr,
    pub paused: bool,
    /// Game token display name
    pub name: String,
    pub symbol: String,
    pub economy: Economy,
}

#[cw_serde]
pub struct PendingOwnerTransfer {
    pub proposed_owner: Addr,
}

/// Mutable per-player record. Presence in `PLAYERS` means the player is registered.
#[cw_serde]
pub struct Player {
    pub registered_at: Timestamp,
    pub level: u32,
    /// Cumulative, never reset on level-up
    pub experience: u64,
    /// Set only by mine / battle / quest
    pub last_action: Option<Timestamp>,
    pub character_id: Option<u64>,
    /// Catalog ids in acquisition order, duplicates allowed
    pub items: Vec<u64>,
}

/// Character record. Immutable once minted.
#[cw_serde]
pub struct Character {
    pub id: u64,
    pub owner: Addr,
    pub name: String,
    pub class: String,
    pub image_uri: String,
    pub minted_at: Timestamp,
}

#[cw_serde]
#[derive(Copy, Eq, PartialOrd, Ord)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

#[cw_serde]
pub struct CatalogItem {
    pub id: u64,
    pub name: String,
    pub price: Uint128,
    pub rarity: Rarity,
}

#[cw_serde]
pub struct ActivityLogEntry {
    pub index: u64,
    pub message: String,
    pub timestamp: Timestamp,
}

pub const CONFIG: Item<Config> = Item::new("config");
pub const PENDING_OWNER: Item<PendingOwnerTransfer> = Item::new("pending_owner");

pub const PLAYERS: Map<&Addr, Player> = Map::new("players");

/// character_id -> Character
pub const CHARACTERS: Map<u64, Character> = Map::new("characters");
pub const CHARACTER_COUNT: Item<u64> = Item::new("character_count");

/// item_id -> CatalogItem, seeded once at instantiate
pub const CATALOG: Map<u64, CatalogItem> = Map::new("catalog");

/// Token ledger
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");
pub const TOTAL_SUPPLY: Item<Uint128> = Item::new("total_supply");

/// (player, index) -> ActivityLogEntry, append-only
pub const ACTIVITY_LOGS: Map<(&Addr, u64), ActivityLogEntry> = Map::new("activity_logs");
/// player -> number of log entries written so far
pub const LOG_COUNTS: Map<&Addr, u64> = Map::new("log_counts");
