use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::state::{ActivityLogEntry, CatalogItem, Character, Economy};

#[cw_serde]
pub struct InstantiateMsg {
    pub owner: String,
    /// Game token name, e.g. "Odyssey Gold"
    pub name: String,
    pub symbol: String,
    /// Economy parameters; `None` uses the built-in defaults
    pub economy: Option<Economy>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Join the game and receive the registration bonus
    RegisterPlayer {},
    /// Buy the sender's one and only character
    MintCharacter {
        name: String,
        class: String,
        image_uri: String,
    },
    /// Gated action: requires a character, shares the cooldown
    Mine {},
    Battle {},
    CompleteQuest {},
    /// Buy a catalog item (registration required, no cooldown)
    BuyItem { item_id: u64 },

    /// Move game tokens to another address
    Transfer { recipient: String, amount: Uint128 },
    /// Destroy game tokens held by the sender
    Burn { amount: Uint128 },

    /// Replace the economy parameters (owner only)
    UpdateEconomy { economy: Economy },
    /// Emergency pause (owner only)
    Pause {},
    /// Unpause (owner only)
    Unpause {},
    /// Send the contract's native balance of `denom` to the owner (owner only)
    EmergencyWithdraw { denom: String },

    /// Step 1: propose a new owner (owner only)
    ProposeOwner { new_owner: String },
    /// Step 2: proposed owner accepts
    AcceptOwner {},
    /// Cancel a pending owner transfer (owner only)
    CancelOwnerTransfer {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(crate::state::Config)]
    Config {},

    /// Full player snapshot, including balance and character
    #[returns(PlayerInfoResponse)]
    PlayerInfo { address: String },

    #[returns(ItemsResponse)]
    AllItems {},

    #[returns(crate::state::CatalogItem)]
    Item { item_id: u64 },

    /// Activity feed in append order, one page at a time.
    /// Returns entries with index > `start_after` (from the first entry when `None`),
    /// at most `limit` of them: 30 by default, capped at 100. Page forward with the
    /// last returned index until a page comes back shorter than the limit.
    #[returns(ActivityLogsResponse)]
    ActivityLogs {
        address: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    #[returns(BalanceResponse)]
    Balance { address: String },

    #[returns(TokenInfoResponse)]
    TokenInfo {},

    #[returns(crate::state::Character)]
    Character { character_id: u64 },

    #[returns(NumCharactersResponse)]
    NumCharacters {},

    #[returns(Option<crate::state::PendingOwnerTransfer>)]
    PendingOwner {},
}

#[cw_serde]
pub struct PlayerInfoResponse {
    pub address: String,
    pub registered: bool,
    /// 0 for unregistered addresses
    pub level: u32,
    pub experience: u64,
    pub balance: Uint128,
    /// Seconds since epoch of the last gated action
    pub last_action: Option<u64>,
    /// Seconds since epoch when the next gated action is allowed
    pub cooldown_until: Option<u64>,
    pub character: Option<Character>,
    pub items: Vec<u64>,
}

#[cw_serde]
pub struct ItemsResponse {
    pub items: Vec<CatalogItem>,
}

#[cw_serde]
pub struct ActivityLogsResponse {
    pub logs: Vec<ActivityLogEntry>,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct TokenInfoResponse {
    pub name: String,
    pub symbol: String,
    pub total_supply: Uint128,
}

#[cw_serde]
pub struct NumCharactersResponse {
    pub count: u64,
}

#[cw_serde]
pub struct MigrateMsg {}
