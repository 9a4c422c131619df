use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("unauthorized: only {role} can perform this action")]
    Unauthorized { role: String },

    #[error("contract is paused")]
    Paused,

    #[error("contract is not paused")]
    NotPaused,

    #[error("player already registered")]
    AlreadyRegistered,

    #[error("player is not registered")]
    NotRegistered,

    #[error("character already minted (id {character_id})")]
    AlreadyMinted { character_id: u64 },

    #[error("player has no character")]
    NoCharacter,

    #[error("invalid character: {reason}")]
    InvalidCharacter { reason: String },

    #[error("insufficient tokens: need {needed}, have {available}")]
    InsufficientTokens { needed: String, available: String },

    #[error("insufficient balance: need {needed}, have {available}")]
    InsufficientBalance { needed: String, available: String },

    #[error("action on cooldown: next action available at {available_at}")]
    ActionOnCooldown { available_at: String },

    #[error("item not found: {item_id}")]
    ItemNotFound { item_id: u64 },

    #[error("invalid economy parameters: {reason}")]
    InvalidEconomy { reason: String },

    #[error("zero amount not allowed")]
    ZeroAmount,

    /// Balance, supply or experience arithmetic left its integer range.
    /// Indicates a broken ledger invariant rather than a user mistake.
    #[error("overflow in arithmetic operation")]
    Overflow,

    #[error("unexpected funds sent with this message")]
    UnexpectedFunds,

    #[error("no owner transfer pending")]
    NoOwnerTransferPending,

    #[error("caller is not the pending owner")]
    NotPendingOwner,

    #[error("owner transfer already pending")]
    OwnerTransferAlreadyPending,
}
