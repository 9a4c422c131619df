use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Binary, Coin, Deps, DepsMut, Env, Event, MessageInfo, Order,
    Response, StdError, StdResult, Uint128,
};
use cw2::set_contract_version;
use cw_storage_plus::Bound;

use crate::catalog;
use crate::error::ContractError;
use crate::helpers::*;
use crate::ledger;
use crate::msg::*;
use crate::progression::{self, ActionKind, ActionOutcome};
use crate::state::*;

const CONTRACT_NAME: &str = "crates.io:odyssey-game";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_QUERY_LIMIT: u32 = 30;
const MAX_QUERY_LIMIT: u32 = 100;

// ─── Instantiate ────────────────────────────────────────────────────────────

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let economy = msg.economy.unwrap_or_default();
    validate_economy(&economy)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    let config = Config {
        owner,
        paused: false,
        name: msg.name,
        symbol: msg.symbol,
        economy,
    };
    CONFIG.save(deps.storage, &config)?;
    CHARACTER_COUNT.save(deps.storage, &0u64)?;
    TOTAL_SUPPLY.save(deps.storage, &Uint128::zero())?;
    let item_count = catalog::seed(deps.storage)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("owner", config.owner.as_str())
        .add_attribute("catalog_items", item_count.to_string()))
}

// ─── Execute ────────────────────────────────────────────────────────────────

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RegisterPlayer {} => execute_register_player(deps, env, info),
        ExecuteMsg::MintCharacter {
            name,
            class,
            image_uri,
        } => execute_mint_character(deps, env, info, name, class, image_uri),
        ExecuteMsg::Mine {} => execute_mine(deps, env, info),
        ExecuteMsg::Battle {} => execute_battle(deps, env, info),
        ExecuteMsg::CompleteQuest {} => execute_complete_quest(deps, env, info),
        ExecuteMsg::BuyItem { item_id } => execute_buy_item(deps, env, info, item_id),
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, env, info, recipient, amount)
        }
        ExecuteMsg::Burn { amount } => execute_burn(deps, env, info, amount),
        ExecuteMsg::UpdateEconomy { economy } => execute_update_economy(deps, env, info, economy),
        ExecuteMsg::Pause {} => execute_pause(deps, env, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, env, info),
        ExecuteMsg::EmergencyWithdraw { denom } => {
            execute_emergency_withdraw(deps, env, info, denom)
        }
        ExecuteMsg::ProposeOwner { new_owner } => {
            execute_propose_owner(deps, env, info, new_owner)
        }
        ExecuteMsg::AcceptOwner {} => execute_accept_owner(deps, env, info),
        ExecuteMsg::CancelOwnerTransfer {} => execute_cancel_owner_transfer(deps, env, info),
    }
}

// ─── Execute: Registration ──────────────────────────────────────────────────

pub fn execute_register_player(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_not_paused(deps.as_ref())?;

    let player_addr = info.sender;
    if PLAYERS.has(deps.storage, &player_addr) {
        return Err(ContractError::AlreadyRegistered);
    }

    let config = CONFIG.load(deps.storage)?;
    let now = env.block.time;
    let player = Player {
        registered_at: now,
        level: 1,
        experience: 0,
        last_action: None,
        character_id: None,
        items: vec![],
    };

    let balance = ledger::mint(deps.storage, &player_addr, config.economy.registration_bonus)?;
    PLAYERS.save(deps.storage, &player_addr, &player)?;
    append_activity(
        deps.storage,
        &player_addr,
        format!(
            "Registered as a new player with {} {}",
            config.economy.registration_bonus, config.symbol
        ),
        now,
    )?;

    let event = Event::new("player_registered")
        .add_attribute("player", player_addr.as_str())
        .add_attribute("timestamp", now.seconds().to_string());

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "register_player")
        .add_attribute("player", player_addr.as_str())
        .add_attribute("level", player.level.to_string())
        .add_attribute("balance", balance.to_string()))
}

// ─── Execute: Character Registry ────────────────────────────────────────────

pub fn execute_mint_character(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    name: String,
    class: String,
    image_uri: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_not_paused(deps.as_ref())?;

    let player_addr = info.sender;
    let mut player = load_registered(deps.storage, &player_addr)?;
    if let Some(character_id) = player.character_id {
        return Err(ContractError::AlreadyMinted { character_id });
    }
    validate_character_field("name", &name)?;
    validate_character_field("class", &class)?;
    validate_image_uri(&image_uri)?;

    let config = CONFIG.load(deps.storage)?;
    let price = config.economy.character_price;
    ledger::ensure_can_pay(deps.storage, &player_addr, price)?;

    let character_id = CHARACTER_COUNT
        .load(deps.storage)?
        .checked_add(1)
        .ok_or(ContractError::Overflow)?;

    // All checks passed
    let now = env.block.time;
    let balance = ledger::debit(deps.storage, &player_addr, price)?;

    let character = Character {
        id: character_id,
        owner: player_addr.clone(),
        name,
        class,
        image_uri,
        minted_at: now,
    };
    CHARACTERS.save(deps.storage, character_id, &character)?;
    CHARACTER_COUNT.save(deps.storage, &character_id)?;

    player.character_id = Some(character_id);
    PLAYERS.save(deps.storage, &player_addr, &player)?;
    append_activity(
        deps.storage,
        &player_addr,
        format!(
            "Minted character {} the {} for {} {}",
            character.name, character.class, price, config.symbol
        ),
        now,
    )?;

    let event = Event::new("character_minted")
        .add_attribute("player", player_addr.as_str())
        .add_attribute("character_id", character_id.to_string())
        .add_attribute("name", &character.name);

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "mint_character")
        .add_attribute("player", player_addr.as_str())
        .add_attribute("character_id", character_id.to_string())
        .add_attribute("price", price.to_string())
        .add_attribute("balance", balance.to_string()))
}

// ─── Execute: Gated Actions ─────────────────────────────────────────────────

pub fn execute_mine(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    execute_game_action(deps, env, info, ActionKind::Mine)
}

pub fn execute_battle(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    execute_game_action(deps, env, info, ActionKind::Battle)
}

pub fn execute_complete_quest(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    execute_game_action(deps, env, info, ActionKind::Quest)
}

/// Shared path of mine / battle / quest. One cooldown covers all three kinds.
fn execute_game_action(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    kind: ActionKind,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_not_paused(deps.as_ref())?;

    let player_addr = info.sender;
    let (mut player, _character_id) = load_with_character(deps.storage, &player_addr)?;

    let config = CONFIG.load(deps.storage)?;
    let now = env.block.time;
    progression::ensure_off_cooldown(&player, now, config.economy.cooldown_seconds)?;

    let outcome = progression::resolve_action(&player, kind, &config.economy)?;

    // All checks passed
    let balance = ledger::credit(deps.storage, &player_addr, outcome.reward)?;

    let previous_level = player.level;
    player.experience = outcome.experience;
    player.level = outcome.level;
    player.last_action = Some(now);
    PLAYERS.save(deps.storage, &player_addr, &player)?;
    append_activity(
        deps.storage,
        &player_addr,
        activity_message(kind, &outcome, previous_level, &config.symbol),
        now,
    )?;

    let event = Event::new("game_action")
        .add_attribute("player", player_addr.as_str())
        .add_attribute("kind", kind.label())
        .add_attribute("reward", outcome.reward.to_string());

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", action_name(kind))
        .add_attribute("player", player_addr.as_str())
        .add_attribute("reward", outcome.reward.to_string())
        .add_attribute("balance", balance.to_string())
        .add_attribute("experience", outcome.experience.to_string())
        .add_attribute("level", outcome.level.to_string()))
}

fn action_name(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Mine => "mine",
        ActionKind::Battle => "battle",
        ActionKind::Quest => "complete_quest",
    }
}

fn activity_message(
    kind: ActionKind,
    outcome: &ActionOutcome,
    previous_level: u32,
    symbol: &str,
) -> String {
    let mut message = match kind {
        ActionKind::Mine => format!("Mined {} {}", outcome.reward, symbol),
        ActionKind::Battle => format!("Won a battle: +{} {}", outcome.reward, symbol),
        ActionKind::Quest => format!("Completed a quest: +{} {}", outcome.reward, symbol),
    };
    if outcome.leveled_up(previous_level) {
        message.push_str(&format!(". Reached level {}", outcome.level));
    }
    message
}

// ─── Execute: Item Economy ──────────────────────────────────────────────────

pub fn execute_buy_item(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    item_id: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_not_paused(deps.as_ref())?;

    let player_addr = info.sender;
    // TODO: confirm whether purchases should also require a minted character
    let mut player = load_registered(deps.storage, &player_addr)?;
    let item = catalog::get(deps.storage, item_id)?;
    ledger::ensure_can_pay(deps.storage, &player_addr, item.price)?;

    let config = CONFIG.load(deps.storage)?;
    let balance = ledger::debit(deps.storage, &player_addr, item.price)?;
    player.items.push(item.id);
    PLAYERS.save(deps.storage, &player_addr, &player)?;
    append_activity(
        deps.storage,
        &player_addr,
        format!("Purchased {} for {} {}", item.name, item.price, config.symbol),
        env.block.time,
    )?;

    Ok(Response::new()
        .add_attribute("action", "buy_item")
        .add_attribute("player", player_addr.as_str())
        .add_attribute("item_id", item.id.to_string())
        .add_attribute("price", item.price.to_string())
        .add_attribute("balance", balance.to_string())
        .add_attribute("inventory_size", player.items.len().to_string()))
}

// ─── Execute: Token Ledger ──────────────────────────────────────────────────

pub fn execute_transfer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_not_paused(deps.as_ref())?;

    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    let recipient = deps.api.addr_validate(&recipient)?;
    let balance = ledger::transfer(deps.storage, &info.sender, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender.as_str())
        .add_attribute("to", recipient.as_str())
        .add_attribute("amount", amount.to_string())
        .add_attribute("balance", balance.to_string()))
}

pub fn execute_burn(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_not_paused(deps.as_ref())?;

    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    let balance = ledger::burn(deps.storage, &info.sender, amount)?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("from", info.sender.as_str())
        .add_attribute("amount", amount.to_string())
        .add_attribute("balance", balance.to_string()))
}

// ─── Execute: Admin ─────────────────────────────────────────────────────────

pub fn execute_update_economy(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    economy: Economy,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;
    validate_economy(&economy)?;

    CONFIG.update(deps.storage, |mut c| -> StdResult<_> {
        c.economy = economy;
        Ok(c)
    })?;

    Ok(Response::new().add_attribute("action", "update_economy"))
}

pub fn execute_pause(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    CONFIG.update(deps.storage, |mut c| -> StdResult<_> {
        c.paused = true;
        Ok(c)
    })?;

    Ok(Response::new().add_attribute("action", "pause"))
}

pub fn execute_unpause(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    if !config.paused {
        return Err(ContractError::NotPaused);
    }

    CONFIG.update(deps.storage, |mut c| -> StdResult<_> {
        c.paused = false;
        Ok(c)
    })?;

    Ok(Response::new().add_attribute("action", "unpause"))
}

/// Sweep native funds held by the contract to the owner. Game tokens are not affected.
pub fn execute_emergency_withdraw(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    denom: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;

    let amount = deps
        .querier
        .query_balance(&env.contract.address, &denom)?
        .amount;
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let msg = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: vec![Coin { denom, amount }],
    };

    Ok(Response::new()
        .add_message(msg)
        .add_attribute("action", "emergency_withdraw")
        .add_attribute("recipient", info.sender.as_str())
        .add_attribute("amount", amount.to_string()))
}

pub fn execute_propose_owner(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;
    if PENDING_OWNER.may_load(deps.storage)?.is_some() {
        return Err(ContractError::OwnerTransferAlreadyPending);
    }

    let proposed_owner = deps.api.addr_validate(&new_owner)?;
    PENDING_OWNER.save(
        deps.storage,
        &PendingOwnerTransfer {
            proposed_owner: proposed_owner.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "propose_owner")
        .add_attribute("owner", info.sender.as_str())
        .add_attribute("proposed_owner", proposed_owner.as_str()))
}

pub fn execute_accept_owner(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let PendingOwnerTransfer { proposed_owner } = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoOwnerTransferPending)?;
    if info.sender != proposed_owner {
        return Err(ContractError::NotPendingOwner);
    }

    let mut config = CONFIG.load(deps.storage)?;
    let previous_owner = std::mem::replace(&mut config.owner, proposed_owner);
    CONFIG.save(deps.storage, &config)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "accept_owner")
        .add_attribute("previous_owner", previous_owner.as_str())
        .add_attribute("new_owner", config.owner.as_str()))
}

pub fn execute_cancel_owner_transfer(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_owner(deps.as_ref(), &info.sender)?;
    let pending = PENDING_OWNER
        .may_load(deps.storage)?
        .ok_or(ContractError::NoOwnerTransferPending)?;
    PENDING_OWNER.remove(deps.storage);

    Ok(Response::new()
        .add_attribute("action", "cancel_owner_transfer")
        .add_attribute("owner", info.sender.as_str())
        .add_attribute("cancelled_owner", pending.proposed_owner.as_str()))
}

// ─── Queries ────────────────────────────────────────────────────────────────

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::PlayerInfo { address } => query_player_info(deps, address),
        QueryMsg::AllItems {} => query_all_items(deps),
        QueryMsg::Item { item_id } => query_item(deps, item_id),
        QueryMsg::ActivityLogs {
            address,
            start_after,
            limit,
        } => query_activity_logs(deps, address, start_after, limit),
        QueryMsg::Balance { address } => query_balance(deps, address),
        QueryMsg::TokenInfo {} => query_token_info(deps),
        QueryMsg::Character { character_id } => query_character(deps, character_id),
        QueryMsg::NumCharacters {} => query_num_characters(deps),
        QueryMsg::PendingOwner {} => query_pending_owner(deps),
    }
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&CONFIG.load(deps.storage)?)
}

pub fn query_player_info(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    to_json_binary(&player_snapshot(deps, addr)?)
}

fn player_snapshot(deps: Deps, addr: Addr) -> StdResult<PlayerInfoResponse> {
    let balance = ledger::balance_of(deps.storage, &addr)?;
    let Some(player) = PLAYERS.may_load(deps.storage, &addr)? else {
        return Ok(PlayerInfoResponse {
            address: addr.into_string(),
            registered: false,
            level: 0,
            experience: 0,
            balance,
            last_action: None,
            cooldown_until: None,
            character: None,
            items: vec![],
        });
    };

    let config = CONFIG.load(deps.storage)?;
    let character = player
        .character_id
        .map(|id| CHARACTERS.load(deps.storage, id))
        .transpose()?;
    let cooldown_until = progression::cooldown_until(&player, config.economy.cooldown_seconds)
        .map_err(|e| StdError::generic_err(e.to_string()))?
        .map(|t| t.seconds());

    Ok(PlayerInfoResponse {
        address: addr.into_string(),
        registered: true,
        level: player.level,
        experience: player.experience,
        balance,
        last_action: player.last_action.map(|t| t.seconds()),
        cooldown_until,
        character,
        items: player.items,
    })
}

pub fn query_all_items(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&ItemsResponse {
        items: catalog::all(deps.storage)?,
    })
}

pub fn query_item(deps: Deps, item_id: u64) -> StdResult<Binary> {
    let item =
        catalog::get(deps.storage, item_id).map_err(|e| StdError::generic_err(e.to_string()))?;
    to_json_binary(&item)
}

pub fn query_activity_logs(
    deps: Deps,
    address: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    let logs = ACTIVITY_LOGS
        .prefix(&addr)
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|entry| entry.map(|(_, log)| log))
        .collect::<StdResult<Vec<_>>>()?;

    to_json_binary(&ActivityLogsResponse { logs })
}

pub fn query_balance(deps: Deps, address: String) -> StdResult<Binary> {
    let addr = deps.api.addr_validate(&address)?;
    to_json_binary(&BalanceResponse {
        balance: ledger::balance_of(deps.storage, &addr)?,
    })
}

pub fn query_token_info(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&TokenInfoResponse {
        name: config.name,
        symbol: config.symbol,
        total_supply: ledger::total_supply(deps.storage)?,
    })
}

pub fn query_character(deps: Deps, character_id: u64) -> StdResult<Binary> {
    to_json_binary(&CHARACTERS.load(deps.storage, character_id)?)
}

pub fn query_num_characters(deps: Deps) -> StdResult<Binary> {
    let count = CHARACTER_COUNT.load(deps.storage)?;
    to_json_binary(&NumCharactersResponse { count })
}

pub fn query_pending_owner(deps: Deps) -> StdResult<Binary> {
    to_json_binary(&PENDING_OWNER.may_load(deps.storage)?)
}

// ─── Migrate ────────────────────────────────────────────────────────────────

pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
