//! Item catalog: a fixed starter set written once at instantiate.

use cosmwasm_std::{Order, StdResult, Storage, Uint128};

use crate::error::ContractError;
use crate::state::{CatalogItem, Rarity, CATALOG};

/// (name, price, rarity) in id order, ids starting at 1.
const STARTER_ITEMS: [(&str, u128, Rarity); 5] = [
    ("Iron Pickaxe", 25, Rarity::Common),
    ("Cyber Shield", 60, Rarity::Uncommon),
    ("Plasma Blade", 150, Rarity::Rare),
    ("Quantum Armor", 400, Rarity::Epic),
    ("Crown of Zeta", 1_000, Rarity::Legendary),
];

pub fn starter_items() -> Vec<CatalogItem> {
    STARTER_ITEMS
        .iter()
        .zip(1u64..)
        .map(|(&(name, price, rarity), id)| CatalogItem {
            id,
            name: name.to_string(),
            price: Uint128::new(price),
            rarity,
        })
        .collect()
}

pub fn seed(storage: &mut dyn Storage) -> StdResult<usize> {
    let items = starter_items();
    for item in &items {
        CATALOG.save(storage, item.id, item)?;
    }
    Ok(items.len())
}

pub fn get(storage: &dyn Storage, item_id: u64) -> Result<CatalogItem, ContractError> {
    CATALOG
        .may_load(storage, item_id)?
        .ok_or(ContractError::ItemNotFound { item_id })
}

/// All items, ascending by id.
pub fn all(storage: &dyn Storage) -> StdResult<Vec<CatalogItem>> {
    CATALOG
        .range(storage, None, None, Order::Ascending)
        .map(|entry| entry.map(|(_, item)| item))
        .collect()
}
