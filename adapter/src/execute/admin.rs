//! Owner-gated configuration updates.
//!
//! The owner is fixed at instantiation; there is no ownership transfer.

use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::CONFIG;

/// Replace the account allowed to deliver assets.
pub fn execute_update_vault_address(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::UnauthorizedOwner);
    }

    let new_vault = deps.api.addr_validate(&address)?;
    let old_vault = std::mem::replace(&mut config.vault, new_vault.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_vault_address")
        .add_attribute("old_vault", old_vault)
        .add_attribute("new_vault", new_vault))
}

/// Replace the downstream deposit endpoint.
pub fn execute_update_spoke_pool_address(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.owner {
        return Err(ContractError::UnauthorizedOwner);
    }

    let new_spoke_pool = deps.api.addr_validate(&address)?;
    let old_spoke_pool = std::mem::replace(&mut config.spoke_pool, new_spoke_pool.clone());
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_spoke_pool_address")
        .add_attribute("old_spoke_pool", old_spoke_pool)
        .add_attribute("new_spoke_pool", new_spoke_pool))
}
