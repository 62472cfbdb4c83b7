//! Relay Adapter Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::address_codec::validate_hrp;
use crate::error::ContractError;
use crate::execute::{
    execute_cf_receive, execute_sweep_residual, execute_update_spoke_pool_address,
    execute_update_vault_address,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{query_config, query_simulate_relay};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let vault = deps.api.addr_validate(&msg.vault)?;
    let spoke_pool = deps.api.addr_validate(&msg.spoke_pool)?;

    if msg.native_denom.is_empty() {
        return Err(ContractError::InvalidConfig {
            reason: "native_denom must not be empty".to_string(),
        });
    }
    validate_hrp(&msg.address_prefix).map_err(|e| ContractError::InvalidConfig {
        reason: e.to_string(),
    })?;

    let config = Config {
        owner: info.sender,
        vault,
        spoke_pool,
        native_denom: msg.native_denom,
        address_prefix: msg.address_prefix,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", config.owner)
        .add_attribute("vault", config.vault)
        .add_attribute("spoke_pool", config.spoke_pool)
        .add_attribute("native_denom", config.native_denom))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CfReceive {
            src_chain,
            src_address,
            message,
            asset,
            amount,
        } => execute_cf_receive(
            deps,
            env,
            info,
            src_chain,
            src_address,
            message,
            asset,
            amount,
        ),
        ExecuteMsg::UpdateVaultAddress { address } => {
            execute_update_vault_address(deps, info, address)
        }
        ExecuteMsg::UpdateSpokePoolAddress { address } => {
            execute_update_spoke_pool_address(deps, info, address)
        }
        ExecuteMsg::SweepResidual { asset, recipient } => {
            execute_sweep_residual(deps, env, info, asset, recipient)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::SimulateRelay { message, amount } => {
            to_json_binary(&query_simulate_relay(deps, message, amount)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
