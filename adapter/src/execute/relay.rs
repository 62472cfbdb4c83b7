//! Relay handlers (CfReceive and SweepResidual).
//!
//! A delivery is forwarded as one ordered batch of messages:
//!
//! 1. `IncreaseAllowance(spoke_pool, MAX)` - CW20 only
//! 2. `SpokePool::Deposit` - with the native amount attached for native assets
//! 3. `DecreaseAllowance(spoke_pool, MAX)` - CW20 only, resets to zero
//! 4. `SweepResidual` - self-call, runs after the deposit has settled
//!
//! Any failure in the batch aborts the transaction, so the allowance can
//! never outlive the delivery.

use cosmwasm_std::{
    coins, to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env, Event, MessageInfo,
    Response, StdResult, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use common::{Asset, AssetInfo, SpokePoolExecuteMsg};

use crate::address_codec::is_native_asset;
use crate::error::ContractError;
use crate::msg::ExecuteMsg;
use crate::payload::RelayPayload;
use crate::relay_fee::compute_output_amount;
use crate::state::{Config, CONFIG};

/// Decoded payload and the values derived from it
pub struct RelayPlan {
    pub payload: RelayPayload,
    pub output_amount: Uint128,
    pub sweep_recipient: Addr,
}

/// Decode a payload and derive the forwarded amount and sweep recipient.
///
/// Shared by `CfReceive` and the `SimulateRelay` query so both fail alike.
pub fn plan_relay(
    deps: Deps,
    config: &Config,
    message: &[u8],
    amount: Uint128,
) -> Result<RelayPlan, ContractError> {
    let payload = RelayPayload::decode(message)?;
    let output_amount = compute_output_amount(amount, &payload.relay_fee_pct)?;
    let sweep_recipient = deps
        .api
        .addr_validate(&payload.recipient.to_bech32(&config.address_prefix)?)?;

    Ok(RelayPlan {
        payload,
        output_amount,
        sweep_recipient,
    })
}

/// Map the delivered asset identifier onto a bank denom or CW20 contract
fn resolve_asset(deps: Deps, config: &Config, asset: &str) -> StdResult<AssetInfo> {
    if is_native_asset(asset) {
        return Ok(AssetInfo::native(config.native_denom.clone()));
    }
    Ok(AssetInfo::cw20(deps.api.addr_validate(asset)?))
}

/// Forward a vault delivery into the spoke pool.
#[allow(clippy::too_many_arguments)]
pub fn execute_cf_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    src_chain: u32,
    src_address: Binary,
    message: Binary,
    asset: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.vault {
        return Err(ContractError::UnauthorizedVault);
    }

    let received = Event::new("cf_receive")
        .add_attribute("src_chain", src_chain.to_string())
        .add_attribute("src_address", format!("0x{}", hex::encode(src_address.as_slice())))
        .add_attribute("asset", &asset)
        .add_attribute("amount", amount);

    let plan = plan_relay(deps.as_ref(), &config, message.as_slice(), amount)?;
    let asset_info = resolve_asset(deps.as_ref(), &config, &asset)?;
    let payload = &plan.payload;

    let deposit = to_json_binary(&SpokePoolExecuteMsg::Deposit {
        depositor: Binary::from(payload.depositor.to_word().to_vec()),
        recipient: Binary::from(payload.recipient.to_word().to_vec()),
        input_token: Binary::from(payload.input_token.to_word().to_vec()),
        output_token: Binary::from(payload.output_token.to_word().to_vec()),
        input_amount: amount,
        output_amount: plan.output_amount,
        destination_chain_id: payload.destination_chain_id,
        exclusive_relayer: Binary::from(payload.exclusive_relayer.to_word().to_vec()),
        quote_timestamp: payload.quote_timestamp,
        fill_deadline: payload.fill_deadline,
        exclusivity_deadline: payload.exclusivity_deadline,
        message: Binary::from(payload.message.clone()),
    })?;

    let mut messages: Vec<CosmosMsg> = Vec::with_capacity(4);
    match &asset_info {
        AssetInfo::Native { denom } => {
            // The bank module rejects zero-amount coins
            let funds = if amount.is_zero() {
                vec![]
            } else {
                coins(amount.u128(), denom)
            };
            messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: config.spoke_pool.to_string(),
                msg: deposit,
                funds,
            }));
        }
        AssetInfo::Cw20 { contract_addr } => {
            messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::IncreaseAllowance {
                    spender: config.spoke_pool.to_string(),
                    amount: Uint128::MAX,
                    expires: None,
                })?,
                funds: vec![],
            }));
            messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: config.spoke_pool.to_string(),
                msg: deposit,
                funds: vec![],
            }));
            messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: contract_addr.to_string(),
                msg: to_json_binary(&Cw20ExecuteMsg::DecreaseAllowance {
                    spender: config.spoke_pool.to_string(),
                    amount: Uint128::MAX,
                    expires: None,
                })?,
                funds: vec![],
            }));
        }
    }

    messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: env.contract.address.to_string(),
        msg: to_json_binary(&ExecuteMsg::SweepResidual {
            asset: asset_info.clone(),
            recipient: plan.sweep_recipient.to_string(),
        })?,
        funds: vec![],
    }));

    Ok(Response::new()
        .add_event(received)
        .add_messages(messages)
        .add_attribute("method", "cf_receive")
        .add_attribute("token", asset_info.identifier())
        .add_attribute("input_amount", amount)
        .add_attribute("output_amount", plan.output_amount)
        .add_attribute("destination_chain_id", payload.destination_chain_id.to_string())
        .add_attribute("recipient", payload.recipient.to_hex()))
}

/// Send the contract's entire balance of `asset` to `recipient`.
///
/// Runs as the last message of a delivery. A zero balance sends nothing.
pub fn execute_sweep_residual(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    asset: AssetInfo,
    recipient: String,
) -> Result<Response, ContractError> {
    if info.sender != env.contract.address {
        return Err(ContractError::UnauthorizedInternal);
    }

    let recipient = deps.api.addr_validate(&recipient)?;
    let balance = asset.query_balance(&deps.querier, &env.contract.address)?;

    let response = Response::new()
        .add_attribute("method", "sweep_residual")
        .add_attribute("amount", balance);

    if balance.is_zero() {
        return Ok(response);
    }

    let token = asset.identifier();
    let residual = Asset::new(asset, balance);

    Ok(response
        .add_message(residual.transfer_msg(&recipient)?)
        .add_event(
            Event::new("residual_swept")
                .add_attribute("recipient", recipient)
                .add_attribute("token", token)
                .add_attribute("amount", balance),
        ))
}
