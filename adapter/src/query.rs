//! Query handlers for the relay adapter contract.

use cosmwasm_std::{Binary, Deps, StdError, StdResult, Uint128};

use crate::execute::plan_relay;
use crate::msg::{ConfigResponse, RelayPayloadResponse, SimulateRelayResponse};
use crate::state::CONFIG;

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner.to_string(),
        vault: config.vault.to_string(),
        spoke_pool: config.spoke_pool.to_string(),
        native_denom: config.native_denom,
        address_prefix: config.address_prefix,
    })
}

/// Dry run of the decode and fee steps of `CfReceive`
pub fn query_simulate_relay(
    deps: Deps,
    message: Binary,
    amount: Uint128,
) -> StdResult<SimulateRelayResponse> {
    let config = CONFIG.load(deps.storage)?;
    let plan = plan_relay(deps, &config, message.as_slice(), amount)
        .map_err(|e| StdError::generic_err(e.to_string()))?;
    let payload = plan.payload;

    Ok(SimulateRelayResponse {
        payload: RelayPayloadResponse {
            depositor: payload.depositor.to_hex(),
            recipient: payload.recipient.to_hex(),
            input_token: payload.input_token.to_hex(),
            output_token: payload.output_token.to_hex(),
            destination_chain_id: payload.destination_chain_id,
            exclusive_relayer: payload.exclusive_relayer.to_hex(),
            quote_timestamp: payload.quote_timestamp,
            fill_deadline: payload.fill_deadline,
            exclusivity_deadline: payload.exclusivity_deadline,
            message: Binary::from(payload.message),
            relay_fee_pct: payload.relay_fee_pct.to_string(),
        },
        output_amount: plan.output_amount,
        sweep_recipient: plan.sweep_recipient.to_string(),
    })
}
