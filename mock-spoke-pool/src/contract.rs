use cosmwasm_std::{
    entry_point, to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::{AllowanceResponse, Cw20ExecuteMsg, Cw20QueryMsg};

use crate::error::ContractError;
use crate::msg::{
    DepositCountResponse, DepositRecord, ExecuteMsg, InstantiateMsg, ObservedAllowanceResponse,
    QueryMsg,
};
use crate::state::{
    CONTRACT_NAME, CONTRACT_VERSION, DEPOSIT_COUNT, LAST_DEPOSIT, OBSERVED_ALLOWANCE,
    REJECT_DEPOSITS, TOKEN,
};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let token = msg
        .token
        .map(|t| deps.api.addr_validate(&t))
        .transpose()?;
    TOKEN.save(deps.storage, &token)?;
    REJECT_DEPOSITS.save(deps.storage, &false)?;
    DEPOSIT_COUNT.save(deps.storage, &0)?;
    OBSERVED_ALLOWANCE.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new().add_attribute("action", "instantiate"))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Deposit {
            depositor,
            recipient,
            input_token,
            output_token,
            input_amount,
            output_amount,
            destination_chain_id,
            exclusive_relayer,
            quote_timestamp,
            fill_deadline,
            exclusivity_deadline,
            message,
        } => {
            let record = DepositRecord {
                sender: info.sender.to_string(),
                depositor,
                recipient,
                input_token,
                output_token,
                input_amount,
                output_amount,
                destination_chain_id,
                exclusive_relayer,
                quote_timestamp,
                fill_deadline,
                exclusivity_deadline,
                message,
                funds: info.funds.clone(),
            };
            execute_deposit(deps, env, info, record)
        }
        ExecuteMsg::SetRejectDeposits { reject } => {
            REJECT_DEPOSITS.save(deps.storage, &reject)?;
            Ok(Response::new()
                .add_attribute("action", "set_reject_deposits")
                .add_attribute("reject", reject.to_string()))
        }
    }
}

fn execute_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    record: DepositRecord,
) -> Result<Response, ContractError> {
    if REJECT_DEPOSITS.load(deps.storage)? {
        return Err(ContractError::DepositsRejected);
    }

    let mut messages: Vec<CosmosMsg> = vec![];
    if info.funds.is_empty() {
        let token = TOKEN
            .load(deps.storage)?
            .ok_or(ContractError::NoTokenConfigured)?;

        let allowance: AllowanceResponse = deps.querier.query_wasm_smart(
            &token,
            &Cw20QueryMsg::Allowance {
                owner: info.sender.to_string(),
                spender: env.contract.address.to_string(),
            },
        )?;
        OBSERVED_ALLOWANCE.save(deps.storage, &allowance.allowance)?;

        messages.push(CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr: token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
                owner: info.sender.to_string(),
                recipient: env.contract.address.to_string(),
                amount: record.input_amount,
            })?,
            funds: vec![],
        }));
    }

    let count = DEPOSIT_COUNT.load(deps.storage)? + 1;
    DEPOSIT_COUNT.save(deps.storage, &count)?;
    LAST_DEPOSIT.save(deps.storage, &record)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "deposit")
        .add_attribute("input_amount", record.input_amount)
        .add_attribute("output_amount", record.output_amount)
        .add_attribute("deposit_id", count.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::LastDeposit {} => to_json_binary(&LAST_DEPOSIT.may_load(deps.storage)?),
        QueryMsg::DepositCount {} => to_json_binary(&DepositCountResponse {
            count: DEPOSIT_COUNT.load(deps.storage)?,
        }),
        QueryMsg::ObservedAllowance {} => to_json_binary(&ObservedAllowanceResponse {
            allowance: OBSERVED_ALLOWANCE.load(deps.storage)?,
        }),
    }
}
