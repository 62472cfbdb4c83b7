use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Coin, Uint128, Uint256};

#[cw_serde]
pub struct InstantiateMsg {
    /// CW20 contract pulled from the depositor when no funds are attached
    pub token: Option<String>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Same shape as `common::SpokePoolExecuteMsg::Deposit`
    Deposit {
        depositor: Binary,
        recipient: Binary,
        input_token: Binary,
        output_token: Binary,
        input_amount: Uint128,
        output_amount: Uint128,
        destination_chain_id: Uint256,
        exclusive_relayer: Binary,
        quote_timestamp: u32,
        fill_deadline: u32,
        exclusivity_deadline: u32,
        message: Binary,
    },
    /// Make every following deposit fail
    SetRejectDeposits { reject: bool },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Option<DepositRecord>)]
    LastDeposit {},
    #[returns(DepositCountResponse)]
    DepositCount {},
    #[returns(ObservedAllowanceResponse)]
    ObservedAllowance {},
}

/// What the spoke pool received in one deposit
#[cw_serde]
pub struct DepositRecord {
    pub sender: String,
    pub depositor: Binary,
    pub recipient: Binary,
    pub input_token: Binary,
    pub output_token: Binary,
    pub input_amount: Uint128,
    pub output_amount: Uint128,
    pub destination_chain_id: Uint256,
    pub exclusive_relayer: Binary,
    pub quote_timestamp: u32,
    pub fill_deadline: u32,
    pub exclusivity_deadline: u32,
    pub message: Binary,
    pub funds: Vec<Coin>,
}

#[cw_serde]
pub struct DepositCountResponse {
    pub count: u64,
}

#[cw_serde]
pub struct ObservedAllowanceResponse {
    pub allowance: Uint128,
}
