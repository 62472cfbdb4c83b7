use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Deposits are currently rejected")]
    DepositsRejected,

    #[error("No token configured for CW20 deposits")]
    NoTokenConfigured,
}
