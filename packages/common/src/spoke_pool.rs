//! Spoke pool deposit interface.
//!
//! Addresses are 32-byte words (20-byte EVM addresses left-padded with
//! zeros), matching the spoke pool's `bytes32` deposit parameters.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, Uint128, Uint256};

#[cw_serde]
pub enum SpokePoolExecuteMsg {
    /// Deposit `input_amount` of the input token for a fill on `destination_chain_id`.
    ///
    /// Native deposits attach the input amount as funds; CW20 deposits attach
    /// nothing and the spoke pool pulls the tokens through an allowance.
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
}
