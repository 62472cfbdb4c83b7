//! Message types for the relay adapter contract

use common::AssetInfo;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128, Uint256};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
///
/// The instantiating account becomes the owner.
#[cw_serde]
pub struct InstantiateMsg {
    /// Account allowed to call `CfReceive`
    pub vault: String,
    /// Spoke pool contract receiving deposits
    pub spoke_pool: String,
    /// Bank denom delivered when the asset is the native sentinel (e.g. "uluna")
    pub native_denom: String,
    /// Bech32 prefix of local accounts (e.g. "terra")
    pub address_prefix: String,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Accept a delivery from the vault and forward it to the spoke pool
    ///
    /// Authorization: Vault only
    ///
    /// For native deliveries the vault attaches `amount` of the native denom.
    /// For CW20 deliveries the tokens are already held by this contract.
    CfReceive {
        /// Source chain identifier
        src_chain: u32,
        /// Source address, in the source chain's own encoding
        src_address: Binary,
        /// ABI-encoded relay payload
        message: Binary,
        /// Native sentinel (0xEeee...EEeE) or a CW20 contract address
        asset: String,
        /// Delivered amount
        amount: Uint128,
    },

    /// Replace the vault address
    ///
    /// Authorization: Owner only
    UpdateVaultAddress { address: String },

    /// Replace the spoke pool address
    ///
    /// Authorization: Owner only
    UpdateSpokePoolAddress { address: String },

    /// Send this contract's whole balance of `asset` to `recipient`
    ///
    /// Authorization: the contract itself, as the last step of `CfReceive`
    SweepResidual { asset: AssetInfo, recipient: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Decode a payload and compute the forwarded amount without executing
    #[returns(SimulateRelayResponse)]
    SimulateRelay { message: Binary, amount: Uint128 },
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: String,
    pub vault: String,
    pub spoke_pool: String,
    pub native_denom: String,
    pub address_prefix: String,
}

/// Decoded relay payload with addresses as 0x-prefixed hex
#[cw_serde]
pub struct RelayPayloadResponse {
    pub depositor: String,
    pub recipient: String,
    pub input_token: String,
    pub output_token: String,
    pub destination_chain_id: Uint256,
    pub exclusive_relayer: String,
    pub quote_timestamp: u32,
    pub fill_deadline: u32,
    pub exclusivity_deadline: u32,
    pub message: Binary,
    /// Signed decimal, scaled by 1e18
    pub relay_fee_pct: String,
}

#[cw_serde]
pub struct SimulateRelayResponse {
    pub payload: RelayPayloadResponse,
    pub output_amount: Uint128,
    /// Local account that would receive any residual balance
    pub sweep_recipient: String,
}
