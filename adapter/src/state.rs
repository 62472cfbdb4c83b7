//! State definitions for the relay adapter contract
//!
//! The adapter keeps no per-delivery state; everything a delivery needs is
//! decoded from its payload. The only stored record is the configuration.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::Addr;
use cw_storage_plus::Item;

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Administrative controller, fixed to the instantiating account
    pub owner: Addr,
    /// The only account allowed to deliver assets
    pub vault: Addr,
    /// Downstream deposit endpoint
    pub spoke_pool: Addr,
    /// Bank denom the native-asset sentinel stands for
    pub native_denom: String,
    /// Bech32 prefix for local accounts derived from payload addresses
    pub address_prefix: String,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:relay-adapter";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const CONFIG: Item<Config> = Item::new("config");
