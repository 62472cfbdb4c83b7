use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::Item;

use crate::msg::DepositRecord;

pub const CONTRACT_NAME: &str = "crates.io:mock-spoke-pool";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CW20 pulled when a deposit carries no funds
pub const TOKEN: Item<Option<Addr>> = Item::new("token");

pub const REJECT_DEPOSITS: Item<bool> = Item::new("reject_deposits");

pub const LAST_DEPOSIT: Item<DepositRecord> = Item::new("last_deposit");

pub const DEPOSIT_COUNT: Item<u64> = Item::new("deposit_count");

/// Allowance the depositor had granted at the moment of the last CW20 deposit
pub const OBSERVED_ALLOWANCE: Item<Uint128> = Item::new("observed_allowance");
