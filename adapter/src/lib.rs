//! Relay Adapter Contract - Vault Deliveries into Spoke Pool Deposits
//!
//! The vault delivers assets together with an ABI-encoded payload describing
//! an onward transfer. The adapter forwards those assets into the spoke pool's
//! deposit, minus the relay fee the payload names.
//!
//! # Delivery Flow
//! 1. Vault calls `CfReceive` with native funds attached, or after moving
//!    CW20 tokens to the adapter
//! 2. Adapter decodes the payload and computes the fee-adjusted output
//! 3. CW20: allowance to the spoke pool is raised to MAX
//! 4. Spoke pool `Deposit` is called (native funds attached when native)
//! 5. CW20: allowance is reset to zero
//! 6. Residual balance of the asset is swept to the payload recipient
//!
//! # Security
//! - Only the configured vault can deliver
//! - Only the owner can change the vault or spoke pool
//! - All steps run in one transaction; any failure reverts all of them

pub mod address_codec;
pub mod contract;
pub mod error;
mod execute;
pub mod msg;
pub mod payload;
mod query;
pub mod relay_fee;
pub mod state;

pub use crate::address_codec::{EvmAddress, NATIVE_ASSET_SENTINEL};
pub use crate::error::ContractError;
pub use crate::payload::RelayPayload;
pub use crate::relay_fee::{compute_output_amount, FeePercentage, FEE_SCALE};
