//! Common - Shared Types for the Relay Adapter Contracts
//!
//! This package provides the asset description used by the adapter and the
//! message interface of the downstream spoke pool, so the adapter and the
//! test spoke pool agree on one wire shape.

pub mod asset;
pub mod spoke_pool;

pub use asset::{Asset, AssetInfo};
pub use spoke_pool::SpokePoolExecuteMsg;
