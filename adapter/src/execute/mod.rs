//! Execute handlers for the relay adapter contract.
//!
//! - `relay` - CfReceive and the residual sweep that closes it
//! - `admin` - Owner-gated configuration updates

mod admin;
mod relay;

pub use admin::*;
pub use relay::*;
