//! Mock Spoke Pool - test stand-in for the downstream deposit endpoint
//!
//! Accepts `Deposit` in the shared spoke pool shape. Native deposits keep the
//! attached funds; CW20 deposits pull `input_amount` from the caller through
//! its allowance. Every deposit is recorded so tests can inspect what the
//! adapter forwarded.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;
