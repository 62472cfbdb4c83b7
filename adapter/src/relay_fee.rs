//! Relay Fee Module
//!
//! The payload carries a signed relay fee percentage as an `int256` scaled
//! by 1e18 (1e18 = 100%). The forwarded output amount is
//!
//! ```text
//! output = amount * (1e18 - fee_pct) / 1e18
//! ```
//!
//! computed with 256-bit integers and truncating division.
//!
//! | fee_pct        | Effect                                  |
//! |----------------|-----------------------------------------|
//! | 0              | output == amount                        |
//! | 0 < p <= 1e18  | output reduced, 1e18 gives zero output  |
//! | p > 1e18       | rejected with `FeeUnderflow`            |
//! | p < 0          | output above amount (bounded downstream) |

use std::fmt;

use cosmwasm_std::{Uint128, Uint256};

use crate::error::ContractError;

// ============================================================================
// Constants
// ============================================================================

/// Fixed-point scale of the relay fee percentage (1e18 = 100%)
pub const FEE_SCALE: u128 = 1_000_000_000_000_000_000;

// ============================================================================
// Signed Fee Percentage
// ============================================================================

/// Signed fee percentage decoded from a two's complement `int256` word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeePercentage {
    negative: bool,
    magnitude: Uint256,
}

impl FeePercentage {
    pub fn zero() -> Self {
        Self {
            negative: false,
            magnitude: Uint256::zero(),
        }
    }

    pub fn from_i128(value: i128) -> Self {
        Self {
            negative: value < 0,
            magnitude: Uint256::from(value.unsigned_abs()),
        }
    }

    /// Read a big-endian two's complement `int256`
    pub fn from_be_bytes(word: [u8; 32]) -> Self {
        let raw = Uint256::from_be_bytes(word);
        if word[0] & 0x80 == 0 {
            return Self {
                negative: false,
                magnitude: raw,
            };
        }

        // |x| = !x + 1; cannot overflow because raw has its top bit set
        Self {
            negative: true,
            magnitude: (Uint256::MAX - raw) + Uint256::one(),
        }
    }

    /// Write as a big-endian two's complement `int256`
    pub fn to_be_bytes(&self) -> [u8; 32] {
        if !self.negative {
            return self.magnitude.to_be_bytes();
        }
        ((Uint256::MAX - self.magnitude) + Uint256::one()).to_be_bytes()
    }

    pub fn is_negative(&self) -> bool {
        self.negative
    }

    pub fn magnitude(&self) -> Uint256 {
        self.magnitude
    }
}

impl fmt::Display for FeePercentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-{}", self.magnitude)
        } else {
            write!(f, "{}", self.magnitude)
        }
    }
}

// ============================================================================
// Fee Calculation
// ============================================================================

/// Amount forwarded to the spoke pool after the relay fee
pub fn compute_output_amount(
    amount: Uint128,
    fee_pct: &FeePercentage,
) -> Result<Uint128, ContractError> {
    let scale = Uint256::from(FEE_SCALE);

    let factor = if fee_pct.negative {
        scale
            .checked_add(fee_pct.magnitude)
            .map_err(|_| ContractError::Overflow)?
    } else {
        scale
            .checked_sub(fee_pct.magnitude)
            .map_err(|_| ContractError::FeeUnderflow {
                fee_pct: fee_pct.to_string(),
            })?
    };

    let output = Uint256::from(amount)
        .checked_mul(factor)
        .map_err(|_| ContractError::Overflow)?
        / scale;

    narrow_to_uint128(output).ok_or(ContractError::Overflow)
}

fn narrow_to_uint128(value: Uint256) -> Option<Uint128> {
    let bytes = value.to_be_bytes();
    if bytes[..16].iter().any(|b| *b != 0) {
        return None;
    }

    let mut low = [0u8; 16];
    low.copy_from_slice(&bytes[16..]);
    Some(Uint128::new(u128::from_be_bytes(low)))
}
