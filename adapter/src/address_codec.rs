//! EVM Address Handling
//!
//! The relay payload carries 20-byte EVM-style addresses in 32-byte ABI
//! words. This module converts between those words, 0x-prefixed hex strings,
//! and local bech32 accounts.
//!
//! ## Word Layout
//!
//! ```text
//! | Zero padding (12 bytes) | Raw Address (20 bytes) |
//! ```
//!
//! ## Local Accounts
//!
//! The same 20 raw bytes are re-encoded as a bech32 account with the
//! configured prefix (e.g. `terra`), which is where residual balances are
//! swept to.

use cosmwasm_std::{StdError, StdResult};

// ============================================================================
// Constants
// ============================================================================

/// Reserved asset identifier meaning "the chain's native asset"
pub const NATIVE_ASSET_SENTINEL: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";

const NATIVE_ASSET_BYTES: [u8; 20] = [0xee; 20];

/// Longest human-readable part bech32 allows
const MAX_HRP_LEN: usize = 83;

// ============================================================================
// EVM Address
// ============================================================================

/// A raw 20-byte EVM-style address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EvmAddress(pub [u8; 20]);

impl EvmAddress {
    pub const ZERO: EvmAddress = EvmAddress([0u8; 20]);

    /// Parse from a hex string (the 0x prefix is optional)
    pub fn parse(addr: &str) -> StdResult<Self> {
        parse_evm_address(addr).map(Self)
    }

    /// Read an ABI address word; the 12 padding bytes must be zero
    pub fn from_word(word: &[u8; 32]) -> StdResult<Self> {
        if word[..12].iter().any(|b| *b != 0) {
            return Err(StdError::generic_err(format!(
                "Dirty address word: 0x{}",
                hex::encode(word)
            )));
        }

        let mut raw = [0u8; 20];
        raw.copy_from_slice(&word[12..]);
        Ok(Self(raw))
    }

    /// Encode as a left-padded ABI word
    pub fn to_word(&self) -> [u8; 32] {
        let mut word = [0u8; 32];
        word[12..].copy_from_slice(&self.0);
        word
    }

    /// Lowercase 0x-prefixed hex
    pub fn to_hex(&self) -> String {
        encode_evm_address(&self.0)
    }

    /// Local bech32 account with the same raw bytes
    pub fn to_bech32(&self, hrp: &str) -> StdResult<String> {
        encode_bech32_address(&self.0, hrp)
    }

    /// Raw bytes of a local bech32 account
    pub fn from_bech32(addr: &str) -> StdResult<Self> {
        decode_bech32_address(addr).map(Self)
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Whether an asset identifier is the native-asset sentinel (case-insensitive)
pub fn is_native_asset(asset: &str) -> bool {
    matches!(parse_evm_address(asset), Ok(raw) if raw == NATIVE_ASSET_BYTES)
}

/// Parse a hex EVM address to 20 bytes
pub fn parse_evm_address(addr: &str) -> StdResult<[u8; 20]> {
    let hex_str = addr.strip_prefix("0x").unwrap_or(addr);

    if hex_str.len() != 40 {
        return Err(StdError::generic_err(format!(
            "Invalid EVM address length: expected 40 hex chars, got {}",
            hex_str.len()
        )));
    }

    let bytes =
        hex::decode(hex_str).map_err(|e| StdError::generic_err(format!("Invalid hex: {}", e)))?;

    let mut result = [0u8; 20];
    result.copy_from_slice(&bytes);
    Ok(result)
}

/// Encode 20 bytes to EVM hex string with 0x prefix
pub fn encode_evm_address(bytes: &[u8; 20]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Check a bech32 human-readable part is usable as an account prefix
pub fn validate_hrp(hrp: &str) -> StdResult<()> {
    if hrp.is_empty() || hrp.len() > MAX_HRP_LEN {
        return Err(StdError::generic_err(format!(
            "Invalid bech32 prefix length: {}",
            hrp.len()
        )));
    }
    if !hrp.bytes().all(|c| (33..=126).contains(&c) && !c.is_ascii_uppercase()) {
        return Err(StdError::generic_err(format!(
            "Invalid bech32 prefix: {}",
            hrp
        )));
    }
    Ok(())
}

/// Encode raw 20 bytes to a bech32 address with given prefix
pub fn encode_bech32_address(bytes: &[u8; 20], hrp: &str) -> StdResult<String> {
    validate_hrp(hrp)?;

    let data5 = convert_bits(bytes, 8, 5, true)?;
    let checksum = bech32_checksum(hrp, &data5);

    let mut out = String::with_capacity(hrp.len() + 1 + data5.len() + checksum.len());
    out.push_str(hrp);
    out.push('1');
    out.extend(data5.iter().chain(checksum.iter()).map(|&b| BECH32_CHARSET[b as usize] as char));
    Ok(out)
}

/// Decode a bech32 address to raw 20 bytes, verifying the checksum
pub fn decode_bech32_address(addr: &str) -> StdResult<[u8; 20]> {
    let lower = addr.to_lowercase();
    if lower != addr && addr.to_uppercase() != addr {
        return Err(StdError::generic_err("Mixed-case bech32 address"));
    }

    let (hrp, data_part) = lower
        .rsplit_once('1')
        .ok_or_else(|| StdError::generic_err("Invalid bech32 format"))?;
    validate_hrp(hrp)?;

    if data_part.len() < 7 {
        return Err(StdError::generic_err("Bech32 data too short"));
    }

    let values = data_part
        .chars()
        .map(|c| {
            BECH32_CHARSET
                .iter()
                .position(|&x| x as char == c)
                .map(|idx| idx as u8)
                .ok_or_else(|| StdError::generic_err(format!("Invalid bech32 character: {}", c)))
        })
        .collect::<StdResult<Vec<u8>>>()?;

    let mut check = expand_hrp(hrp);
    check.extend_from_slice(&values);
    if bech32_polymod(&check) != 1 {
        return Err(StdError::generic_err("Invalid bech32 checksum"));
    }

    let bytes = convert_bits(&values[..values.len() - 6], 5, 8, false)?;
    if bytes.len() != 20 {
        return Err(StdError::generic_err(format!(
            "Invalid address length: expected 20 bytes, got {}",
            bytes.len()
        )));
    }

    let mut result = [0u8; 20];
    result.copy_from_slice(&bytes);
    Ok(result)
}

// ============================================================================
// Bech32 Internals
// ============================================================================

const BECH32_CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Regroup bits between group sizes
fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> StdResult<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut result = Vec::with_capacity(data.len() * from_bits as usize / to_bits as usize + 1);
    let max_v = (1u32 << to_bits) - 1;

    for &value in data {
        acc = (acc << from_bits) | value as u32;
        bits += from_bits;

        while bits >= to_bits {
            bits -= to_bits;
            result.push(((acc >> bits) & max_v) as u8);
        }
    }

    if pad {
        if bits > 0 {
            result.push(((acc << (to_bits - bits)) & max_v) as u8);
        }
    } else if bits >= from_bits || (acc << (to_bits - bits)) & max_v != 0 {
        return Err(StdError::generic_err("Invalid padding"));
    }

    Ok(result)
}

fn bech32_checksum(hrp: &str, data: &[u8]) -> Vec<u8> {
    let mut values = expand_hrp(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0u8; 6]);

    let polymod = bech32_polymod(&values) ^ 1;
    (0..6)
        .map(|i| ((polymod >> (5 * (5 - i))) & 31) as u8)
        .collect()
}

fn expand_hrp(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut result = Vec::with_capacity(bytes.len() * 2 + 1);
    result.extend(bytes.iter().map(|c| c >> 5));
    result.push(0);
    result.extend(bytes.iter().map(|c| c & 31));
    result
}

fn bech32_polymod(values: &[u8]) -> u32 {
    const GENERATOR: [u32; 5] = [
        0x3b6a_57b2,
        0x2650_8e6d,
        0x1ea1_19fa,
        0x3d42_33dd,
        0x2a14_62b3,
    ];

    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ (v as u32);
        for (i, gen) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= gen;
            }
        }
    }
    chk
}
