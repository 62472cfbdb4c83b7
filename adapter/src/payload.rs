//! Relay payload codec
//!
//! The vault delivers the onward transfer instructions as the Solidity ABI
//! encoding of a 12-field tuple:
//!
//! ```solidity
//! abi.encode(
//!     address depositor,
//!     address recipient,
//!     address inputToken,
//!     address outputToken,
//!     uint256 destinationChainId,
//!     address exclusiveRelayer,
//!     uint32  quoteTimestamp,
//!     uint32  fillDeadline,
//!     uint32  exclusivityDeadline,
//!     bytes   message,
//!     int256  relayFeePercentage,
//!     address reserved
//! )
//! ```
//!
//! # Byte Layout
//! - Bytes 0-383:  head, one 32-byte word per field; the `bytes` field holds
//!   an offset into the payload instead of its data
//! - At offset:    length word, then the data right-padded to a word boundary
//!
//! Decoding follows `abi.decode`: static words must hold values that fit
//! their type, the dynamic region must lie inside the payload, and trailing
//! data is ignored.

use cosmwasm_std::Uint256;

use crate::address_codec::EvmAddress;
use crate::error::ContractError;
use crate::relay_fee::FeePercentage;

const WORD: usize = 32;

/// Number of head words in the encoded tuple
pub const HEAD_WORDS: usize = 12;

/// Size of the encoded head in bytes
pub const HEAD_LEN: usize = HEAD_WORDS * WORD;

const MESSAGE_SLOT: usize = 9;

/// Onward transfer instructions carried by a delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayPayload {
    pub depositor: EvmAddress,
    pub recipient: EvmAddress,
    pub input_token: EvmAddress,
    pub output_token: EvmAddress,
    pub destination_chain_id: Uint256,
    pub exclusive_relayer: EvmAddress,
    pub quote_timestamp: u32,
    pub fill_deadline: u32,
    pub exclusivity_deadline: u32,
    pub message: Vec<u8>,
    pub relay_fee_pct: FeePercentage,
    /// Decoded for layout compatibility; not read by the relay
    pub reserved: EvmAddress,
}

impl RelayPayload {
    /// Strictly decode an ABI-encoded payload
    pub fn decode(data: &[u8]) -> Result<Self, ContractError> {
        if data.len() < HEAD_LEN {
            return Err(decode_error(format!(
                "expected at least {} bytes, got {}",
                HEAD_LEN,
                data.len()
            )));
        }

        Ok(Self {
            depositor: address_at(data, 0, "depositor")?,
            recipient: address_at(data, 1, "recipient")?,
            input_token: address_at(data, 2, "input_token")?,
            output_token: address_at(data, 3, "output_token")?,
            destination_chain_id: Uint256::from_be_bytes(word_at(data, 4)),
            exclusive_relayer: address_at(data, 5, "exclusive_relayer")?,
            quote_timestamp: u32_at(data, 6, "quote_timestamp")?,
            fill_deadline: u32_at(data, 7, "fill_deadline")?,
            exclusivity_deadline: u32_at(data, 8, "exclusivity_deadline")?,
            message: bytes_at(data, MESSAGE_SLOT)?,
            relay_fee_pct: FeePercentage::from_be_bytes(word_at(data, 10)),
            reserved: address_at(data, 11, "reserved")?,
        })
    }

    /// Canonical ABI encoding (the message data directly follows the head)
    pub fn abi_encode(&self) -> Vec<u8> {
        let padded_len = self.message.len().div_ceil(WORD) * WORD;
        let mut data = Vec::with_capacity(HEAD_LEN + WORD + padded_len);

        data.extend_from_slice(&self.depositor.to_word());
        data.extend_from_slice(&self.recipient.to_word());
        data.extend_from_slice(&self.input_token.to_word());
        data.extend_from_slice(&self.output_token.to_word());
        data.extend_from_slice(&self.destination_chain_id.to_be_bytes());
        data.extend_from_slice(&self.exclusive_relayer.to_word());
        data.extend_from_slice(&uint_word(self.quote_timestamp as u64));
        data.extend_from_slice(&uint_word(self.fill_deadline as u64));
        data.extend_from_slice(&uint_word(self.exclusivity_deadline as u64));
        data.extend_from_slice(&uint_word(HEAD_LEN as u64));
        data.extend_from_slice(&self.relay_fee_pct.to_be_bytes());
        data.extend_from_slice(&self.reserved.to_word());

        data.extend_from_slice(&uint_word(self.message.len() as u64));
        data.extend_from_slice(&self.message);
        data.resize(HEAD_LEN + WORD + padded_len, 0);

        data
    }
}

// ============================================================================
// Word Readers
// ============================================================================

fn decode_error(reason: impl Into<String>) -> ContractError {
    ContractError::PayloadDecode {
        reason: reason.into(),
    }
}

/// Head word by index; callers have checked the head length
fn word_at(data: &[u8], index: usize) -> [u8; 32] {
    let mut word = [0u8; 32];
    word.copy_from_slice(&data[index * WORD..(index + 1) * WORD]);
    word
}

fn address_at(data: &[u8], index: usize, field: &str) -> Result<EvmAddress, ContractError> {
    EvmAddress::from_word(&word_at(data, index))
        .map_err(|_| decode_error(format!("{} is not a valid address", field)))
}

fn u32_at(data: &[u8], index: usize, field: &str) -> Result<u32, ContractError> {
    let word = word_at(data, index);
    if word[..28].iter().any(|b| *b != 0) {
        return Err(decode_error(format!("{} does not fit uint32", field)));
    }
    Ok(u32::from_be_bytes([word[28], word[29], word[30], word[31]]))
}

/// Interpret a word as a position or length inside the payload
fn word_to_usize(word: &[u8; 32], what: &str) -> Result<usize, ContractError> {
    if word[..24].iter().any(|b| *b != 0) {
        return Err(decode_error(format!("{} out of range", what)));
    }
    let mut low = [0u8; 8];
    low.copy_from_slice(&word[24..]);
    usize::try_from(u64::from_be_bytes(low))
        .map_err(|_| decode_error(format!("{} out of range", what)))
}

fn bytes_at(data: &[u8], index: usize) -> Result<Vec<u8>, ContractError> {
    let offset = word_to_usize(&word_at(data, index), "message offset")?;

    let len_end = offset
        .checked_add(WORD)
        .filter(|end| *end <= data.len())
        .ok_or_else(|| decode_error("message offset out of range"))?;

    let mut len_word = [0u8; 32];
    len_word.copy_from_slice(&data[offset..len_end]);
    let len = word_to_usize(&len_word, "message length")?;

    let end = len_end
        .checked_add(len)
        .filter(|end| *end <= data.len())
        .ok_or_else(|| decode_error("message length out of range"))?;

    Ok(data[len_end..end].to_vec())
}

fn uint_word(value: u64) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[24..].copy_from_slice(&value.to_be_bytes());
    word
}
