// Generic Base58 decoding: base-58 -> base-256 big-integer conversion.
//
// Validation is a separate up-front pass: no conversion work happens and no
// output is produced for invalid input.  Leading `1` symbols become leading
// zero bytes; any count of them is accepted (the strict fixed-width decoders
// live in `fixed`).

use thiserror::Error;

use crate::alphabet;

/// Error returned by [`decode`] and [`decode_slice`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input contained a byte outside the 58-symbol alphabet.
    ///
    /// Decoding the same input always fails at the same position; no partial
    /// output is ever returned.
    #[error("invalid base58 character '{}' at position {pos}", .byte.escape_ascii())]
    InvalidCharacter {
        /// The offending input byte.
        byte: u8,
        /// Its zero-based position in the input.
        pos: usize,
    },
}

/// Decode a Base58 string to bytes.
pub fn decode(encoded: &str) -> Result<Vec<u8>, DecodeError> {
    decode_slice(encoded.as_bytes())
}

/// Decode Base58 symbols (as raw ASCII bytes) to bytes.
pub fn decode_slice(encoded: &[u8]) -> Result<Vec<u8>, DecodeError> {
    // Validate everything before converting anything.
    let mut values = Vec::with_capacity(encoded.len());
    for (pos, &byte) in encoded.iter().enumerate() {
        match alphabet::value_of(byte) {
            Some(value) => values.push(value),
            None => return Err(DecodeError::InvalidCharacter { byte, pos }),
        }
    }

    let zeros = values.iter().take_while(|&&v| v == 0).count();
    let significant = &values[zeros..];

    // Bytes of the non-zero tail, least significant first.  Each symbol
    // carries log(58)/log(256) ~ 0.733 bytes.
    let mut bytes: Vec<u8> = Vec::with_capacity(significant.len() * 733 / 1000 + 1);
    for &value in significant {
        let mut carry = u32::from(value);
        for byte in bytes.iter_mut() {
            carry += u32::from(*byte) * 58;
            *byte = carry as u8;
            carry >>= 8;
        }
        while carry > 0 {
            bytes.push(carry as u8);
            carry >>= 8;
        }
    }

    let mut out = vec![0u8; zeros];
    out.reserve(bytes.len());
    out.extend(bytes.iter().rev());
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
