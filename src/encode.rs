// Generic Base58 encoding: base-256 -> base-58 big-integer conversion.
//
// The input is one big-endian unsigned integer, repeatedly divided by 58
// with a carry loop over the digit buffer.  Pure radix conversion collapses
// leading zero bytes, so they are counted first and re-emitted as a prefix
// of `1` symbols.

use crate::alphabet::{ALPHABET, ZERO_SYMBOL};

/// Upper bound on the encoded length for `len` input bytes.
///
/// Each byte expands by log(256)/log(58) ~ 1.37 symbols; 138/100 rounds that
/// up, plus one for the truncating division.
#[inline]
pub fn encoded_len_bound(len: usize) -> usize {
    len * 138 / 100 + 1
}

/// Encode `bytes` to a Base58 string.
///
/// Every byte sequence has an encoding: the empty input encodes to the empty
/// string, and each leading zero byte contributes exactly one leading `1`.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = Vec::with_capacity(encoded_len_bound(bytes.len()));
    encode_into(bytes, &mut out);
    out.into_iter().map(char::from).collect()
}

/// Encode `bytes`, appending ASCII symbols to `out`.
///
/// Returns the number of symbols written.
pub fn encode_into(bytes: &[u8], out: &mut Vec<u8>) -> usize {
    let zeros = bytes.iter().take_while(|&&b| b == 0).count();
    let significant = &bytes[zeros..];

    // Base-58 digits of the non-zero tail, least significant first.
    let mut digits: Vec<u8> = Vec::with_capacity(encoded_len_bound(significant.len()));
    for &byte in significant {
        let mut carry = u32::from(byte);
        for digit in digits.iter_mut() {
            carry += u32::from(*digit) << 8;
            *digit = (carry % 58) as u8;
            carry /= 58;
        }
        while carry > 0 {
            digits.push((carry % 58) as u8);
            carry /= 58;
        }
    }

    out.reserve(zeros + digits.len());
    out.extend(std::iter::repeat_n(ZERO_SYMBOL, zeros));
    out.extend(digits.iter().rev().map(|&d| ALPHABET[usize::from(d)]));
    zeros + digits.len()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
