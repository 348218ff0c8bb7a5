//! Oxi58: Base58 encoding and decoding in Rust.
//!
//! The crate provides:
//! - The canonical 58-symbol alphabet and its inverse table (`alphabet`)
//! - Generic big-integer conversion for arbitrary-length buffers (`encode`, `decode`)
//! - Limb-based fast paths for exactly 32- and 64-byte buffers (`fixed`)
//!
//! # Quick Start
//!
//! ```
//! let encoded = oxi58::encode(b"hello world");
//! assert_eq!(encoded, "StV1DL6CwTryKyV");
//!
//! let decoded = oxi58::decode(&encoded).unwrap();
//! assert_eq!(decoded, b"hello world");
//! ```

pub mod alphabet;
pub mod decode;
pub mod encode;
pub mod fixed;

// Re-export key entry points for convenience.
pub use decode::{DecodeError, decode, decode_slice};
pub use encode::{encode, encode_into, encoded_len_bound};
pub use fixed::{
    ENCODED_32_MAX_LEN, ENCODED_64_MAX_LEN, FixedDecodeError, decode_32, decode_64, encode_32,
    encode_64,
};
