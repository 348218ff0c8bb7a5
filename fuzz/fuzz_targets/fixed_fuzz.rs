#![no_main]
use libfuzzer_sys::fuzz_target;
use oxi58::{encode, fixed};

fuzz_target!(|data: &[u8]| {
    // The fixed-width paths must agree with the generic conversion on every
    // buffer of their width.
    if data.len() >= 32 {
        let bytes: [u8; 32] = data[..32].try_into().unwrap();
        let encoded = fixed::encode_32(&bytes);
        assert_eq!(encoded, encode(&bytes));
        assert_eq!(fixed::decode_32(&encoded).unwrap(), bytes);
    }
    if data.len() >= 64 {
        let bytes: [u8; 64] = data[..64].try_into().unwrap();
        let encoded = fixed::encode_64(&bytes);
        assert_eq!(encoded, encode(&bytes));
        assert_eq!(fixed::decode_64(&encoded).unwrap(), bytes);
    }
});
