#![no_main]
use libfuzzer_sys::fuzz_target;
use oxi58::{decode, encode, encoded_len_bound};

fuzz_target!(|data: &[u8]| {
    let encoded = encode(data);
    assert!(encoded.len() <= encoded_len_bound(data.len()));

    // Canonical form: the `1` prefix length equals the zero-byte prefix.
    let zeros = data.iter().take_while(|&&b| b == 0).count();
    let ones = encoded.bytes().take_while(|&b| b == b'1').count();
    assert_eq!(ones, zeros);

    let decoded = decode(&encoded).unwrap();
    assert_eq!(decoded, data);
});
