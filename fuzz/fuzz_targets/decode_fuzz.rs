#![no_main]
use libfuzzer_sys::fuzz_target;
use oxi58::{decode_slice, encode, fixed};

fuzz_target!(|data: &[u8]| {
    // Fuzz the decoders with arbitrary bytes.
    // They must never panic -- only return errors.
    match decode_slice(data) {
        Ok(bytes) => {
            // Valid symbol strings re-encode to themselves exactly.
            assert_eq!(encode(&bytes).as_bytes(), data);
        }
        Err(err) => {
            // Errors are deterministic.
            assert_eq!(decode_slice(data).unwrap_err(), err);
        }
    }

    let _ = fixed::decode_32_slice(data);
    let _ = fixed::decode_64_slice(data);
});
