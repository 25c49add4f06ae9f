#![no_main]
use libfuzzer_sys::fuzz_target;
use zenbmp24::*;

fuzz_target!(|data: &[u8]| {
    // If we can decode it, re-encoding must be stable and decode to the same image
    let Ok(decoded) = decode_bmp(data) else {
        return;
    };

    let reencoded = encode_bmp(&decoded);
    let Ok(decoded2) = decode_bmp(&reencoded) else {
        panic!("re-encoded data failed to decode");
    };

    assert_eq!(decoded, decoded2, "roundtrip mismatch");
    assert_eq!(encode_bmp(&decoded2), reencoded, "re-encode not byte-stable");
});
