#![no_main]

use libfuzzer_sys::fuzz_target;

use der_header::{Cursor, decode_header, decode_header_at, decode_length_at};

fuzz_target!(|data: &[u8]| {
    // Fuzz the decoder entry points
    let _ = decode_length_at(data, 0);
    let _ = decode_header_at(data, 0);

    // Fuzz mid-buffer positions, including past-the-end ones
    if !data.is_empty() {
        let _ = decode_header_at(data, data.len() / 2);
        let _ = decode_header_at(data, data.len());
        let _ = decode_length_at(data, data.len() + 1);
    }

    // Walk successive headers the way an outer parser would
    let mut cursor = Cursor::new(data);
    while decode_header(&mut cursor).is_ok() {}
});
