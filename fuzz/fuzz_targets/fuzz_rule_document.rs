#![no_main]

use gtkpal_storage::codec;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Malformed documents must be rejected with an error, never a panic.
    let Ok(tables) = codec::from_str(text) else {
        return;
    };

    // Anything accepted must survive a write/read cycle unchanged.
    let written = codec::to_string(&tables).expect("accepted tables serialize");
    let reread = codec::from_str(&written).expect("written document parses");
    assert_eq!(reread, tables);
});
