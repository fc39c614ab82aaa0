#![no_main]

use gtkpal_core::Color;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(name) = std::str::from_utf8(data) else {
        return;
    };
    if let Some(color) = Color::from_name(name) {
        assert_eq!(Color::from_name(&color.name()), Some(color));
    }
});
