#![no_main]

use libfuzzer_sys::fuzz_target;
use termpick::render::text::{truncate, width, wrap};

fuzz_target!(|data: &[u8]| {
    let Some((&limit, rest)) = data.split_first() else {
        return;
    };
    if let Ok(text) = std::str::from_utf8(rest) {
        let limit = usize::from(limit);
        assert!(width(&truncate(text, limit)) <= limit);
        for line in wrap(text, limit) {
            assert!(width(&line) <= limit.max(1));
        }
    }
});
