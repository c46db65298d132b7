#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        // Translation must never panic, and must be stable on its own output.
        let once = scompile_backend_glsl::translate(source).unwrap();
        let twice = scompile_backend_glsl::translate(&once).unwrap();
        assert_eq!(once, twice);
    }
});
