#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        // The front-end is total: it must accept any text verbatim.
        let ir = scompile_parser::parse(source).unwrap();
        assert_eq!(ir.source, source);
    }
});
