#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = lookback_git::parse_log_output(text);
        let _ = lookback_git::parse_show_output("HEAD", text);
        for line in text.lines() {
            let _ = lookback_git::parse_status_line(line);
        }
    }
});
