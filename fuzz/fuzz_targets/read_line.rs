#![no_main]

use libfuzzer_sys::fuzz_target;

use bufrs::{BufferedReader, StringReader};

fuzz_target!(|input: String| {
    for capacity in [1usize, 2, 5, 8192] {
        let mut reader = BufferedReader::with_capacity(StringReader::new(&input), capacity);

        let mut lines = Vec::new();
        while let Some(line) = reader.read_line().unwrap() {
            // Verify: terminators are never included
            assert!(!line.contains('\n') && !line.contains('\r'));
            lines.push(line);
        }

        // Verify: joining the lines reproduces the input with terminators
        // normalized ("\r\n" and "\r" both read as line breaks)
        let normalized = input.replace("\r\n", "\n").replace('\r', "\n");
        let mut expected: Vec<String> = normalized.split('\n').map(str::to_owned).collect();
        // A trailing terminator does not open a final empty line
        if expected.last().is_some_and(|last| last.is_empty()) && !normalized.is_empty() {
            expected.pop();
        }
        if normalized.is_empty() {
            expected.clear();
        }
        assert_eq!(lines, expected, "capacity {} changed line splitting", capacity);
    }
});
