//! Fuzz target for the URL scheme filter.
//!
//! Checks the quarantine contract on arbitrary input: output is either the
//! input or the input behind `./`, the rewrite agrees with the predicate,
//! and no script scheme ever passes.

#![no_main]

use libfuzzer_sys::fuzz_target;

use palisade::SchemeFilter;

fuzz_target!(|data: &str| {
    let strict = SchemeFilter::strict();
    let flexible = SchemeFilter::flexible();

    for filter in [&strict, &flexible] {
        let out = filter.apply(data);

        // Test 1: the original text is always preserved
        if out != data {
            assert_eq!(out, format!("./{data}"));
        }

        // Test 2: filter output is always acceptable to the same filter
        assert!(filter.is_allowed(&out));

        // Test 3: the predicate and the rewrite agree
        assert_eq!(filter.is_allowed(data), out == data);
    }

    // Test 4: anything strict accepts, flexible accepts too
    if strict.is_allowed(data) {
        assert!(flexible.is_allowed(data));
    }

    // Test 5: a script scheme never passes, whatever the casing
    let lowered = data.to_ascii_lowercase();
    if lowered.starts_with("javascript:")
        || lowered.starts_with("vbscript:")
        || lowered.starts_with("data:")
    {
        assert!(strict.apply(data).starts_with("./"));
        assert!(flexible.apply(data).starts_with("./"));
    }
});
