//! Fuzz target for the context escapers.
//!
//! Drives every escaper with arbitrary input and checks the contracts that
//! hold for all inputs: totality, output growth, and absence of the
//! context's sensitive characters.

#![no_main]

use libfuzzer_sys::fuzz_target;

use palisade::Escaper;

fuzz_target!(|data: &str| {
    // Test 1: every escaper is total and never shrinks its input
    let html = Escaper::html(data);
    let html_text = Escaper::html_text(data);
    let uri = Escaper::uri_param(data);
    let js = Escaper::js_string(data);
    let regex = Escaper::js_regex(data);
    let css = Escaper::css_string(data);
    let sql = Escaper::sql_like(data);

    for out in [&html, &html_text, &uri, &js, &regex, &css, &sql] {
        assert!(out.len() >= data.len());
    }

    // Test 2: markup-terminating characters never survive HTML escaping
    for c in ['<', '>', '"', '\'', '&'] {
        assert!(!html.contains(c));
        assert!(!html_text.contains(c));
    }
    for c in [' ', '/', '\\', '\t', '\n', '\r'] {
        assert!(!html.contains(c));
    }

    // Test 3: string-literal delimiters never survive their contexts
    for c in ['\'', '"', '<', '>', '&', '%'] {
        assert!(!js.contains(c));
    }
    for c in ['\'', '"', '<', '>', '&'] {
        assert!(!css.contains(c));
    }

    // Test 4: LIKE wildcards always sit behind the escape character
    let bytes = sql.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'%' || *b == b'_' {
            assert_eq!(bytes.get(i.wrapping_sub(1)), Some(&b'@'));
        }
    }

    // Test 5: nesting contexts composes without panicking
    let _ = Escaper::html(&Escaper::css_string(&Escaper::uri_param(data)));
});
