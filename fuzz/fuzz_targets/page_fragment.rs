//! Fuzz target for assembling a page fragment through the facade.
//!
//! Feeds an arbitrary form submission through the full render path and
//! checks that nothing dangerous reaches the assembled markup.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use palisade::{Filter, Safe};

/// Arbitrary untrusted form submission.
#[derive(Debug, Arbitrary)]
struct FuzzSubmission {
    name: String,
    website: String,
    accent_color: String,
    quantity: String,
}

fuzz_target!(|data: FuzzSubmission| {
    let fragment = format!(
        r#"<li style="color: {color}"><a href="{href}">{name}</a> x{qty}</li>"#,
        color = Safe::as_css_color(&data.accent_color),
        href = Safe::html(Safe::as_url(&data.website)),
        name = Safe::html_text(&data.name),
        qty = Safe::as_number(&data.quantity),
    );

    // Test 1: no script element can appear outside the fixed template
    assert!(!fragment.contains("<script"));

    // Test 2: the color is a keyword, a hex color, or the fallback
    let color = Filter::as_css_color(&data.accent_color);
    assert!(
        color == "invalid"
            || color.starts_with('#')
            || color.chars().all(|c| c.is_ascii_alphabetic())
    );

    // Test 3: the quantity is numeric syntax or the fallback
    let qty = Filter::as_number(&data.quantity);
    assert!(
        qty.chars()
            .all(|c| c.is_ascii_hexdigit() || "+-.xX".contains(c))
    );

    // Test 4: attribute positions cannot be escaped from
    let attr = Safe::html(data.name.as_str());
    assert!(!attr.as_str().contains('"'));
    assert!(!attr.as_str().contains(' '));
});
