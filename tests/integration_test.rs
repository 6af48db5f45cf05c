//! Integration tests for palisade

use palisade::*;
use serde::Serialize;

#[test]
fn test_unquoted_attribute_cannot_grow_new_attributes() {
    let payload = "x onmouseover=alert(document.cookie)";
    let escaped = Escaper::html(payload);

    // No space survives, so the attribute value cannot end early
    assert!(!escaped.contains(' '));
    let attr = format!("<input value={escaped}>");
    assert!(!attr.contains(" onmouseover"));
}

#[test]
fn test_quoted_attribute_stays_closed() {
    let payload = r#""><script>boom()</script>"#;
    let attr = format!(r#"<a title="{}">"#, Escaper::html_text(payload));

    assert!(!attr.contains(r#""><script>"#));
    assert!(attr.contains("&quot;&gt;&lt;script&gt;"));
}

#[test]
fn test_js_string_cannot_break_out_of_script_element() {
    let payload = r#"'; fetch('//evil.example'); var x = '</script>"#;
    let script = format!("var name = '{}';", Escaper::js_string(payload));

    assert!(!script.contains("</script>"));
    assert!(!script.contains("'; fetch"));
}

#[test]
fn test_css_string_cannot_close_style_element() {
    let payload = "x'); } </style><script>alert(1)</script>";
    let css = format!("background: url('{}');", Escaper::css_string(payload));

    assert!(!css.contains("</style>"));
    assert!(!css.contains("x')"));
}

#[test]
fn test_sql_like_operand_in_a_parameterized_clause() {
    let term = "50%_off";
    let clause = format!("name LIKE '%{}%' ESCAPE '@'", Escaper::sql_like(term));

    assert_eq!(clause, "name LIKE '%50@%@_off%' ESCAPE '@'");
}

#[test]
fn test_filtered_url_layers_under_html_escaping() {
    let href = Escaper::html(&Filter::as_url("javascript:alert(1)"));

    // Quarantined first, then escaped for the attribute it lands in
    assert_eq!(href, ".&#x2F;javascript:alert(1)");
}

#[test]
fn test_numeric_attribute_falls_back_to_the_default() {
    let width = Filter::as_number_or("9999'><svg onload=pwn()>", "640");
    let img = format!(r#"<img width="{width}">"#);

    assert_eq!(img, r#"<img width="640">"#);
}

#[test]
fn test_inline_style_color_falls_back() {
    let color = Filter::as_css_color("red; } body { display: none");
    let style = format!("color: {color}");

    assert_eq!(style, "color: invalid");
}

#[test]
fn test_nested_contexts_never_resurrect_a_payload() {
    let attacks = [
        "javascript:alert(1)",
        r#"'); window.location='https://evil.example'; ('"#,
        "</script><script>alert(1)</script>",
        "</style><script>alert(1)</script>",
        r#""><img src=x onerror=alert(1)>"#,
        "\u{2028}alert(1)",
    ];

    for attack in attacks {
        // href written into markup
        let two_layers = Escaper::html(&Escaper::uri(attack));
        // url('...') inside a style attribute
        let three_layers = Escaper::html(&Escaper::css_string(&Escaper::uri(attack)));

        for output in [&two_layers, &three_layers] {
            assert!(!output.contains("javascript:"), "attack: {attack:?}");
            assert!(!output.contains("</script>"), "attack: {attack:?}");
            assert!(!output.contains("</style>"), "attack: {attack:?}");
            assert!(!output.contains('\''), "attack: {attack:?}");
            assert!(!output.contains('"'), "attack: {attack:?}");
            assert!(!output.contains('\u{2028}'), "attack: {attack:?}");
        }
    }
}

#[test]
fn test_escaping_is_not_idempotent() {
    let once = Escaper::html_text("Fish & Chips");
    let twice = Escaper::html_text(&once);

    assert_eq!(once, "Fish &amp; Chips");
    assert_eq!(twice, "Fish &amp;amp; Chips");
}

#[test]
fn test_absent_values_map_to_absent_values() {
    let missing: Option<&str> = None;

    assert!(missing.map(Escaper::html).is_none());
    assert!(missing.map(Escaper::sql_like).is_none());
    assert!(missing.map(Filter::as_css_color).is_none());
    assert!(missing.map(Filter::as_url).is_none());

    let present = Some("navy");
    assert_eq!(present.map(Filter::as_css_color).as_deref(), Some("navy"));
}

#[test]
fn test_safe_facade_assembles_a_page_fragment() {
    let user_name = "Bob <script>";
    let user_color = "red; } body { display: none";
    let user_site = "javascript:phoneHome()";

    let fragment = format!(
        r#"<div style="color: {color}"><a href="{href}">{name}</a></div>"#,
        color = Safe::as_css_color(user_color),
        href = Safe::html(Safe::as_url(user_site)),
        name = Safe::html_text(user_name),
    );

    assert!(fragment.contains("color: invalid"));
    assert!(!fragment.contains("<script>"));
    assert!(!fragment.contains("./javascript:")); // the slash is escaped too
    assert!(fragment.contains(".&#x2F;javascript:phoneHome()"));
}

#[test]
fn test_safe_fragments_render_without_double_escaping() {
    let fragment = Safe::html_text("a & b");
    assert_eq!(fragment.as_str(), "a &amp; b");

    // Rendering goes through Display and must not escape again
    assert_eq!(format!("{fragment}"), "a &amp; b");

    // Feeding it back through the facade escapes the markup itself
    assert_eq!(Safe::html_text(fragment).as_str(), "a &amp;amp; b");
}

#[test]
fn test_trusted_markup_is_not_exempt_from_new_contexts() {
    let widget = SafeHtml::trusted("<button>Go</button>");

    // Embedding existing markup in a JS string still escapes it for JS
    let js = Safe::js_string(widget);
    assert!(!js.as_str().contains('<'));
    assert!(js.as_str().contains("\\u003C"));
}

#[test]
fn test_scheme_filter_builder_and_require() {
    let filter = SchemeFilter::strict().with_scheme("steam");

    assert_eq!(filter.apply("steam://run/440"), "steam://run/440");
    assert_eq!(filter.apply("tel:555"), "./tel:555");
    assert!(filter.require("steam://run/440").is_ok());
    assert!(matches!(
        filter.require("data:text/html,x"),
        Err(FilterError::SchemeNotAllowed(_))
    ));
}

#[test]
fn test_safe_html_serializes_inside_api_payloads() {
    #[derive(Serialize)]
    struct Rendered {
        body: SafeHtml,
    }

    let rendered = Rendered {
        body: Safe::html_text("a<b"),
    };
    let json = serde_json::to_string(&rendered).unwrap();

    assert_eq!(json, r#"{"body":"a&lt;b"}"#);
}
