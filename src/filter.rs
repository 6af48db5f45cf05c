//! Allow-list validators for values escaping cannot make safe.
//!
//! Some sinks interpret a whole value rather than individual characters: a
//! CSS property value, a numeric attribute, a navigation URL. For those the
//! library validates the value against a narrow grammar and substitutes a
//! policy fallback when it does not fit, instead of escaping.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

use crate::color;
use crate::error::{FilterError, Result};
use crate::url::{FLEXIBLE, STRICT};

/// Decimal numeral: optional sign, at most one dot, at least one digit.
/// Matches byte-for-byte what it accepts; `0777` stays `0777` and is never
/// reinterpreted as octal.
static DECIMAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)$").unwrap());

/// Hexadecimal numeral in source form, `0x` prefix required.
static HEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[+-]?0[xX][0-9a-fA-F]+$").unwrap());

/// Validators that pass a legitimate value through unchanged and replace
/// anything else with a safe fallback.
///
/// ```
/// use palisade::Filter;
///
/// assert_eq!(Filter::as_css_color("PapayaWhip"), "PapayaWhip");
/// assert_eq!(Filter::as_css_color("expression(alert(1))"), "invalid");
/// assert_eq!(Filter::as_number("-.04"), "-.04");
/// assert_eq!(Filter::as_number("DROP TABLE"), "0");
/// ```
pub struct Filter;

impl Filter {
    /// Accepts one of the 147 CSS color keywords (case-insensitive) or a
    /// `#RGB`/`#RRGGBB` hex color. Anything else becomes `invalid`, which
    /// no CSS property parses as a value.
    pub fn as_css_color(value: &str) -> String {
        Self::as_css_color_or(value, "invalid")
    }

    /// Like [`Filter::as_css_color`] with a caller-chosen fallback. The
    /// fallback is trusted as-is, so it must not itself come from user
    /// input.
    pub fn as_css_color_or(value: &str, default: &str) -> String {
        if color::is_css_color(value) {
            value.to_string()
        } else {
            debug!(value = %value, "replaced non-color value with the fallback");
            default.to_string()
        }
    }

    /// True when the value would pass [`Filter::as_css_color`] unchanged.
    pub fn is_css_color(value: &str) -> bool {
        color::is_css_color(value)
    }

    /// Accepts a decimal numeral (optional sign, at most one `.`, at least
    /// one digit) or a `0x`-prefixed hexadecimal numeral. Anything else
    /// becomes `0`.
    ///
    /// This checks syntax only and never parses: the text passes through
    /// verbatim, so width, precision, and leading zeros survive. `0777`
    /// comes back as the four characters `0777`, not as an octal
    /// reinterpretation.
    pub fn as_number(value: &str) -> String {
        Self::as_number_or(value, "0")
    }

    /// Like [`Filter::as_number`] with a caller-chosen fallback.
    pub fn as_number_or(value: &str, default: &str) -> String {
        if Self::is_number(value) {
            value.to_string()
        } else {
            debug!(value = %value, "replaced non-numeric value with the fallback");
            default.to_string()
        }
    }

    /// True when the value would pass [`Filter::as_number`] unchanged.
    pub fn is_number(value: &str) -> bool {
        DECIMAL.is_match(value) || HEX.is_match(value)
    }

    /// Quarantines URLs outside the strict scheme allow list
    /// (`http`, `https`, `ftp`, `mailto`, and scheme-less references) by
    /// prepending `./`. See [`SchemeFilter`](crate::SchemeFilter) for the
    /// full contract and for building custom allow lists.
    pub fn as_url(url: &str) -> String {
        STRICT.apply(url)
    }

    /// Like [`Filter::as_url`] but additionally allows `tel`, `gopher`,
    /// and bare relative filenames such as `readme.html`.
    pub fn as_flexible_url(url: &str) -> String {
        FLEXIBLE.apply(url)
    }

    /// Fallible form of [`Filter::as_css_color`] for callers that reject
    /// instead of substituting.
    pub fn require_css_color(value: &str) -> Result<String> {
        if color::is_css_color(value) {
            Ok(value.to_string())
        } else {
            Err(FilterError::InvalidColor(value.to_string()))
        }
    }

    /// Fallible form of [`Filter::as_number`].
    pub fn require_number(value: &str) -> Result<String> {
        if Self::is_number(value) {
            Ok(value.to_string())
        } else {
            Err(FilterError::InvalidNumber(value.to_string()))
        }
    }

    /// Fallible form of [`Filter::as_url`], using the strict allow list.
    pub fn require_url(url: &str) -> Result<String> {
        STRICT.require(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COLORS: &[&str] = &["AliceBlue", "white", "PaleVioletRed", "#fff", "#FFF", "#0fF056"];

    const NON_COLORS: &[&str] = &[
        "#1",
        "this is not a name",
        "efe fef",
        "foo()<>{}",
        "\0white",
        "\0#fff",
        "12345",
        "#12",
        "#1223",
        "#12233",
        "#122g34",
        "",
    ];

    const NUMBERS: &[&str] = &[
        "+1.425",
        "65.",
        "-64.32",
        "42",
        "-.04",
        "0.2323232",
        "0xefefef",
        "0x0ff",
        "0x234345",
        "0777",
    ];

    const NON_NUMBERS: &[&str] = &[
        ".",
        "+65266+",
        "-+1.266",
        "65.65.",
        "0xefefefg",
        "0xag",
        "abc",
        "\x15",
        "",
    ];

    #[test]
    fn test_colors_pass_unchanged() {
        for &value in COLORS {
            assert_eq!(Filter::as_css_color(value), value, "value: {value:?}");
            assert!(Filter::is_css_color(value));
        }
    }

    #[test]
    fn test_non_colors_become_the_default() {
        for &value in NON_COLORS {
            assert_eq!(Filter::as_css_color(value), "invalid", "value: {value:?}");
            assert_eq!(
                Filter::as_css_color_or(value, "blue"),
                "blue",
                "value: {value:?}"
            );
            assert!(!Filter::is_css_color(value));
        }
    }

    #[test]
    fn test_numbers_pass_unchanged() {
        for &value in NUMBERS {
            assert_eq!(Filter::as_number(value), value, "value: {value:?}");
            assert!(Filter::is_number(value));
        }
    }

    #[test]
    fn test_non_numbers_become_the_default() {
        for &value in NON_NUMBERS {
            assert_eq!(Filter::as_number(value), "0", "value: {value:?}");
            assert_eq!(Filter::as_number_or(value, "1"), "1", "value: {value:?}");
            assert!(!Filter::is_number(value));
        }
    }

    #[test]
    fn test_leading_zeros_survive_verbatim() {
        assert_eq!(Filter::as_number("0777"), "0777");
        assert_eq!(Filter::as_number("007"), "007");
        assert_eq!(Filter::as_number("00.50"), "00.50");
    }

    #[test]
    fn test_unicode_digits_are_not_numerals() {
        // Arabic-Indic and fullwidth digits render as numbers but have no
        // place in a generated attribute.
        assert_eq!(Filter::as_number("١٢٣"), "0");
        assert_eq!(Filter::as_number("１２３"), "0");
    }

    #[test]
    fn test_url_filters_delegate_to_the_presets() {
        assert_eq!(Filter::as_url("https://example.com"), "https://example.com");
        assert_eq!(Filter::as_url("javascript:alert(1)"), "./javascript:alert(1)");
        assert_eq!(Filter::as_url("tel:5551234"), "./tel:5551234");
        assert_eq!(Filter::as_flexible_url("tel:5551234"), "tel:5551234");
        assert_eq!(
            Filter::as_flexible_url("vbscript:IE"),
            "./vbscript:IE"
        );
        assert_eq!(
            Filter::as_flexible_url("javascript&colon;alert(1)"),
            "./javascript&colon;alert(1)"
        );
    }

    #[test]
    fn test_require_variants_surface_errors() {
        assert_eq!(Filter::require_css_color("navy").unwrap(), "navy");
        assert!(matches!(
            Filter::require_css_color("bad"),
            Err(FilterError::InvalidColor(_))
        ));

        assert_eq!(Filter::require_number("42").unwrap(), "42");
        assert!(matches!(
            Filter::require_number("42; DROP"),
            Err(FilterError::InvalidNumber(_))
        ));

        assert_eq!(Filter::require_url("/home").unwrap(), "/home");
        assert!(matches!(
            Filter::require_url("data:test"),
            Err(FilterError::SchemeNotAllowed(_))
        ));
    }

    #[test]
    fn test_absence_maps_through_cleanly() {
        let missing: Option<String> = None;
        assert_eq!(missing.as_deref().map(Filter::as_number), None);
        assert_eq!(
            Some("42".to_string()).as_deref().map(Filter::as_number),
            Some("42".to_string())
        );
    }
}
