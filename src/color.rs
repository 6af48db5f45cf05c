//! CSS color keyword table and hex syntax check.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// The 147 color keywords from CSS Color Module Level 3 (the SVG/X11 set).
static NAMED_COLORS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        "aliceblue",
        "antiquewhite",
        "aqua",
        "aquamarine",
        "azure",
        "beige",
        "bisque",
        "black",
        "blanchedalmond",
        "blue",
        "blueviolet",
        "brown",
        "burlywood",
        "cadetblue",
        "chartreuse",
        "chocolate",
        "coral",
        "cornflowerblue",
        "cornsilk",
        "crimson",
        "cyan",
        "darkblue",
        "darkcyan",
        "darkgoldenrod",
        "darkgray",
        "darkgreen",
        "darkgrey",
        "darkkhaki",
        "darkmagenta",
        "darkolivegreen",
        "darkorange",
        "darkorchid",
        "darkred",
        "darksalmon",
        "darkseagreen",
        "darkslateblue",
        "darkslategray",
        "darkslategrey",
        "darkturquoise",
        "darkviolet",
        "deeppink",
        "deepskyblue",
        "dimgray",
        "dimgrey",
        "dodgerblue",
        "firebrick",
        "floralwhite",
        "forestgreen",
        "fuchsia",
        "gainsboro",
        "ghostwhite",
        "gold",
        "goldenrod",
        "gray",
        "green",
        "greenyellow",
        "grey",
        "honeydew",
        "hotpink",
        "indianred",
        "indigo",
        "ivory",
        "khaki",
        "lavender",
        "lavenderblush",
        "lawngreen",
        "lemonchiffon",
        "lightblue",
        "lightcoral",
        "lightcyan",
        "lightgoldenrodyellow",
        "lightgray",
        "lightgreen",
        "lightgrey",
        "lightpink",
        "lightsalmon",
        "lightseagreen",
        "lightskyblue",
        "lightslategray",
        "lightslategrey",
        "lightsteelblue",
        "lightyellow",
        "lime",
        "limegreen",
        "linen",
        "magenta",
        "maroon",
        "mediumaquamarine",
        "mediumblue",
        "mediumorchid",
        "mediumpurple",
        "mediumseagreen",
        "mediumslateblue",
        "mediumspringgreen",
        "mediumturquoise",
        "mediumvioletred",
        "midnightblue",
        "mintcream",
        "mistyrose",
        "moccasin",
        "navajowhite",
        "navy",
        "oldlace",
        "olive",
        "olivedrab",
        "orange",
        "orangered",
        "orchid",
        "palegoldenrod",
        "palegreen",
        "paleturquoise",
        "palevioletred",
        "papayawhip",
        "peachpuff",
        "peru",
        "pink",
        "plum",
        "powderblue",
        "purple",
        "red",
        "rosybrown",
        "royalblue",
        "saddlebrown",
        "salmon",
        "sandybrown",
        "seagreen",
        "seashell",
        "sienna",
        "silver",
        "skyblue",
        "slateblue",
        "slategray",
        "slategrey",
        "snow",
        "springgreen",
        "steelblue",
        "tan",
        "teal",
        "thistle",
        "tomato",
        "turquoise",
        "violet",
        "wheat",
        "white",
        "whitesmoke",
        "yellow",
        "yellowgreen",
    ])
});

/// `#RGB` or `#RRGGBB`. Functional notations like `rgb()` are not accepted.
static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").unwrap());

pub(crate) fn is_css_color(value: &str) -> bool {
    HEX_COLOR.is_match(value) || NAMED_COLORS.contains(value.to_ascii_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_is_complete() {
        assert_eq!(NAMED_COLORS.len(), 147);
    }

    #[test]
    fn test_keywords_match_case_insensitively() {
        assert!(is_css_color("AliceBlue"));
        assert!(is_css_color("white"));
        assert!(is_css_color("PaleVioletRed"));
        assert!(is_css_color("YELLOW"));
    }

    #[test]
    fn test_hex_forms() {
        assert!(is_css_color("#fff"));
        assert!(is_css_color("#FFF"));
        assert!(is_css_color("#0fF056"));
        assert!(!is_css_color("#1"));
        assert!(!is_css_color("#12"));
        assert!(!is_css_color("#1223"));
        assert!(!is_css_color("#12233"));
        assert!(!is_css_color("#122g34"));
        assert!(!is_css_color("#1222333"));
    }

    #[test]
    fn test_junk_is_rejected() {
        assert!(!is_css_color(""));
        assert!(!is_css_color("this is not a name"));
        assert!(!is_css_color("efe fef"));
        assert!(!is_css_color("foo()<>{}"));
        assert!(!is_css_color("12345"));
        assert!(!is_css_color("\0white"));
        assert!(!is_css_color("white "));
    }
}
