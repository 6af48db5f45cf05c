//! Context-sensitive output encoders.
//!
//! One function per output sink. Every function walks the input once, swaps
//! each sensitive code point for a fixed replacement sequence, and leaves
//! everything else untouched. No parsing, no backtracking, no state.

/// Output encoders, one per sink context.
///
/// Pick the function that matches the syntactic position the value is
/// inserted into. Using a weaker context than the real sink (for example
/// [`Escaper::html_text`] inside an unquoted attribute) stays unsafe, and
/// the library cannot detect it.
pub struct Escaper;

/// Escaped output grows by at most one replacement per input char, so twice
/// the input length avoids reallocation for realistic data.
fn output_buffer(len: usize) -> String {
    String::with_capacity(len.saturating_mul(2))
}

impl Escaper {
    /// HTML entity escaping for tag bodies and attribute values, quoted or
    /// not.
    ///
    /// Escapes the HTML metacharacters `' " < > & \ /`, whitespace
    /// (`SPACE`, `\t`, `\n`, `\x0C`, `\r`) so the value cannot terminate an
    /// unquoted attribute, and the Unicode line separators `U+2028`/`U+2029`.
    /// Quoting attributes is still strongly recommended; this function just
    /// refuses to depend on it.
    ///
    /// For large amounts of text that are guaranteed to sit inside a tag
    /// body or a quoted attribute, [`Escaper::html_text`] escapes a smaller
    /// set and does less work.
    ///
    /// ```
    /// use palisade::Escaper;
    ///
    /// assert_eq!(Escaper::html("<b>"), "&lt;b&gt;");
    /// assert_eq!(Escaper::html("a b"), "a&#x20;b");
    /// ```
    pub fn html(input: &str) -> String {
        let mut out = output_buffer(input.len());
        for c in input.chars() {
            match c {
                '\t' => out.push_str("&#x09;"),
                '\n' => out.push_str("&#x0A;"),
                '\x0C' => out.push_str("&#x0C;"),
                '\r' => out.push_str("&#x0D;"),
                '\'' => out.push_str("&#39;"),
                '\\' => out.push_str("&#x5C;"),
                ' ' => out.push_str("&#x20;"),
                '/' => out.push_str("&#x2F;"),
                '"' => out.push_str("&quot;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '&' => out.push_str("&amp;"),
                '\u{2028}' => out.push_str("&#x2028;"),
                '\u{2029}' => out.push_str("&#x2029;"),
                _ => out.push(c),
            }
        }
        out
    }

    /// HTML entity escaping for text content only.
    ///
    /// Escapes `' " < > &`. Sufficient when the value is guaranteed to land
    /// in a tag body or a quoted attribute value; not safe for unquoted
    /// attributes. When in doubt use [`Escaper::html`].
    pub fn html_text(input: &str) -> String {
        let mut out = output_buffer(input.len());
        for c in input.chars() {
            match c {
                '\'' => out.push_str("&#39;"),
                '"' => out.push_str("&quot;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                '&' => out.push_str("&amp;"),
                _ => out.push(c),
            }
        }
        out
    }

    /// Percent-encoding for a query string value:
    /// `/example/?name=VALUE_HERE`.
    ///
    /// Encodes the RFC reserved set plus `% ' " < >` and whitespace
    /// controls. This is not sufficient for a URI in a generic context such
    /// as a whole `href`; there, restrict the scheme first (see
    /// [`Filter::as_url`](crate::Filter::as_url)) and HTML-escape the full
    /// URI on top.
    pub fn uri_param(input: &str) -> String {
        let mut out = output_buffer(input.len());
        for c in input.chars() {
            match c {
                '\t' => out.push_str("%09"),
                '\n' => out.push_str("%0A"),
                '\x0C' => out.push_str("%0C"),
                '\r' => out.push_str("%0D"),
                ' ' => out.push_str("%20"),
                '!' => out.push_str("%21"),
                '"' => out.push_str("%22"),
                '#' => out.push_str("%23"),
                '$' => out.push_str("%24"),
                '%' => out.push_str("%25"),
                '&' => out.push_str("%26"),
                '\'' => out.push_str("%27"),
                '(' => out.push_str("%28"),
                ')' => out.push_str("%29"),
                '*' => out.push_str("%2A"),
                '+' => out.push_str("%2B"),
                ',' => out.push_str("%2C"),
                '.' => out.push_str("%2E"),
                '/' => out.push_str("%2F"),
                ':' => out.push_str("%3A"),
                ';' => out.push_str("%3B"),
                '<' => out.push_str("%3C"),
                '=' => out.push_str("%3D"),
                '>' => out.push_str("%3E"),
                '?' => out.push_str("%3F"),
                '@' => out.push_str("%40"),
                '[' => out.push_str("%5B"),
                ']' => out.push_str("%5D"),
                _ => out.push(c),
            }
        }
        out
    }

    /// Same as [`Escaper::uri_param`] for now.
    ///
    /// Eventually this may grow into filtering a complete URI so a browser
    /// cannot read a malicious payload out of it (`javascript:`,
    /// `data:text/html,...`). Until that exists the two stay aliased.
    pub fn uri(input: &str) -> String {
        Self::uri_param(input)
    }

    /// JavaScript string escaping (`\uXXXX`) for single- or double-quoted
    /// string literals:
    ///
    /// ```text
    /// <script type="text/javascript">
    ///   window.myString = 'VALUE_HERE';
    /// </script>
    /// ```
    ///
    /// Escapes the string delimiters `' "` and `\`, the percent sign (so a
    /// later URI-decode cannot resurrect anything), the HTML characters
    /// `& / < >` that could close the enclosing script element, the control
    /// characters `\x08`..`\r`, and `U+2028`/`U+2029`, which terminate a
    /// JavaScript statement the way a newline does.
    pub fn js_string(input: &str) -> String {
        let mut out = output_buffer(input.len());
        for c in input.chars() {
            match c {
                '\x08' => out.push_str("\\u0008"),
                '\t' => out.push_str("\\u0009"),
                '\n' => out.push_str("\\u000A"),
                '\x0B' => out.push_str("\\u000B"),
                '\x0C' => out.push_str("\\u000C"),
                '\r' => out.push_str("\\u000D"),
                '\'' => out.push_str("\\u0027"),
                '"' => out.push_str("\\u0022"),
                '\\' => out.push_str("\\u005C"),
                '%' => out.push_str("\\u0025"),
                '&' => out.push_str("\\u0026"),
                '/' => out.push_str("\\u002F"),
                '<' => out.push_str("\\u003C"),
                '>' => out.push_str("\\u003E"),
                '\u{2028}' => out.push_str("\\u2028"),
                '\u{2029}' => out.push_str("\\u2029"),
                _ => out.push(c),
            }
        }
        out
    }

    /// Escaping for the body of a JavaScript regex literal:
    ///
    /// ```text
    /// <script type="text/javascript">
    ///   var b = /^VALUE_HERE/.test(document.location);
    /// </script>
    /// ```
    ///
    /// Backslash-escapes the regex metacharacters and the `/` terminator,
    /// and rewrites control characters as their letter escapes. Quotes are
    /// not escaped; a regex built inside a string literal
    /// (`new RegExp('...')`) is a nested context, so escape with
    /// [`Escaper::js_regex`] first and then [`Escaper::js_string`] on the
    /// way out.
    pub fn js_regex(input: &str) -> String {
        let mut out = output_buffer(input.len());
        for c in input.chars() {
            match c {
                '\t' => out.push_str("\\t"),
                '\n' => out.push_str("\\n"),
                '\x0B' => out.push_str("\\v"),
                '\x0C' => out.push_str("\\f"),
                '\r' => out.push_str("\\r"),
                '\\' => out.push_str("\\\\"),
                '/' => out.push_str("\\/"),
                '(' => out.push_str("\\("),
                '[' => out.push_str("\\["),
                '{' => out.push_str("\\{"),
                ']' => out.push_str("\\]"),
                ')' => out.push_str("\\)"),
                '}' => out.push_str("\\}"),
                '*' => out.push_str("\\*"),
                '+' => out.push_str("\\+"),
                '-' => out.push_str("\\-"),
                '.' => out.push_str("\\."),
                '?' => out.push_str("\\?"),
                '!' => out.push_str("\\!"),
                '^' => out.push_str("\\^"),
                '$' => out.push_str("\\$"),
                '|' => out.push_str("\\|"),
                _ => out.push(c),
            }
        }
        out
    }

    /// CSS string escaping (`\HH ` hex form, trailing space included) for
    /// quoted strings and `url('...')`:
    ///
    /// ```text
    /// <style>
    ///   a[href *= "VALUE_HERE"] { ... }
    ///   li { background: url('VALUE_HERE'); }
    /// </style>
    /// ```
    ///
    /// Escapes the string delimiters `' "` and `\`, the HTML characters
    /// `& / < >` that could close the enclosing style element, control
    /// characters, and the Unicode line separators.
    pub fn css_string(input: &str) -> String {
        let mut out = output_buffer(input.len());
        for c in input.chars() {
            match c {
                '\x08' => out.push_str("\\08 "),
                '\t' => out.push_str("\\09 "),
                '\n' => out.push_str("\\0A "),
                '\x0C' => out.push_str("\\0C "),
                '\r' => out.push_str("\\0D "),
                '\'' => out.push_str("\\27 "),
                '"' => out.push_str("\\22 "),
                '\\' => out.push_str("\\5C "),
                '&' => out.push_str("\\26 "),
                '/' => out.push_str("\\2F "),
                '<' => out.push_str("\\3C "),
                '>' => out.push_str("\\3E "),
                '\u{2028}' => out.push_str("\\002028 "),
                '\u{2029}' => out.push_str("\\002029 "),
                _ => out.push(c),
            }
        }
        out
    }

    /// SQL LIKE operand escaping with `@` as the escape character.
    ///
    /// This does not protect against SQL injection. It only keeps a value
    /// interpolated into a parameterized `LIKE` clause from smuggling in the
    /// `%` and `_` wildcards. The query must declare the same escape
    /// character: `... LIKE :pattern ESCAPE '@'`.
    ///
    /// ```
    /// use palisade::Escaper;
    ///
    /// assert_eq!(Escaper::sql_like("50%_done"), "50@%@_done");
    /// ```
    pub fn sql_like(input: &str) -> String {
        Self::sql_like_with(input, '@')
    }

    /// SQL LIKE operand escaping with a caller-chosen escape character.
    ///
    /// Prefixes `%`, `_`, and the escape character itself with the escape
    /// character. When something other than `@` is chosen, `@` passes
    /// through unescaped.
    pub fn sql_like_with(input: &str, escape: char) -> String {
        let mut out = output_buffer(input.len());
        for c in input.chars() {
            if c == escape || c == '_' || c == '%' {
                out.push(escape);
            }
            out.push(c);
        }
        out
    }
}
