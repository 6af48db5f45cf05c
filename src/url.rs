//! URL scheme allow-list filtering.

use once_cell::sync::Lazy;
use std::collections::HashSet;
use tracing::debug;

use crate::error::{FilterError, Result};

/// Shared instance behind [`Filter::as_url`](crate::Filter::as_url).
pub(crate) static STRICT: Lazy<SchemeFilter> = Lazy::new(SchemeFilter::strict);

/// Shared instance behind [`Filter::as_flexible_url`](crate::Filter::as_flexible_url).
pub(crate) static FLEXIBLE: Lazy<SchemeFilter> = Lazy::new(SchemeFilter::flexible);

/// Filters URLs by scheme before they reach an `href`, `src`, or other
/// navigation sink.
///
/// Escaping cannot help in these sinks: `javascript:alert(1)` contains no
/// markup metacharacter at all, so it survives every encoder untouched. The
/// only defense is to allow known-good schemes and quarantine the rest.
///
/// Quarantining prepends `./` to the unmodified value, which turns an
/// absolute scheme into an inert relative path while keeping the original
/// text visible in the rendered page for diagnosis. The filter never
/// substitutes a placeholder for a rejected URL.
///
/// ```
/// use palisade::SchemeFilter;
///
/// let filter = SchemeFilter::strict();
/// assert_eq!(filter.apply("https://example.com"), "https://example.com");
/// assert_eq!(filter.apply("javascript:alert(1)"), "./javascript:alert(1)");
/// ```
///
/// The two presets cover most pages; the builder methods extend them:
///
/// ```
/// use palisade::SchemeFilter;
///
/// let filter = SchemeFilter::strict().with_scheme("ssh");
/// assert_eq!(filter.apply("ssh://host"), "ssh://host");
/// ```
#[derive(Debug, Clone)]
pub struct SchemeFilter {
    schemes: HashSet<String>,
    bare_relatives: bool,
}

impl SchemeFilter {
    /// Allows `http`, `https`, `ftp`, and `mailto`, plus scheme-less
    /// references (absolute paths, protocol-relative `//host` URLs, UNC
    /// paths, query-only and fragment-only references, and relative paths
    /// containing a `/`). A bare token with no slash, such as `test.html`,
    /// is quarantined because nothing distinguishes it from a scheme name
    /// cut short.
    pub fn strict() -> Self {
        Self {
            schemes: ["http", "https", "ftp", "mailto"]
                .into_iter()
                .map(String::from)
                .collect(),
            bare_relatives: false,
        }
    }

    /// Everything [`SchemeFilter::strict`] allows, plus the `tel` and
    /// `gopher` schemes and bare relative filenames.
    pub fn flexible() -> Self {
        let mut filter = Self::strict().with_bare_relatives(true);
        filter.schemes.insert("tel".into());
        filter.schemes.insert("gopher".into());
        filter
    }

    /// Adds a scheme to the allow list. Stored lower-cased; matching is
    /// case-insensitive either way.
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.schemes.insert(scheme.to_ascii_lowercase());
        self
    }

    /// Controls whether a slash-free, colon-free token like `readme.html`
    /// passes.
    pub fn with_bare_relatives(mut self, allowed: bool) -> Self {
        self.bare_relatives = allowed;
        self
    }

    /// Checks a URL against the allow list without rewriting it.
    ///
    /// A leading `?` or `#` is accepted before any scheme scan, so a `:`
    /// later in a query or fragment reference is never read as a scheme
    /// separator. Those two characters end the part of a URL a scheme
    /// could occupy.
    pub fn is_allowed(&self, url: &str) -> bool {
        if url.is_empty() {
            return true;
        }
        match url.chars().next() {
            // Absolute path or protocol-relative; a scheme can no longer
            // appear after a leading slash.
            Some('/') => return true,
            // Query-only and fragment-only references.
            Some('?') | Some('#') => return true,
            // UNC form needs both backslashes. A single one is the quirky
            // IE file-path form and stays quarantined.
            Some('\\') => return url.starts_with("\\\\"),
            _ => {}
        }

        match url.split('/').next() {
            Some(head) if head.contains(':') => {
                // Candidate scheme, the text before the first colon. The
                // token must match an allow-list entry literally; control
                // characters or an entity lead-in mean it never matches,
                // whatever it would decode to.
                let scheme = head.split(':').next().unwrap_or_default();
                !obfuscated(scheme) && self.schemes.contains(&scheme.to_ascii_lowercase())
            }
            Some(head) => {
                // No scheme separator before the first slash. The leading
                // segment still must not smuggle one in through an HTML
                // entity that a browser would decode before navigating.
                if obfuscated(head) {
                    false
                } else if url.contains('/') {
                    true
                } else {
                    self.bare_relatives
                }
            }
            None => self.bare_relatives,
        }
    }

    /// Passes an allowed URL through unchanged; quarantines anything else
    /// by prepending `./`.
    pub fn apply(&self, url: &str) -> String {
        if self.is_allowed(url) {
            url.to_string()
        } else {
            debug!(url = %url, "quarantined URL outside the scheme allow list");
            format!("./{url}")
        }
    }

    /// Like [`SchemeFilter::apply`], but for callers that want to refuse
    /// the value outright instead of rendering a quarantined form.
    pub fn require(&self, url: &str) -> Result<String> {
        if self.is_allowed(url) {
            Ok(url.to_string())
        } else {
            Err(FilterError::SchemeNotAllowed(url.to_string()))
        }
    }
}

impl Default for SchemeFilter {
    fn default() -> Self {
        Self::strict()
    }
}

/// True when the text could read differently after browser-side decoding:
/// control characters (NUL included) and any `&`, the lead-in of an HTML
/// entity whether named (`&colon;`), numeric (`&#58`), or unterminated.
fn obfuscated(text: &str) -> bool {
    text.contains('&') || text.chars().any(char::is_control)
}
