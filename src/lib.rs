//! # Palisade
//!
//! Context-aware output encoding and input validation for server-rendered
//! pages.
//!
//! ## Features
//!
//! - ✅ **Contextual Escaping** - HTML, JavaScript, CSS, URI, and SQL LIKE encoders, one per sink
//! - ✅ **Allow-List Filters** - CSS colors, numeric literals, URL schemes
//! - ✅ **URL Quarantine** - Dangerous schemes neutralized in place, never silently dropped
//! - ✅ **Safe Markup Marker** - Type-level tracking of already-escaped fragments
//! - ✅ **Total Functions** - Defined for every input, no panics, no exceptions
//! - ✅ **Zero Shared State** - Pure transformations, callable from any thread
//!
//! ## Quick Start
//!
//! ```rust
//! use palisade::{Escaper, Filter, Safe};
//!
//! // Escape for an HTML tag body or attribute value
//! let escaped = Escaper::html("<script>alert('XSS')</script>");
//! assert!(!escaped.contains("<script>"));
//!
//! // Validate an inline style color
//! assert_eq!(Filter::as_css_color("PeachPuff"), "PeachPuff");
//! assert_eq!(Filter::as_css_color("expression(alert(1))"), "invalid");
//!
//! // Quarantine a dangerous link target
//! assert_eq!(Filter::as_url("javascript:alert(1)"), "./javascript:alert(1)");
//!
//! // Or produce marked-safe markup for a template layer
//! let safe = Safe::html_text("Fish & Chips");
//! assert_eq!(safe.as_str(), "Fish &amp; Chips");
//! ```
//!
//! ## Escaping
//!
//! Pick the function that matches the syntactic position the value lands
//! in. Each one rewrites the characters that could terminate that context
//! and leaves everything else alone.
//!
//! ```rust
//! use palisade::Escaper;
//!
//! // HTML, safe even in unquoted attributes
//! assert_eq!(Escaper::html("a b"), "a&#x20;b");
//!
//! // JavaScript string literals inside a <script> element
//! assert_eq!(Escaper::js_string("</script>"), "\\u003C\\u002Fscript\\u003E");
//!
//! // Quoted CSS strings and url('...') values
//! assert_eq!(Escaper::css_string("url('x')"), "url(\\27 x\\27 )");
//!
//! // SQL LIKE operands, wildcards only
//! assert_eq!(Escaper::sql_like("50%_done"), "50@%@_done");
//! ```
//!
//! ## Filtering
//!
//! Escaping cannot help where the whole value is interpreted: a CSS color,
//! a numeric attribute, a link target. Filters validate against a narrow
//! grammar and substitute a harmless fallback on mismatch.
//!
//! ```rust
//! use palisade::Filter;
//!
//! assert_eq!(Filter::as_number("-.04"), "-.04");
//! assert_eq!(Filter::as_number("alert(1)"), "0");
//! assert_eq!(Filter::as_number_or("alert(1)", "100"), "100");
//!
//! // Syntax check only: nothing is parsed or normalized
//! assert_eq!(Filter::as_number("0777"), "0777");
//! ```
//!
//! ## URL Scheme Filtering
//!
//! URLs are the one place a fallback would destroy information, so
//! rejected values are quarantined instead: `./` is prepended, turning an
//! absolute scheme into an inert relative path that is still legible in
//! the rendered page.
//!
//! ```rust
//! use palisade::SchemeFilter;
//!
//! let filter = SchemeFilter::flexible().with_scheme("matrix");
//! assert_eq!(filter.apply("matrix:r/room:example.org"), "matrix:r/room:example.org");
//! assert_eq!(filter.apply("vbscript:beep"), "./vbscript:beep");
//! ```
//!
//! ## Template Facade
//!
//! [`Safe`] accepts raw text or an existing [`SafeHtml`] fragment at every
//! call site, unwraps it, processes it, and wraps markup output so the
//! rendering layer does not escape it twice.
//!
//! ```rust
//! use palisade::{Safe, SafeHtml};
//!
//! let comment = "I <3 this & that";
//! let rendered = format!("<p>{}</p>", Safe::html_text(comment));
//! assert_eq!(rendered, "<p>I &lt;3 this &amp; that</p>");
//!
//! // Developer-authored fragments carry their trust in the type
//! let header = SafeHtml::trusted("<h1>Dashboard</h1>");
//! assert_eq!(format!("{header}"), "<h1>Dashboard</h1>");
//! ```
//!
//! ## Composed Contexts
//!
//! Nested sinks are escaped inside-out, one context at a time.
//!
//! ```rust
//! use palisade::Escaper;
//!
//! // A URL parameter inside a JavaScript string literal
//! let id = "42'); attack(); ('";
//! let param = Escaper::uri_param(id);
//! let js = Escaper::js_string(&format!("fetch('/item?id={param}')"));
//! assert!(!js.contains('\''));
//! ```
//!
//! ## Strict Validation
//!
//! Every filter also has a fallible form for callers that refuse bad input
//! outright instead of rendering a substitute.
//!
//! ```rust
//! use palisade::{Filter, FilterError};
//!
//! match Filter::require_url("data:text/html,x") {
//!     Err(FilterError::SchemeNotAllowed(url)) => assert_eq!(url, "data:text/html,x"),
//!     other => panic!("expected a scheme rejection, got {other:?}"),
//! }
//! ```

mod color;
pub mod error;
pub mod escape;
pub mod filter;
pub mod safe;
pub mod url;

pub use error::{FilterError, Result};
pub use escape::Escaper;
pub use filter::Filter;
pub use safe::{Content, Safe, SafeHtml};
pub use url::SchemeFilter;
