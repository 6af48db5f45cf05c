//! The markup-safe marker type and the rendering facade.
//!
//! Template code wants one vocabulary for "insert this here safely" without
//! tracking which inputs were already processed. [`Safe`] provides that
//! vocabulary: every method accepts either raw text or an existing
//! [`SafeHtml`] fragment, unwraps it, runs the matching escape or filter,
//! and wraps the result again where the output is markup.

use std::fmt;

use serde::Serialize;

use crate::escape::Escaper;
use crate::filter::Filter;

/// Text that is safe to write into HTML without further escaping.
///
/// Values of this type only come out of the [`Safe`] facade or out of
/// [`SafeHtml::trusted`]. Rendering layers should write the inner text
/// verbatim; escaping it again is harmless but shows literal entities to
/// the user.
///
/// Serializes as a plain string. There is deliberately no `Deserialize`:
/// markup trust is established in process, never read off the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafeHtml(String);

impl SafeHtml {
    /// Wraps developer-authored markup without escaping it.
    ///
    /// The caller vouches for the content. Never pass user input here;
    /// route it through [`Safe`] instead.
    pub fn trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SafeHtml {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SafeHtml> for String {
    fn from(safe: SafeHtml) -> Self {
        safe.0
    }
}

/// Input to the [`Safe`] facade: raw untrusted text, or markup that was
/// already wrapped as safe.
///
/// Both variants are unwrapped and processed identically. Wrapped input is
/// not exempt from escaping; the variant only records where the text came
/// from, so the facade accepts either shape at every call site.
#[derive(Debug, Clone)]
pub enum Content {
    Raw(String),
    Markup(SafeHtml),
}

impl Content {
    fn into_text(self) -> String {
        match self {
            Content::Raw(text) => text,
            Content::Markup(safe) => safe.into_string(),
        }
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Raw(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Raw(text)
    }
}

impl From<&String> for Content {
    fn from(text: &String) -> Self {
        Content::Raw(text.clone())
    }
}

impl From<SafeHtml> for Content {
    fn from(safe: SafeHtml) -> Self {
        Content::Markup(safe)
    }
}

/// One-stop escaping and filtering for template call sites.
///
/// Methods whose output lands in markup return [`SafeHtml`] so the
/// rendering layer knows not to escape it again. The URI methods return a
/// plain [`String`]: a percent-encoded query value or a filtered URL is a
/// URI component, not finished markup, and still needs HTML escaping when
/// written into an attribute.
///
/// ```
/// use palisade::Safe;
///
/// let name = "Miller <script>";
/// let greeting = Safe::html(name);
/// assert_eq!(greeting.as_str(), "Miller&#x20;&lt;script&gt;");
/// ```
pub struct Safe;

impl Safe {
    /// [`Escaper::html`] over the unwrapped input, wrapped as [`SafeHtml`].
    pub fn html(input: impl Into<Content>) -> SafeHtml {
        SafeHtml(Escaper::html(&input.into().into_text()))
    }

    /// [`Escaper::html_text`] over the unwrapped input.
    pub fn html_text(input: impl Into<Content>) -> SafeHtml {
        SafeHtml(Escaper::html_text(&input.into().into_text()))
    }

    /// [`Escaper::uri`] over the unwrapped input. Returns a plain string;
    /// the surrounding attribute still needs HTML escaping.
    pub fn uri(input: impl Into<Content>) -> String {
        Escaper::uri(&input.into().into_text())
    }

    /// [`Escaper::uri_param`] over the unwrapped input. Returns a plain
    /// string for the same reason as [`Safe::uri`].
    pub fn uri_param(input: impl Into<Content>) -> String {
        Escaper::uri_param(&input.into().into_text())
    }

    /// [`Escaper::js_string`] over the unwrapped input.
    pub fn js_string(input: impl Into<Content>) -> SafeHtml {
        SafeHtml(Escaper::js_string(&input.into().into_text()))
    }

    /// [`Escaper::js_regex`] over the unwrapped input.
    pub fn js_regex(input: impl Into<Content>) -> SafeHtml {
        SafeHtml(Escaper::js_regex(&input.into().into_text()))
    }

    /// [`Escaper::css_string`] over the unwrapped input.
    pub fn css_string(input: impl Into<Content>) -> SafeHtml {
        SafeHtml(Escaper::css_string(&input.into().into_text()))
    }

    /// [`Filter::as_number`] over the unwrapped input.
    pub fn as_number(input: impl Into<Content>) -> SafeHtml {
        SafeHtml(Filter::as_number(&input.into().into_text()))
    }

    /// [`Filter::as_number_or`] over the unwrapped input.
    pub fn as_number_or(input: impl Into<Content>, default: &str) -> SafeHtml {
        SafeHtml(Filter::as_number_or(&input.into().into_text(), default))
    }

    /// [`Filter::as_css_color`] over the unwrapped input.
    pub fn as_css_color(input: impl Into<Content>) -> SafeHtml {
        SafeHtml(Filter::as_css_color(&input.into().into_text()))
    }

    /// [`Filter::as_css_color_or`] over the unwrapped input.
    pub fn as_css_color_or(input: impl Into<Content>, default: &str) -> SafeHtml {
        SafeHtml(Filter::as_css_color_or(&input.into().into_text(), default))
    }

    /// [`Filter::as_url`] over the unwrapped input. Returns a plain
    /// string; a filtered URL still needs HTML escaping in its attribute.
    pub fn as_url(input: impl Into<Content>) -> String {
        Filter::as_url(&input.into().into_text())
    }

    /// [`Filter::as_flexible_url`] over the unwrapped input.
    pub fn as_flexible_url(input: impl Into<Content>) -> String {
        Filter::as_flexible_url(&input.into().into_text())
    }
}
