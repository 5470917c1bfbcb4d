use std::{fmt::Display, marker::PhantomData};

use crate::Callable;

/// A callable that encloses each message between matching tag markers.
///
/// Created with [`html_tag`]. Each value owns its tag, so values built from
/// different tags never affect one another.
#[derive(Debug)]
pub struct Tagged<M> {
    tag: String,
    _marker: PhantomData<fn(M)>,
}

impl<M> Clone for Tagged<M> {
    fn clone(&self) -> Self {
        Self {
            tag: self.tag.clone(),
            _marker: PhantomData,
        }
    }
}

impl<M> Tagged<M> {
    /// Returns the tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Returns the opening marker, such as `<h1>`.
    #[must_use]
    pub fn open(&self) -> String {
        format!("<{}>", self.tag)
    }

    /// Returns the closing marker, such as `</h1>`.
    #[must_use]
    pub fn close(&self) -> String {
        format!("</{}>", self.tag)
    }
}

impl<M: Display> Callable for Tagged<M> {
    type Input = M;
    type Output = String;

    fn call(&self, message: M) -> String {
        format!("<{0}>{1}</{0}>", self.tag, message)
    }
}

/// Returns a callable that wraps messages in `<tag>` and `</tag>`.
///
/// # Example
///
/// ```rust
/// use veneer_core::{Callable, html_tag};
///
/// let h1 = html_tag("h1");
/// let p = html_tag("p");
///
/// assert_eq!(h1.call("Test Headline!"), "<h1>Test Headline!</h1>");
/// assert_eq!(p.call("Test Paragraph!"), "<p>Test Paragraph!</p>");
/// ```
pub fn html_tag<M>(tag: impl Into<String>) -> Tagged<M> {
    Tagged {
        tag: tag.into(),
        _marker: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_are_independent() {
        let h1 = html_tag("h1");
        let p = html_tag("p");

        assert_eq!(h1.call("Test Headline!"), "<h1>Test Headline!</h1>");
        assert_eq!(p.call("Test Paragraph!"), "<p>Test Paragraph!</p>");
        assert_eq!(h1.call("Another Headline!"), "<h1>Another Headline!</h1>");
    }

    #[test]
    fn markers_match_the_tag() {
        let em = html_tag::<&str>(String::from("em"));

        assert_eq!(em.tag(), "em");
        assert_eq!(em.open(), "<em>");
        assert_eq!(em.close(), "</em>");
        assert_eq!(em.call("hi"), format!("{}hi{}", em.open(), em.close()));
    }

    #[test]
    fn any_display_message() {
        let li = html_tag("li");

        assert_eq!(li.call(3), "<li>3</li>");
        assert_eq!(li.call(4), "<li>4</li>");
        assert_eq!(li.clone().call(5), "<li>5</li>");
    }
}
