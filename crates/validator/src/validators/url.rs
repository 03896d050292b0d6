//! URLs with a restricted scheme set.

use std::sync::LazyLock;

use regex::Regex;

use crate::validators::format::{Format, LengthBound, compile};

static URL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    compile(concat!(
        r"^((((https?|ftps?|gopher|telnet|nntp)://)|(mailto:|news:))",
        r"(%[0-9A-Fa-f]{2}|[-()_.!~*';/?:@&=+$,A-Za-z0-9])+)",
        r"([).!';/?:,][[:blank:]])?$",
    ))
});

static URL: Format = Format::new("url", &URL_REGEX, LengthBound::AtMost(2000));

crate::validator! {
    /// URL whose scheme is one of `http(s)`, `ftp(s)`, `gopher`, `telnet`,
    /// `nntp`, `mailto` or `news`.
    ///
    /// The body is a run of URL-safe characters and `%XX` escapes. A single
    /// trailing punctuation mark followed by one blank is tolerated so URLs
    /// lifted out of prose still pass.
    ///
    /// ```
    /// use inputguard_validator::validators::url;
    /// use inputguard_validator::foundation::Validate;
    ///
    /// assert!(url().is_valid("https://example.com/path?q=1"));
    /// assert!(!url().is_valid("javascript:alert(1)"));
    /// ```
    pub Url for str;
    rule(input) { URL.matches(input) }
    error(input) { URL.explain(input) }
    fn url();
}
