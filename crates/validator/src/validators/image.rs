//! Container image references.

use std::sync::LazyLock;

use regex::Regex;

use crate::validators::format::{Format, LengthBound, compile};

static CONTAINER_IMAGE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    compile(r"^[a-z0-9]+([/_-][a-z0-9]+)*(:([0-9a-z]+([.-][0-9a-z]+)*)+)?$")
});

static CONTAINER_IMAGE: Format = Format::new(
    "docker_image",
    &CONTAINER_IMAGE_REGEX,
    LengthBound::AtMost(256),
);

crate::validator! {
    /// Image name with optional tag, e.g. `library/nginx:1.25-alpine`.
    ///
    /// Path segments are lowercase alphanumeric joined by single `/`, `_` or
    /// `-`. Registry hosts with ports and digests (`@sha256:`) do not match.
    pub ContainerImage for str;
    rule(input) { CONTAINER_IMAGE.matches(input) }
    error(input) { CONTAINER_IMAGE.explain(input) }
    fn docker_image();
}
