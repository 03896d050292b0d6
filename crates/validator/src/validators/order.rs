//! Order numbers.

use std::sync::LazyLock;

use regex::Regex;

use crate::validators::format::{Format, LengthBound, compile};

static ORDER_NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| compile(r"^O[0-9]{16}$"));

static ORDER_NUMBER: Format = Format::new(
    "order_number",
    &ORDER_NUMBER_REGEX,
    LengthBound::Exactly(17),
);

crate::validator! {
    /// Literal `O` followed by exactly 16 ASCII digits.
    pub OrderNumber for str;
    rule(input) { ORDER_NUMBER.matches(input) }
    error(input) { ORDER_NUMBER.explain(input) }
    fn order_number();
}
