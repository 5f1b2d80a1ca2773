//! Human-readable requirement listing.

use std::fmt;

use super::RequirementSet;

/// One line of a requirement listing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingLine {
    /// Section title, e.g. the special-rules header.
    Heading(String),
    /// A single requirement.
    Item(String),
}

impl ListingLine {
    fn item(text: impl Into<String>) -> Self {
        Self::Item(text.into())
    }

    pub fn text(&self) -> &str {
        match self {
            Self::Heading(text) | Self::Item(text) => text,
        }
    }
}

impl fmt::Display for ListingLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Heading(text) => write!(f, "  --- {text} ---"),
            Self::Item(text) => write!(f, "  - {text}"),
        }
    }
}

impl RequirementSet {
    /// Lines describing every requirement, in display order.
    ///
    /// Minimum length is always listed; class minimums only when non-zero.
    /// Special rules follow under their own heading, or a "none" marker.
    pub fn listing(&self) -> Vec<ListingLine> {
        let mut lines = vec![ListingLine::item(format!("Minimum Length: {}", self.min_length))];

        let minimums = [
            ("Minimum Uppercase", self.min_uppercase),
            ("Minimum Lowercase", self.min_lowercase),
            ("Minimum Digits", self.min_digits),
            ("Minimum Symbols (e.g., !@#$%^&*)", self.min_symbols),
        ];
        lines.extend(
            minimums
                .iter()
                .filter(|(_, count)| *count > 0)
                .map(|(label, count)| ListingLine::item(format!("{label}: {count}"))),
        );

        lines.push(ListingLine::Heading("Special Rules".to_string()));
        if self.start_upper_end_symbol() {
            lines.push(ListingLine::item("Must START with an Uppercase letter"));
            lines.push(ListingLine::item("Must END with a Symbol"));
        }
        if self.no_consecutive_identical() {
            lines.push(ListingLine::item("No consecutive identical characters (e.g., 'aa', '11')"));
        }
        if self.must_be_palindrome() {
            lines.push(ListingLine::item(
                "Must be a PALINDROME (reads the same forwards and backwards)",
            ));
        }
        if let Some(target) = self.digit_sum_target {
            lines.push(ListingLine::item(format!("The SUM of all digits must be EXACTLY {target}")));
        }
        if !self.has_special_rules() {
            lines.push(ListingLine::item("(None this round)"));
        }

        lines
    }
}

impl fmt::Display for RequirementSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Requirements:")?;
        for line in self.listing() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
