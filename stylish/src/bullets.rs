//! Bullet points.

use std::fmt::Display;

use crate::formatter::Formatter;

const BULLET: &str = "+>";

impl Formatter {
    /// A single bullet line, item text kept as given.
    pub fn bullet(&self, item: impl Display) -> String {
        format!("{} {}\n", BULLET, item)
    }

    /// One bullet line per item, in order. No items, no output.
    pub fn bullet_list<I>(&self, items: I) -> String
    where
        I: IntoIterator,
        I::Item: Display,
    {
        items.into_iter().map(|item| self.bullet(item)).collect()
    }
}
