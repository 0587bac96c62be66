//! The formatter value and crate-level shortcuts bound to the default style.

use std::fmt::Display;

use crate::config::StyleConfig;
use crate::error::Result;

/// Renders style guide output for a fixed configuration.
///
/// A `Formatter` holds no mutable state: identical input always yields
/// identical output, and a shared reference can be used from any thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Formatter {
    config: StyleConfig,
}

impl Formatter {
    /// Formatter using the style guide defaults.
    pub const DEFAULT: Formatter = Formatter {
        config: StyleConfig::DEFAULT,
    };

    /// Creates a formatter without validating `config`.
    ///
    /// A zero width is tolerated here: fills collapse and every word wraps
    /// onto its own line.
    pub fn new(config: StyleConfig) -> Self {
        Self { config }
    }

    /// Creates a formatter, rejecting invalid configuration.
    pub fn try_new(config: StyleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &StyleConfig {
        &self.config
    }

    /// Target width in display columns.
    pub fn width(&self) -> usize {
        self.config.width
    }
}

/// See [`Formatter::header`].
pub fn header(text: &str) -> String {
    Formatter::DEFAULT.header(text)
}

/// See [`Formatter::process_start`].
pub fn process_start(text: &str) -> String {
    Formatter::DEFAULT.process_start(text)
}

/// See [`Formatter::process_end`].
pub fn process_end(text: &str) -> String {
    Formatter::DEFAULT.process_end(text)
}

/// See [`Formatter::sub_task`].
pub fn sub_task(text: &str) -> String {
    Formatter::DEFAULT.sub_task(text)
}

/// See [`Formatter::sub_task_success`].
pub fn sub_task_success() -> String {
    Formatter::DEFAULT.sub_task_success()
}

/// See [`Formatter::sub_task_fail`].
pub fn sub_task_fail() -> String {
    Formatter::DEFAULT.sub_task_fail()
}

/// See [`Formatter::bullet`].
pub fn bullet(item: impl Display) -> String {
    Formatter::DEFAULT.bullet(item)
}

/// See [`Formatter::bullet_list`].
pub fn bullet_list<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    Formatter::DEFAULT.bullet_list(items)
}

/// See [`Formatter::warning`].
pub fn warning(body: &str) -> String {
    Formatter::DEFAULT.warning(body)
}

/// See [`Formatter::error`].
pub fn error(heading: &str, body: &str) -> String {
    Formatter::DEFAULT.error(heading, body)
}
