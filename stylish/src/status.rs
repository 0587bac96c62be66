//! Sub task footers, warnings and fatal errors.

use crate::formatter::Formatter;
use crate::layout::{fill, BANG, CHECK, CHEVRON_FILL, SUB_TASK_FILL_LEN};
use crate::wrap::wrap_body;

const WARNING_BANNER: &str =
    "-----------------------------  WARNING  -----------------------------";

impl Formatter {
    /// Footer closing a successful sub task.
    pub fn sub_task_success(&self) -> String {
        footer(CHECK, "SUCCESS")
    }

    /// Footer closing a failed sub task.
    pub fn sub_task_fail(&self) -> String {
        footer(BANG, "FAILED")
    }

    /// Warning banner followed by the wrapped body.
    ///
    /// ```text
    /// -----------------------------  WARNING  -----------------------------
    /// You just bought Hot Pockets!
    /// ```
    pub fn warning(&self, body: &str) -> String {
        format!("\n{}\n{}\n", WARNING_BANNER, wrap_body(body, self.width()))
    }

    /// Uppercased heading between bangs, a blank line, then the wrapped body.
    ///
    /// ```text
    /// ! NUCLEAR LAUNCH DETECTED !
    ///
    /// All your base are belong to us
    /// ```
    pub fn error(&self, heading: &str, body: &str) -> String {
        format!(
            "\n! {} !\n\n{}\n",
            heading.to_uppercase(),
            wrap_body(body, self.width())
        )
    }
}

fn footer(marker: &str, label: &str) -> String {
    format!(
        "\n{} {} {}\n",
        fill(CHEVRON_FILL, SUB_TASK_FILL_LEN),
        marker,
        label
    )
}
