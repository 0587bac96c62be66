//! Child process start and end markers.

use crate::config::ProcessEndBudget;
use crate::formatter::Formatter;
use crate::layout::{display_width, fill, remaining, CHECK, COLON_FILL};

const START_ARROW: &str = "=>";
const END_ARROW: &str = "<=";

impl Formatter {
    /// Marks the start of a child process.
    ///
    /// The fill is budgeted against the text plus `=>`; the two separating
    /// spaces are not counted.
    ///
    /// ```text
    /// I AM A PROCESS :::::::::::::::::::::::::::::::::::::::::::::::::::::: =>
    /// ```
    pub fn process_start(&self, text: &str) -> String {
        let upper = text.to_uppercase();
        let reserved = display_width(&upper) + display_width(START_ARROW);
        let count = remaining("process_start", self.width(), reserved);

        format!("\n{} {} {}\n", upper, fill(COLON_FILL, count), START_ARROW)
    }

    /// Marks the successful end of a child process.
    ///
    /// ```text
    /// <= :::::::::::::::::::::::::::::::::::::::::::::::: I AM A PROCESS [√]
    /// ```
    pub fn process_end(&self, text: &str) -> String {
        let upper = text.to_uppercase();
        let text_width = display_width(&upper);
        let reserved = match self.config().process_end_budget {
            // "<= " + fill + " " + text + " " + "[√]"
            ProcessEndBudget::Emitted => {
                display_width(END_ARROW) + text_width + display_width(CHECK) + 3
            }
            // UTF-8 bytes, so "[√]" counts as 5
            ProcessEndBudget::Legacy => END_ARROW.len() + upper.len() + CHECK.len(),
        };
        let count = remaining("process_end", self.width(), reserved);

        format!(
            "\n{} {} {} {}\n",
            END_ARROW,
            fill(COLON_FILL, count),
            upper,
            CHECK
        )
    }
}
